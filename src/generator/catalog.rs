//! Fixed word lists the synthetic generator draws from

/// Number of records produced per population
pub const POPULATION_SIZE: usize = 25;

/// Maximum coordinate offset from the anchor, in degrees (~11 km)
pub const COORDINATE_SPREAD: f64 = 0.1;

/// Decimal places kept on generated coordinates
pub const COORDINATE_DECIMALS: i32 = 6;

pub const RATING_RANGE: (f64, f64) = (3.8, 4.9);
pub const REVIEW_COUNT_RANGE: (u32, u32) = (25, 500);
pub const EXPERIENCE_RANGE: (u32, u32) = (8, 35);
pub const FEE_RANGE: (u32, u32) = (800, 2500);

/// Probability that a generated doctor is available
pub const AVAILABLE_PROBABILITY: f64 = 0.75;

pub const LANGUAGE_COUNT: (usize, usize) = (2, 4);
pub const CERTIFICATION_COUNT: (usize, usize) = (2, 4);
pub const SERVICE_COUNT: (usize, usize) = (4, 7);

pub const SPECIALTIES: [&str; 14] = [
    "General Medicine",
    "Cardiology",
    "Dermatology",
    "Neurology",
    "Pediatrics",
    "Orthopedics",
    "Gynecology",
    "Psychiatry",
    "Oncology",
    "Endocrinology",
    "Gastroenterology",
    "Urology",
    "Ophthalmology",
    "ENT",
];

pub const HOSPITALS: [&str; 15] = [
    "Apollo Hospitals",
    "Fortis Healthcare",
    "Max Healthcare",
    "Manipal Hospitals",
    "AIIMS",
    "KEM Hospital",
    "PGI Chandigarh",
    "CMC Vellore",
    "JIPMER",
    "Narayana Health",
    "Medanta",
    "BLK Super Speciality Hospital",
    "Indraprastha Apollo Hospital",
    "Sir Ganga Ram Hospital",
    "Safdarjung Hospital",
];

pub const AREAS: [&str; 17] = [
    "Banjara Hills",
    "Jubilee Hills",
    "Secunderabad",
    "HITEC City",
    "Gachibowli",
    "Kondapur",
    "Madhapur",
    "Begumpet",
    "Somajiguda",
    "Ameerpet",
    "Kukatpally",
    "Miyapur",
    "Dilshuknagar",
    "Malakpet",
    "Nampally",
    "Abids",
    "Koti",
];

pub const FIRST_NAMES: [&str; 32] = [
    "Rajesh", "Priya", "Arjun", "Kavitha", "Suresh", "Meera", "Vikram", "Anita", "Ramesh",
    "Sunita", "Kumar", "Deepa", "Srinivas", "Lakshmi", "Venkat", "Radha", "Manoj", "Shanti",
    "Prakash", "Geeta", "Ravi", "Uma", "Naveen", "Sarita", "Ashok", "Poonam", "Girish", "Rekha",
    "Suresh", "Kamala", "Raghu", "Indira",
];

pub const LAST_NAMES: [&str; 32] = [
    "Sharma", "Patel", "Singh", "Kumar", "Reddy", "Agarwal", "Gupta", "Jain", "Verma",
    "Malhotra", "Chopra", "Mehta", "Bansal", "Arora", "Khanna", "Saxena", "Tiwari", "Mishra",
    "Pandey", "Yadav", "Shah", "Joshi", "Nair", "Iyer", "Rao", "Naidu", "Menon", "Pillai",
    "Krishnan", "Raman", "Subramanian", "Venkatesh",
];

pub const MEDICAL_SCHOOLS: [&str; 7] = [
    "AIIMS",
    "JIPMER",
    "CMC Vellore",
    "KEM Mumbai",
    "PGI Chandigarh",
    "NIMHANS",
    "Seth GS Medical College",
];

pub const LANGUAGES: [&str; 6] = ["English", "Hindi", "Telugu", "Tamil", "Kannada", "Marathi"];

pub const CERTIFICATIONS: [&str; 8] = [
    "MBBS",
    "MD",
    "DM",
    "DNB",
    "Fellowship",
    "Diplomate",
    "Fellow of Indian Medical Association",
    "Specialist",
];

pub const SERVICES: [&str; 10] = [
    "General Consultation",
    "Diagnostic Testing",
    "Treatment Planning",
    "Follow-up Care",
    "Emergency Consultation",
    "Second Opinion",
    "Preventive Care",
    "Health Screening",
    "Vaccination",
    "Health Checkup",
];
