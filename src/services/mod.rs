mod hospital_client;

pub use hospital_client::{HospitalClient, SEPARATOR};
