// src/ports/mod.rs

pub use building::HospitalBuilding;
pub use hospital_factory::HospitalFactory;
pub use staff::HospitalStaff;

pub mod building;
pub mod hospital_factory;
pub mod staff;
