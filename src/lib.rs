pub mod application;
pub mod entities;
pub mod errors;
pub mod factories;
pub mod models;
pub mod ports;
pub mod services;

pub use application::*;
pub use entities::*;
pub use errors::*;
pub use factories::{CapitalHospitalFactory, FieldHospitalFactory, factory_for};
pub use models::*;
pub use ports::*;
pub use services::*;
