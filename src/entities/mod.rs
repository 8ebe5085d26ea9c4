mod capital;
mod field;

pub use capital::{CapitalHospitalBuilding, CapitalHospitalStaff};
pub use field::{FieldHospitalBuilding, FieldHospitalStaff};
