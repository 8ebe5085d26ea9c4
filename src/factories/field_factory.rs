// src/factories/field_factory.rs

use crate::{
    FieldHospitalBuilding, FieldHospitalStaff, HospitalBuilding, HospitalFactory, HospitalFamily,
    HospitalStaff,
};
use tracing::debug;

/// Factory for the components of a field hospital.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldHospitalFactory;

impl HospitalFactory for FieldHospitalFactory {
    fn family(&self) -> HospitalFamily {
        HospitalFamily::Field
    }

    fn create_building(&self) -> Box<dyn HospitalBuilding> {
        debug!(family = %self.family(), "creating building");
        Box::new(FieldHospitalBuilding)
    }

    fn create_staff(&self) -> Box<dyn HospitalStaff> {
        debug!(family = %self.family(), "creating staff");
        Box::new(FieldHospitalStaff)
    }
}
