// src/factories/capital_factory.rs

use crate::{
    CapitalHospitalBuilding, CapitalHospitalStaff, HospitalBuilding, HospitalFactory,
    HospitalFamily, HospitalStaff,
};
use tracing::debug;

/// Factory for the components of a capital hospital.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapitalHospitalFactory;

impl HospitalFactory for CapitalHospitalFactory {
    fn family(&self) -> HospitalFamily {
        HospitalFamily::Capital
    }

    fn create_building(&self) -> Box<dyn HospitalBuilding> {
        debug!(family = %self.family(), "creating building");
        Box::new(CapitalHospitalBuilding)
    }

    fn create_staff(&self) -> Box<dyn HospitalStaff> {
        debug!(family = %self.family(), "creating staff");
        Box::new(CapitalHospitalStaff)
    }
}
