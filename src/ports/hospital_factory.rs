use crate::HospitalFamily;
use crate::ports::{HospitalBuilding, HospitalStaff};

/// Creates one matched building/staff pair.
///
/// Both products returned by the same factory belong to `family()`.
pub trait HospitalFactory: Send + Sync {
    fn family(&self) -> HospitalFamily;

    fn create_building(&self) -> Box<dyn HospitalBuilding>;

    fn create_staff(&self) -> Box<dyn HospitalStaff>;
}
