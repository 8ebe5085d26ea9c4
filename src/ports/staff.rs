use crate::HospitalFamily;
use crate::ports::HospitalBuilding;
use std::fmt::Debug;

pub trait HospitalStaff: Debug + Send + Sync {
    fn family(&self) -> HospitalFamily;

    fn staff_info(&self) -> String;

    /// Describes this staff working in `building`. The building's own
    /// description is embedded verbatim.
    fn interact_with_building(&self, building: &dyn HospitalBuilding) -> String;
}
