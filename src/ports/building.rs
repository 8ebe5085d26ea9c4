use crate::HospitalFamily;
use std::fmt::Debug;

pub trait HospitalBuilding: Debug + Send + Sync {
    fn family(&self) -> HospitalFamily;

    fn building_info(&self) -> String;
}
