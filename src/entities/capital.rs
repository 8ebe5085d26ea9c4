use crate::{HospitalBuilding, HospitalFamily, HospitalStaff};

const BUILDING_INFO: &str =
    "Будівля: Багатоповерхова капітальна будівля з відділеннями (Capital).";
const STAFF_INFO: &str =
    "Персонал: Вузькоспеціалізовані лікарі та постійний медперсонал (Capital).";

/// Multi-storey permanent building with departments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapitalHospitalBuilding;

impl HospitalBuilding for CapitalHospitalBuilding {
    fn family(&self) -> HospitalFamily {
        HospitalFamily::Capital
    }

    fn building_info(&self) -> String {
        BUILDING_INFO.to_string()
    }
}

/// Specialist doctors and permanent medical staff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapitalHospitalStaff;

impl HospitalStaff for CapitalHospitalStaff {
    fn family(&self) -> HospitalFamily {
        HospitalFamily::Capital
    }

    fn staff_info(&self) -> String {
        STAFF_INFO.to_string()
    }

    fn interact_with_building(&self, building: &dyn HospitalBuilding) -> String {
        format!(
            "Персонал капітальної лікарні працює в умовах: ({})",
            building.building_info()
        )
    }
}
