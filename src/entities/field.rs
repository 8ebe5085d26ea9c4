use crate::{HospitalBuilding, HospitalFamily, HospitalStaff};

const BUILDING_INFO: &str = "Будівля: Намет/тимчасова споруда для польового госпіталю (Field).";
const STAFF_INFO: &str = "Персонал: Польові хірурги та медсестри (швидке розгортання) (Field).";

/// Tent or other temporary structure of a field hospital.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldHospitalBuilding;

impl HospitalBuilding for FieldHospitalBuilding {
    fn family(&self) -> HospitalFamily {
        HospitalFamily::Field
    }

    fn building_info(&self) -> String {
        BUILDING_INFO.to_string()
    }
}

/// Field surgeons and nurses, quick to deploy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldHospitalStaff;

impl HospitalStaff for FieldHospitalStaff {
    fn family(&self) -> HospitalFamily {
        HospitalFamily::Field
    }

    fn staff_info(&self) -> String {
        STAFF_INFO.to_string()
    }

    fn interact_with_building(&self, building: &dyn HospitalBuilding) -> String {
        format!(
            "Персонал польового госпіталю працює в умовах: ({})",
            building.building_info()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_strings() {
        let building = FieldHospitalBuilding;
        let staff = FieldHospitalStaff;

        assert_eq!(building.building_info(), BUILDING_INFO);
        assert_eq!(staff.staff_info(), STAFF_INFO);
        assert_eq!(
            staff.interact_with_building(&building),
            "Персонал польового госпіталю працює в умовах: (Будівля: Намет/тимчасова споруда для польового госпіталю (Field).)"
        );
    }
}
