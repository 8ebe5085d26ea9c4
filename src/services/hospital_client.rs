use crate::{
    HospitalBuilding, HospitalError, HospitalFactory, HospitalFamily, HospitalStaff,
    ScenarioReport,
};
use std::io::{self, Write};
use tracing::{debug, warn};

pub const SEPARATOR: &str = "-----------------------------";

/// Consumer of a hospital factory.
///
/// The building and staff are taken from one factory when the client is
/// built and never replaced, so the pair always shares a family.
#[derive(Debug)]
pub struct HospitalClient {
    building: Box<dyn HospitalBuilding>,
    staff: Box<dyn HospitalStaff>,
}

impl HospitalClient {
    pub fn new(factory: &dyn HospitalFactory) -> Self {
        let building = factory.create_building();
        let staff = factory.create_staff();
        debug!(family = %factory.family(), "hospital client assembled");

        Self { building, staff }
    }

    pub fn family(&self) -> HospitalFamily {
        self.building.family()
    }

    pub fn building(&self) -> &dyn HospitalBuilding {
        self.building.as_ref()
    }

    pub fn staff(&self) -> &dyn HospitalStaff {
        self.staff.as_ref()
    }

    pub fn report(&self) -> ScenarioReport {
        ScenarioReport {
            title: None,
            family: self.family(),
            building: self.building.building_info(),
            staff: self.staff.staff_info(),
            interaction: self.staff.interact_with_building(self.building.as_ref()),
        }
    }

    /// Writes building, staff, interaction and a separator, one per line.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), HospitalError> {
        let report = self.report();
        writeln!(out, "{}", report.building)?;
        writeln!(out, "{}", report.staff)?;
        writeln!(out, "{}", report.interaction)?;
        writeln!(out, "{}", SEPARATOR)?;
        Ok(())
    }

    /// Prints the scenario to stdout.
    pub fn run(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = self.write_to(&mut out) {
            warn!(error = %e, "failed to print hospital scenario");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CapitalHospitalFactory, FieldHospitalFactory, factory_for};

    fn render(client: &HospitalClient) -> String {
        let mut buf = Vec::new();
        client.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_field_client_output() {
        let client = HospitalClient::new(&FieldHospitalFactory);
        let expected = "\
Будівля: Намет/тимчасова споруда для польового госпіталю (Field).
Персонал: Польові хірурги та медсестри (швидке розгортання) (Field).
Персонал польового госпіталю працює в умовах: (Будівля: Намет/тимчасова споруда для польового госпіталю (Field).)
-----------------------------
";

        assert_eq!(client.family(), HospitalFamily::Field);
        assert_eq!(render(&client), expected);
    }

    #[test]
    fn test_capital_client_output() {
        let client = HospitalClient::new(&CapitalHospitalFactory);
        let expected = "\
Будівля: Багатоповерхова капітальна будівля з відділеннями (Capital).
Персонал: Вузькоспеціалізовані лікарі та постійний медперсонал (Capital).
Персонал капітальної лікарні працює в умовах: (Будівля: Багатоповерхова капітальна будівля з відділеннями (Capital).)
-----------------------------
";

        assert_eq!(client.family(), HospitalFamily::Capital);
        assert_eq!(render(&client), expected);
    }

    #[test]
    fn test_interaction_contains_building_verbatim() {
        for family in HospitalFamily::ALL {
            let report = HospitalClient::new(factory_for(family)).report();
            assert!(report.interaction.contains(&report.building));
        }
    }

    #[test]
    fn test_pair_never_mixes_families() {
        for family in HospitalFamily::ALL {
            let client = HospitalClient::new(factory_for(family));
            assert_eq!(client.building().family(), family);
            assert_eq!(client.staff().family(), family);
        }
    }

    #[test]
    fn test_swapping_factory_changes_every_line() {
        let field = HospitalClient::new(&FieldHospitalFactory).report();
        let capital = HospitalClient::new(&CapitalHospitalFactory).report();

        assert_ne!(field.building, capital.building);
        assert_ne!(field.staff, capital.staff);
        assert_ne!(field.interaction, capital.interaction);

        assert!(!field.interaction.contains(&capital.building));
        assert!(!capital.interaction.contains(&field.building));
        assert!(field.staff.contains("(Field)"));
        assert!(capital.staff.contains("(Capital)"));
    }

    #[test]
    fn test_running_twice_is_identical() {
        let client = HospitalClient::new(&FieldHospitalFactory);
        assert_eq!(render(&client), render(&client));
        assert_eq!(client.report(), client.report());
    }

    #[test]
    fn test_run_prints_without_panicking() {
        HospitalClient::new(&CapitalHospitalFactory).run();
    }
}
