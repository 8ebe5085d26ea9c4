use crate::{
    DemoConfig, HospitalClient, HospitalError, JsonOut, ScenarioConfig, ScenarioReport,
    factory_for,
};
use std::io::Write;
use tracing::info;

pub const BANNER_RULE: &str = "=================================================";
pub const BANNER_TITLE: &str = "    Демонстрація Абстрактної Фабрики (Rust)        ";
pub const CONFIGURATION_HEADER: &str = "--- Конфігурація Лікарні ---";

/// Runs the configured hospital scenarios one after another.
///
/// Each scenario gets a fresh client built from the factory of its family.
#[derive(Debug, Clone)]
pub struct Demo {
    config: DemoConfig,
}

impl Demo {
    pub fn new(config: DemoConfig) -> Result<Self, HospitalError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn reports(&self) -> Vec<ScenarioReport> {
        self.config
            .scenarios
            .iter()
            .map(|scenario| Self::client_for(scenario).report().with_title(&scenario.title))
            .collect()
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<(), HospitalError> {
        if self.config.show_banner {
            writeln!(out, "{}", BANNER_RULE)?;
            writeln!(out, "{}", BANNER_TITLE)?;
            writeln!(out, "{}", BANNER_RULE)?;
        }

        for (idx, scenario) in self.config.scenarios.iter().enumerate() {
            info!(
                scenario = idx + 1,
                family = %scenario.family,
                "running hospital scenario"
            );
            writeln!(out)?;
            writeln!(out, "✅ Сценарій {}: {}:", idx + 1, scenario.title)?;
            writeln!(out, "{}", CONFIGURATION_HEADER)?;
            Self::client_for(scenario).write_to(out)?;
        }

        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<(), HospitalError> {
        let envelope = JsonOut {
            ok: true,
            data: self.reports(),
        };
        serde_json::to_writer_pretty(&mut *out, &envelope)
            .map_err(|e| HospitalError::serialization(e.to_string()))?;
        writeln!(out)?;
        Ok(())
    }

    fn client_for(scenario: &ScenarioConfig) -> HospitalClient {
        HospitalClient::new(factory_for(scenario.family))
    }
}
