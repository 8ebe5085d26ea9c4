use crate::{HospitalError, HospitalFamily};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which scenarios the demo runs and how it frames them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    pub show_banner: bool,
    pub scenarios: Vec<ScenarioConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScenarioConfig {
    pub title: String,
    pub family: HospitalFamily,
}

impl ScenarioConfig {
    pub fn new<S: Into<String>>(title: S, family: HospitalFamily) -> Self {
        Self {
            title: title.into(),
            family,
        }
    }

    pub fn for_family(family: HospitalFamily) -> Self {
        Self::new(family.default_title(), family)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            scenarios: HospitalFamily::ALL
                .into_iter()
                .map(ScenarioConfig::for_family)
                .collect(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, HospitalError> {
        let config: Self =
            toml::from_str(raw).map_err(|e| HospitalError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HospitalError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    pub fn to_toml_string(&self) -> Result<String, HospitalError> {
        toml::to_string(self).map_err(|e| HospitalError::serialization(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), HospitalError> {
        if self.scenarios.is_empty() {
            return Err(HospitalError::invalid_config(
                "at least one scenario is required",
            ));
        }

        if let Some(pos) = self.scenarios.iter().position(|s| s.title.trim().is_empty()) {
            return Err(HospitalError::invalid_config(format!(
                "scenario #{} has an empty title",
                pos + 1
            )));
        }

        Ok(())
    }

    /// Keeps only the given families, in the given order.
    ///
    /// A family with a configured scenario keeps its configured title, the
    /// rest fall back to the default title.
    pub fn only_families(mut self, families: &[HospitalFamily]) -> Self {
        self.scenarios = families
            .iter()
            .map(|family| {
                self.scenarios
                    .iter()
                    .find(|s| s.family == *family)
                    .cloned()
                    .unwrap_or_else(|| ScenarioConfig::for_family(*family))
            })
            .collect();
        self
    }
}
