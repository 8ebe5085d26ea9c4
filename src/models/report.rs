use crate::HospitalFamily;
use serde::Serialize;

/// What one client produced: the three descriptive strings of its pair.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub family: HospitalFamily,
    pub building: String,
    pub staff: String,
    pub interaction: String,
}

impl ScenarioReport {
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Envelope for machine-readable output.
#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}
