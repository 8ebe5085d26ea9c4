use crate::HospitalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product family tag. Every building and staff member belongs to exactly one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HospitalFamily {
    #[serde(rename = "field")]
    Field,
    #[serde(rename = "capital")]
    Capital,
}

impl HospitalFamily {
    pub const ALL: [HospitalFamily; 2] = [Self::Field, Self::Capital];

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field)
    }

    pub fn is_capital(&self) -> bool {
        matches!(self, Self::Capital)
    }

    /// Scenario title used when the configuration does not name one.
    pub fn default_title(&self) -> &'static str {
        match self {
            Self::Field => "Створення Польової Лікарні (Field Hospital)",
            Self::Capital => "Створення Капітальної Лікарні (Capital Hospital)",
        }
    }
}

impl fmt::Display for HospitalFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field => write!(f, "field"),
            Self::Capital => write!(f, "capital"),
        }
    }
}

impl TryFrom<&str> for HospitalFamily {
    type Error = HospitalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "field" | "польова" | "польовий" => Ok(Self::Field),
            "capital" | "капітальна" | "капітальний" => Ok(Self::Capital),
            _ => Err(HospitalError::UnknownFamily(value.to_string())),
        }
    }
}

impl FromStr for HospitalFamily {
    type Err = HospitalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
