use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod draft;
pub mod filter;
pub mod prompts;
pub mod stock;

pub use draft::{DonorDraft, DraftError, DraftField, SearchCriteria};
pub use prompts::{campaign_prompt, outreach_prompt};
pub use filter::{distinct_blood_types, donor_matches, filter_donors};
pub use stock::{low_stock_items, StockStatus, CRITICAL_BELOW_UNITS, LOW_BELOW_UNITS};

/// Backend-assigned donor identity. Opaque to this application.
pub type DonorId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodType {
    /// Every blood type, in the order the registration form offers them.
    pub const ALL: [BloodType; 8] = [
        BloodType::APositive,
        BloodType::ANegative,
        BloodType::BPositive,
        BloodType::BNegative,
        BloodType::AbPositive,
        BloodType::AbNegative,
        BloodType::OPositive,
        BloodType::ONegative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
        }
    }
}

impl Default for BloodType {
    fn default() -> Self {
        BloodType::ALL[0]
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown blood type `{0}` (expected one of A+, A-, B+, B-, AB+, AB-, O+, O-)")]
pub struct ParseBloodTypeError(pub String);

impl FromStr for BloodType {
    type Err = ParseBloodTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BloodType::ALL
            .into_iter()
            .find(|bt| bt.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseBloodTypeError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A registered donor as reported by the backend.
///
/// Eligibility is computed server-side and only ever read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DonorId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    pub blood_type: BloodType,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_of_birth: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(default, rename = "isEligible", alias = "eligible")]
    pub is_eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
}

// Text columns are nullable on the backend; null reads as empty.
fn null_as_empty<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

impl Donor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub blood_type: BloodType,
    pub units: u32,
}

impl InventoryItem {
    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self.units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blood_type_parses_case_insensitively() {
        assert_eq!("ab-".parse::<BloodType>(), Ok(BloodType::AbNegative));
        assert_eq!(" O+ ".parse::<BloodType>(), Ok(BloodType::OPositive));
        assert!("C+".parse::<BloodType>().is_err());
    }

    #[test]
    fn default_blood_type_is_first_enumerated() {
        assert_eq!(BloodType::default(), BloodType::APositive);
        assert_eq!(Gender::default(), Gender::Male);
    }

    #[test]
    fn display_matches_wire_literal() {
        for bt in BloodType::ALL {
            let json = serde_json::to_string(&bt).unwrap();
            assert_eq!(json, format!("\"{bt}\""));
        }
    }
}
