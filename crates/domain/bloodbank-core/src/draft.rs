use serde::{Deserialize, Serialize};

use crate::{BloodType, Gender};

/// Text inputs of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    State,
    City,
}

impl DraftField {
    /// Form order.
    pub const ALL: [DraftField; 7] = [
        DraftField::FirstName,
        DraftField::LastName,
        DraftField::Email,
        DraftField::Phone,
        DraftField::DateOfBirth,
        DraftField::State,
        DraftField::City,
    ];

    pub const REQUIRED: [DraftField; 6] = [
        DraftField::FirstName,
        DraftField::LastName,
        DraftField::Email,
        DraftField::City,
        DraftField::State,
        DraftField::DateOfBirth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::FirstName => "First Name",
            DraftField::LastName => "Last Name",
            DraftField::Email => "Email",
            DraftField::Phone => "Phone",
            DraftField::DateOfBirth => "Date of Birth",
            DraftField::State => "State",
            DraftField::City => "City",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Please fill in all required fields.")]
    MissingFields(Vec<DraftField>),
}

/// Unsaved registration form. Serializes to the backend's create-donor body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub blood_type: BloodType,
    pub date_of_birth: String,
    pub gender: Gender,
    pub city: String,
    pub state: String,
}

impl DonorDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::DateOfBirth => &self.date_of_birth,
            DraftField::State => &self.state,
            DraftField::City => &self.city,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::FirstName => &mut self.first_name,
            DraftField::LastName => &mut self.last_name,
            DraftField::Email => &mut self.email,
            DraftField::Phone => &mut self.phone,
            DraftField::DateOfBirth => &mut self.date_of_birth,
            DraftField::State => &mut self.state,
            DraftField::City => &mut self.city,
        }
    }

    /// Required fields must be non-empty. Whitespace counts as content;
    /// phone, blood type and gender are never checked.
    pub fn validate(&self) -> Result<(), DraftError> {
        let missing: Vec<DraftField> = DraftField::REQUIRED
            .into_iter()
            .filter(|f| self.field(*f).is_empty())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DraftError::MissingFields(missing))
        }
    }
}

/// Location for the backend-driven donor search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchCriteria {
    pub state: String,
    pub city: String,
}

impl SearchCriteria {
    pub fn new(state: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            city: city.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.state.trim().is_empty() && !self.city.trim().is_empty()
    }

    pub fn location_label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}
