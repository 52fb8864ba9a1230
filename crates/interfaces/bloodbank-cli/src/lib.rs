pub mod commands;

use bloodbank_core::{BloodType, Gender};
use clap::ValueEnum;

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum CliGender {
    #[default]
    Male,
    Female,
    Other,
}

impl From<CliGender> for Gender {
    fn from(g: CliGender) -> Self {
        match g {
            CliGender::Male => Gender::Male,
            CliGender::Female => Gender::Female,
            CliGender::Other => Gender::Other,
        }
    }
}

/// clap value parser for `A+`, `o-`, ...
pub fn parse_blood_type(s: &str) -> Result<BloodType, String> {
    s.parse::<BloodType>().map_err(|e| e.to_string())
}
