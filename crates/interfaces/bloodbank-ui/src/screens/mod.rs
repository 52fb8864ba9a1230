pub mod dashboard;
pub mod donors;
pub mod finder;
pub mod inventory;
pub mod register;
