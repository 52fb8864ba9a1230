pub mod adapters;
pub mod app;
pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod kernel;
pub mod ports;
pub mod viewmodel;

pub use app::{build_application, BloodbankApplication};
pub use app_core::*;
pub use domain::{
    AppState, CampaignState, FinderPhase, FinderState, GeneratedText, Notification,
    NotificationKind, View,
};
pub use kernel::AppKernel;
pub use ports::*;
pub use viewmodel::*;
