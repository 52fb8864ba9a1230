use bloodbank_core::{Donor, DonorDraft, InventoryItem, SearchCriteria};

/// Banner text shown while the donor list cannot be fetched.
pub const CONNECTIVITY_FAULT_MESSAGE: &str =
    "Could not connect to the backend. Please ensure the API server is running and click Retry.";

pub const MSG_REQUIRED_FIELDS: &str = "Please fill in all required fields.";
pub const MSG_REGISTERED: &str = "Donor registered successfully!";
pub const MSG_REGISTER_FAILED: &str = "Failed to register donor. Please try again.";
pub const MSG_CRITERIA_REQUIRED: &str = "Please enter both a state and a city.";
pub const MSG_SEARCH_FAILED: &str = "Failed to find donors. The server may be down.";
pub const MSG_COPIED: &str = "Message copied to clipboard!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Find,
    Register,
    Donors,
    Inventory,
}

impl View {
    /// Navigation order.
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Find,
        View::Register,
        View::Donors,
        View::Inventory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Find => "Find Donors",
            View::Register => "Register Donor",
            View::Donors => "View Donors",
            View::Inventory => "Blood Stock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Text produced by the generator, with whether the call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    pub text: String,
    pub failed: bool,
}

impl GeneratedText {
    pub fn from_outcome(outcome: anyhow::Result<bloodbank_infra::Generation>) -> Self {
        match outcome {
            Ok(generation) => Self {
                text: generation.into_text(),
                failed: false,
            },
            Err(e) => {
                tracing::error!("Text generation failed: {e:#}");
                Self {
                    text: bloodbank_infra::generative::FAILURE_TEXT.to_string(),
                    failed: true,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinderPhase {
    #[default]
    Idle,
    Searching,
    ResultsShown,
}

#[derive(Debug, Clone, Default)]
pub struct FinderState {
    /// What the user is typing.
    pub criteria: SearchCriteria,
    /// Criteria of the last submitted search.
    pub searched: Option<SearchCriteria>,
    pub phase: FinderPhase,
    pub results: Vec<Donor>,
    pub outreach: Option<GeneratedText>,
    pub generating: bool,
}

impl FinderState {
    pub fn can_generate_outreach(&self) -> bool {
        self.phase == FinderPhase::ResultsShown && !self.results.is_empty() && !self.generating
    }
}

#[derive(Debug, Clone, Default)]
pub struct CampaignState {
    pub ideas: Option<GeneratedText>,
    pub generating: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub view: View,

    pub donors: Vec<Donor>,
    pub inventory: Vec<InventoryItem>,

    pub draft: DonorDraft,
    pub registering: bool,

    /// Local filter for the donor list.
    pub search_term: String,

    pub finder: FinderState,
    pub campaign: CampaignState,

    pub notification: Option<Notification>,
    pub connectivity_fault: Option<String>,
    pub retrying: bool,
}
