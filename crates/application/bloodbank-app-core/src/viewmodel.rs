use bloodbank_core::{
    filter_donors, BloodType, Donor, DonorDraft, DraftField, Gender, InventoryItem, StockStatus,
};

use crate::domain::{AppState, FinderPhase, GeneratedText, Notification};

/// Header date, e.g. "Friday, October 16, 2026".
pub fn today_label() -> String {
    chrono::Local::now().format("%A, %B %-d, %Y").to_string()
}

fn eligibility_label(eligible: bool) -> &'static str {
    if eligible {
        "Eligible"
    } else {
        "Not Eligible"
    }
}

// --- Stock ---

#[derive(Debug, Clone, PartialEq)]
pub struct StockVm {
    pub blood_type: BloodType,
    pub units: u32,
    pub status: StockStatus,
    pub status_label: &'static str,
}

impl From<&InventoryItem> for StockVm {
    fn from(item: &InventoryItem) -> Self {
        let status = item.status();
        Self {
            blood_type: item.blood_type,
            units: item.units,
            status,
            status_label: status.label(),
        }
    }
}

pub fn inventory_vm(state: &AppState) -> Vec<StockVm> {
    state.inventory.iter().map(StockVm::from).collect()
}

// --- Dashboard ---

#[derive(Debug, Clone)]
pub struct DashboardVm {
    pub total_donors: usize,
    pub eligible_donors: usize,
    pub low_stock_count: usize,
    pub stock: Vec<StockVm>,
    pub campaign_ideas: Option<GeneratedText>,
    pub can_generate_campaign: bool,
    pub campaign_button_label: &'static str,
}

pub fn dashboard_vm(state: &AppState) -> DashboardVm {
    let stock = inventory_vm(state);
    let generating = state.campaign.generating;
    DashboardVm {
        total_donors: state.donors.len(),
        eligible_donors: state.donors.iter().filter(|d| d.is_eligible).count(),
        low_stock_count: stock.iter().filter(|s| s.status.needs_donors()).count(),
        stock,
        campaign_ideas: state.campaign.ideas.clone(),
        can_generate_campaign: !generating,
        campaign_button_label: if generating {
            "Generating Ideas..."
        } else {
            "Generate Campaign Ideas"
        },
    }
}

// --- Donor list ---

#[derive(Debug, Clone, PartialEq)]
pub struct DonorRowVm {
    pub name: String,
    pub email: String,
    pub location: String,
    pub blood_type: BloodType,
    pub eligible: bool,
    pub eligibility_label: &'static str,
}

impl From<&Donor> for DonorRowVm {
    fn from(d: &Donor) -> Self {
        Self {
            name: d.full_name(),
            email: d.email.clone(),
            location: d.location(),
            blood_type: d.blood_type,
            eligible: d.is_eligible,
            eligibility_label: eligibility_label(d.is_eligible),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DonorListVm {
    pub search_term: String,
    pub rows: Vec<DonorRowVm>,
    pub total: usize,
}

/// Filtered on every call from the full collection.
pub fn donor_list_vm(state: &AppState) -> DonorListVm {
    DonorListVm {
        search_term: state.search_term.clone(),
        rows: filter_donors(&state.donors, &state.search_term)
            .into_iter()
            .map(DonorRowVm::from)
            .collect(),
        total: state.donors.len(),
    }
}

// --- Registration ---

#[derive(Debug, Clone)]
pub struct DraftFieldVm {
    pub field: DraftField,
    pub label: String,
    pub value: String,
    pub hint: &'static str,
}

#[derive(Debug, Clone)]
pub struct RegistrationVm {
    pub fields: Vec<DraftFieldVm>,
    pub blood_type: BloodType,
    pub gender: Gender,
    pub can_submit: bool,
    pub submit_label: &'static str,
}

fn field_hint(field: DraftField) -> &'static str {
    match field {
        DraftField::DateOfBirth => "YYYY-MM-DD",
        DraftField::State => "e.g., CA",
        DraftField::City => "e.g., Los Angeles",
        _ => "",
    }
}

fn field_vm(draft: &DonorDraft, field: DraftField) -> DraftFieldVm {
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };
    DraftFieldVm {
        field,
        label,
        value: draft.field(field).to_string(),
        hint: field_hint(field),
    }
}

pub fn registration_vm(state: &AppState) -> RegistrationVm {
    RegistrationVm {
        fields: DraftField::ALL
            .iter()
            .map(|f| field_vm(&state.draft, *f))
            .collect(),
        blood_type: state.draft.blood_type,
        gender: state.draft.gender,
        can_submit: !state.registering,
        submit_label: if state.registering {
            "Registering..."
        } else {
            "Register Donor"
        },
    }
}

// --- Finder ---

#[derive(Debug, Clone, PartialEq)]
pub struct FinderRowVm {
    pub first_name: String,
    pub blood_type: BloodType,
    pub location: String,
}

#[derive(Debug, Clone)]
pub enum FinderBodyVm {
    Prompt,
    Searching,
    Results {
        heading: String,
        rows: Vec<FinderRowVm>,
        /// `None` when there is nothing to generate for.
        outreach_button: Option<(&'static str, bool)>,
        outreach: Option<GeneratedText>,
    },
}

#[derive(Debug, Clone)]
pub struct FinderVm {
    pub state: String,
    pub city: String,
    pub can_search: bool,
    pub search_label: &'static str,
    pub body: FinderBodyVm,
}

pub fn finder_vm(state: &AppState) -> FinderVm {
    let finder = &state.finder;
    let searching = finder.phase == FinderPhase::Searching;

    let body = match finder.phase {
        FinderPhase::Idle => FinderBodyVm::Prompt,
        FinderPhase::Searching => FinderBodyVm::Searching,
        FinderPhase::ResultsShown => FinderBodyVm::Results {
            heading: format!("{} eligible donor(s) found", finder.results.len()),
            rows: finder
                .results
                .iter()
                .map(|d| FinderRowVm {
                    first_name: d.first_name.clone(),
                    blood_type: d.blood_type,
                    location: d.location(),
                })
                .collect(),
            outreach_button: (!finder.results.is_empty()).then(|| {
                if finder.generating {
                    ("Generating...", false)
                } else {
                    ("Generate Outreach Message", true)
                }
            }),
            outreach: finder.outreach.clone().filter(|t| !t.text.is_empty()),
        },
    };

    FinderVm {
        state: finder.criteria.state.clone(),
        city: finder.criteria.city.clone(),
        can_search: !searching,
        search_label: if searching { "Searching..." } else { "Find Donors" },
        body,
    }
}

// --- Banner / toast ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerVm {
    pub message: String,
    pub can_retry: bool,
    pub retry_label: &'static str,
}

pub fn banner_vm(state: &AppState) -> Option<BannerVm> {
    state.connectivity_fault.as_ref().map(|message| BannerVm {
        message: message.clone(),
        can_retry: !state.retrying,
        retry_label: if state.retrying { "Retrying..." } else { "Retry" },
    })
}

pub fn toast_vm(state: &AppState) -> Option<Notification> {
    state.notification.clone()
}
