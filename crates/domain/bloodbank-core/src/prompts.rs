//! Prompt text sent to the generative-text service.

use crate::{BloodType, SearchCriteria};

fn join_types(types: &[BloodType]) -> String {
    types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Campaign ideas for the dashboard, driven by the types currently short.
pub fn campaign_prompt(low_stock: &[BloodType]) -> String {
    let needed = if low_stock.is_empty() {
        "all types".to_string()
    } else {
        join_types(low_stock)
    };

    format!(
        "As an expert marketing strategist for a blood donation center, generate 3 creative \
         and engaging campaign ideas to attract more donors. The current urgent need is for \
         the following blood types: {needed}. For each idea, provide: 1. A catchy slogan. \
         2. A brief theme description. 3. A sample social media post (under 280 characters). \
         Format the response clearly using markdown."
    )
}

/// Outreach message for donors found by a location search.
pub fn outreach_prompt(criteria: &SearchCriteria, found: &[BloodType]) -> String {
    format!(
        "Create a polite and encouraging outreach message (SMS or email) for registered blood \
         donors in {location}. The message should be friendly and appreciative. Mention that \
         there is a need for donations in their local area. Specifically mention the need for \
         these blood types if relevant: {types}. Encourage them to schedule an appointment. \
         Keep it concise and professional. Do not include placeholders like [Clinic Name] or \
         [Link].",
        location = criteria.location_label(),
        types = join_types(found),
    )
}
