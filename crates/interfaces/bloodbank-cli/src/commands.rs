use anyhow::{bail, Context, Result};
use bloodbank_core::{
    campaign_prompt, distinct_blood_types, filter_donors, low_stock_items, outreach_prompt, Donor,
    DonorDraft, InventoryItem, SearchCriteria,
};
use bloodbank_infra::{display_text, BackendClient, GenerativeClient};
use tracing::warn;

fn print_donor(d: &Donor) {
    let eligibility = if d.is_eligible {
        "Eligible"
    } else {
        "Not Eligible"
    };
    println!(
        "   {:<4} {:<28} {:<32} {:<24} {}",
        d.blood_type,
        d.full_name(),
        d.email,
        d.location(),
        eligibility
    );
}

/// Lists donors, optionally narrowed by the same term the donor screen uses.
pub async fn cmd_donors(backend: &BackendClient, term: Option<&str>) -> Result<Vec<Donor>> {
    let donors = backend
        .list_donors()
        .await
        .with_context(|| format!("fetching donors from {}", backend.base_url()))?;

    let shown: Vec<Donor> = filter_donors(&donors, term.unwrap_or(""))
        .into_iter()
        .cloned()
        .collect();

    println!(":: {} of {} donor(s)", shown.len(), donors.len());
    for d in &shown {
        print_donor(d);
    }
    Ok(shown)
}

pub async fn cmd_inventory(backend: &BackendClient) -> Result<Vec<InventoryItem>> {
    let inventory = backend
        .list_inventory()
        .await
        .with_context(|| format!("fetching inventory from {}", backend.base_url()))?;

    println!(":: Blood inventory");
    for item in &inventory {
        println!(
            "   {:<4} {:>5} units  {}",
            item.blood_type,
            item.units,
            item.status().label()
        );
    }
    Ok(inventory)
}

pub async fn cmd_search(backend: &BackendClient, criteria: &SearchCriteria) -> Result<Vec<Donor>> {
    if !criteria.is_complete() {
        bail!("Both state and city are required to search");
    }

    println!(":: Searching {}", criteria.location_label());
    let found = backend
        .search_donors(criteria)
        .await
        .context("searching donors")?;

    println!(":: {} eligible donor(s) found", found.len());
    for d in &found {
        println!("   {:<4} {:<16} {}", d.blood_type, d.first_name, d.location());
    }
    Ok(found)
}

pub async fn cmd_register(backend: &BackendClient, draft: &DonorDraft) -> Result<()> {
    draft.validate()?;

    backend
        .create_donor(draft)
        .await
        .context("registering donor")?;

    println!(
        ":: Registered {} {} ({})",
        draft.first_name, draft.last_name, draft.blood_type
    );
    Ok(())
}

/// Campaign ideas for whatever inventory is below the low threshold.
pub async fn cmd_campaign(backend: &BackendClient, generator: &GenerativeClient) -> Result<String> {
    let inventory = backend
        .list_inventory()
        .await
        .context("fetching inventory")?;
    let low = low_stock_items(&inventory);

    let outcome = generator.generate(&campaign_prompt(&low)).await;
    if let Err(e) = &outcome {
        warn!("Campaign generation failed: {}", e);
    }
    let text = display_text(outcome);
    println!("{}", text);
    Ok(text)
}

/// Searches, then drafts an outreach message for the blood types found.
/// Returns `None` when the search came back empty.
pub async fn cmd_outreach(
    backend: &BackendClient,
    generator: &GenerativeClient,
    criteria: &SearchCriteria,
) -> Result<Option<String>> {
    let found = cmd_search(backend, criteria).await?;
    if found.is_empty() {
        return Ok(None);
    }

    let outcome = generator
        .generate(&outreach_prompt(criteria, &distinct_blood_types(&found)))
        .await;
    if let Err(e) = &outcome {
        warn!("Outreach generation failed: {}", e);
    }
    let text = display_text(outcome);
    println!();
    println!("{}", text);
    Ok(Some(text))
}
