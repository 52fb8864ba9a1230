use async_trait::async_trait;
use bloodbank_core::{Donor, DonorDraft, InventoryItem, SearchCriteria};
use bloodbank_infra::Generation;

#[async_trait]
pub trait DonorBackend: Send + Sync + 'static {
    async fn list_donors(&self) -> anyhow::Result<Vec<Donor>>;
    async fn list_inventory(&self) -> anyhow::Result<Vec<InventoryItem>>;
    async fn create_donor(&self, draft: &DonorDraft) -> anyhow::Result<()>;
    async fn search_donors(&self, criteria: &SearchCriteria) -> anyhow::Result<Vec<Donor>>;
}

#[async_trait]
pub trait TextGenerator: Send + Sync + 'static {
    /// `Ok(Generation::Empty)` and `Err(_)` stay distinct here; callers decide
    /// how to present each.
    async fn generate(&self, prompt: &str) -> anyhow::Result<Generation>;
}
