use async_trait::async_trait;
use bloodbank_core::{Donor, DonorDraft, InventoryItem, SearchCriteria};
use bloodbank_infra::{BackendClient, GenerativeClient, Generation};

use crate::ports::{DonorBackend, TextGenerator};

#[async_trait]
impl DonorBackend for BackendClient {
    async fn list_donors(&self) -> anyhow::Result<Vec<Donor>> {
        Ok(BackendClient::list_donors(self).await?)
    }

    async fn list_inventory(&self) -> anyhow::Result<Vec<InventoryItem>> {
        Ok(BackendClient::list_inventory(self).await?)
    }

    async fn create_donor(&self, draft: &DonorDraft) -> anyhow::Result<()> {
        Ok(BackendClient::create_donor(self, draft).await?)
    }

    async fn search_donors(&self, criteria: &SearchCriteria) -> anyhow::Result<Vec<Donor>> {
        Ok(BackendClient::search_donors(self, criteria).await?)
    }
}

#[async_trait]
impl TextGenerator for GenerativeClient {
    async fn generate(&self, prompt: &str) -> anyhow::Result<Generation> {
        Ok(GenerativeClient::generate(self, prompt).await?)
    }
}
