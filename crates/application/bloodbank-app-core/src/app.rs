use anyhow::Context;
use bloodbank_config::ClientConfig;
use bloodbank_infra::{BackendClient, GenerativeClient};

use crate::app_core::AppStore;
use crate::domain::AppState;
use crate::kernel::AppKernel;

/// The kernel wired to the real HTTP clients.
pub type BloodbankApplication = AppKernel<BackendClient, GenerativeClient>;

pub fn build_application(config: &ClientConfig) -> anyhow::Result<BloodbankApplication> {
    let client = bloodbank_infra::default_http_client().context("Failed to build HTTP client")?;
    let backend = BackendClient::from_config(client.clone(), config);
    let generator = GenerativeClient::from_config(client, config);

    tracing::info!(
        "Backend at {}, text generation model {}",
        backend.base_url(),
        config.genai_model
    );
    if config.genai_api_key.is_empty() {
        tracing::warn!(
            "{} is not set; text generation requests will be rejected",
            bloodbank_config::ENV_GENAI_API_KEY
        );
    }

    AppKernel::new(AppStore::new(AppState::default()), backend, generator)
}
