use reqwest::Client;

/// Shared client settings for every outbound call. Only the connect phase is
/// bounded; a slow response is waited out.
pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!("bloodbank/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(bloodbank_config::CONNECT_TIMEOUT)
        .build()
}
