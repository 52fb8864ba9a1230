pub mod backend;
pub mod generative;
pub mod net;

// Re-exports for convenience
pub use backend::{BackendClient, BackendError};
pub use generative::{display_text, GenerateError, Generation, GenerativeClient};
pub use net::default_http_client;
