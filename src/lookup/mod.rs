mod http;

use async_trait::async_trait;

pub use http::{HttpLookup, DEFAULT_ENDPOINT};

/// Asks the account service about a nickname. Resolves to the raw HTTP
/// status code, or an error when no response was obtained at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileLookup: Send + Sync {
    async fn lookup(&self, name: &str) -> anyhow::Result<u16>;
}
