use crate::domain::model::CellularProvider;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The platform telephony collaborator.
///
/// Implementations enumerate the subscriber cellular providers currently
/// visible to the host, in platform order. Failures propagate as-is; the
/// port defines no retry or recovery behavior.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TelephonyService: Send + Sync {
    async fn subscriber_providers(&self) -> Result<Vec<CellularProvider>>;
}
