use crate::domain::model::CellularProvider;
use crate::domain::ports::TelephonyService;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Telephony service over a preset provider list.
///
/// Stands in for the platform service in tests, simulators, and hosts
/// without a modem stack.
#[derive(Debug, Clone, Default)]
pub struct FixedTelephony {
    providers: Vec<CellularProvider>,
}

impl FixedTelephony {
    pub fn new(providers: Vec<CellularProvider>) -> Self {
        Self { providers }
    }

    /// Convenience for the common single-SIM case.
    pub fn single(mcc: &str, mnc: &str) -> Self {
        Self::new(vec![CellularProvider::new(mcc, mnc)])
    }
}

#[async_trait]
impl TelephonyService for FixedTelephony {
    async fn subscriber_providers(&self) -> Result<Vec<CellularProvider>> {
        Ok(self.providers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_preset_providers_in_order() {
        let telephony = FixedTelephony::new(vec![
            CellularProvider::new("310", "410"),
            CellularProvider::new("262", "02"),
        ]);

        let providers = tokio_test::block_on(telephony.subscriber_providers()).unwrap();

        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].mobile_country_code.as_deref(), Some("310"));
        assert_eq!(providers[1].mobile_network_code.as_deref(), Some("02"));
    }
}
