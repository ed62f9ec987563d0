use crate::adapters::modem_manager::ModemManagerTelephony;
use crate::core::{SimCard, TelephonyService};
use crate::utils::error::Result;

/// Reads SIM card identity through an injected telephony service.
pub struct SimInformation<T: TelephonyService> {
    telephony: T,
}

impl<T: TelephonyService> SimInformation<T> {
    pub fn new(telephony: T) -> Self {
        Self { telephony }
    }

    /// Lists the SIM cards currently known to the platform, one record per
    /// subscriber provider, in platform order.
    ///
    /// Queries the telephony service exactly once; no caching, no retries.
    /// A host without any SIM yields an empty list, and a provider whose
    /// identity cannot be read fails the whole query. The returned list is
    /// the caller's own copy.
    pub async fn sim_cards(&self) -> Result<Vec<SimCard>> {
        let providers = self.telephony.subscriber_providers().await?;
        tracing::debug!("Platform reported {} subscriber provider(s)", providers.len());

        providers.into_iter().map(SimCard::try_from).collect()
    }
}

impl SimInformation<ModemManagerTelephony> {
    /// Provider backed by the platform's standard telephony service.
    pub async fn system() -> Result<Self> {
        Ok(Self::new(ModemManagerTelephony::connect_system().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CellularProvider;
    use crate::domain::ports::MockTelephonyService;
    use crate::utils::error::SimError;

    #[tokio::test]
    async fn test_maps_each_provider_to_one_sim_card() {
        let mut telephony = MockTelephonyService::new();
        telephony
            .expect_subscriber_providers()
            .times(1)
            .returning(|| {
                Ok(vec![
                    CellularProvider::new("310", "410"),
                    CellularProvider::new("240", "01"),
                ])
            });

        let cards = SimInformation::new(telephony).sim_cards().await.unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].mcc, "310");
        assert_eq!(cards[0].mnc, "410");
        assert_eq!(cards[1].mcc, "240");
        assert_eq!(cards[1].mnc, "01");
    }

    #[tokio::test]
    async fn test_propagates_telephony_failure() {
        let mut telephony = MockTelephonyService::new();
        telephony.expect_subscriber_providers().returning(|| {
            Err(SimError::ProviderUnavailableError {
                message: "telephony service not running".to_string(),
            })
        });

        assert!(SimInformation::new(telephony).sim_cards().await.is_err());
    }

    #[tokio::test]
    async fn test_provider_without_identity_fails_the_query() {
        let mut telephony = MockTelephonyService::new();
        telephony
            .expect_subscriber_providers()
            .returning(|| Ok(vec![CellularProvider::default()]));

        let result = SimInformation::new(telephony).sim_cards().await;

        assert!(matches!(
            result,
            Err(SimError::ProviderUnavailableError { .. })
        ));
    }
}
