use crate::utils::error::{Result, SimError};
use crate::utils::validation::validate_operator_code;
use serde::{Deserialize, Serialize};

/// Identity of one SIM card as reported by the platform telephony service.
///
/// Immutable value type, constructed at query time and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimCard {
    /// Mobile Country Code, e.g. "310".
    pub mcc: String,
    /// Mobile Network Code, e.g. "410".
    pub mnc: String,
}

/// What the platform knows about one subscriber cellular provider.
///
/// Both fields are absent when a SIM slot is visible but its identity cannot
/// be read (no SIM, airplane mode, locked card).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellularProvider {
    pub mobile_country_code: Option<String>,
    pub mobile_network_code: Option<String>,
}

impl CellularProvider {
    pub fn new(mcc: impl Into<String>, mnc: impl Into<String>) -> Self {
        Self {
            mobile_country_code: Some(mcc.into()),
            mobile_network_code: Some(mnc.into()),
        }
    }

    /// Splits a concatenated operator code into MCC and MNC.
    ///
    /// ModemManager reports the home operator as one string, the three-digit
    /// MCC followed by a two- or three-digit MNC ("310410" -> "310"/"410").
    pub fn from_operator_code(code: &str) -> Result<Self> {
        validate_operator_code("operator_code", code)?;

        let (mcc, mnc) = code.split_at(3);
        Ok(Self::new(mcc, mnc))
    }
}

impl TryFrom<CellularProvider> for SimCard {
    type Error = SimError;

    fn try_from(provider: CellularProvider) -> Result<Self> {
        match (provider.mobile_country_code, provider.mobile_network_code) {
            (Some(mcc), Some(mnc)) => Ok(SimCard { mcc, mnc }),
            _ => Err(SimError::ProviderUnavailableError {
                message: "subscriber provider reported no MCC/MNC".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_operator_code_three_digit_mnc() {
        let provider = CellularProvider::from_operator_code("310410").unwrap();
        assert_eq!(provider.mobile_country_code.as_deref(), Some("310"));
        assert_eq!(provider.mobile_network_code.as_deref(), Some("410"));
    }

    #[test]
    fn test_from_operator_code_two_digit_mnc() {
        let provider = CellularProvider::from_operator_code("24001").unwrap();
        assert_eq!(provider.mobile_country_code.as_deref(), Some("240"));
        assert_eq!(provider.mobile_network_code.as_deref(), Some("01"));
    }

    #[test]
    fn test_from_operator_code_rejects_bad_input() {
        assert!(CellularProvider::from_operator_code("").is_err());
        assert!(CellularProvider::from_operator_code("310").is_err());
        assert!(CellularProvider::from_operator_code("3104105").is_err());
        assert!(CellularProvider::from_operator_code("31041x").is_err());
    }

    #[test]
    fn test_sim_card_from_complete_provider() {
        let card = SimCard::try_from(CellularProvider::new("310", "01")).unwrap();
        assert_eq!(card.mcc, "310");
        assert_eq!(card.mnc, "01");
    }

    #[test]
    fn test_sim_card_from_empty_provider_fails() {
        assert!(SimCard::try_from(CellularProvider::default()).is_err());
    }
}
