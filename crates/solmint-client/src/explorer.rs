use solmint_types::{Address, TxSignature};

use crate::config::MintConfig;

/// Builds explorer links for addresses and transactions.
///
/// Links are observational only: they are logged for the operator and
/// never consumed by a later step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explorer {
    base_url: String,
    cluster: String,
}

impl Explorer {
    pub fn new(base_url: impl Into<String>, cluster: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cluster: cluster.into(),
        }
    }

    pub fn from_config(config: &MintConfig) -> Self {
        Self::new(&config.explorer_url, &config.cluster)
    }

    /// Link to an account page.
    pub fn address_url(&self, address: &Address) -> String {
        format!(
            "{}/address/{}?cluster={}",
            self.base_url,
            address.to_hex(),
            self.cluster
        )
    }

    /// Link to a transaction page.
    pub fn tx_url(&self, signature: &TxSignature) -> String {
        format!(
            "{}/tx/{}?cluster={}",
            self.base_url,
            signature.to_hex(),
            self.cluster
        )
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Explorer::from_config(&MintConfig::default())
    }
}
