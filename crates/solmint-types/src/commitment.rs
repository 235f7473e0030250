use std::fmt;

use serde::{Deserialize, Serialize};

/// Confirmation strength to wait for before a transaction is treated as
/// durable.
///
/// The mint workflow always requests [`Commitment::Finalized`] because
/// each step feeds the next: an address returned under a weaker level
/// could still be rolled back while later steps reference it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(Commitment::Finalized.to_string(), "finalized");
        assert_eq!(Commitment::Processed.to_string(), "processed");
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&Commitment::Finalized).unwrap();
        assert_eq!(json, "\"finalized\"");
        let parsed: Commitment = serde_json::from_str("\"confirmed\"").unwrap();
        assert_eq!(parsed, Commitment::Confirmed);
    }
}
