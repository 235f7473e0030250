use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::TypeError;

/// Upper bound on seller fees: 10000 basis points = 100%.
pub const MAX_BASIS_POINTS: u16 = 10_000;

/// Input record for minting one token.
///
/// Immutable once constructed; the workflow only reads it to build the
/// upload request and the create-token parameters. `image_file` names a
/// file relative to the configured asset directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftRecord {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub seller_fee_basis_points: u16,
    pub image_file: String,
}

impl NftRecord {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        description: impl Into<String>,
        seller_fee_basis_points: u16,
        image_file: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            description: description.into(),
            seller_fee_basis_points,
            image_file: image_file.into(),
        }
    }

    /// Check record-level invariants before it is submitted anywhere.
    pub fn validate(&self) -> Result<(), TypeError> {
        if self.seller_fee_basis_points > MAX_BASIS_POINTS {
            return Err(TypeError::FeeOutOfRange(self.seller_fee_basis_points));
        }
        Ok(())
    }
}

/// Input record for minting a collection token.
///
/// Wraps an [`NftRecord`] and adds the collection marker plus the
/// address authorized to verify membership of items in the collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRecord {
    pub record: NftRecord,
    pub is_collection: bool,
    pub collection_authority: Address,
}

impl CollectionRecord {
    /// Build a collection record; the collection flag is always set.
    pub fn new(record: NftRecord, collection_authority: Address) -> Self {
        Self {
            record,
            is_collection: true,
            collection_authority,
        }
    }

    pub fn record(&self) -> &NftRecord {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NftRecord {
        NftRecord::new("Name", "SYMBOL", "Description", 0, "solana.png")
    }

    #[test]
    fn validate_accepts_zero_fee() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn validate_accepts_max_fee() {
        let mut record = sample();
        record.seller_fee_basis_points = MAX_BASIS_POINTS;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn validate_rejects_fee_above_max() {
        let mut record = sample();
        record.seller_fee_basis_points = MAX_BASIS_POINTS + 1;
        assert_eq!(
            record.validate().unwrap_err(),
            TypeError::FeeOutOfRange(10_001)
        );
    }

    #[test]
    fn collection_flag_is_always_set() {
        let authority = Address::from_raw([3; 32]);
        let collection = CollectionRecord::new(sample(), authority);
        assert!(collection.is_collection);
        assert_eq!(collection.collection_authority, authority);
    }

    #[test]
    fn collection_exposes_inner_record() {
        let collection = CollectionRecord::new(sample(), Address::from_raw([0; 32]));
        assert_eq!(collection.record().symbol, "SYMBOL");
    }

    #[test]
    fn serde_roundtrip() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: NftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }
}
