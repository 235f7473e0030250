use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::record::NftRecord;

/// URI of an uploaded asset or metadata document.
///
/// Opaque beyond a non-emptiness check; the storage layer decides the
/// actual scheme and shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataUri(String);

impl MetadataUri {
    pub fn new(uri: impl Into<String>) -> Result<Self, TypeError> {
        let uri = uri.into();
        if uri.is_empty() {
            return Err(TypeError::EmptyUri);
        }
        Ok(Self(uri))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MetadataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Off-chain JSON metadata document a token's URI points at.
///
/// The field names are part of the wire contract consumed by wallets
/// and indexers, so they are fixed by this schema rather than assembled
/// ad hoc at the upload site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffChainMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
}

impl OffChainMetadata {
    /// Build the document for a record whose image is already uploaded.
    pub fn from_record(record: &NftRecord, image_uri: &MetadataUri) -> Self {
        Self {
            name: record.name.clone(),
            symbol: record.symbol.clone(),
            description: record.description.clone(),
            image: image_uri.as_str().to_string(),
        }
    }
}
