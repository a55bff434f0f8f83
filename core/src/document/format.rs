// ## File: `src/document/format.rs`

//! document/format.rs
//! Byte representation of a packed document.

use crate::document::types::{DocumentError, PackedNode};

/// Serializer/parser pair for packed documents.
pub trait DocumentFormat: Send + Sync {
    fn name(&self) -> &'static str;
    fn serialize(&self, root: &PackedNode) -> Result<Vec<u8>, DocumentError>;
    fn parse(&self, bytes: &[u8]) -> Result<PackedNode, DocumentError>;
}

/// JSON via `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl DocumentFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn serialize(&self, root: &PackedNode) -> Result<Vec<u8>, DocumentError> {
        let out = if self.pretty {
            serde_json::to_vec_pretty(root)
        } else {
            serde_json::to_vec(root)
        };
        out.map_err(|e| DocumentError::Serialize { format: self.name(), msg: e.to_string() })
    }

    fn parse(&self, bytes: &[u8]) -> Result<PackedNode, DocumentError> {
        serde_json::from_slice(bytes)
            .map_err(|e| DocumentError::Parse { format: self.name(), msg: e.to_string() })
    }
}
