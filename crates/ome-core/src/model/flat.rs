// ── Flat attribute views ──

use serde::{Deserialize, Serialize};

/// One attribute with its fully qualified display path, as produced by
/// flattening or selective refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatAttribute {
    pub attribute_id: i64,
    /// Comma-joined path from the root group to the attribute itself.
    pub display_name: String,
    pub value: String,
    pub is_ignored: bool,
}

/// A previously seen attribute, identified by path and id, to be
/// looked up again in a freshly fetched tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRef {
    pub display_name: String,
    pub attribute_id: i64,
}

impl From<&FlatAttribute> for AttributeRef {
    fn from(flat: &FlatAttribute) -> Self {
        Self {
            display_name: flat.display_name.clone(),
            attribute_id: flat.attribute_id,
        }
    }
}
