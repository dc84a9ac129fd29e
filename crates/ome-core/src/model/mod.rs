// ── Domain model ──
//
// Canonical types the tree functions operate on. Wire types from
// `ome-api` are converted into these once, in `crate::convert`.

pub mod flat;
pub mod path;
pub mod tree;
pub mod vlan;

pub use flat::{AttributeRef, FlatAttribute};
pub use path::DisplayPath;
pub use tree::{Attribute, AttributeGroup, GroupNode};
pub use vlan::{VlanConfig, VlanRecord};
