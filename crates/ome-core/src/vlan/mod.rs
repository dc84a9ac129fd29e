// ── NIC VLAN view ──
//
// The network view of a template is an attribute tree with a fixed
// layout (see `schema`). `decode` reads per-port VLAN records out of it;
// `encode` turns edited records into the UpdateNetworkConfig body.

pub mod decode;
pub mod encode;
pub mod schema;

pub use decode::{bonding_technology, decode_all, decode_config, decode_one};
pub use encode::{encode, join_tagged};
