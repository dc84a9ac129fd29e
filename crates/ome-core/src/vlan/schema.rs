//! Group and attribute names of the network view.
//!
//! These are the appliance's own naming convention; decoding depends on
//! them verbatim.
//!
//! ```text
//! NicBondingTechnology
//! └── Nic Bonding Technology          (global bonding mode)
//! NICModel
//! └── <NIC identifier>                e.g. "Integrated NIC 1"
//!     └── Port <n>                    group id = port number
//!         └── <partition>             first child only
//!             ├── NIC Bonding Enabled
//!             ├── Vlan Tagged
//!             └── Vlan UnTagged
//! ```

pub const NIC_BONDING_TECHNOLOGY_GROUP: &str = "NicBondingTechnology";
pub const NIC_BONDING_TECHNOLOGY: &str = "Nic Bonding Technology";

pub const NIC_MODEL_GROUP: &str = "NICModel";
/// Display-name prefix of port groups under a NIC.
pub const PORT_LABEL: &str = "Port ";

pub const NIC_BONDING_ENABLED: &str = "NIC Bonding Enabled";
pub const VLAN_TAGGED: &str = "Vlan Tagged";
pub const VLAN_UNTAGGED: &str = "Vlan UnTagged";

/// Separator inside the `Vlan Tagged` value.
pub const TAGGED_SEPARATOR: char = ',';
/// A lone `"0"` in `Vlan Tagged` means no tagged networks, not network 0.
pub const EMPTY_TAGGED_SENTINEL: &str = "0";
