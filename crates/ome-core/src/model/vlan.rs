// ── NIC VLAN domain types ──

use serde::{Deserialize, Serialize};

/// Tagging configuration of one NIC port (its single partition).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanRecord {
    /// NIC group name, e.g. "Integrated NIC 1".
    pub nic_identifier: String,
    /// Numeric group id of the port group.
    pub port: i64,
    /// Shared by the partition's attributes; identifies it on update.
    #[serde(default)]
    pub component_id: i64,
    #[serde(default)]
    pub is_nic_bonded: bool,
    /// Untagged network id, 0 when none.
    #[serde(default)]
    pub untagged: i64,
    /// Tagged network ids in appearance order. Duplicates are kept.
    #[serde(default)]
    pub tagged: Vec<i64>,
}

impl VlanRecord {
    /// A record carrying only its location, all settings zero.
    pub fn empty(nic_identifier: impl Into<String>, port: i64) -> Self {
        Self {
            nic_identifier: nic_identifier.into(),
            port,
            ..Self::default()
        }
    }
}

/// Everything the network view says about VLANs for one template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanConfig {
    /// Global bonding mode, e.g. "NoTeaming" or "LACP". Empty when absent.
    pub bonding_technology: String,
    pub records: Vec<VlanRecord>,
}
