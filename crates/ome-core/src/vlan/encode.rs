// ── UpdateNetworkConfig encoding ──

use ome_api::models::{NetworkConfigUpdate, VlanAttributeUpdate};

use super::schema::TAGGED_SEPARATOR;
use crate::model::VlanRecord;

/// Build the UpdateNetworkConfig body: one VLAN attribute per record,
/// wrapped with the template, identity pool, bonding mode and
/// propagation flag.
///
/// `tagged` goes out as a JSON array. An empty list stays empty; it is
/// not rewritten to the `"0"` sentinel the network view uses on read.
pub fn encode(
    records: &[VlanRecord],
    bonding_technology: &str,
    propagate_vlan: bool,
    template_id: i64,
    identity_pool_id: i64,
) -> NetworkConfigUpdate {
    NetworkConfigUpdate {
        template_id,
        identity_pool_id,
        bonding_technology: bonding_technology.to_owned(),
        propagate_vlan,
        vlan_attributes: records
            .iter()
            .map(|record| VlanAttributeUpdate {
                component_id: record.component_id,
                untagged: record.untagged,
                tagged: record.tagged.clone(),
                is_nic_bonded: record.is_nic_bonded,
            })
            .collect(),
    }
}

/// Textual form of a tagged list, comma-joined as the network view
/// shows it. The empty list renders as an empty string.
pub fn join_tagged(tagged: &[i64]) -> String {
    let mut out = String::new();
    for (i, id) in tagged.iter().enumerate() {
        if i > 0 {
            out.push(TAGGED_SEPARATOR);
        }
        out.push_str(&id.to_string());
    }
    out
}
