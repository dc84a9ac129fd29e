// ── Network view decoding ──
//
// Malformed values never abort a decode: they are logged and read as
// false / 0 / skipped, so one odd partition cannot hide the rest.

use tracing::{debug, warn};

use super::schema::{
    EMPTY_TAGGED_SENTINEL, NIC_BONDING_ENABLED, NIC_BONDING_TECHNOLOGY,
    NIC_BONDING_TECHNOLOGY_GROUP, NIC_MODEL_GROUP, PORT_LABEL, TAGGED_SEPARATOR, VLAN_TAGGED,
    VLAN_UNTAGGED,
};
use crate::error::CoreError;
use crate::model::tree::find_group;
use crate::model::{Attribute, AttributeGroup, VlanConfig, VlanRecord};

// ── Value parsing ────────────────────────────────────────────────────

fn parse_bool(attribute: &Attribute) -> bool {
    let raw = attribute.value.trim();
    if ["true", "t", "1"].iter().any(|v| raw.eq_ignore_ascii_case(v)) {
        true
    } else if raw.is_empty()
        || ["false", "f", "0"]
            .iter()
            .any(|v| raw.eq_ignore_ascii_case(v))
    {
        false
    } else {
        warn!(attribute = %attribute.name, value = raw, "unparseable boolean; reading as false");
        false
    }
}

fn parse_untagged(attribute: &Attribute) -> i64 {
    let raw = attribute.value.trim();
    if raw.is_empty() {
        return 0;
    }
    raw.parse().unwrap_or_else(|_| {
        warn!(attribute = %attribute.name, value = raw, "unparseable network id; reading as 0");
        0
    })
}

/// Split a `Vlan Tagged` value into network ids, honouring the `"0"`
/// sentinel for the empty set.
pub fn parse_tagged(raw: &str) -> Vec<i64> {
    let raw = raw.trim();
    if raw.is_empty() || raw == EMPTY_TAGGED_SENTINEL {
        return Vec::new();
    }

    raw.split(TAGGED_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!(token, "skipping unparseable tagged network id");
                None
            }
        })
        .collect()
}

// ── Tree walking ─────────────────────────────────────────────────────

fn is_port_group(group: &AttributeGroup) -> bool {
    group.name.starts_with(PORT_LABEL)
}

/// Build a record from a port group, reading its first partition.
fn decode_port(nic_identifier: &str, port: &AttributeGroup) -> VlanRecord {
    let mut record = VlanRecord::empty(nic_identifier, port.id);

    let Some(partition) = port.subgroups().first() else {
        debug!(nic = nic_identifier, port = port.id, "port has no partition");
        return record;
    };

    let mut component_id = None;
    for attribute in partition.attributes() {
        let known = match attribute.name.as_str() {
            NIC_BONDING_ENABLED => {
                record.is_nic_bonded = parse_bool(attribute);
                true
            }
            VLAN_TAGGED => {
                record.tagged = parse_tagged(&attribute.value);
                true
            }
            VLAN_UNTAGGED => {
                record.untagged = parse_untagged(attribute);
                true
            }
            _ => false,
        };
        if known && component_id.is_none() {
            component_id = attribute.component_id;
        }
    }
    record.component_id = component_id.unwrap_or_default();
    record
}

/// Decode the record for one (NIC, port) pair.
///
/// The port is the child of the NIC group whose group id equals `port`
/// and whose name carries the port label. Fails with
/// [`CoreError::InvalidNetworkDetails`] when either level is missing.
pub fn decode_one(
    root: &[AttributeGroup],
    nic_identifier: &str,
    port: i64,
) -> Result<VlanRecord, CoreError> {
    find_group(root, NIC_MODEL_GROUP)
        .and_then(|model| model.subgroup(nic_identifier))
        .and_then(|nic| {
            nic.subgroups()
                .iter()
                .find(|g| g.id == port && is_port_group(g))
        })
        .map(|port_group| decode_port(nic_identifier, port_group))
        .ok_or_else(|| CoreError::InvalidNetworkDetails {
            nic_identifier: nic_identifier.to_owned(),
            port,
        })
}

/// Decode one record per port of every NIC, in tree order.
///
/// Every child of a NIC group counts as a port here; only [`decode_one`]
/// checks the port label. Ports without a partition still produce a record
/// (settings zeroed), and a tree without the NICModel group yields no
/// records.
pub fn decode_all(root: &[AttributeGroup]) -> Vec<VlanRecord> {
    let Some(model) = find_group(root, NIC_MODEL_GROUP) else {
        debug!("network view has no {NIC_MODEL_GROUP} group");
        return Vec::new();
    };

    model
        .subgroups()
        .iter()
        .flat_map(|nic| {
            nic.subgroups()
                .iter()
                .map(move |port| decode_port(&nic.name, port))
        })
        .collect()
}

/// The global bonding mode, or an empty string when the group is absent.
pub fn bonding_technology(root: &[AttributeGroup]) -> String {
    find_group(root, NIC_BONDING_TECHNOLOGY_GROUP)
        .and_then(|group| group.attribute(NIC_BONDING_TECHNOLOGY))
        .map(|attribute| attribute.value.clone())
        .unwrap_or_default()
}

/// Bonding mode plus every port record.
pub fn decode_config(root: &[AttributeGroup]) -> VlanConfig {
    VlanConfig {
        bonding_technology: bonding_technology(root),
        records: decode_all(root),
    }
}
