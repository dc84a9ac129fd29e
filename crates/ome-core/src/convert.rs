// ── API-to-domain type conversions ──
//
// Bridges raw `ome_api::models` response types into `ome_core::model`
// types. Branch vs. leaf is decided here, once: a group with any
// sub-groups is a branch, anything else is a leaf.

use ome_api::models;
use tracing::warn;

use crate::model::{Attribute, AttributeGroup, GroupNode};

impl From<models::Attribute> for Attribute {
    fn from(raw: models::Attribute) -> Self {
        Self {
            id: raw.attribute_id,
            name: raw.display_name,
            value: raw.value.unwrap_or_default(),
            is_ignored: raw.is_ignored,
            component_id: (raw.custom_id != 0).then_some(raw.custom_id),
        }
    }
}

impl From<models::AttributeGroup> for AttributeGroup {
    fn from(raw: models::AttributeGroup) -> Self {
        let node = if raw.sub_attribute_groups.is_empty() {
            GroupNode::Leaf(raw.attributes.into_iter().map(Attribute::from).collect())
        } else {
            if !raw.attributes.is_empty() {
                warn!(
                    group = %raw.display_name,
                    dropped = raw.attributes.len(),
                    "group has both sub-groups and attributes; keeping sub-groups"
                );
            }
            GroupNode::Branch(
                raw.sub_attribute_groups
                    .into_iter()
                    .map(AttributeGroup::from)
                    .collect(),
            )
        };

        Self {
            id: raw.group_name_id,
            name: raw.display_name,
            node,
        }
    }
}

/// Convert the top-level groups of a template response.
pub fn tree_from_details(details: models::TemplateAttributeDetails) -> Vec<AttributeGroup> {
    details
        .attribute_groups
        .into_iter()
        .map(AttributeGroup::from)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn raw_attr(id: i64, custom_id: i64, name: &str, value: Option<&str>) -> models::Attribute {
        models::Attribute {
            attribute_id: id,
            custom_id,
            display_name: name.into(),
            value: value.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn group_with_children_becomes_branch() {
        let raw = models::AttributeGroup {
            group_name_id: 1,
            display_name: "BIOS".into(),
            sub_attribute_groups: vec![models::AttributeGroup {
                group_name_id: 2,
                display_name: "Boot Settings".into(),
                attributes: vec![raw_attr(10, 0, "Boot Mode", Some("Uefi"))],
                ..Default::default()
            }],
            attributes: vec![],
        };

        let group = AttributeGroup::from(raw);
        assert!(!group.is_leaf());
        let boot = group.subgroup("Boot Settings").unwrap();
        assert!(boot.is_leaf());
        assert_eq!(boot.attributes()[0].value, "Uefi");
    }

    #[test]
    fn empty_group_becomes_empty_leaf() {
        let group = AttributeGroup::from(models::AttributeGroup {
            group_name_id: 7,
            display_name: "Empty".into(),
            ..Default::default()
        });
        assert_eq!(group.node, GroupNode::Leaf(vec![]));
    }

    #[test]
    fn null_value_becomes_empty_string() {
        let attr = Attribute::from(raw_attr(3, 0, "Asset Tag", None));
        assert_eq!(attr.value, "");
        assert_eq!(attr.component_id, None);
    }

    #[test]
    fn custom_id_carries_component() {
        let attr = Attribute::from(raw_attr(0, 1049, "Vlan Tagged", Some("10133")));
        assert_eq!(attr.component_id, Some(1049));
    }

    #[test]
    fn tree_from_details_parses_wire_json() {
        let details: models::TemplateAttributeDetails = serde_json::from_value(serde_json::json!({
            "Id": 5,
            "AttributeGroups": [{
                "GroupNameId": 1,
                "DisplayName": "iDRAC",
                "SubAttributeGroups": [],
                "Attributes": [
                    { "AttributeId": 100, "DisplayName": "Time Zone", "Value": "UTC", "IsIgnored": true }
                ]
            }]
        }))
        .unwrap();

        let tree = tree_from_details(details);
        assert_eq!(tree.len(), 1);
        let attr = &tree[0].attributes()[0];
        assert_eq!(attr.id, 100);
        assert!(attr.is_ignored);
    }
}
