// ── Selective refresh ──

use crate::error::CoreError;
use crate::model::{AttributeGroup, AttributeRef, DisplayPath, FlatAttribute};
use crate::resolve::resolve;

/// Look each reference up again in a freshly fetched tree.
///
/// Output preserves input order and keeps the caller's path text. The
/// first reference that no longer resolves fails the whole refresh.
pub fn refresh_attributes(
    refs: &[AttributeRef],
    root: &[AttributeGroup],
) -> Result<Vec<FlatAttribute>, CoreError> {
    refs.iter()
        .map(|r| {
            let path = DisplayPath::parse(&r.display_name);
            let attribute = resolve(&path, r.attribute_id, root)?;
            Ok(FlatAttribute {
                attribute_id: attribute.id,
                display_name: r.display_name.clone(),
                value: attribute.value.clone(),
                is_ignored: attribute.is_ignored,
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Attribute;

    fn tree(boot_mode: &str) -> Vec<AttributeGroup> {
        vec![AttributeGroup::branch(
            1,
            "BIOS",
            vec![AttributeGroup::leaf(
                2,
                "Boot Settings",
                vec![
                    Attribute::new(100, "Boot Mode", boot_mode),
                    Attribute::new(101, "Hdd Failover", "Disabled").ignored(),
                ],
            )],
        )]
    }

    fn reference(path: &str, id: i64) -> AttributeRef {
        AttributeRef {
            display_name: path.into(),
            attribute_id: id,
        }
    }

    #[test]
    fn picks_up_new_values_in_request_order() {
        let refs = [
            reference("BIOS,Boot Settings,Hdd Failover", 101),
            reference("BIOS,Boot Settings,Boot Mode", 100),
        ];
        let refreshed = refresh_attributes(&refs, &tree("Bios")).unwrap();

        assert_eq!(
            refreshed,
            vec![
                FlatAttribute {
                    attribute_id: 101,
                    display_name: "BIOS,Boot Settings,Hdd Failover".into(),
                    value: "Disabled".into(),
                    is_ignored: true,
                },
                FlatAttribute {
                    attribute_id: 100,
                    display_name: "BIOS,Boot Settings,Boot Mode".into(),
                    value: "Bios".into(),
                    is_ignored: false,
                },
            ]
        );
    }

    #[test]
    fn vanished_attribute_fails_the_refresh() {
        let refs = [
            reference("BIOS,Boot Settings,Boot Mode", 100),
            reference("BIOS,Boot Settings,Boot Mode", 555),
        ];
        let err = refresh_attributes(&refs, &tree("Uefi")).unwrap_err();
        assert!(matches!(err, CoreError::AttributeNotFound { attribute_id: 555, .. }));
    }

    #[test]
    fn no_refs_no_output() {
        assert!(refresh_attributes(&[], &tree("Uefi")).unwrap().is_empty());
    }
}
