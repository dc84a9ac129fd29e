// ── Leaf value updates ──
//
// Only attribute values and the ignore flag can be changed; the tree's
// shape is owned by the appliance.

use ome_api::models::{AttributeValueUpdate, TemplateAttributesUpdate};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::{AttributeGroup, DisplayPath};
use crate::resolve::resolve;

/// A requested change to one attribute, addressed the same way
/// [`resolve`](crate::resolve()) addresses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeEdit {
    pub display_name: String,
    pub attribute_id: i64,
    pub value: String,
    #[serde(default)]
    pub is_ignored: bool,
}

/// Build the `PUT Templates({id})` body for a set of edits.
///
/// Every edit must resolve against `root` first, so a stale path or id is
/// reported before anything is sent.
pub fn encode_attribute_update(
    template_id: i64,
    edits: &[AttributeEdit],
    root: &[AttributeGroup],
) -> Result<TemplateAttributesUpdate, CoreError> {
    let attributes = edits
        .iter()
        .map(|edit| {
            let path = DisplayPath::parse(&edit.display_name);
            let attribute = resolve(&path, edit.attribute_id, root)?;
            Ok(AttributeValueUpdate {
                id: attribute.id,
                value: edit.value.clone(),
                is_ignored: edit.is_ignored,
            })
        })
        .collect::<Result<Vec<_>, CoreError>>()?;

    Ok(TemplateAttributesUpdate {
        id: template_id,
        attributes,
    })
}
