// ── Tree flattening ──

use crate::model::path::PATH_SEPARATOR;
use crate::model::{AttributeGroup, FlatAttribute, GroupNode};

/// List every attribute in the tree, depth-first pre-order, each with its
/// comma-joined path from the top-level group down to its own name.
///
/// Output order follows the tree order and the output holds exactly one
/// entry per attribute. Feeding an entry's path and id back into
/// [`resolve`](crate::resolve()) yields the same attribute.
pub fn flatten_all(root: &[AttributeGroup]) -> Vec<FlatAttribute> {
    let capacity = root.iter().map(AttributeGroup::attribute_count).sum();
    let mut out = Vec::with_capacity(capacity);
    let mut prefix = Vec::new();
    for group in root {
        walk(group, &mut prefix, &mut out);
    }
    out
}

fn walk<'t>(group: &'t AttributeGroup, prefix: &mut Vec<&'t str>, out: &mut Vec<FlatAttribute>) {
    prefix.push(&group.name);
    match &group.node {
        GroupNode::Branch(children) => {
            for child in children {
                walk(child, prefix, out);
            }
        }
        GroupNode::Leaf(attributes) => {
            let mut base = String::new();
            for segment in prefix.iter() {
                base.push_str(segment);
                base.push(PATH_SEPARATOR);
            }
            out.extend(attributes.iter().map(|attribute| FlatAttribute {
                attribute_id: attribute.id,
                display_name: format!("{base}{}", attribute.name),
                value: attribute.value.clone(),
                is_ignored: attribute.is_ignored,
            }));
        }
    }
    prefix.pop();
}
