// ── Display path resolution ──
//
// Recursive descent over the remaining path segments. Sibling groups may
// share a display name, so every candidate is tried in order; when all of
// them fail, the miss that got furthest down the path is reported.

use crate::error::CoreError;
use crate::model::{Attribute, AttributeGroup, DisplayPath};

/// Where a descent stopped. `depth` is the index of the segment that
/// failed to match.
#[derive(Debug)]
enum Miss<'p> {
    SubGroup {
        depth: usize,
        group: &'p str,
        parent: String,
    },
    Attribute {
        depth: usize,
        name: &'p str,
        group: String,
    },
}

impl Miss<'_> {
    fn depth(&self) -> usize {
        match self {
            Self::SubGroup { depth, .. } | Self::Attribute { depth, .. } => *depth,
        }
    }

    fn into_error(self, attribute_id: i64) -> CoreError {
        match self {
            Self::SubGroup { group, parent, .. } => CoreError::SubAttributeGroupNotFound {
                group: group.to_owned(),
                parent,
            },
            Self::Attribute { name, group, .. } => CoreError::AttributeNotFound {
                name: name.to_owned(),
                attribute_id,
                group,
            },
        }
    }
}

/// Keep whichever miss reached the deeper segment; ties keep the first.
fn deeper<'p>(current: Option<Miss<'p>>, candidate: Miss<'p>) -> Option<Miss<'p>> {
    match current {
        Some(existing) if existing.depth() >= candidate.depth() => Some(existing),
        _ => Some(candidate),
    }
}

/// Resolve `path` to the attribute it names whose id is `attribute_id`.
///
/// The first segment selects a top-level group, each following segment
/// but the last selects a child group, and the last segment together with
/// `attribute_id` selects the attribute inside the final group. With a
/// single group segment the top-level group itself holds the attribute.
///
/// Fails with [`CoreError::AttributeGroupNotFound`] when the first segment
/// matches nothing (including the empty path),
/// [`CoreError::SubAttributeGroupNotFound`] when a later group segment
/// matches nothing, and [`CoreError::AttributeNotFound`] when the group
/// chain resolves but no attribute matches both name and id.
pub fn resolve<'t>(
    path: &DisplayPath,
    attribute_id: i64,
    root: &'t [AttributeGroup],
) -> Result<&'t Attribute, CoreError> {
    let Some((first, rest)) = path.segments().split_first() else {
        return Err(CoreError::AttributeGroupNotFound {
            group: String::new(),
        });
    };

    let mut furthest = None;
    for group in root.iter().filter(|g| g.name == *first) {
        match descend(group, rest, 1, attribute_id) {
            Ok(attribute) => return Ok(attribute),
            Err(miss) => furthest = deeper(furthest, miss),
        }
    }

    Err(furthest.map_or_else(
        || CoreError::AttributeGroupNotFound {
            group: first.clone(),
        },
        |miss| miss.into_error(attribute_id),
    ))
}

/// `group` matched the segment before `rest`; `depth` indexes `rest[0]`
/// within the whole path.
fn descend<'t, 'p>(
    group: &'t AttributeGroup,
    rest: &'p [String],
    depth: usize,
    attribute_id: i64,
) -> Result<&'t Attribute, Miss<'p>> {
    // Only the attribute name (or nothing) is left: this is the leaf group.
    if rest.len() <= 1 {
        let name = rest.first().map_or("", String::as_str);
        return group
            .attributes()
            .iter()
            .find(|a| a.name == name && a.id == attribute_id)
            .ok_or_else(|| Miss::Attribute {
                depth,
                name,
                group: group.name.clone(),
            });
    }

    let next = rest[0].as_str();
    let mut furthest = None;
    for child in group.subgroups().iter().filter(|g| g.name == next) {
        match descend(child, &rest[1..], depth + 1, attribute_id) {
            Ok(attribute) => return Ok(attribute),
            Err(miss) => furthest = deeper(furthest, miss),
        }
    }

    Err(furthest.unwrap_or_else(|| Miss::SubGroup {
        depth,
        group: next,
        parent: group.name.clone(),
    }))
}

/// Convenience for callers holding the textual form.
pub fn resolve_str<'t>(
    path: &str,
    attribute_id: i64,
    root: &'t [AttributeGroup],
) -> Result<&'t Attribute, CoreError> {
    resolve(&DisplayPath::parse(path), attribute_id, root)
}
