// ── Attribute tree ──

use serde::Serialize;

/// A single terminal setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Unique within its leaf group together with `name`.
    pub id: i64,
    pub name: String,
    /// Every value travels as a string; consumers parse as needed.
    pub value: String,
    pub is_ignored: bool,
    /// NIC partition the attribute belongs to (network view only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<i64>,
}

impl Attribute {
    pub fn new(id: i64, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            value: value.into(),
            is_ignored: false,
            component_id: None,
        }
    }

    pub fn with_component(mut self, component_id: i64) -> Self {
        self.component_id = Some(component_id);
        self
    }

    pub fn ignored(mut self) -> Self {
        self.is_ignored = true;
        self
    }
}

/// Body of a group: either further groups or settings, never both.
///
/// `Leaf(vec![])` is the empty terminal some templates contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupNode {
    Branch(Vec<AttributeGroup>),
    Leaf(Vec<Attribute>),
}

/// A named node of the tree. `name` is the navigation key used in
/// display paths; `id` is the backend's numeric group id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeGroup {
    pub id: i64,
    pub name: String,
    pub node: GroupNode,
}

impl AttributeGroup {
    pub fn branch(id: i64, name: impl Into<String>, children: Vec<AttributeGroup>) -> Self {
        Self {
            id,
            name: name.into(),
            node: GroupNode::Branch(children),
        }
    }

    pub fn leaf(id: i64, name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            id,
            name: name.into(),
            node: GroupNode::Leaf(attributes),
        }
    }

    /// Child groups; empty for a leaf.
    pub fn subgroups(&self) -> &[AttributeGroup] {
        match &self.node {
            GroupNode::Branch(children) => children,
            GroupNode::Leaf(_) => &[],
        }
    }

    /// Settings; empty for a branch.
    pub fn attributes(&self) -> &[Attribute] {
        match &self.node {
            GroupNode::Leaf(attributes) => attributes,
            GroupNode::Branch(_) => &[],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node, GroupNode::Leaf(_))
    }

    /// First child group named `name`.
    pub fn subgroup(&self, name: &str) -> Option<&AttributeGroup> {
        self.subgroups().iter().find(|g| g.name == name)
    }

    /// First setting named `name`, regardless of id.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes().iter().find(|a| a.name == name)
    }

    /// Number of attributes in this group and everything below it.
    pub fn attribute_count(&self) -> usize {
        match &self.node {
            GroupNode::Leaf(attributes) => attributes.len(),
            GroupNode::Branch(children) => children.iter().map(Self::attribute_count).sum(),
        }
    }
}

/// First top-level group named `name`.
pub fn find_group<'a>(root: &'a [AttributeGroup], name: &str) -> Option<&'a AttributeGroup> {
    root.iter().find(|g| g.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AttributeGroup {
        AttributeGroup::branch(
            1,
            "BIOS",
            vec![
                AttributeGroup::leaf(
                    2,
                    "Boot Settings",
                    vec![Attribute::new(10, "Boot Mode", "Uefi")],
                ),
                AttributeGroup::leaf(
                    3,
                    "System Profile Settings",
                    vec![
                        Attribute::new(11, "System Profile", "PerfOptimized"),
                        Attribute::new(12, "CPU Power Management", "MaxPerf"),
                    ],
                ),
                AttributeGroup::leaf(4, "Empty", vec![]),
            ],
        )
    }

    #[test]
    fn branch_has_no_attributes() {
        let bios = sample();
        assert!(!bios.is_leaf());
        assert!(bios.attributes().is_empty());
        assert_eq!(bios.subgroups().len(), 3);
    }

    #[test]
    fn leaf_has_no_subgroups() {
        let bios = sample();
        let boot = bios.subgroup("Boot Settings").expect("boot group");
        assert!(boot.is_leaf());
        assert!(boot.subgroups().is_empty());
        assert_eq!(boot.attribute("Boot Mode").map(|a| a.id), Some(10));
    }

    #[test]
    fn attribute_count_sums_leaves() {
        assert_eq!(sample().attribute_count(), 3);
    }
}
