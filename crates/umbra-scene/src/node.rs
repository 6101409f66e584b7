//! Layer nodes.
//!
//! A node's capabilities are fixed by its kind instead of by which fields
//! happen to be present: frames carry fills and children, groups only
//! children, shapes only fills, slices neither.
//!
//! ```json
//! { "kind": "frame", "id": "1:2", "name": "Card",
//!   "fills": [ { "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1 } } ],
//!   "children": [ { "kind": "shape", "id": "1:3", "name": "Title", "fills": [] } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::paint::Paint;

/// A layer in the scene tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Container with its own fills (frames, components, instances).
    Frame {
        /// Unique node id.
        id: String,
        /// Display name.
        #[serde(default)]
        name: String,
        /// Fills, bottom to top.
        #[serde(default)]
        fills: Vec<Paint>,
        /// Child layers, bottom to top.
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Container without fills.
    Group {
        /// Unique node id.
        id: String,
        /// Display name.
        #[serde(default)]
        name: String,
        /// Child layers, bottom to top.
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Fill-bearing leaf (rectangles, ellipses, vectors, text).
    Shape {
        /// Unique node id.
        id: String,
        /// Display name.
        #[serde(default)]
        name: String,
        /// Fills, bottom to top.
        #[serde(default)]
        fills: Vec<Paint>,
    },
    /// Leaf with neither fills nor children.
    Slice {
        /// Unique node id.
        id: String,
        /// Display name.
        #[serde(default)]
        name: String,
    },
}

impl Node {
    /// New frame.
    pub fn frame(id: impl Into<String>, name: impl Into<String>, fills: Vec<Paint>, children: Vec<Node>) -> Self {
        Self::Frame {
            id: id.into(),
            name: name.into(),
            fills,
            children,
        }
    }

    /// New group.
    pub fn group(id: impl Into<String>, name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Group {
            id: id.into(),
            name: name.into(),
            children,
        }
    }

    /// New shape.
    pub fn shape(id: impl Into<String>, name: impl Into<String>, fills: Vec<Paint>) -> Self {
        Self::Shape {
            id: id.into(),
            name: name.into(),
            fills,
        }
    }

    /// New slice.
    pub fn slice(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Slice {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Node id.
    pub fn id(&self) -> &str {
        match self {
            Self::Frame { id, .. } | Self::Group { id, .. } | Self::Shape { id, .. } | Self::Slice { id, .. } => id,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Frame { name, .. }
            | Self::Group { name, .. }
            | Self::Shape { name, .. }
            | Self::Slice { name, .. } => name,
        }
    }

    /// Kind as written in JSON.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Frame { .. } => "frame",
            Self::Group { .. } => "group",
            Self::Shape { .. } => "shape",
            Self::Slice { .. } => "slice",
        }
    }

    /// Fills, for kinds that have them.
    pub fn fills(&self) -> Option<&[Paint]> {
        match self {
            Self::Frame { fills, .. } | Self::Shape { fills, .. } => Some(fills),
            Self::Group { .. } | Self::Slice { .. } => None,
        }
    }

    /// Mutable fills, for kinds that have them.
    pub fn fills_mut(&mut self) -> Option<&mut Vec<Paint>> {
        match self {
            Self::Frame { fills, .. } | Self::Shape { fills, .. } => Some(fills),
            Self::Group { .. } | Self::Slice { .. } => None,
        }
    }

    /// Children, for container kinds.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Self::Frame { children, .. } | Self::Group { children, .. } => Some(children),
            Self::Shape { .. } | Self::Slice { .. } => None,
        }
    }

    /// Mutable children, for container kinds.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Self::Frame { children, .. } | Self::Group { children, .. } => Some(children),
            Self::Shape { .. } | Self::Slice { .. } => None,
        }
    }

    /// Depth-first search for `id`, including this node.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id() == id {
            return Some(self);
        }
        self.children()?.iter().find_map(|c| c.find(id))
    }

    /// Mutable depth-first search for `id`, including this node.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Node> {
        if self.id() == id {
            return Some(self);
        }
        self.children_mut()?.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Number of nodes in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children()
            .map_or(0, |children| children.iter().map(Node::subtree_len).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_core::Rgb;

    fn sample() -> Node {
        Node::frame(
            "root",
            "Root",
            vec![Paint::solid(Rgb::WHITE)],
            vec![
                Node::group("g", "Group", vec![Node::shape("s", "Shape", vec![]), Node::slice("x", "Slice")]),
                Node::shape("s2", "Other", vec![]),
            ],
        )
    }

    #[test]
    fn test_capabilities() {
        let root = sample();
        assert!(root.fills().is_some() && root.children().is_some());

        let group = root.find("g").unwrap();
        assert!(group.fills().is_none() && group.children().is_some());

        let shape = root.find("s").unwrap();
        assert!(shape.fills().is_some() && shape.children().is_none());

        let slice = root.find("x").unwrap();
        assert!(slice.fills().is_none() && slice.children().is_none());
    }

    #[test]
    fn test_find_mut() {
        let mut root = sample();
        if let Some(fills) = root.find_mut("s").and_then(Node::fills_mut) {
            fills.push(Paint::solid(Rgb::BLACK));
        }
        assert_eq!(root.find("s").unwrap().fills().unwrap().len(), 1);
        assert!(root.find_mut("missing").is_none());
    }

    #[test]
    fn test_subtree_len() {
        assert_eq!(sample().subtree_len(), 5);
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "kind": "group", "id": "1", "name": "G",
            "children": [
                { "kind": "shape", "id": "2" },
                { "kind": "slice", "id": "3", "name": "S" }
            ]
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind(), "group");
        assert_eq!(node.children().unwrap().len(), 2);

        let shape = node.find("2").unwrap();
        assert_eq!(shape.name(), "");
        assert_eq!(shape.fills().unwrap().len(), 0);

        let back: Node = serde_json::from_str(&serde_json::to_string(&node).unwrap()).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(serde_json::from_str::<Node>(r#"{ "kind": "sticker", "id": "1" }"#).is_err());
    }
}
