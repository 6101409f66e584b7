//! Scene documents.
//!
//! A document is the JSON export of a page: its top-level layers plus the
//! ids the user had selected.
//!
//! ```json
//! {
//!   "name": "Landing page",
//!   "children": [ { "kind": "frame", "id": "1:2", "name": "Hero", "fills": [], "children": [] } ],
//!   "selection": ["1:2"]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::node::Node;
use crate::SceneResult;

/// A page of layers and its current selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Page name.
    #[serde(default)]
    pub name: String,
    /// Top-level layers.
    #[serde(default)]
    pub children: Vec<Node>,
    /// Selected node ids, in selection order.
    #[serde(default)]
    pub selection: Vec<String>,
}

impl Document {
    /// Empty document.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a top-level layer.
    pub fn with_child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Replaces the selection.
    pub fn with_selection<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Parses a document from JSON.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a document file.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading document");
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Writes the document as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> SceneResult<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Saving document");
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Depth-first search over all layers.
    pub fn find(&self, id: &str) -> Option<&Node> {
        self.children.iter().find_map(|n| n.find(id))
    }

    /// Mutable depth-first search over all layers.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.children.iter_mut().find_map(|n| n.find_mut(id))
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.children.iter().map(Node::subtree_len).sum()
    }
}
