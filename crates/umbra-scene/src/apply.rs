//! Recursive recolor of a node subtree.
//!
//! For each node: its fills are replaced by a new list in which every solid
//! paint has been recolored (order and other fields kept), then children are
//! visited depth-first in order.

use std::ops::AddAssign;

use tracing::trace;
use umbra_color::LuminanceInverter;

use crate::node::Node;
use crate::paint::Paint;

/// Counters from one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Nodes visited.
    pub nodes: usize,
    /// Solid fills recolored.
    pub fills: usize,
}

impl AddAssign for ApplyStats {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
        self.fills += rhs.fills;
    }
}

/// Applies a [`LuminanceInverter`] to every solid fill under a node.
///
/// # Example
///
/// ```rust
/// use umbra_color::LuminanceInverter;
/// use umbra_core::Rgb;
/// use umbra_scene::{Node, Paint, TreeApplier};
///
/// let mut node = Node::group("g", "Group", vec![
///     Node::shape("a", "A", vec![Paint::solid(Rgb::WHITE)]),
/// ]);
/// let stats = TreeApplier::new(LuminanceInverter::new()).apply(&mut node);
/// assert_eq!((stats.nodes, stats.fills), (2, 1));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeApplier {
    inverter: LuminanceInverter,
}

impl TreeApplier {
    /// Applier using `inverter`.
    pub fn new(inverter: LuminanceInverter) -> Self {
        Self { inverter }
    }

    /// Recolors `node` and all its descendants.
    pub fn apply(&self, node: &mut Node) -> ApplyStats {
        trace!(id = node.id(), kind = node.kind(), "apply::node");
        let mut stats = ApplyStats {
            nodes: 1,
            fills: 0,
        };

        if let Some(fills) = node.fills_mut() {
            stats.fills = fills.iter().filter(|p| p.is_solid()).count();
            *fills = fills
                .iter()
                .map(|p| p.recolored(&self.inverter))
                .collect::<Vec<Paint>>();
        }

        if let Some(children) = node.children_mut() {
            for child in children.iter_mut() {
                stats += self.apply(child);
            }
        }

        stats
    }
}

/// Recolors `node` and its descendants with `inverter`.
pub fn apply_to_node(node: &mut Node, inverter: &LuminanceInverter) -> ApplyStats {
    TreeApplier::new(*inverter).apply(node)
}
