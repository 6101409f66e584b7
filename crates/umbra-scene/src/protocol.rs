//! Plugin message protocol.
//!
//! The UI panel posts `{"type": "apply-dark-mode"}`. On that message the
//! host's current selection is recolored and the user is notified; any other
//! message is ignored.
//!
//! ```text
//! apply-dark-mode ──> selection empty? ──yes──> notify "Please select..." ──> close
//!                            │
//!                            no
//!                            v
//!                  recolor each selected subtree ──> notify "...applied!" ──> close
//! ```
//!
//! The host itself (selection, notifications, lifecycle) sits behind the
//! [`Host`] trait. [`DocumentHost`] implements it over a [`Document`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use umbra_color::LuminanceInverter;

use crate::apply::{ApplyStats, TreeApplier};
use crate::document::Document;
use crate::node::Node;
use crate::{SceneError, SceneResult};

/// Notice shown after a successful recolor.
pub const APPLIED_NOTICE: &str = "Extreme contrast colors have been applied!";

/// Notice shown when nothing is selected.
pub const EMPTY_SELECTION_NOTICE: &str = "Please select a frame or layers.";

/// Message posted by the UI panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginMessage {
    /// Recolor the current selection.
    ApplyDarkMode,
    /// Anything else.
    #[serde(other)]
    Unknown,
}

impl PluginMessage {
    /// Parses a message from JSON.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result of handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The selection was recolored.
    Applied(ApplyStats),
    /// Nothing was selected; nothing was recolored.
    EmptySelection,
    /// The message was not an apply request.
    Ignored,
}

impl Outcome {
    /// Notice shown to the user for this outcome.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Applied(_) => Some(APPLIED_NOTICE),
            Self::EmptySelection => Some(EMPTY_SELECTION_NOTICE),
            Self::Ignored => None,
        }
    }
}

/// The plugin host: selection, node access, notifications and lifecycle.
pub trait Host {
    /// Ids of the selected nodes, in selection order.
    fn selection(&self) -> Vec<String>;

    /// Looks up a node by id.
    fn node_mut(&mut self, id: &str) -> Option<&mut Node>;

    /// Shows a notice to the user.
    fn notify(&mut self, message: &str);

    /// Ends the plugin session.
    fn close(&mut self);
}

/// Handles one message from the UI panel.
///
/// Every selected id is resolved before anything is recolored, so an
/// unknown id fails with [`SceneError::NodeNotFound`] and leaves the scene
/// untouched. Each selection entry is recolored independently: a node that
/// is selected twice, or sits under another selected node, is recolored once
/// per entry.
pub fn handle_message<H: Host + ?Sized>(
    host: &mut H,
    message: &PluginMessage,
    inverter: &LuminanceInverter,
) -> SceneResult<Outcome> {
    match message {
        PluginMessage::Unknown => {
            debug!("Ignoring plugin message");
            Ok(Outcome::Ignored)
        }
        PluginMessage::ApplyDarkMode => {
            let selection = host.selection();
            debug!(selected = selection.len(), "apply-dark-mode");

            let outcome = if selection.is_empty() {
                Outcome::EmptySelection
            } else {
                if let Some(missing) = selection.iter().find(|id| host.node_mut(id).is_none()) {
                    return Err(SceneError::NodeNotFound { id: missing.clone() });
                }

                let applier = TreeApplier::new(*inverter);
                let mut total = ApplyStats::default();
                for id in &selection {
                    if let Some(node) = host.node_mut(id) {
                        let stats = applier.apply(node);
                        debug!(id = %id, nodes = stats.nodes, fills = stats.fills, "Recolored selection");
                        total += stats;
                    }
                }
                Outcome::Applied(total)
            };

            if let Some(notice) = outcome.notice() {
                host.notify(notice);
            }
            host.close();
            Ok(outcome)
        }
    }
}

/// [`Host`] backed by an in-memory [`Document`].
///
/// Notices are recorded in order, and closing only sets a flag.
#[derive(Debug, Clone, Default)]
pub struct DocumentHost {
    document: Document,
    notices: Vec<String>,
    closed: bool,
}

impl DocumentHost {
    /// Host over `document`.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            notices: Vec::new(),
            closed: false,
        }
    }

    /// The hosted document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Takes back the document.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Notices shown so far.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// True once the session was closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Host for DocumentHost {
    fn selection(&self) -> Vec<String> {
        self.document.selection.clone()
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.document.find_mut(id)
    }

    fn notify(&mut self, message: &str) {
        info!("{}", message);
        self.notices.push(message.to_string());
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
