//! # umbra-scene
//!
//! The layer tree the dark-mode recolor runs over, and the plugin protocol
//! that triggers it.
//!
//! - [`Paint`] - Fill descriptor; only [`Paint::Solid`] carries a color
//! - [`Node`] - Typed layer kinds: frame, group, shape, slice
//! - [`TreeApplier`] - Depth-first recolor of every solid fill under a node
//! - [`Document`] - JSON scene with a current selection
//! - [`handle_message`], [`Host`] - The `apply-dark-mode` message flow
//!
//! # Node Kinds
//!
//! | Kind | Fills | Children |
//! |------|-------|----------|
//! | `frame` | yes | yes |
//! | `group` | no | yes |
//! | `shape` | yes | no |
//! | `slice` | no | no |
//!
//! # Example
//!
//! ```rust
//! use umbra_color::LuminanceInverter;
//! use umbra_core::Rgb;
//! use umbra_scene::{Document, DocumentHost, Outcome, PluginMessage, handle_message};
//!
//! let doc = Document::from_json(r#"{
//!     "name": "Card",
//!     "children": [
//!         { "kind": "shape", "id": "1", "name": "bg",
//!           "fills": [{ "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0 } }] }
//!     ],
//!     "selection": ["1"]
//! }"#).unwrap();
//!
//! let mut host = DocumentHost::new(doc);
//! let outcome = handle_message(&mut host, &PluginMessage::ApplyDarkMode, &LuminanceInverter::new()).unwrap();
//! assert!(matches!(outcome, Outcome::Applied(_)));
//!
//! let fill = &host.document().find("1").unwrap().fills().unwrap()[0];
//! assert_eq!(fill.color(), Some(Rgb::WHITE));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod apply;
pub mod document;
mod error;
pub mod node;
pub mod paint;
pub mod protocol;

pub use apply::{apply_to_node, ApplyStats, TreeApplier};
pub use document::Document;
pub use error::{SceneError, SceneResult};
pub use node::Node;
pub use paint::{Paint, SolidColor, SolidPaint};
pub use protocol::{handle_message, DocumentHost, Host, Outcome, PluginMessage};
