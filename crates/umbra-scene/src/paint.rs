//! Paint descriptors.
//!
//! Only `"type": "SOLID"` paints carry a color the recolor touches. Every
//! other paint type (gradients, images, video, ...) is kept as raw JSON and
//! written back unchanged, and so are the extra fields of solid paints such
//! as `opacity`, `visible` or `blendMode`. Keys inside `color` other than
//! `r`, `g` and `b` (an `a` channel, say) are carried along untouched too.
//!
//! ```json
//! { "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0 }, "opacity": 0.5 }
//! { "type": "GRADIENT_LINEAR", "gradientStops": [ ... ] }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use umbra_color::LuminanceInverter;
use umbra_core::Rgb;

/// A fill descriptor attached to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paint {
    /// Flat single-color fill.
    Solid(SolidPaint),
    /// Any other paint, passed through verbatim.
    Other(Map<String, Value>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum SolidTag {
    #[serde(rename = "SOLID")]
    Solid,
}

/// The `color` object of a solid paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidColor {
    /// The `r`, `g`, `b` channels.
    #[serde(flatten)]
    pub rgb: Rgb,
    /// Any other keys, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Rgb> for SolidColor {
    fn from(rgb: Rgb) -> Self {
        Self {
            rgb,
            extra: Map::new(),
        }
    }
}

/// A solid paint: a color plus whatever other fields the host attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidPaint {
    #[serde(rename = "type")]
    tag: SolidTag,
    /// Fill color.
    pub color: SolidColor,
    /// Remaining fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SolidPaint {
    /// Solid paint with no extra fields.
    pub fn new(color: Rgb) -> Self {
        Self {
            tag: SolidTag::Solid,
            color: color.into(),
            extra: Map::new(),
        }
    }

    /// Adds an extra field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl Paint {
    /// Solid paint of `color`.
    pub fn solid(color: Rgb) -> Self {
        Self::Solid(SolidPaint::new(color))
    }

    /// True for solid paints.
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid(_))
    }

    /// The `type` discriminator, e.g. `SOLID` or `IMAGE`.
    pub fn paint_type(&self) -> Option<&str> {
        match self {
            Self::Solid(_) => Some("SOLID"),
            Self::Other(map) => map.get("type").and_then(Value::as_str),
        }
    }

    /// Color of a solid paint.
    pub fn color(&self) -> Option<Rgb> {
        match self {
            Self::Solid(p) => Some(p.color.rgb),
            Self::Other(_) => None,
        }
    }

    /// Returns this paint with its color recolored; non-solid paints are cloned unchanged.
    pub fn recolored(&self, inverter: &LuminanceInverter) -> Self {
        match self {
            Self::Solid(p) => Self::Solid(SolidPaint {
                color: SolidColor {
                    rgb: inverter.transform(p.color.rgb),
                    extra: p.color.extra.clone(),
                },
                tag: p.tag,
                extra: p.extra.clone(),
            }),
            Self::Other(_) => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_solid_keeps_extra_fields() {
        let paint: Paint = serde_json::from_value(json!({
            "type": "SOLID",
            "color": { "r": 1.0, "g": 0.0, "b": 0.0 },
            "opacity": 0.5,
            "visible": true
        }))
        .unwrap();

        let Paint::Solid(solid) = &paint else {
            panic!("expected solid paint, got {paint:?}");
        };
        assert_eq!(solid.color.rgb, Rgb::new(1.0, 0.0, 0.0));
        assert!(solid.color.extra.is_empty());
        assert_eq!(solid.extra.get("opacity"), Some(&json!(0.5)));
        assert_eq!(solid.extra.get("visible"), Some(&json!(true)));
        assert!(!solid.extra.contains_key("type"));
        assert!(!solid.extra.contains_key("color"));
    }

    #[test]
    fn test_parse_other() {
        let raw = json!({ "type": "GRADIENT_LINEAR", "gradientStops": [] });
        let paint: Paint = serde_json::from_value(raw.clone()).unwrap();
        assert!(!paint.is_solid());
        assert_eq!(paint.paint_type(), Some("GRADIENT_LINEAR"));
        assert_eq!(serde_json::to_value(&paint).unwrap(), raw);
    }

    #[test]
    fn test_solid_serializes_with_type() {
        let paint = Paint::Solid(SolidPaint::new(Rgb::new(0.0, 0.5, 1.0)).with_field("opacity", 1.0));
        let value = serde_json::to_value(&paint).unwrap();
        assert_eq!(
            value,
            json!({ "type": "SOLID", "color": { "r": 0.0, "g": 0.5, "b": 1.0 }, "opacity": 1.0 })
        );
    }

    #[test]
    fn test_recolored() {
        let inv = LuminanceInverter::new();
        let paint = Paint::Solid(SolidPaint::new(Rgb::BLACK).with_field("blendMode", "NORMAL"));
        let out = paint.recolored(&inv);

        assert_eq!(out.color(), Some(Rgb::WHITE));
        let Paint::Solid(solid) = out else { unreachable!() };
        assert_eq!(solid.extra.get("blendMode"), Some(&json!("NORMAL")));

        let image = Paint::Other(Map::from_iter([("type".to_string(), json!("IMAGE"))]));
        assert_eq!(image.recolored(&inv), image);
    }

    #[test]
    fn test_recolored_keeps_extra_color_keys() {
        let paint: Paint = serde_json::from_value(json!({
            "type": "SOLID",
            "color": { "r": 1, "g": 1, "b": 1, "a": 0.5 },
            "opacity": 0.8
        }))
        .unwrap();
        assert_eq!(paint.color(), Some(Rgb::WHITE));

        let out = paint.recolored(&LuminanceInverter::new());
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!({ "type": "SOLID", "color": { "r": 0.0, "g": 0.0, "b": 0.0, "a": 0.5 }, "opacity": 0.8 })
        );
    }
}
