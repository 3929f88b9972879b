//! Overlay annotations drawn on top of a diagram view.
//!
//! Each overlay variant carries its own data struct. Hosts see a flat record
//! (`{ id, type, x, y, color, viewId, rotate?, d? }`), produced through the
//! serde `into`/`try_from` conversions at the bottom of this file.

use odontokit_core::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::point::Point;
use super::view::DiagramView;

/// Flat discriminant of an overlay, used for toggle matching and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    Arrow,
    Circle,
    Line,
    Freehand,
    Incisor,
    Caries,
    Fracture,
    WolfTooth,
    Extraction,
    Missing,
    Crown,
    Implant,
    RootCanal,
    RetainedDeciduous,
    Calculus,
    Resorption,
}

impl OverlayKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OverlayKind::Arrow => "arrow",
            OverlayKind::Circle => "circle",
            OverlayKind::Line => "line",
            OverlayKind::Freehand => "freehand",
            OverlayKind::Incisor => "incisor",
            OverlayKind::Caries => "caries",
            OverlayKind::Fracture => "fracture",
            OverlayKind::WolfTooth => "wolf_tooth",
            OverlayKind::Extraction => "extraction",
            OverlayKind::Missing => "missing",
            OverlayKind::Crown => "crown",
            OverlayKind::Implant => "implant",
            OverlayKind::RootCanal => "root_canal",
            OverlayKind::RetainedDeciduous => "retained_deciduous",
            OverlayKind::Calculus => "calculus",
            OverlayKind::Resorption => "resorption",
        }
    }

    /// The fixed dental glyph for this kind, if it is one.
    pub fn glyph(self) -> Option<DentalGlyph> {
        let glyph = match self {
            OverlayKind::Caries => DentalGlyph::Caries,
            OverlayKind::Fracture => DentalGlyph::Fracture,
            OverlayKind::WolfTooth => DentalGlyph::WolfTooth,
            OverlayKind::Extraction => DentalGlyph::Extraction,
            OverlayKind::Missing => DentalGlyph::Missing,
            OverlayKind::Crown => DentalGlyph::Crown,
            OverlayKind::Implant => DentalGlyph::Implant,
            OverlayKind::RootCanal => DentalGlyph::RootCanal,
            OverlayKind::RetainedDeciduous => DentalGlyph::RetainedDeciduous,
            OverlayKind::Calculus => DentalGlyph::Calculus,
            OverlayKind::Resorption => DentalGlyph::Resorption,
            OverlayKind::Arrow
            | OverlayKind::Circle
            | OverlayKind::Line
            | OverlayKind::Freehand
            | OverlayKind::Incisor => return None,
        };
        Some(glyph)
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed small glyphs for dental findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DentalGlyph {
    Caries,
    Fracture,
    WolfTooth,
    Extraction,
    Missing,
    Crown,
    Implant,
    RootCanal,
    RetainedDeciduous,
    Calculus,
    Resorption,
}

impl DentalGlyph {
    pub fn kind(self) -> OverlayKind {
        match self {
            DentalGlyph::Caries => OverlayKind::Caries,
            DentalGlyph::Fracture => OverlayKind::Fracture,
            DentalGlyph::WolfTooth => OverlayKind::WolfTooth,
            DentalGlyph::Extraction => OverlayKind::Extraction,
            DentalGlyph::Missing => OverlayKind::Missing,
            DentalGlyph::Crown => OverlayKind::Crown,
            DentalGlyph::Implant => OverlayKind::Implant,
            DentalGlyph::RootCanal => OverlayKind::RootCanal,
            DentalGlyph::RetainedDeciduous => OverlayKind::RetainedDeciduous,
            DentalGlyph::Calculus => OverlayKind::Calculus,
            DentalGlyph::Resorption => OverlayKind::Resorption,
        }
    }
}

/// Arrow pointing at its anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowMark {
    pub at: Point,
}

/// Outline circle centred on its anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMark {
    pub at: Point,
}

/// Short horizontal stroke centred on its anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMark {
    pub at: Point,
}

/// A freehand stroke. Path data is relative to `origin`, so moving the stroke
/// only changes the origin.
#[derive(Debug, Clone)]
pub struct FreehandStroke {
    pub origin: Point,
    pub d: String,
    last: Point,
}

impl FreehandStroke {
    /// Starts a stroke at `origin` with path data `M 0 0`.
    pub fn begin(origin: Point) -> Self {
        Self {
            origin,
            d: "M 0 0".to_string(),
            last: origin,
        }
    }

    /// Rebuilds a stroke from stored path data.
    pub fn from_path(origin: Point, d: impl Into<String>) -> Self {
        Self {
            origin,
            d: d.into(),
            last: origin,
        }
    }

    /// Appends a line segment to `to`, in local coordinates. Points closer than
    /// `min_segment` to the previous recorded point are skipped.
    pub fn extend_to(&mut self, to: Point, min_segment: f64) -> bool {
        if min_segment > 0.0 && to.distance(&self.last) < min_segment {
            return false;
        }
        let rel = to - self.origin;
        self.d.push_str(&format!(" L {} {}", fmt_coord(rel.x), fmt_coord(rel.y)));
        self.last = to;
        true
    }

    /// Number of path commands recorded.
    pub fn segment_count(&self) -> usize {
        self.d.matches(" L ").count()
    }
}

impl PartialEq for FreehandStroke {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.d == other.d
    }
}

/// Incisor marker, rotatable around its anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct IncisorMark {
    pub at: Point,
    pub rotate: f64,
}

/// One of the fixed dental glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct DentalMark {
    pub glyph: DentalGlyph,
    pub at: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayShape {
    Arrow(ArrowMark),
    Circle(CircleMark),
    Line(LineMark),
    Freehand(FreehandStroke),
    Incisor(IncisorMark),
    Dental(DentalMark),
}

impl OverlayShape {
    /// A point marker of `kind` anchored at `at`. Freehand strokes are built
    /// with [`FreehandStroke::begin`] instead.
    pub fn marker(kind: OverlayKind, at: Point) -> Self {
        match kind {
            OverlayKind::Arrow => OverlayShape::Arrow(ArrowMark { at }),
            OverlayKind::Circle => OverlayShape::Circle(CircleMark { at }),
            OverlayKind::Line => OverlayShape::Line(LineMark { at }),
            OverlayKind::Freehand => OverlayShape::Freehand(FreehandStroke::begin(at)),
            OverlayKind::Incisor => OverlayShape::Incisor(IncisorMark { at, rotate: 0.0 }),
            other => match other.glyph() {
                Some(glyph) => OverlayShape::Dental(DentalMark { glyph, at }),
                None => OverlayShape::Arrow(ArrowMark { at }),
            },
        }
    }

    pub fn kind(&self) -> OverlayKind {
        match self {
            OverlayShape::Arrow(_) => OverlayKind::Arrow,
            OverlayShape::Circle(_) => OverlayKind::Circle,
            OverlayShape::Line(_) => OverlayKind::Line,
            OverlayShape::Freehand(_) => OverlayKind::Freehand,
            OverlayShape::Incisor(_) => OverlayKind::Incisor,
            OverlayShape::Dental(mark) => mark.glyph.kind(),
        }
    }
}

/// A placed annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "OverlayRecord", try_from = "OverlayRecord")]
pub struct Overlay {
    pub id: u64,
    pub view: DiagramView,
    pub color: Color,
    pub shape: OverlayShape,
}

impl Overlay {
    pub fn new(id: u64, view: DiagramView, color: Color, shape: OverlayShape) -> Self {
        Self {
            id,
            view,
            color,
            shape,
        }
    }

    pub fn kind(&self) -> OverlayKind {
        self.shape.kind()
    }

    /// Anchor position; the origin for freehand strokes.
    pub fn position(&self) -> Point {
        match &self.shape {
            OverlayShape::Arrow(mark) => mark.at,
            OverlayShape::Circle(mark) => mark.at,
            OverlayShape::Line(mark) => mark.at,
            OverlayShape::Freehand(stroke) => stroke.origin,
            OverlayShape::Incisor(mark) => mark.at,
            OverlayShape::Dental(mark) => mark.at,
        }
    }

    pub fn set_position(&mut self, to: Point) {
        match &mut self.shape {
            OverlayShape::Arrow(mark) => mark.at = to,
            OverlayShape::Circle(mark) => mark.at = to,
            OverlayShape::Line(mark) => mark.at = to,
            OverlayShape::Freehand(stroke) => stroke.origin = to,
            OverlayShape::Incisor(mark) => mark.at = to,
            OverlayShape::Dental(mark) => mark.at = to,
        }
    }

    /// Rotation in degrees; only incisor markers rotate.
    pub fn rotation(&self) -> Option<f64> {
        match &self.shape {
            OverlayShape::Incisor(mark) => Some(mark.rotate),
            _ => None,
        }
    }

    /// Sets the rotation. Returns false for overlays that do not rotate.
    pub fn set_rotation(&mut self, degrees: f64) -> bool {
        match &mut self.shape {
            OverlayShape::Incisor(mark) => {
                mark.rotate = degrees;
                true
            }
            _ => false,
        }
    }

    pub fn path_data(&self) -> Option<&str> {
        match &self.shape {
            OverlayShape::Freehand(stroke) => Some(&stroke.d),
            _ => None,
        }
    }
}

/// Flat wire form of an [`Overlay`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverlayRecord {
    id: u64,
    #[serde(rename = "type")]
    kind: OverlayKind,
    x: f64,
    y: f64,
    color: Color,
    view_id: DiagramView,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rotate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    d: Option<String>,
}

impl From<Overlay> for OverlayRecord {
    fn from(overlay: Overlay) -> Self {
        let at = overlay.position();
        let kind = overlay.kind();
        let rotate = overlay.rotation();
        let d = match overlay.shape {
            OverlayShape::Freehand(stroke) => Some(stroke.d),
            _ => None,
        };
        Self {
            id: overlay.id,
            kind,
            x: at.x,
            y: at.y,
            color: overlay.color,
            view_id: overlay.view,
            rotate,
            d,
        }
    }
}

impl TryFrom<OverlayRecord> for Overlay {
    type Error = String;

    fn try_from(record: OverlayRecord) -> Result<Self, Self::Error> {
        let at = Point::new(record.x, record.y);
        if !at.is_finite() {
            return Err(format!("overlay {} has a non-finite position", record.id));
        }
        let shape = match record.kind {
            OverlayKind::Freehand => {
                let d = record
                    .d
                    .ok_or_else(|| format!("freehand overlay {} has no path data", record.id))?;
                OverlayShape::Freehand(FreehandStroke::from_path(at, d))
            }
            OverlayKind::Incisor => OverlayShape::Incisor(IncisorMark {
                at,
                rotate: record.rotate.unwrap_or(0.0),
            }),
            kind => OverlayShape::marker(kind, at),
        };
        Ok(Overlay::new(record.id, record.view_id, record.color, shape))
    }
}

fn fmt_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}
