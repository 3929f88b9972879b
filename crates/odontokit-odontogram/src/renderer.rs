//! Scene projection and SVG output.
//!
//! `EditorSession::project` turns the current state into a [`Projection`]: a
//! placeholder while the active view is loading or failed, otherwise a
//! [`Scene`] of plain values. `to_svg` serialises either to markup.
//!
//! Features:
//! - Regions drawn twice: the visible fill and a wide transparent hit area
//! - One glyph per overlay kind, in diagram-local coordinates
//! - Arrowhead marker always defined, alongside the diagram's own `<defs>`

use odontokit_core::Color;
use quick_xml::escape::escape;
use std::fmt::Write;

use crate::diagram::Diagram;
use crate::editor_state::EditorSession;
use crate::model::{DiagramView, Overlay, OverlayKind, OverlayShape, Point, RegionId, ToolBehavior};
use crate::navigator::LoadState;
use crate::viewport::{PanZoom, ViewBox};

const ARROWHEAD_ID: &str = "arrowhead";
const REGION_STROKE: &str = "#000000";
const REGION_BLANK: &str = "#FFFFFF";

/// Pointer cursor for the diagram surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    Grabbing,
    Crosshair,
    Move,
    Pointer,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
            Cursor::Crosshair => "crosshair",
            Cursor::Move => "move",
            Cursor::Pointer => "pointer",
        }
    }
}

/// A drawing primitive in diagram-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
        width: f64,
        arrowhead: bool,
    },
    Circle {
        center: Point,
        r: f64,
        filled: bool,
    },
    Path {
        d: String,
    },
    Polygon {
        points: Vec<Point>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Text {
        at: Point,
        text: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionNode {
    pub id: RegionId,
    pub d: String,
    pub fill: Option<Color>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayNode {
    pub id: u64,
    pub kind: OverlayKind,
    pub color: Color,
    pub primitives: Vec<Primitive>,
    pub transform: Option<String>,
    /// A freehand stroke still being drawn.
    pub pending: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub view: DiagramView,
    pub view_box: ViewBox,
    pub transform: PanZoom,
    pub regions: Vec<RegionNode>,
    pub overlays: Vec<OverlayNode>,
    pub cursor: Cursor,
    /// Cursor over region hit areas; set only when a click on a region paints or erases.
    pub region_cursor: Option<Cursor>,
    pub defs: Option<String>,
    pub hit_stroke_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Loading { view: DiagramView },
    Failed { view: DiagramView, message: String },
    Ready(Scene),
}

impl Projection {
    pub fn scene(&self) -> Option<&Scene> {
        match self {
            Projection::Ready(scene) => Some(scene),
            _ => None,
        }
    }

    pub fn to_svg(&self) -> String {
        match self {
            Projection::Ready(scene) => scene.to_svg(),
            Projection::Loading { view } => placeholder(&format!("Loading {} view…", view)),
            Projection::Failed { view, message } => {
                placeholder(&format!("Could not load {} view: {}", view, message))
            }
        }
    }
}

fn placeholder(text: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 400 100\"><text x=\"200\" y=\"50\" text-anchor=\"middle\">{}</text></svg>",
        escape(text)
    )
}

impl EditorSession {
    /// Projects the current state for rendering.
    pub fn project(&self) -> Projection {
        let view = self.active_view();
        let diagram = match self.navigator().active_state() {
            LoadState::Ready(diagram) => diagram,
            LoadState::Failed(message) => {
                return Projection::Failed {
                    view,
                    message: message.clone(),
                }
            }
            LoadState::Idle | LoadState::Loading => {
                return Projection::Loading { view }
            }
        };

        let overlays = self
            .overlays()
            .in_view(view)
            .map(|overlay| overlay_node(overlay, false))
            .chain(
                self.pending_stroke()
                    .filter(|stroke| stroke.view == view)
                    .map(|stroke| overlay_node(stroke, true)),
            )
            .collect();

        Projection::Ready(Scene {
            view,
            view_box: diagram.view_box,
            transform: self.viewport().pan_zoom(),
            regions: region_nodes(self, diagram, view),
            overlays,
            cursor: self.cursor(),
            region_cursor: self.region_cursor(),
            defs: diagram.defs.clone(),
            hit_stroke_width: self.config().hit_area_stroke_width,
        })
    }

    fn region_cursor(&self) -> Option<Cursor> {
        let tool = self.tools().active()?;
        (tool.paints_regions() || tool.behavior() == ToolBehavior::Eraser).then_some(Cursor::Pointer)
    }

    fn cursor(&self) -> Cursor {
        match self.tools().active().map(|tool| tool.behavior()) {
            None if self.is_dragging() => Cursor::Grabbing,
            None => Cursor::Grab,
            Some(ToolBehavior::Move) => Cursor::Move,
            Some(ToolBehavior::Fill) | Some(ToolBehavior::Eraser) => Cursor::Pointer,
            Some(_) => Cursor::Crosshair,
        }
    }
}

fn region_nodes(session: &EditorSession, diagram: &Diagram, view: DiagramView) -> Vec<RegionNode> {
    diagram
        .regions
        .iter()
        .map(|region| RegionNode {
            id: region.id,
            d: region.d.clone(),
            fill: session
                .paint_map()
                .get(view, region.id)
                .map(|entry| entry.color.clone()),
        })
        .collect()
}

fn overlay_node(overlay: &Overlay, pending: bool) -> OverlayNode {
    let at = overlay.position();
    let (primitives, transform) = match &overlay.shape {
        OverlayShape::Freehand(stroke) => (
            vec![Primitive::Path {
                d: stroke.d.clone(),
            }],
            Some(format!("translate({} {})", at.x, at.y)),
        ),
        OverlayShape::Incisor(mark) => (
            vec![Primitive::Polygon {
                points: offsets(
                    at,
                    &[(-4.0, -10.0), (4.0, -10.0), (5.0, 8.0), (0.0, 12.0), (-5.0, 8.0)],
                ),
            }],
            Some(format!("rotate({} {} {})", mark.rotate, at.x, at.y)),
        ),
        _ => (glyph(overlay.kind(), at), None),
    };

    OverlayNode {
        id: overlay.id,
        kind: overlay.kind(),
        color: overlay.color.clone(),
        primitives,
        transform,
        pending,
    }
}

fn offsets(at: Point, points: &[(f64, f64)]) -> Vec<Point> {
    points
        .iter()
        .map(|(dx, dy)| Point::new(at.x + dx, at.y + dy))
        .collect()
}

fn line(at: Point, from: (f64, f64), to: (f64, f64), width: f64) -> Primitive {
    Primitive::Line {
        from: Point::new(at.x + from.0, at.y + from.1),
        to: Point::new(at.x + to.0, at.y + to.1),
        width,
        arrowhead: false,
    }
}

/// Fixed glyph for point markers.
fn glyph(kind: OverlayKind, at: Point) -> Vec<Primitive> {
    match kind {
        OverlayKind::Arrow => vec![Primitive::Line {
            from: Point::new(at.x - 15.0, at.y - 15.0),
            to: at,
            width: 2.0,
            arrowhead: true,
        }],
        OverlayKind::Circle => vec![Primitive::Circle {
            center: at,
            r: 10.0,
            filled: false,
        }],
        OverlayKind::Line => vec![line(at, (-10.0, 0.0), (10.0, 0.0), 2.0)],
        OverlayKind::Caries => vec![Primitive::Circle {
            center: at,
            r: 4.0,
            filled: true,
        }],
        OverlayKind::Fracture => vec![Primitive::Path {
            d: format!(
                "M {} {} L {} {} L {} {} L {} {}",
                at.x - 6.0,
                at.y - 6.0,
                at.x - 1.0,
                at.y - 1.0,
                at.x - 3.0,
                at.y + 1.0,
                at.x + 6.0,
                at.y + 6.0
            ),
        }],
        OverlayKind::WolfTooth => vec![Primitive::Polygon {
            points: offsets(at, &[(0.0, -7.0), (6.0, 5.0), (-6.0, 5.0)]),
        }],
        OverlayKind::Extraction => vec![
            line(at, (-6.0, -6.0), (6.0, 6.0), 2.0),
            line(at, (-6.0, 6.0), (6.0, -6.0), 2.0),
        ],
        OverlayKind::Missing => vec![Primitive::Text { at, text: "M" }],
        OverlayKind::Crown => vec![Primitive::Rect {
            x: at.x - 6.0,
            y: at.y - 4.0,
            width: 12.0,
            height: 8.0,
        }],
        OverlayKind::Implant => vec![
            Primitive::Rect {
                x: at.x - 2.0,
                y: at.y - 8.0,
                width: 4.0,
                height: 16.0,
            },
            line(at, (-5.0, -8.0), (5.0, -8.0), 2.0),
        ],
        OverlayKind::RootCanal => vec![line(at, (0.0, -10.0), (0.0, 10.0), 3.0)],
        OverlayKind::RetainedDeciduous => vec![Primitive::Text { at, text: "D" }],
        OverlayKind::Calculus => vec![Primitive::Polygon {
            points: offsets(at, &[(0.0, -6.0), (6.0, 0.0), (0.0, 6.0), (-6.0, 0.0)]),
        }],
        OverlayKind::Resorption => vec![Primitive::Text { at, text: "R" }],
        // Shapes with their own geometry are built in `overlay_node`.
        OverlayKind::Freehand | OverlayKind::Incisor => Vec::new(),
    }
}

impl Scene {
    /// Serialises the scene to standalone SVG markup.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{}\" preserveAspectRatio=\"xMidYMid meet\" style=\"cursor:{}\">",
            self.view_box,
            self.cursor.as_css()
        );

        out.push_str("<defs>");
        if let Some(defs) = &self.defs {
            out.push_str(defs);
        }
        if !self.has_arrowhead() {
            let _ = write!(
                out,
                "<marker id=\"{}\" markerWidth=\"10\" markerHeight=\"7\" refX=\"10\" refY=\"3.5\" orient=\"auto\"><polygon points=\"0 0, 10 3.5, 0 7\" fill=\"context-stroke\"/></marker>",
                ARROWHEAD_ID
            );
        }
        out.push_str("</defs>");

        let _ = write!(
            out,
            "<g id=\"{}-view\" transform=\"{}\">",
            self.view,
            self.transform.transform_attr()
        );

        out.push_str("<g class=\"regions\">");
        let hit_cursor = self
            .region_cursor
            .map(|cursor| format!(" cursor=\"{}\"", cursor.as_css()))
            .unwrap_or_default();
        for region in &self.regions {
            let d = escape(region.d.as_str());
            let fill = region.fill.as_ref().map(|c| c.as_str());
            let _ = write!(
                out,
                "<path data-region=\"{}\" d=\"{}\" fill=\"{}\" stroke=\"transparent\" stroke-width=\"{}\" pointer-events=\"all\"{}/>",
                region.id,
                d,
                fill.unwrap_or("transparent"),
                self.hit_stroke_width,
                hit_cursor
            );
            let _ = write!(
                out,
                "<path id=\"{}\" d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\" pointer-events=\"none\"/>",
                region.id,
                d,
                fill.unwrap_or(REGION_BLANK),
                REGION_STROKE
            );
        }
        out.push_str("</g>");

        out.push_str("<g class=\"overlays\">");
        for node in &self.overlays {
            let _ = write!(
                out,
                "<g data-overlay=\"{}\" data-kind=\"{}\"",
                node.id, node.kind
            );
            if let Some(transform) = &node.transform {
                let _ = write!(out, " transform=\"{}\"", transform);
            }
            if node.pending {
                out.push_str(" opacity=\"0.8\"");
            }
            out.push('>');
            for primitive in &node.primitives {
                write_primitive(&mut out, primitive, node.color.as_str());
            }
            out.push_str("</g>");
        }
        out.push_str("</g>");

        out.push_str("</g></svg>");
        out
    }

    fn has_arrowhead(&self) -> bool {
        self.defs
            .as_deref()
            .is_some_and(|defs| defs.contains(&format!("id=\"{}\"", ARROWHEAD_ID)))
    }

    pub fn overlay(&self, id: u64) -> Option<&OverlayNode> {
        self.overlays.iter().find(|node| node.id == id)
    }

    pub fn region(&self, id: RegionId) -> Option<&RegionNode> {
        self.regions.iter().find(|node| node.id == id)
    }
}

fn write_primitive(out: &mut String, primitive: &Primitive, color: &str) {
    let _ = match primitive {
        Primitive::Line {
            from,
            to,
            width,
            arrowhead,
        } => {
            let marker = if *arrowhead {
                format!(" marker-end=\"url(#{})\"", ARROWHEAD_ID)
            } else {
                String::new()
            };
            write!(
                out,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
                from.x, from.y, to.x, to.y, color, width, marker
            )
        }
        Primitive::Circle { center, r, filled } => {
            let fill = if *filled { color } else { "none" };
            write!(
                out,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>",
                center.x, center.y, r, fill, color
            )
        }
        Primitive::Path { d } => write!(
            out,
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
            escape(d.as_str()),
            color
        ),
        Primitive::Polygon { points } => {
            let list = points
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            write!(
                out,
                "<polygon points=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
                list, color, color
            )
        }
        Primitive::Rect {
            x,
            y,
            width,
            height,
        } => write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>",
            x, y, width, height, color
        ),
        Primitive::Text { at, text } => write!(
            out,
            "<text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"12\" font-weight=\"bold\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>",
            at.x, at.y, color, text
        ),
    };
}
