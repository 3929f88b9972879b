use odontokit_core::Color;
use odontokit_odontogram::{
    Cursor, OverlayKind, Point, PointerInput, Primitive, Projection, RegionId, ToolId,
};

use crate::support::ready_session;

#[test]
fn test_scene_carries_fills_and_transform() {
    let mut session = ready_session();
    session.tools_mut().select(ToolId::Caries);
    session.click(PointerInput::region(95.0, 25.0, RegionId::new(3)));
    session.viewport_mut().set_zoom(2.0);
    session.viewport_mut().set_pan(5.0, -5.0);

    let projection = session.project();
    let scene = projection.scene().unwrap();

    assert_eq!(scene.regions.len(), 5);
    assert_eq!(
        scene.region(RegionId::new(3)).unwrap().fill,
        Some(Color::parse("#D32F2F").unwrap())
    );
    assert_eq!(scene.region(RegionId::new(0)).unwrap().fill, None);
    assert_eq!(scene.transform.zoom, 2.0);
    assert_eq!(scene.cursor, Cursor::Crosshair);

    let svg = scene.to_svg();
    assert!(svg.contains("transform=\"translate(5 -5) scale(2)\""));
    assert!(svg.contains("fill=\"#D32F2F\""));
    assert!(svg.contains("data-region=\"region_3\""));
    assert!(svg.contains("stroke-width=\"10\""));
}

#[test]
fn test_overlays_of_other_views_are_hidden() {
    let mut session = ready_session();
    session.tools_mut().select(ToolId::Arrow);
    session.click(PointerInput::canvas(40.0, 40.0));
    session.go_next();
    session.click(PointerInput::canvas(60.0, 60.0));

    let projection = session.project();
    let scene = projection.scene().unwrap();
    assert_eq!(scene.overlays.len(), 1);
    assert_eq!(scene.overlays[0].kind, OverlayKind::Arrow);
    assert!(matches!(
        scene.overlays[0].primitives[0],
        Primitive::Line {
            arrowhead: true,
            ..
        }
    ));
    assert!(scene.to_svg().contains("marker-end=\"url(#arrowhead)\""));
}

#[test]
fn test_pending_stroke_is_rendered_translated() {
    let mut session = ready_session();
    session.tools_mut().select(ToolId::Freehand);
    session.pointer_down(PointerInput::canvas(10.0, 20.0));
    session.pointer_move(Point::new(15.0, 25.0));

    let projection = session.project();
    let node = &projection.scene().unwrap().overlays[0];
    assert!(node.pending);
    assert_eq!(node.transform.as_deref(), Some("translate(10 20)"));

    let svg = projection.to_svg();
    assert!(svg.contains("d=\"M 0 0 L 5 5\""));
    assert!(svg.contains("opacity=\"0.8\""));
}

#[test]
fn test_incisor_rotation_transform() {
    let mut session = ready_session();
    session.set_incisor_view_open(true);
    session.tools_mut().select(ToolId::Incisor);
    session.click(PointerInput::canvas(50.0, 50.0));
    session.tools_mut().select(ToolId::Rotate);
    session.pointer_down(PointerInput::canvas(0.0, 0.0));
    session.pointer_up(Point::new(60.0, 0.0));

    let projection = session.project();
    let node = &projection.scene().unwrap().overlays[0];
    assert_eq!(node.transform.as_deref(), Some("rotate(30 50 50)"));
}

#[test]
fn test_cursor_follows_tool_and_drag() {
    let mut session = ready_session();
    assert_eq!(session.project().scene().unwrap().cursor, Cursor::Grab);

    session.pointer_down(PointerInput::canvas(0.0, 0.0));
    assert_eq!(session.project().scene().unwrap().cursor, Cursor::Grabbing);
    session.pointer_up(Point::new(0.0, 0.0));

    session.tools_mut().select(ToolId::Move);
    assert_eq!(session.project().scene().unwrap().cursor, Cursor::Move);
    session.tools_mut().select(ToolId::Fill);
    let projection = session.project();
    let scene = projection.scene().unwrap();
    assert_eq!(scene.cursor, Cursor::Pointer);
    assert_eq!(scene.region_cursor, Some(Cursor::Pointer));

    session.tools_mut().select(ToolId::Arrow);
    assert_eq!(session.project().scene().unwrap().region_cursor, None);
}

#[test]
fn test_failed_placeholder_names_view() {
    let projection = Projection::Failed {
        view: odontokit_odontogram::DiagramView::Left,
        message: "not found".to_string(),
    };
    let svg = projection.to_svg();
    assert!(svg.contains("Could not load left view: not found"));
}
