use odontokit_odontogram::{
    EditorSession, MarkerToggle, OverlayKind, Point, PointerInput, ToolId,
};

use crate::support::{config, ready_session};

fn drag(session: &mut EditorSession, from: PointerInput, to: Point) {
    session.pointer_down(from);
    session.pointer_move(to);
    session.pointer_up(to);
}

fn place(session: &mut EditorSession, tool: ToolId, x: f64, y: f64) -> u64 {
    session.tools_mut().select(tool);
    let color = session.tools().color_of(tool);
    let kind = tool.marker_kind().unwrap();
    match session.toggle_marker(kind, Point::new(x, y), color) {
        MarkerToggle::Added(id) => id,
        MarkerToggle::Removed(id) => panic!("marker {} was removed instead of placed", id),
    }
}

#[test]
fn test_drag_without_tool_pans() {
    let mut session = ready_session();
    drag(&mut session, PointerInput::canvas(10.0, 10.0), Point::new(30.0, 15.0));

    assert_eq!(session.viewport().pan_x(), 20.0);
    assert_eq!(session.viewport().pan_y(), 5.0);
    assert!(!session.can_undo());
    assert!(!session.is_dragging());
}

#[test]
fn test_freehand_stroke_is_relative_to_press_point() {
    let mut session = ready_session();
    session.tools_mut().select(ToolId::Freehand);

    session.pointer_down(PointerInput::canvas(10.0, 10.0));
    session.pointer_move(Point::new(20.0, 15.0));
    assert!(session.pending_stroke().is_some());
    assert!(session.overlays().is_empty());
    session.pointer_move(Point::new(30.0, 20.0));
    session.pointer_up(Point::new(30.0, 20.0));

    assert!(session.pending_stroke().is_none());
    let stroke = session.overlays().iter().next().unwrap();
    assert_eq!(stroke.kind(), OverlayKind::Freehand);
    assert_eq!(stroke.position(), Point::new(10.0, 10.0));
    assert_eq!(stroke.path_data(), Some("M 0 0 L 10 5 L 20 10"));

    assert!(session.undo());
    assert!(session.overlays().is_empty());
}

#[test]
fn test_freehand_press_without_movement_leaves_nothing() {
    let mut session = ready_session();
    session.tools_mut().select(ToolId::Freehand);

    session.pointer_down(PointerInput::canvas(10.0, 10.0));
    session.pointer_up(Point::new(10.0, 10.0));

    assert!(session.overlays().is_empty());
    assert!(!session.can_undo());
}

#[test]
fn test_leaving_window_commits_stroke() {
    let mut session = ready_session();
    session.tools_mut().select(ToolId::Freehand);
    session.pointer_down(PointerInput::canvas(10.0, 10.0));
    session.pointer_move(Point::new(50.0, 50.0));

    session.pointer_leave_window();

    assert!(!session.is_dragging());
    assert_eq!(session.overlays().len(), 1);
    assert_eq!(session.history_depth(), 1);
}

#[test]
fn test_new_press_finishes_stale_drag() {
    let mut session = ready_session();
    session.tools_mut().select(ToolId::Freehand);
    session.pointer_down(PointerInput::canvas(10.0, 10.0));
    session.pointer_move(Point::new(50.0, 50.0));

    // Release was lost; the next press commits the first stroke.
    session.pointer_down(PointerInput::canvas(100.0, 50.0));
    session.pointer_move(Point::new(120.0, 60.0));
    session.pointer_up(Point::new(120.0, 60.0));

    assert_eq!(session.overlays().len(), 2);
    assert_eq!(session.history_depth(), 2);
}

#[test]
fn test_move_tool_drags_marker_and_undo_returns_it() {
    let mut session = ready_session();
    let id = place(&mut session, ToolId::Circle, 40.0, 40.0);

    session.tools_mut().select(ToolId::Move);
    drag(&mut session, PointerInput::overlay(42.0, 41.0, id), Point::new(62.0, 51.0));

    assert_eq!(session.overlays().get(id).unwrap().position(), Point::new(60.0, 50.0));
    assert_eq!(session.history_depth(), 2);

    session.undo();
    assert_eq!(session.overlays().get(id).unwrap().position(), Point::new(40.0, 40.0));
}

#[test]
fn test_move_is_scaled_by_zoom() {
    let mut session = ready_session();
    let id = place(&mut session, ToolId::Circle, 40.0, 40.0);
    session.viewport_mut().set_zoom(2.0);

    session.tools_mut().select(ToolId::Move);
    drag(&mut session, PointerInput::overlay(80.0, 80.0, id), Point::new(100.0, 80.0));

    assert_eq!(session.overlays().get(id).unwrap().position(), Point::new(50.0, 40.0));
}

#[test]
fn test_move_press_off_overlay_does_nothing() {
    let mut session = ready_session();
    place(&mut session, ToolId::Circle, 40.0, 40.0);

    session.tools_mut().select(ToolId::Move);
    drag(&mut session, PointerInput::canvas(150.0, 80.0), Point::new(170.0, 90.0));

    assert_eq!(session.history_depth(), 1);
    assert_eq!(session.viewport().pan_x(), 0.0);
}

#[test]
fn test_move_without_movement_records_nothing() {
    let mut session = ready_session();
    let id = place(&mut session, ToolId::Circle, 40.0, 40.0);

    session.tools_mut().select(ToolId::Move);
    session.pointer_down(PointerInput::overlay(40.0, 40.0, id));
    session.pointer_up(Point::new(40.0, 40.0));

    assert_eq!(session.history_depth(), 1);
}

#[test]
fn test_rotate_turns_latest_incisor() {
    let mut session = ready_session();
    session.set_incisor_view_open(true);
    let first = place(&mut session, ToolId::Incisor, 50.0, 50.0);
    let latest = place(&mut session, ToolId::Incisor, 120.0, 50.0);

    session.tools_mut().select(ToolId::Rotate);
    drag(&mut session, PointerInput::canvas(10.0, 10.0), Point::new(30.0, 90.0));

    assert_eq!(session.overlays().get(latest).unwrap().rotation(), Some(10.0));
    assert_eq!(session.overlays().get(first).unwrap().rotation(), Some(0.0));

    session.undo();
    assert_eq!(session.overlays().get(latest).unwrap().rotation(), Some(0.0));
}

#[test]
fn test_rotate_without_incisor_is_noop() {
    let mut session = ready_session();
    session.set_incisor_view_open(true);
    session.tools_mut().select(ToolId::Rotate);

    drag(&mut session, PointerInput::canvas(10.0, 10.0), Point::new(30.0, 10.0));

    assert!(!session.can_undo());
    assert_eq!(session.viewport().pan_x(), 0.0);
}

#[test]
fn test_pointer_input_ignored_until_loaded() {
    let mut session = EditorSession::new(&config());
    session.tools_mut().select(ToolId::Freehand);

    session.pointer_down(PointerInput::canvas(10.0, 10.0));
    session.pointer_move(Point::new(40.0, 40.0));
    session.pointer_up(Point::new(40.0, 40.0));

    assert!(!session.is_interactive());
    assert!(session.overlays().is_empty());
}

#[test]
fn test_wheel_zooms_before_load() {
    let mut session = EditorSession::new(&config());
    assert!(!session.is_interactive());

    session.wheel(-1.0);
    assert!((session.viewport().zoom() - 1.1).abs() < 1e-9);
    for _ in 0..40 {
        session.wheel(-1.0);
    }
    assert_eq!(session.viewport().zoom(), 3.0);
}

#[test]
fn test_wheel_zooms_loaded_view() {
    let mut session = ready_session();
    session.wheel(-3.0);
    assert!((session.viewport().zoom() - 1.1).abs() < 1e-9);
}
