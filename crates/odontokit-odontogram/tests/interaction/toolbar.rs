use std::time::{Duration, Instant};

use odontokit_core::Color;
use odontokit_odontogram::{
    ButtonOutcome, DiagramView, IncisorMode, PointerInput, RegionId, ToolId, ToolbarAction,
};

use crate::support::ready_session;

#[test]
fn test_short_press_toggles_tool() {
    let mut session = ready_session();
    session.dispatch(ToolbarAction::SelectTool {
        tool: ToolId::Caries,
    });
    assert_eq!(session.tools().active(), Some(ToolId::Caries));

    session.dispatch(ToolbarAction::SelectTool {
        tool: ToolId::Caries,
    });
    assert_eq!(session.tools().active(), None);
}

#[test]
fn test_long_press_opens_palette_without_selecting() {
    let mut session = ready_session();
    let tools = session.tools_mut();
    let start = Instant::now();

    tools.press_button(ToolId::Fracture, start);
    assert_eq!(tools.poll_long_press(start + Duration::from_millis(100)), None);
    assert_eq!(
        tools.poll_long_press(start + Duration::from_millis(500)),
        Some(ToolId::Fracture)
    );
    assert_eq!(
        tools.release_button(ToolId::Fracture, start + Duration::from_millis(700)),
        ButtonOutcome::PaletteOpened(ToolId::Fracture)
    );
    assert_eq!(tools.active(), None);
    assert_eq!(tools.palette(), Some(ToolId::Fracture));

    let picked = Color::parse("#00FF00").unwrap();
    assert_eq!(tools.choose_palette_color(picked.clone()), Some(ToolId::Fracture));
    assert_eq!(tools.active(), Some(ToolId::Fracture));
    assert_eq!(tools.palette(), None);

    session.click(PointerInput::region(95.0, 25.0, RegionId::new(3)));
    assert_eq!(
        session
            .paint_map()
            .get(DiagramView::Center, RegionId::new(3))
            .unwrap()
            .color,
        picked
    );
}

#[test]
fn test_long_press_on_plain_tool_selects() {
    let mut session = ready_session();
    session.dispatch(ToolbarAction::PressTool {
        tool: ToolId::Eraser,
        held_ms: 2_000,
    });
    assert_eq!(session.tools().active(), Some(ToolId::Eraser));
    assert_eq!(session.tools().palette(), None);
}

#[test]
fn test_press_tool_action_respects_threshold() {
    let mut session = ready_session();
    session.dispatch(ToolbarAction::PressTool {
        tool: ToolId::Arrow,
        held_ms: 100,
    });
    assert_eq!(session.tools().active(), Some(ToolId::Arrow));

    session.dispatch(ToolbarAction::PressTool {
        tool: ToolId::Circle,
        held_ms: 600,
    });
    assert_eq!(session.tools().active(), Some(ToolId::Arrow));
    assert_eq!(session.tools().palette(), Some(ToolId::Circle));

    session.dispatch(ToolbarAction::DismissPalette);
    assert_eq!(session.tools().palette(), None);
}

#[test]
fn test_release_elsewhere_is_ignored() {
    let mut session = ready_session();
    let tools = session.tools_mut();
    let start = Instant::now();
    tools.press_button(ToolId::Line, start);
    assert_eq!(
        tools.release_button(ToolId::Arrow, start),
        ButtonOutcome::Ignored
    );
    assert_eq!(tools.active(), None);
}

#[test]
fn test_incisor_tools_need_incisor_view() {
    let mut session = ready_session();
    session.dispatch(ToolbarAction::SelectTool {
        tool: ToolId::Rotate,
    });
    assert_eq!(session.tools().active(), None);

    let props = session.toolbar_props();
    let rotate = props
        .buttons
        .iter()
        .find(|b| b.tool == ToolId::Rotate)
        .unwrap();
    assert!(!rotate.enabled);

    session.dispatch(ToolbarAction::SelectIncisorsMode {
        mode: IncisorMode::Rotate,
    });
    assert!(session.incisor_view_open());
    assert_eq!(session.tools().active(), Some(ToolId::Rotate));

    session.dispatch(ToolbarAction::ToggleIncisorView);
    assert!(!session.incisor_view_open());
    assert_eq!(session.tools().active(), None);
}

#[test]
fn test_clear_actions() {
    let mut session = ready_session();
    session.tools_mut().select(ToolId::Fill);
    session.click(PointerInput::region(20.0, 20.0, RegionId::new(0)));
    session.go_next();
    session.click(PointerInput::region(20.0, 20.0, RegionId::new(0)));

    session.dispatch(ToolbarAction::Clear { all_views: false });
    assert_eq!(session.paint_map().len(), 1);

    session.dispatch(ToolbarAction::Clear { all_views: true });
    assert!(session.paint_map().is_empty());

    // Undoing a clear brings nothing back.
    session.dispatch(ToolbarAction::Undo);
    assert!(session.paint_map().is_empty());
}

#[test]
fn test_toolbar_props_reflect_state() {
    let mut session = ready_session();
    let props = session.toolbar_props();
    assert_eq!(props.active_tool, None);
    assert!(!props.can_undo);
    assert!(props.can_go_previous);
    assert!(props.can_go_next);
    assert_eq!(props.buttons.len(), ToolId::ALL.len());

    session.dispatch(ToolbarAction::SelectTool {
        tool: ToolId::Crown,
    });
    session.dispatch(ToolbarAction::SelectColor {
        color: Color::parse("#ABCDEF").unwrap(),
    });
    session.dispatch(ToolbarAction::NextView);

    let props = session.toolbar_props();
    assert_eq!(props.active_tool, Some(ToolId::Crown));
    assert_eq!(props.active_color, Color::parse("#ABCDEF").unwrap());
    assert_eq!(props.active_view, DiagramView::Right);
    assert!(!props.can_go_next);
    let crown = props
        .buttons
        .iter()
        .find(|b| b.tool == ToolId::Crown)
        .unwrap();
    assert!(crown.has_options);
    assert_eq!(crown.color, Color::parse("#ABCDEF").unwrap());
}
