use odontokit_core::{shared, Shared};
use odontokit_odontogram::{
    DiagramView, EditorSession, EditorUpdate, LoadState, MemoryDiagramSource, Point,
    PointerInput, Projection, ToolId,
};

use crate::support::{config, ready_session, source, DIAGRAM};

#[test]
fn test_navigation_bounds() {
    let mut session = ready_session();
    assert_eq!(session.active_view(), DiagramView::Center);

    assert!(session.go_previous());
    assert_eq!(session.active_view(), DiagramView::Left);
    assert!(!session.go_previous());

    assert!(session.go_next());
    assert!(session.go_next());
    assert_eq!(session.active_view(), DiagramView::Right);
    assert!(!session.go_next());
}

#[test]
fn test_view_change_is_reported() {
    let mut session = ready_session();
    let updates: Shared<Vec<EditorUpdate>> = shared(Vec::new());
    let sink = updates.clone();
    session.set_on_update(Box::new(move |update| sink.borrow_mut().push(update)));

    session.go_next();
    session.go_next();
    session.select_view(DiagramView::Right);

    let updates = updates.borrow();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].active_view, Some(DiagramView::Right));
    assert!(updates[0].paint_map.is_none());
}

#[test]
fn test_switching_view_commits_drawing_to_old_view() {
    let mut session = ready_session();
    session.tools_mut().select(ToolId::Freehand);
    session.pointer_down(PointerInput::canvas(10.0, 10.0));
    session.pointer_move(Point::new(30.0, 30.0));

    session.go_previous();

    assert!(!session.is_dragging());
    let stroke = session.overlays().iter().next().unwrap();
    assert_eq!(stroke.view, DiagramView::Center);
    assert_eq!(session.overlays().count_in_view(DiagramView::Left), 0);
}

#[test]
fn test_undo_crosses_views() {
    let mut session = ready_session();
    session.tools_mut().select(ToolId::Arrow);
    session.click(PointerInput::canvas(40.0, 40.0));
    session.go_next();

    assert!(session.undo());
    assert!(session.overlays().is_empty());
    assert_eq!(session.active_view(), DiagramView::Right);
}

#[test]
fn test_unloaded_view_projects_loading() {
    let session = EditorSession::new(&config());
    assert_eq!(
        session.project(),
        Projection::Loading {
            view: DiagramView::Center
        }
    );
}

#[tokio::test]
async fn test_failed_view_stays_failed_and_others_load() {
    let config = config();
    let [left, _, right] = config.diagrams.file_names();
    let partial = MemoryDiagramSource::new()
        .with(left, DIAGRAM)
        .with(right, DIAGRAM);

    let mut session = EditorSession::new(&config);
    assert!(session.load_all_views(&partial).await.is_err());

    assert!(matches!(
        session.navigator().state(DiagramView::Center),
        LoadState::Failed(_)
    ));
    assert!(matches!(session.project(), Projection::Failed { .. }));
    assert!(!session.is_interactive());

    session.go_previous();
    assert!(session.is_interactive());
    assert!(session.project().scene().is_some());
}

#[tokio::test]
async fn test_cached_view_is_not_fetched_again() {
    let config = config();
    let mut session = EditorSession::new(&config);
    session.load_active_view(&source(&config)).await.unwrap();

    // An empty source would fail if the view were fetched again.
    session
        .load_active_view(&MemoryDiagramSource::new())
        .await
        .unwrap();
    assert!(session.is_interactive());
}

#[tokio::test]
async fn test_malformed_diagram_fails_view() {
    let config = config();
    let [_, center, _] = config.diagrams.file_names();
    let broken = MemoryDiagramSource::new().with(center, "<html><body/></html>");

    let mut session = EditorSession::new(&config);
    assert!(session.load_active_view(&broken).await.is_err());
    assert!(matches!(session.project(), Projection::Failed { .. }));
}
