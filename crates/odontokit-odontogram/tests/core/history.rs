use odontokit_core::Color;
use odontokit_odontogram::commands::{AddOverlay, Clear, Erase, MoveOverlay, Paint, RemoveOverlay};
use odontokit_odontogram::{
    Annotations, ClearScope, DiagramView, EditorCommand, History, Overlay, OverlayKind,
    OverlayShape, PaintEntry, Point, RegionId, ToolId,
};

fn circle(id: u64, x: f64, y: f64) -> Overlay {
    Overlay::new(
        id,
        DiagramView::Center,
        Color::black(),
        OverlayShape::marker(OverlayKind::Circle, Point::new(x, y)),
    )
}

fn caries(region: usize) -> PaintEntry {
    PaintEntry::new(
        DiagramView::Center,
        RegionId::new(region),
        ToolId::Caries,
        Color::parse("#D32F2F").unwrap(),
    )
}

#[test]
fn test_empty_history_undo_is_noop() {
    let mut doc = Annotations::new();
    let mut history = History::new();
    assert!(!history.can_undo());
    assert!(history.undo(&mut doc).is_none());
}

#[test]
fn test_undo_is_lifo() {
    let mut doc = Annotations::new();
    let mut history = History::new();

    doc.overlays.insert(circle(1, 0.0, 0.0));
    history.push(EditorCommand::AddOverlay(AddOverlay { id: 1 }));
    doc.overlays.insert(circle(2, 5.0, 5.0));
    history.push(EditorCommand::AddOverlay(AddOverlay { id: 2 }));

    history.undo(&mut doc);
    assert!(doc.overlays.get(2).is_none());
    assert!(doc.overlays.get(1).is_some());

    history.undo(&mut doc);
    assert!(doc.overlays.is_empty());
    assert_eq!(history.depth(), 0);
}

#[test]
fn test_undo_remove_restores_position() {
    let mut doc = Annotations::new();
    let mut history = History::new();
    for id in 1..=3 {
        doc.overlays.insert(circle(id, id as f64, 0.0));
    }

    let (index, overlay) = doc.overlays.remove_return(1).unwrap();
    history.push(EditorCommand::RemoveOverlay(RemoveOverlay { index, overlay }));

    let changes = history.undo(&mut doc).unwrap();
    assert!(changes.overlays);
    assert!(!changes.paint);
    assert_eq!(doc.overlays.iter().next().unwrap().id, 1);
}

#[test]
fn test_undo_move_returns_to_start() {
    let mut doc = Annotations::new();
    let mut history = History::new();
    doc.overlays.insert(circle(1, 30.0, 30.0));

    doc.overlays
        .get_mut(1)
        .unwrap()
        .set_position(Point::new(60.0, 45.0));
    history.push(EditorCommand::MoveOverlay(MoveOverlay {
        id: 1,
        from: Point::new(30.0, 30.0),
        to: Point::new(60.0, 45.0),
    }));

    history.undo(&mut doc);
    assert_eq!(doc.overlays.get(1).unwrap().position(), Point::new(30.0, 30.0));
}

#[test]
fn test_undo_repaint_restores_previous_fill() {
    let mut doc = Annotations::new();
    let mut history = History::new();

    let previous = doc.paint.set(caries(2));
    history.push(EditorCommand::Paint(Paint {
        view: DiagramView::Center,
        region: RegionId::new(2),
        previous,
    }));

    let crown = PaintEntry::new(
        DiagramView::Center,
        RegionId::new(2),
        ToolId::Crown,
        Color::parse("#FBC02D").unwrap(),
    );
    let previous = doc.paint.set(crown);
    history.push(EditorCommand::Paint(Paint {
        view: DiagramView::Center,
        region: RegionId::new(2),
        previous,
    }));

    history.undo(&mut doc);
    assert_eq!(
        doc.paint
            .get(DiagramView::Center, RegionId::new(2))
            .unwrap()
            .tool_id,
        ToolId::Caries
    );

    history.undo(&mut doc);
    assert!(doc.paint.is_empty());
}

#[test]
fn test_undo_erase_brings_fill_back() {
    let mut doc = Annotations::new();
    let mut history = History::new();
    doc.paint.set(caries(4));

    let entry = doc
        .paint
        .remove(DiagramView::Center, RegionId::new(4))
        .unwrap();
    history.push(EditorCommand::Erase(Erase { entry }));

    history.undo(&mut doc);
    assert!(doc.paint.get(DiagramView::Center, RegionId::new(4)).is_some());
}

#[test]
fn test_undo_clear_restores_nothing() {
    let mut doc = Annotations::new();
    let mut history = History::new();
    doc.paint.set(caries(1));
    doc.overlays.insert(circle(1, 0.0, 0.0));

    doc.clear(ClearScope::All);
    history.push(EditorCommand::Clear(Clear {
        scope: ClearScope::All,
    }));

    let changes = history.undo(&mut doc).unwrap();
    assert!(changes.is_empty());
    assert!(doc.is_empty());
    assert!(!history.can_undo());
}

#[test]
fn test_undo_first_paint_deletes_entry() {
    let mut doc = Annotations::new();
    let mut history = History::new();
    let previous = doc.paint.set(caries(2));
    assert!(previous.is_none());
    history.push(EditorCommand::Paint(Paint {
        view: DiagramView::Center,
        region: RegionId::new(2),
        previous,
    }));

    let changes = history.undo(&mut doc).unwrap();
    assert!(changes.paint);
    assert!(doc.paint.is_empty());
}
