use odontokit_core::Color;
use odontokit_odontogram::{DiagramView, Overlay, OverlayKind, OverlayShape, OverlayStore, Point};

fn marker(id: u64, view: DiagramView, kind: OverlayKind, x: f64, y: f64) -> Overlay {
    Overlay::new(id, view, Color::black(), OverlayShape::marker(kind, Point::new(x, y)))
}

#[test]
fn test_generated_ids_are_unique() {
    let mut store = OverlayStore::new();
    let a = store.generate_id();
    let b = store.generate_id();
    assert_ne!(a, b);
}

#[test]
fn test_ids_continue_past_restored_overlays() {
    let mut store = OverlayStore::from_overlays(vec![
        marker(4, DiagramView::Center, OverlayKind::Arrow, 0.0, 0.0),
        marker(9, DiagramView::Left, OverlayKind::Circle, 0.0, 0.0),
    ]);
    assert!(store.generate_id() > 9);
}

#[test]
fn test_remove_and_restore_keeps_order() {
    let mut store = OverlayStore::new();
    for id in 1..=3 {
        store.insert(marker(id, DiagramView::Center, OverlayKind::Circle, id as f64, 0.0));
    }

    let (index, removed) = store.remove_return(2).unwrap();
    assert_eq!(index, 1);
    assert_eq!(store.len(), 2);

    store.restore(index, removed);
    let ids: Vec<u64> = store.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_nearest_respects_view_kind_and_radius() {
    let mut store = OverlayStore::new();
    store.insert(marker(1, DiagramView::Center, OverlayKind::WolfTooth, 40.0, 40.0));
    store.insert(marker(2, DiagramView::Center, OverlayKind::WolfTooth, 45.0, 40.0));
    store.insert(marker(3, DiagramView::Left, OverlayKind::WolfTooth, 44.0, 40.0));
    store.insert(marker(4, DiagramView::Center, OverlayKind::Implant, 44.0, 40.0));

    let at = Point::new(44.0, 40.0);
    assert_eq!(
        store.nearest_of_kind(DiagramView::Center, OverlayKind::WolfTooth, at, 10.0),
        Some(2)
    );
    // Exactly on the radius does not count.
    assert_eq!(
        store.nearest_of_kind(DiagramView::Center, OverlayKind::WolfTooth, Point::new(55.0, 40.0), 10.0),
        None
    );
    assert_eq!(
        store.nearest_of_kind(DiagramView::Right, OverlayKind::WolfTooth, at, 10.0),
        None
    );
}

#[test]
fn test_latest_of_kind_is_highest_id() {
    let mut store = OverlayStore::new();
    store.insert(marker(7, DiagramView::Center, OverlayKind::Incisor, 0.0, 0.0));
    store.insert(marker(3, DiagramView::Center, OverlayKind::Incisor, 0.0, 0.0));
    store.insert(marker(12, DiagramView::Left, OverlayKind::Incisor, 0.0, 0.0));

    assert_eq!(
        store.latest_of_kind(DiagramView::Center, OverlayKind::Incisor),
        Some(7)
    );
}

#[test]
fn test_clear_view_only_touches_that_view() {
    let mut store = OverlayStore::new();
    store.insert(marker(1, DiagramView::Center, OverlayKind::Arrow, 0.0, 0.0));
    store.insert(marker(2, DiagramView::Left, OverlayKind::Arrow, 0.0, 0.0));
    store.insert(marker(3, DiagramView::Center, OverlayKind::Line, 0.0, 0.0));

    assert_eq!(store.clear_view(DiagramView::Center), 2);
    assert_eq!(store.count_in_view(DiagramView::Center), 0);
    assert_eq!(store.count_in_view(DiagramView::Left), 1);

    let next = store.generate_id();
    assert!(next > 3);
}
