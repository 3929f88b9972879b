use odontokit_core::Color;
use odontokit_odontogram::{DiagramView, PaintEntry, PaintMap, RegionId, ToolId};
use proptest::prelude::*;

fn entry(view: DiagramView, region: usize, tool: ToolId, color: &str) -> PaintEntry {
    PaintEntry::new(view, RegionId::new(region), tool, Color::parse(color).unwrap())
}

#[test]
fn test_set_returns_previous_entry() {
    let mut map = PaintMap::new();
    assert!(map
        .set(entry(DiagramView::Center, 3, ToolId::Caries, "#D32F2F"))
        .is_none());

    let previous = map
        .set(entry(DiagramView::Center, 3, ToolId::Crown, "#FBC02D"))
        .unwrap();
    assert_eq!(previous.tool_id, ToolId::Caries);
    assert_eq!(map.len(), 1);
    assert_eq!(
        map.get(DiagramView::Center, RegionId::new(3)).unwrap().tool_id,
        ToolId::Crown
    );
}

#[test]
fn test_views_are_independent() {
    let mut map = PaintMap::new();
    map.set(entry(DiagramView::Left, 1, ToolId::Fill, "#4CAF50"));
    map.set(entry(DiagramView::Center, 1, ToolId::Fill, "#4CAF50"));

    assert_eq!(map.count_in_view(DiagramView::Left), 1);
    assert_eq!(map.clear_view(DiagramView::Left), 1);
    assert!(map.get(DiagramView::Left, RegionId::new(1)).is_none());
    assert!(map.get(DiagramView::Center, RegionId::new(1)).is_some());
}

#[test]
fn test_wire_keys() {
    let mut map = PaintMap::new();
    map.set(entry(DiagramView::Center, 3, ToolId::Caries, "#D32F2F"));
    map.set(entry(DiagramView::Right, 0, ToolId::Fill, "#4CAF50"));

    let json = serde_json::to_value(&map).unwrap();
    let object = json.as_object().unwrap();
    assert!(object.contains_key("center_region_3"));
    assert!(object.contains_key("right_region_0"));
    assert_eq!(object["center_region_3"]["toolId"], "caries");
    assert_eq!(object["center_region_3"]["color"], "#D32F2F");
    assert_eq!(object["center_region_3"]["viewId"], "center");
    assert_eq!(object["center_region_3"]["regionId"], "region_3");
}

proptest! {
    #[test]
    fn prop_painting_twice_keeps_one_entry(region in 0usize..64, repeats in 1usize..8) {
        let mut map = PaintMap::new();
        for _ in 0..repeats {
            map.set(entry(DiagramView::Center, region, ToolId::Fracture, "#F57C00"));
        }
        prop_assert_eq!(map.len(), 1);
        prop_assert_eq!(map.count_in_view(DiagramView::Center), 1);
    }
}
