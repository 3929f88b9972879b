use odontokit_core::{DiagramError, Error, FetchError};
use odontokit_odontogram::{
    Diagram, DiagramSource, DiagramView, EditorSession, FsDiagramSource, RegionId, ViewBox,
};
use tempfile::TempDir;

use crate::support::{config, DIAGRAM};

#[test]
fn test_parse_regions_in_document_order() {
    let diagram = Diagram::parse(DIAGRAM).unwrap();

    assert_eq!(diagram.view_box, ViewBox::new(0.0, 0.0, 200.0, 100.0));
    assert_eq!(diagram.regions.len(), 5);
    assert_eq!(diagram.regions[3].id, RegionId::new(3));
    assert!(diagram.regions[3].d.starts_with("M 80 10"));
    assert!(diagram.defs.as_deref().unwrap().contains("enamel"));
}

#[test]
fn test_paths_without_data_are_skipped() {
    let diagram = Diagram::parse(
        r#"<svg viewBox="0 0 10 10"><path/><path d=""/><g><path d="M 1 1 L 2 2"/></g></svg>"#,
    )
    .unwrap();
    assert_eq!(diagram.regions.len(), 1);
    assert_eq!(diagram.regions[0].id, RegionId::new(0));
}

#[test]
fn test_size_attributes_stand_in_for_view_box() {
    let diagram =
        Diagram::parse(r#"<svg width="300px" height="120"><path d="M 0 0 L 1 1"/></svg>"#)
            .unwrap();
    assert_eq!(diagram.view_box, ViewBox::new(0.0, 0.0, 300.0, 120.0));
}

#[test]
fn test_non_svg_root_is_rejected() {
    assert!(matches!(
        Diagram::parse("<html/>"),
        Err(DiagramError::MissingRoot)
    ));
    assert!(matches!(
        Diagram::parse(r#"<svg viewBox="0 0 0 0"/>"#),
        Err(DiagramError::InvalidViewBox { .. })
    ));
}

#[tokio::test]
async fn test_fs_source_reads_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("center.svg"), DIAGRAM).unwrap();
    let source = FsDiagramSource::new(dir.path());

    let markup = source.fetch("center.svg").await.unwrap();
    assert_eq!(markup, DIAGRAM);

    assert!(matches!(
        source.fetch("missing.svg").await,
        Err(FetchError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_session_loads_from_directory() {
    let dir = TempDir::new().unwrap();
    let mut config = config();
    for name in config.diagrams.file_names() {
        std::fs::write(dir.path().join(name), DIAGRAM).unwrap();
    }
    config.diagrams.directory = dir.path().to_path_buf();

    let mut session = EditorSession::new(&config);
    let source = FsDiagramSource::new(&config.diagrams.directory);
    session.load_all_views(&source).await.unwrap();

    for view in DiagramView::ALL {
        assert!(session.navigator().state(view).is_ready());
    }
}

#[tokio::test]
async fn test_missing_directory_reports_fetch_error() {
    let dir = TempDir::new().unwrap();
    let source = FsDiagramSource::new(dir.path().join("nowhere"));
    let mut session = EditorSession::new(&config());

    let err = session.load_active_view(&source).await.unwrap_err();
    assert!(matches!(err, Error::Fetch(FetchError::NotFound { .. })));
}
