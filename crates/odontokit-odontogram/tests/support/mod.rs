//! Shared fixtures for the odontogram integration tests.

use odontokit_odontogram::{EditorSession, MemoryDiagramSource, Surface};
use odontokit_settings::Config;

/// 200x100 diagram with five regions; `region_3` spans (80,10)-(110,40).
pub const DIAGRAM: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 100">
  <defs><linearGradient id="enamel"><stop offset="0" stop-color="#fff"/></linearGradient></defs>
  <path d="M 10 10 L 30 10 L 30 40 L 10 40 Z"/>
  <path d="M 35 10 L 55 10 L 55 40 L 35 40 Z"/>
  <path d="M 60 10 L 75 10 L 75 40 L 60 40 Z"/>
  <path d="M 80 10 L 110 10 L 110 40 L 80 40 Z"/>
  <path d="M 10 60 L 190 60 L 190 90 L 10 90 Z"/>
</svg>"##;

pub fn config() -> Config {
    Config::default()
}

/// A source serving [`DIAGRAM`] under every configured view name.
pub fn source(config: &Config) -> MemoryDiagramSource {
    config
        .diagrams
        .file_names()
        .iter()
        .fold(MemoryDiagramSource::new(), |source, name| {
            source.with(*name, DIAGRAM)
        })
}

pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

/// A session with every view loaded and a surface the size of the viewBox,
/// so screen coordinates equal diagram-local coordinates.
pub fn ready_session() -> EditorSession {
    let config = config();
    let mut session = EditorSession::new(&config);
    block_on(session.load_all_views(&source(&config))).unwrap();
    session.set_surface(Some(Surface::new(0.0, 0.0, 200.0, 100.0)));
    session
}
