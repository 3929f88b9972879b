use anyhow::Context;
use std::path::PathBuf;

use odontokit::odontogram::Surface;
use odontokit::{
    init_logging, Config, EditorSession, EditorSnapshot, EditorUpdate, FsDiagramSource, Script,
};

const HELP: &str = "\
odontokit - veterinary odontogram editor engine

USAGE:
  odontokit [OPTIONS]

OPTIONS:
  --config <FILE>     Configuration file (defaults to the user config path)
  --diagrams <DIR>    Directory holding the three diagram SVGs
  --view <VIEW>       Initial view: left, center or right
  --snapshot <FILE>   Restore paint map and overlays from a snapshot
  --script <FILE>     Replay an interaction script
  --output <FILE>     Write the rendered view as SVG (stdout if omitted)
  --save <FILE>       Save the resulting snapshot
  --log-json          Emit logs as JSON
  -V, --version       Print version
  -h, --help          Print help
";

struct Args {
    config: Option<PathBuf>,
    diagrams: Option<PathBuf>,
    view: Option<odontokit::DiagramView>,
    snapshot: Option<PathBuf>,
    script: Option<PathBuf>,
    output: Option<PathBuf>,
    save: Option<PathBuf>,
    log_json: bool,
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(None);
    }
    if args.contains(["-V", "--version"]) {
        println!(
            "odontokit {} (built {})",
            env!("CARGO_PKG_VERSION"),
            odontokit::BUILD_DATE
        );
        return Ok(None);
    }

    let parsed = Args {
        config: args.opt_value_from_str("--config")?,
        diagrams: args.opt_value_from_str("--diagrams")?,
        view: args.opt_value_from_str("--view")?,
        snapshot: args.opt_value_from_str("--snapshot")?,
        script: args.opt_value_from_str("--script")?,
        output: args.opt_value_from_str("--output")?,
        save: args.opt_value_from_str("--save")?,
        log_json: args.contains("--log-json"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        anyhow::bail!("Unexpected arguments: {:?}", rest);
    }
    Ok(Some(parsed))
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let mut config = Config::load_or_default(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    if let Some(dir) = &args.diagrams {
        config.diagrams.directory = dir.clone();
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    init_logging(args.log_json)?;
    tracing::info!("Odontokit {} starting", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args)?;
    let mut snapshot = match &args.snapshot {
        Some(path) => EditorSnapshot::load_from_file(path)?,
        None => EditorSnapshot::default(),
    };
    if let Some(view) = args.view {
        snapshot.active_view = view;
    }

    let mut session = EditorSession::from_snapshot(&config, snapshot);
    session.set_on_update(Box::new(|update: EditorUpdate| {
        tracing::info!(
            paint = update.paint_map.is_some(),
            overlays = update.overlays.is_some(),
            view = ?update.active_view,
            "Editor state changed"
        );
    }));

    let source = FsDiagramSource::new(&config.diagrams.directory);
    if let Err(e) = session.load_all_views(&source).await {
        tracing::warn!("Not every diagram loaded: {}", e);
    }

    // Surface matches the diagram size so screen pixels map 1:1 onto user units.
    if let Some(diagram) = session.navigator().active_diagram() {
        let vb = diagram.view_box;
        session.set_surface(Some(Surface::new(0.0, 0.0, vb.width, vb.height)));
    }

    if let Some(path) = &args.script {
        let script = Script::load_from_file(path)?;
        script.run(&mut session, &source).await;
    }

    let svg = session.project().to_svg();
    match &args.output {
        Some(path) => std::fs::write(path, svg)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", svg),
    }

    if let Some(path) = &args.save {
        session.snapshot().save_to_file(path)?;
        tracing::info!("Snapshot saved to {}", path.display());
    }

    Ok(())
}
