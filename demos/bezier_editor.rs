//! Cubic Bezier editor.
//!
//! Reads editor events from stdin (see `curve_editor::event`) and writes every
//! frame to an SVG file. Press `key space` to print the control path.
//!
//! ```text
//! cargo run --example bezier_editor < demos/bezier_editor.events
//! ```

use std::io;

use anyhow::Context;
use curve_editor::{run_editor, CubicBezier, EditorOptions, Session, SvgPresenter};

const CONTROL_POINTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 0.7], [-0.1, 1.0], [0.2, 1.0]];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Cubic Bezier editor v{} starting", env!("CARGO_PKG_VERSION"));

    let defaults =
        EditorOptions::with_defaults("Cubic Bezier editor", "bezier_editor.svg", &CONTROL_POINTS);
    let options =
        EditorOptions::load_from_file(&EditorOptions::config_path("bezier_editor"), defaults);

    let points = options.control_path().unwrap_or_default();
    let curve = CubicBezier::from_slice(&points).context("invalid control path")?;
    let session = Session::new(curve, options.steps, options.pick_radius_px)?;
    let mut presenter = SvgPresenter::open(&options.title, &options)?;

    let session = run_editor(
        session,
        &mut presenter,
        &options.marker_style(),
        io::stdin().lock(),
        io::stdout(),
    )?;

    log::info!(
        "{} frames written, final control path: {}",
        presenter.frames_written(),
        session.dump()
    );
    Ok(())
}
