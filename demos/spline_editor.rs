//! Midpoint spline editor.
//!
//! A smooth path of quadratic segments running through the midpoints of the
//! control path. Events come from stdin, frames go to an SVG file.
//!
//! ```text
//! cargo run --example spline_editor < demos/spline_editor.events
//! ```

use std::io;

use anyhow::Context;
use curve_editor::{run_editor, EditorOptions, MidpointSpline, Point2, Session, SvgPresenter};

/// Capacity of the control path.
const MAX_CONTROL_POINTS: usize = 32;

const CONTROL_POINTS: [[f64; 2]; 20] = [
    [0.0, 0.0],
    [1.0, 2.0],
    [3.0, 1.0],
    [3.0, -1.0],
    [3.0, -2.0],
    [4.0, -3.0],
    [5.0, -2.0],
    [5.0, 0.0],
    [6.0, 1.0],
    [7.0, 1.0],
    [8.0, 0.0],
    [8.0, -1.0],
    [9.0, -1.0],
    [10.0, 0.0],
    [11.0, 0.0],
    [12.0, -1.0],
    [11.5, -2.5],
    [10.0, -3.0],
    [9.0, -2.0],
    [10.0, 0.0],
];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Spline editor v{} starting", env!("CARGO_PKG_VERSION"));

    let defaults = EditorOptions::with_defaults("Spline editor", "spline_editor.svg", &CONTROL_POINTS);
    let options =
        EditorOptions::load_from_file(&EditorOptions::config_path("spline_editor"), defaults);

    let points = options.control_path().unwrap_or_default();
    let spline: MidpointSpline<Point2<f64>, MAX_CONTROL_POINTS> =
        MidpointSpline::from_slice(&points).context("invalid control path")?;
    log::info!("{} control points, {} segments", spline.len(), spline.segment_count());

    let session = Session::new(spline, options.steps, options.pick_radius_px)?;
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
