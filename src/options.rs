//! Runtime configuration of the editors.
//!
//! `EditorOptions` holds everything a user may tweak in the TOML file next to
//! the binary. The `const` values are the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::presenter::MarkerStyle;
use super::{NativeFloat, Point2};

/// Number of samples along the curve.
pub const DEFAULT_STEPS: usize = 100;
/// A click selects a control point up to this many pixels away.
pub const PICK_RADIUS_PX: NativeFloat = 5.0;
/// Marker area of a control point in square pixels.
pub const MARKER_AREA: NativeFloat = 36.0;
/// Area factor of the selected control point.
pub const SELECTED_MARKER_SCALE: NativeFloat = 2.5;
/// Canvas size in pixels.
pub const CANVAS_WIDTH: u32 = 640;
pub const CANVAS_HEIGHT: u32 = 480;
/// Free border around the drawing in pixels.
pub const CANVAS_MARGIN_PX: NativeFloat = 24.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Title of the editor window, also used for logging.
    pub title: String,
    pub steps: usize,
    pub pick_radius_px: NativeFloat,
    pub marker_area: NativeFloat,
    pub selected_marker_scale: NativeFloat,
    pub width: u32,
    pub height: u32,
    pub margin_px: NativeFloat,
    /// SVG file every frame is written to.
    pub output: PathBuf,
    /// Initial control path, the editor's built-in path if unset.
    pub control_points: Option<Vec<[NativeFloat; 2]>>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            title: String::from("Curve editor"),
            steps: DEFAULT_STEPS,
            pick_radius_px: PICK_RADIUS_PX,
            marker_area: MARKER_AREA,
            selected_marker_scale: SELECTED_MARKER_SCALE,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            margin_px: CANVAS_MARGIN_PX,
            output: PathBuf::from("curve_editor.svg"),
            control_points: None,
        }
    }
}

impl EditorOptions {
    /// Defaults for one editor: its title, output file and built-in control path.
    pub fn with_defaults(title: &str, output: &str, control_points: &[[NativeFloat; 2]]) -> Self {
        Self {
            title: title.to_string(),
            output: PathBuf::from(output),
            control_points: Some(control_points.to_vec()),
            ..Self::default()
        }
    }

    /// Load options from a TOML file.
    ///
    /// A missing or malformed file is not an error, the given defaults are used
    /// instead. Keys absent from the file keep their value from `defaults`.
    pub fn load_from_file(path: &Path, defaults: Self) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                log::info!("No options file at {}, using defaults", path.display());
                return defaults;
            }
        };
        match toml::from_str::<toml::Table>(&content) {
            Ok(table) => {
                match Self::merge(defaults.clone(), table) {
                    Ok(opts) => {
                        log::info!("Options loaded from: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Options file is malformed, using defaults: {}", e);
                        defaults
                    }
                }
            }
            Err(e) => {
                log::warn!("Options file is malformed, using defaults: {}", e);
                defaults
            }
        }
    }

    fn merge(defaults: Self, overrides: toml::Table) -> anyhow::Result<Self> {
        let mut table = match toml::Value::try_from(&defaults)? {
            toml::Value::Table(table) => table,
            _ => toml::Table::new(),
        };
        table.extend(overrides);
        Ok(toml::Value::Table(table).try_into()?)
    }

    /// Path of `<name>.toml` next to the running binary.
    pub fn config_path(name: &str) -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from(name))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(format!("{name}.toml"))
    }

    /// The configured control path as points, if any.
    pub fn control_path(&self) -> Option<Vec<Point2<NativeFloat>>> {
        self.control_points
            .as_ref()
            .map(|raw| raw.iter().map(|&p| Point2::from(p)).collect())
    }

    pub fn marker_style(&self) -> MarkerStyle<NativeFloat> {
        MarkerStyle {
            area: self.marker_area,
            selected_scale: self.selected_marker_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("curve_editor_{}_{}", std::process::id(), name))
    }

    #[test]
    fn defaults_match_constants() {
        let opts = EditorOptions::default();
        assert_eq!(opts.steps, 100);
        assert_eq!(opts.pick_radius_px, 5.0);
        assert_eq!(opts.selected_marker_scale, 2.5);
        assert!(opts.control_path().is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let opts: EditorOptions = toml::from_str("steps = 50\ntitle = \"x\"").unwrap();
        assert_eq!(opts.steps, 50);
        assert_eq!(opts.title, "x");
        assert_eq!(opts.width, CANVAS_WIDTH);
        assert_eq!(opts.control_points, None);
    }

    #[test]
    fn control_points_from_toml() {
        let opts: EditorOptions =
            toml::from_str("control_points = [[0.0, 0.0], [0.0, 0.7], [-0.1, 1.0]]").unwrap();
        assert_eq!(
            opts.control_path().unwrap(),
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 0.7),
                Point2::new(-0.1, 1.0)
            ]
        );
    }

    #[test]
    fn load_merges_over_given_defaults() {
        let path = temp_file("merge.toml");
        std::fs::write(&path, "steps = 20\n").unwrap();
        let defaults = EditorOptions::with_defaults("Spline", "spline.svg", &[[1.0, 2.0]]);
        let opts = EditorOptions::load_from_file(&path, defaults);
        std::fs::remove_file(&path).ok();
        assert_eq!(opts.steps, 20);
        assert_eq!(opts.title, "Spline");
        assert_eq!(opts.control_points, Some(vec![[1.0, 2.0]]));
    }

    #[test]
    fn missing_or_malformed_file_falls_back() {
        let defaults = EditorOptions::with_defaults("Bezier", "bezier.svg", &[]);
        let missing = temp_file("does_not_exist.toml");
        assert_eq!(
            EditorOptions::load_from_file(&missing, defaults.clone()),
            defaults
        );

        let path = temp_file("malformed.toml");
        std::fs::write(&path, "steps = \"many\"\n").unwrap();
        let opts = EditorOptions::load_from_file(&path, defaults.clone());
        std::fs::remove_file(&path).ok();
        assert_eq!(opts, defaults);
    }

    #[test]
    fn file_overrides_control_path() {
        let path = temp_file("control.toml");
        std::fs::write(&path, "control_points = [[0.0, 0.0], [3.5, -1.0]]\nsteps = 1000\n")
            .unwrap();
        let defaults = EditorOptions::with_defaults("Bezier", "bezier.svg", &[[9.0, 9.0]]);
        let opts = EditorOptions::load_from_file(&path, defaults);
        std::fs::remove_file(&path).ok();
        assert_eq!(opts.steps, 1000);
        assert_eq!(opts.title, "Bezier");
        assert_eq!(
            opts.control_path().unwrap(),
            vec![Point2::new(0.0, 0.0), Point2::new(3.5, -1.0)]
        );
    }

    #[test]
    fn config_path_ends_with_name() {
        let path = EditorOptions::config_path("bezier_editor");
        assert_eq!(path.file_name().unwrap(), "bezier_editor.toml");
    }
}
