//! Headless presenter writing every frame to an SVG file with `plotters`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::{CoordTranslate, Shift};
use plotters::element::DashedPathElement;
use plotters::prelude::*;

use super::presenter::{LineStyle, Presenter, Projection};
use super::viewport::{Bounds, Viewport};
use super::{EditorOptions, NativeFloat, Point2};

/// Dash and gap length of the control skeleton in pixels.
const DASH_PX: u32 = 6;
const GAP_PX: u32 = 4;

type DataCoord = Cartesian2d<RangedCoordf64, RangedCoordf64>;

#[derive(Debug, Clone, PartialEq)]
enum Primitive {
    Polyline(Vec<Point2<NativeFloat>>, LineStyle),
    Markers(Vec<Point2<NativeFloat>>, Vec<NativeFloat>),
}

impl Primitive {
    fn points(&self) -> &[Point2<NativeFloat>] {
        match self {
            Primitive::Polyline(points, _) | Primitive::Markers(points, _) => points,
        }
    }
}

fn finite_coords(points: &[Point2<NativeFloat>]) -> Vec<(NativeFloat, NativeFloat)> {
    points
        .iter()
        .filter(|p| p.is_finite())
        .map(|p| (p.x, p.y))
        .collect()
}

/// An equal aspect chart over `viewport` without axes or labels.
fn build_chart<'a, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    viewport: &Viewport,
    margin: u32,
) -> Result<ChartContext<'a, DB, DataCoord>, DrawingAreaErrorKind<DB::ErrorType>> {
    ChartBuilder::on(area)
        .margin(margin)
        .build_cartesian_2d(viewport.x_range(), viewport.y_range())
}

/// Collects the primitives of one frame in data space and renders them when a
/// redraw is requested. The viewport is refitted to each frame, so screen
/// positions always refer to the most recently written file.
pub struct SvgPresenter {
    title: String,
    output: PathBuf,
    width: u32,
    height: u32,
    margin: u32,
    viewport: Viewport,
    coords: DataCoord,
    frame: Vec<Primitive>,
    frames_written: usize,
}

impl SvgPresenter {
    /// Open a presenter titled `title` drawing to `options.output`.
    ///
    /// Nothing is written until the first redraw, but clicks already map
    /// through a unit square fitted to the canvas.
    pub fn open(title: &str, options: &EditorOptions) -> anyhow::Result<Self> {
        log::info!(
            "{}: writing {}x{} frames to {}",
            title,
            options.width,
            options.height,
            options.output.display()
        );
        let margin = options.margin_px.max(0.0).round() as u32;
        let viewport = Viewport::fit(
            Bounds::default(),
            options.width,
            options.height,
            margin as NativeFloat,
        );

        let mut scratch = String::new();
        let coords = {
            let size = (options.width, options.height);
            let root = SVGBackend::with_string(&mut scratch, size).into_drawing_area();
            let chart = build_chart(&root, &viewport, margin)?;
            chart.as_coord_spec().clone()
        };

        Ok(SvgPresenter {
            title: title.to_string(),
            output: options.output.clone(),
            width: options.width,
            height: options.height,
            margin,
            viewport,
            coords,
            frame: Vec::new(),
            frames_written: 0,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    fn fit_viewport(&mut self) {
        let bounds = Bounds::from_points(self.frame.iter().flat_map(|p| p.points()));
        if let Some(bounds) = bounds {
            self.viewport =
                Viewport::fit(bounds, self.width, self.height, self.margin as NativeFloat);
        }
    }

    /// Render the frame to the output file and return the chart's mapping.
    fn write_frame(&self) -> anyhow::Result<DataCoord> {
        let root = SVGBackend::new(&self.output, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = build_chart(&root, &self.viewport, self.margin)?;

        for primitive in &self.frame {
            match primitive {
                Primitive::Polyline(points, LineStyle::Solid) => {
                    chart.draw_series(LineSeries::new(
                        finite_coords(points),
                        BLUE.stroke_width(2),
                    ))?;
                }
                Primitive::Polyline(points, LineStyle::Dashed) => {
                    chart.draw_series(std::iter::once(DashedPathElement::new(
                        finite_coords(points),
                        DASH_PX,
                        GAP_PX,
                        BLACK.stroke_width(1),
                    )))?;
                }
                Primitive::Markers(points, areas) => {
                    chart.draw_series(
                        points
                            .iter()
                            .zip(areas)
                            .filter(|(p, _)| p.is_finite())
                            .map(|(p, &area)| {
                                // area is in square pixels, like a scatter plot marker size
                                let radius = (area.max(0.0).sqrt() * 0.5).round() as u32;
                                Circle::new((p.x, p.y), radius, RED.filled())
                            }),
                    )?;
                }
            }
        }
        let coords = chart.as_coord_spec().clone();
        root.present()?;
        Ok(coords)
    }
}

impl Projection<Point2<NativeFloat>> for SvgPresenter {
    fn project_to_screen(&self, data: Point2<NativeFloat>) -> Point2<NativeFloat> {
        let (x, y) = self.coords.translate(&(data.x, data.y));
        Point2::new(x as NativeFloat, y as NativeFloat)
    }
}

impl Presenter<Point2<NativeFloat>> for SvgPresenter {
    fn clear(&mut self) {
        self.frame.clear();
    }

    fn draw_polyline(&mut self, points: &[Point2<NativeFloat>], style: LineStyle) {
        self.frame.push(Primitive::Polyline(points.to_vec(), style));
    }

    fn draw_markers(&mut self, points: &[Point2<NativeFloat>], areas: &[NativeFloat]) {
        self.frame.push(Primitive::Markers(points.to_vec(), areas.to_vec()));
    }

    fn request_redraw(&mut self) -> anyhow::Result<()> {
        self.fit_viewport();
        self.coords = self
            .write_frame()
            .with_context(|| format!("failed to write frame to {}", self.output.display()))?;
        self.frames_written += 1;
        log::debug!(
            "{}: frame {} written to {}",
            self.title,
            self.frames_written,
            self.output.display()
        );
        Ok(())
    }
}
