//! The seam between an editing session and whatever draws it.

use super::point::{Point, PointNorm};
use super::session::Session;
use super::spline::Spline;

/// Maps data coordinates onto screen coordinates.
pub trait Projection<P: Point> {
    fn project_to_screen(&self, data: P) -> P;
}

/// Stroke of a polyline.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineStyle {
    /// The sampled curve.
    Solid,
    /// The thin skeleton through the control points.
    Dashed,
}

/// Marker sizes as areas in square pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerStyle<S> {
    pub area: S,
    /// Factor applied to the area of the selected control point.
    pub selected_scale: S,
}

/// A canvas the editors can draw on.
///
/// A frame is built with `clear`, any number of `draw_*` calls and finally
/// `request_redraw`, which shows it. Points are given in data space.
pub trait Presenter<P: Point>: Projection<P> {
    fn clear(&mut self);

    fn draw_polyline(&mut self, points: &[P], style: LineStyle);

    /// Draw one marker per point, `areas[i]` is the marker area of `points[i]`.
    fn draw_markers(&mut self, points: &[P], areas: &[P::Scalar]);

    fn request_redraw(&mut self) -> anyhow::Result<()>;
}

/// Draw a full frame of `session`: the sampled curve, the control points (the
/// selected one enlarged) and the dashed control skeleton.
pub fn render<C, P, Pr>(
    session: &Session<C, P>,
    presenter: &mut Pr,
    markers: &MarkerStyle<P::Scalar>,
) -> anyhow::Result<()>
where
    C: Spline<P>,
    P: PointNorm,
    Pr: Presenter<P> + ?Sized,
{
    let selection = session.selection();
    let controls = session.control_points();
    let areas: Vec<P::Scalar> = (0..controls.len())
        .map(|index| {
            if selection.contains(index) {
                markers.area * markers.selected_scale
            } else {
                markers.area
            }
        })
        .collect();

    presenter.clear();
    presenter.draw_polyline(session.samples().as_slice(), LineStyle::Solid);
    presenter.draw_markers(controls, &areas);
    presenter.draw_polyline(controls, LineStyle::Dashed);
    presenter.request_redraw()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{CubicBezier, Point2};

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Command {
        Clear,
        Polyline(usize, LineStyle),
        Markers(Vec<f64>),
        Redraw,
    }

    /// Records every call, projects by identity.
    #[derive(Default)]
    pub(crate) struct RecordingPresenter {
        pub(crate) commands: Vec<Command>,
    }

    impl Projection<Point2<f64>> for RecordingPresenter {
        fn project_to_screen(&self, data: Point2<f64>) -> Point2<f64> {
            data
        }
    }

    impl Presenter<Point2<f64>> for RecordingPresenter {
        fn clear(&mut self) {
            self.commands.push(Command::Clear);
        }

        fn draw_polyline(&mut self, points: &[Point2<f64>], style: LineStyle) {
            self.commands.push(Command::Polyline(points.len(), style));
        }

        fn draw_markers(&mut self, _points: &[Point2<f64>], areas: &[f64]) {
            self.commands.push(Command::Markers(areas.to_vec()));
        }

        fn request_redraw(&mut self) -> anyhow::Result<()> {
            self.commands.push(Command::Redraw);
            Ok(())
        }
    }

    #[test]
    fn frame_layout() {
        let curve = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        );
        let mut session = Session::new(curve, 50, 5.0).unwrap();
        session.select(Point2::new(1.0, 1.0), &RecordingPresenter::default());

        let mut presenter = RecordingPresenter::default();
        let markers = MarkerStyle {
            area: 36.0,
            selected_scale: 2.5,
        };
        render(&session, &mut presenter, &markers).unwrap();
        assert_eq!(
            presenter.commands,
            vec![
                Command::Clear,
                Command::Polyline(50, LineStyle::Solid),
                Command::Markers(vec![36.0, 36.0, 90.0, 36.0]),
                Command::Polyline(4, LineStyle::Dashed),
                Command::Redraw,
            ]
        );
    }
}
