//! Interactive editors for a cubic Bézier curve and a piecewise quadratic
//! midpoint spline.
//!
//! The curve math (`lerp`, [`CubicBezier`], [`segment_parameter`],
//! [`MidpointSpline`]) is generic over the [`Point`] trait and allocation free.
//! On top of it sits a toolkit independent editing [`Session`] that reacts to
//! [`EditorEvent`]s, and a [`Presenter`] seam with an SVG implementation
//! ([`SvgPresenter`]) built on `plotters`.
//!
//! ```rust
//! use curve_editor::{CubicBezier, MidpointSpline, Point2};
//!
//! let cubic = CubicBezier::new(
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(1.0, 0.0),
//! );
//! assert_eq!(cubic.eval(0.5), Point2::new(0.5, 0.75));
//!
//! let spline: MidpointSpline<Point2<f64>, 8> = MidpointSpline::from_slice(&[
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ])
//! .unwrap();
//! assert_eq!(spline.eval(0.0), Point2::new(1.0, 0.0));
//! ```

use core::ops::{Add, Mul, Sub};

use tinyvec::ArrayVec;

pub mod cubic_bezier;
pub mod editor;
pub mod error;
pub mod event;
pub mod line;
pub mod midpoint_spline;
pub mod options;
pub mod point;
pub mod point2;
pub mod presenter;
pub mod quadratic_bezier;
pub mod sampling;
pub mod segment;
pub mod session;
pub mod spline;
pub mod svg_presenter;
pub mod viewport;

pub use cubic_bezier::CubicBezier;
pub use editor::run_editor;
pub use error::{CurveError, ParseEventError};
pub use event::{EditorEvent, Key};
pub use line::LineSegment;
pub use midpoint_spline::MidpointSpline;
pub use options::EditorOptions;
pub use point::{lerp, Point, PointIndex, PointNorm};
pub use point2::Point2;
pub use presenter::{render, LineStyle, MarkerStyle, Presenter, Projection};
pub use quadratic_bezier::QuadraticBezier;
pub use sampling::{linspace, SampledCurve, INLINE_SAMPLES};
pub use segment::segment_parameter;
pub use session::{Effect, Selection, Session};
pub use spline::Spline;
pub use svg_presenter::SvgPresenter;
pub use viewport::{Bounds, Viewport};

/// Scalar type used by the editors and their configuration.
pub type NativeFloat = f64;

/// Squared distance below which two points count as equal in tests and
/// degenerate checks.
pub const EPSILON: NativeFloat = 1e-12;
