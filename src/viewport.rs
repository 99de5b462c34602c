//! Data ranges of a fixed size canvas with equal scale on both axes.

use core::ops::Range;

use super::{NativeFloat, Point2};

/// Axis aligned bounding box in data space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub min: Point2<NativeFloat>,
    pub max: Point2<NativeFloat>,
}

impl Bounds {
    pub fn new(min: Point2<NativeFloat>, max: Point2<NativeFloat>) -> Self {
        Bounds { min, max }
    }

    /// Smallest box containing all finite points, None if there are none.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2<NativeFloat>>,
    {
        let mut finite = points.into_iter().filter(|p| p.is_finite());
        let first = *finite.next()?;
        Some(finite.fold(Bounds::new(first, first), |bounds, p| bounds.include(*p)))
    }

    /// Grow the box so that it contains `point`.
    pub fn include(self, point: Point2<NativeFloat>) -> Self {
        Bounds {
            min: Point2::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            max: Point2::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        }
    }

    pub fn width(&self) -> NativeFloat {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> NativeFloat {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point2<NativeFloat> {
        (self.min + self.max) * 0.5
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0))
    }
}

/// The x and y data ranges shown on a `width` x `height` canvas.
///
/// The ranges cover the fitted bounds and are widened along one axis so that a
/// data unit spans the same number of pixels horizontally and vertically.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    x: Range<NativeFloat>,
    y: Range<NativeFloat>,
}

impl Viewport {
    /// Fit `bounds` into a `width` x `height` canvas, keeping `margin` pixels free
    /// on every side. Degenerate extents count as one data unit.
    pub fn fit(bounds: Bounds, width: u32, height: u32, margin: NativeFloat) -> Self {
        let usable = |pixels: u32| (pixels as NativeFloat - 2.0 * margin).max(1.0);
        let extent = |size: NativeFloat| if size > 0.0 { size } else { 1.0 };

        let (plot_width, plot_height) = (usable(width), usable(height));
        let scale = (plot_width / extent(bounds.width())).min(plot_height / extent(bounds.height()));
        let half_x = plot_width / scale * 0.5;
        let half_y = plot_height / scale * 0.5;
        let center = bounds.center();
        Viewport {
            x: (center.x - half_x)..(center.x + half_x),
            y: (center.y - half_y)..(center.y + half_y),
        }
    }

    pub fn x_range(&self) -> Range<NativeFloat> {
        self.x.clone()
    }

    pub fn y_range(&self) -> Range<NativeFloat> {
        self.y.clone()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::fit(Bounds::default(), 640, 480, 0.0)
    }
}
