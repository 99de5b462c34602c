//! Common abstraction over the editable curve types (cubic Bezier, midpoint spline).

use super::Point;

pub trait Spline<P: Point> {
    /// Evaluate the curve at the global parameter `t` in `[0, 1]`.
    fn eval(&self, t: P::Scalar) -> P;

    /// The control path in order.
    fn control_points(&self) -> &[P];

    /// Mutable access to the control path. Points can be replaced in place,
    /// the length of the path never changes.
    fn control_points_mut(&mut self) -> &mut [P];
}
