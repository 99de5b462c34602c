//! The editing session: control path, selection and sampled curve.

use core::fmt::{self, Display};
use core::marker::PhantomData;

use log::debug;
use num_traits::Float;

use super::event::EditorEvent;
use super::point::PointNorm;
use super::presenter::Projection;
use super::sampling::SampledCurve;
use super::spline::Spline;
use super::CurveError;

/// The currently selected control point, if any.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Selection(Option<usize>);

impl Selection {
    pub const fn none() -> Self {
        Selection(None)
    }

    pub fn index(&self) -> Option<usize> {
        self.0
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0 == Some(index)
    }
}

/// What the caller has to do after an event was handled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Selection or control path changed, the sampled curve is up to date and
    /// should be drawn again.
    Redraw,
    /// Print the control path (see [`Session::dump`]).
    Dump,
}

/// Owns a curve, the selection and the sampled curve of one editor.
///
/// The session is a plain state machine: [`Session::handle`] consumes it
/// together with an event and returns the next session and the [`Effect`] the
/// caller has to carry out. It has no knowledge of windows or toolkits; the
/// only thing it needs from the presentation side is a [`Projection`] to measure
/// click distances in screen space.
#[derive(Clone, Debug)]
pub struct Session<C, P>
where
    P: PointNorm,
{
    curve: C,
    selection: Selection,
    steps: usize,
    pick_radius: P::Scalar,
    samples: SampledCurve<P>,
    _point: PhantomData<P>,
}

impl<C, P> Session<C, P>
where
    C: Spline<P>,
    P: PointNorm,
{
    /// Start a session with nothing selected and the curve sampled at `steps` parameters.
    /// `pick_radius` is the maximum screen distance at which a click selects a point.
    pub fn new(curve: C, steps: usize, pick_radius: P::Scalar) -> Result<Self, CurveError> {
        let samples = SampledCurve::sample(&curve, steps)?;
        Ok(Session {
            curve,
            selection: Selection::none(),
            steps,
            pick_radius,
            samples,
            _point: PhantomData,
        })
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }

    pub fn control_points(&self) -> &[P] {
        self.curve.control_points()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn pick_radius(&self) -> P::Scalar {
        self.pick_radius
    }

    pub fn samples(&self) -> &SampledCurve<P> {
        &self.samples
    }

    /// Transition function of the editor: apply `event` and report what to do next.
    pub fn handle<Pr>(mut self, event: EditorEvent<P>, projection: &Pr) -> (Self, Effect)
    where
        Pr: Projection<P> + ?Sized,
    {
        let effect = match event {
            EditorEvent::Select { screen } => {
                self.select(screen, projection);
                Effect::Redraw
            }
            EditorEvent::Drag { data } => {
                if self.move_selected(data) {
                    Effect::Redraw
                } else {
                    Effect::None
                }
            }
            EditorEvent::KeyPress(key) if key.is_dump() => Effect::Dump,
            EditorEvent::KeyPress(_) => Effect::None,
        };
        (self, effect)
    }

    /// Nearest control point to `screen` in screen space and its distance.
    /// Ties go to the lower index, NaN distances never win.
    pub fn closest_control<Pr>(&self, screen: P, projection: &Pr) -> Option<(usize, P::Scalar)>
    where
        Pr: Projection<P> + ?Sized,
    {
        let mut best: Option<(usize, P::Scalar)> = None;
        for (index, point) in self.curve.control_points().iter().enumerate() {
            let distance = projection.project_to_screen(*point).distance(screen);
            match best {
                Some((_, min)) if !(distance < min) => {}
                _ if distance.is_nan() => {}
                _ => best = Some((index, distance)),
            }
        }
        best
    }

    /// Select the control point closest to the click, if it lies within the
    /// pick radius; otherwise clear the selection.
    pub fn select<Pr>(&mut self, screen: P, projection: &Pr) -> Selection
    where
        Pr: Projection<P> + ?Sized,
    {
        self.selection = match self.closest_control(screen, projection) {
            Some((index, distance)) if distance <= self.pick_radius => Selection(Some(index)),
            _ => Selection::none(),
        };
        debug!("selection: {:?}", self.selection.index());
        self.selection
    }

    /// Overwrite the selected control point with `data` and resample.
    /// Returns false, changing nothing, when no point is selected.
    pub fn move_selected(&mut self, data: P) -> bool {
        let index = match self.selection.index() {
            Some(index) => index,
            None => return false,
        };
        self.curve.control_points_mut()[index] = data;
        self.resample();
        debug!(
            "moved control point {} to {:?}, curve length {:?}",
            index,
            data,
            self.samples.arclen()
        );
        true
    }

    fn resample(&mut self) {
        // steps was validated by `new`, resampling with it cannot fail
        if let Err(err) = self.samples.resample(&self.curve, self.steps) {
            log::error!("resampling failed: {}", err);
        }
    }

    /// The control path as a literal sequence of coordinate pairs.
    pub fn dump(&self) -> ControlPathDump<'_, P> {
        ControlPathDump(self.curve.control_points())
    }
}

/// Display adapter printing a control path as `[[x, y], [x, y], ...]`.
pub struct ControlPathDump<'a, P>(&'a [P]);

impl<P: Display> Display for ControlPathDump<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, point) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", point)?;
        }
        write!(f, "]")
    }
}
