//! Event loop shared by both editors.

use std::io::{BufRead, Write};

use anyhow::Context;

use super::presenter::{render, MarkerStyle, Presenter};
use super::session::{Effect, Session};
use super::spline::Spline;
use super::{EditorEvent, NativeFloat, Point2};

/// Drive `session` with events read line by line from `input` until it is exhausted.
///
/// The first frame is drawn before any input is read. Every event is handled
/// to completion (including resampling and redrawing) before the next line is
/// read. Blank lines and `#` comments are skipped, malformed lines are logged
/// and skipped. Control path dumps are written to `output`.
pub fn run_editor<C, Pr, R, W>(
    mut session: Session<C, Point2<NativeFloat>>,
    presenter: &mut Pr,
    markers: &MarkerStyle<NativeFloat>,
    input: R,
    mut output: W,
) -> anyhow::Result<Session<C, Point2<NativeFloat>>>
where
    C: Spline<Point2<NativeFloat>>,
    Pr: Presenter<Point2<NativeFloat>> + ?Sized,
    R: BufRead,
    W: Write,
{
    render(&session, presenter, markers)?;

    for (number, line) in input.lines().enumerate() {
        let line = line.context("failed to read event")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let event: EditorEvent<Point2<NativeFloat>> = match line.parse() {
            Ok(event) => event,
            Err(e) => {
                log::warn!("line {}: skipping {:?}: {}", number + 1, line, e);
                continue;
            }
        };

        let (next, effect) = session.handle(event, &*presenter);
        session = next;
        match effect {
            Effect::None => {}
            Effect::Redraw => render(&session, presenter, markers)?,
            Effect::Dump => {
                writeln!(output, "{}", session.dump()).context("failed to write control path")?;
                output.flush()?;
            }
        }
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::tests::{Command, RecordingPresenter};
    use crate::{CubicBezier, LineStyle, MidpointSpline};
    use std::io::Cursor;

    const MARKERS: MarkerStyle<NativeFloat> = MarkerStyle {
        area: 36.0,
        selected_scale: 2.5,
    };

    fn bezier_session() -> Session<CubicBezier<Point2<NativeFloat>>, Point2<NativeFloat>> {
        let curve = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.7),
            Point2::new(-0.1, 1.0),
            Point2::new(0.2, 1.0),
        );
        Session::new(curve, 100, 5.0).unwrap()
    }

    fn redraws(presenter: &RecordingPresenter) -> usize {
        presenter
            .commands
            .iter()
            .filter(|c| **c == Command::Redraw)
            .count()
    }

    #[test]
    fn initial_frame_without_input() {
        let mut presenter = RecordingPresenter::default();
        let mut out = Vec::new();
        run_editor(
            bezier_session(),
            &mut presenter,
            &MARKERS,
            Cursor::new(""),
            &mut out,
        )
        .unwrap();
        assert_eq!(redraws(&presenter), 1);
        assert_eq!(presenter.commands[1], Command::Polyline(100, LineStyle::Solid));
        assert!(out.is_empty());
    }

    #[test]
    fn scripted_edit_and_dump() {
        // the recording presenter projects by identity, so screen equals data
        let script = "\
# grab the end point and move it
left 0.2 1.0
right 0.5 2.0

key space
key q
right 9 9
left 100 100
right 7 7
key enter
";
        let mut presenter = RecordingPresenter::default();
        let mut out = Vec::new();
        let session = run_editor(
            bezier_session(),
            &mut presenter,
            &MARKERS,
            Cursor::new(script),
            &mut out,
        )
        .unwrap();

        // initial frame, select, move, move, deselect; the last drag is a no-op
        assert_eq!(redraws(&presenter), 5);
        assert_eq!(session.control_points()[3], Point2::new(9.0, 9.0));
        assert!(session.selection().is_none());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[[0, 0], [0, 0.7], [-0.1, 1], [0.5, 2]]\n[[0, 0], [0, 0.7], [-0.1, 1], [9, 9]]\n"
        );
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let script = "left one two\nmiddle 1 2\nkey\nleft 0 0\nright nan nan\nright 1 1\n";
        let mut presenter = RecordingPresenter::default();
        let session = run_editor(
            bezier_session(),
            &mut presenter,
            &MARKERS,
            Cursor::new(script),
            std::io::sink(),
        )
        .unwrap();
        assert_eq!(session.control_points()[0], Point2::new(1.0, 1.0));
        assert_eq!(redraws(&presenter), 3);
    }

    #[test]
    fn spline_editor_moves_control_point() {
        let spline: MidpointSpline<Point2<NativeFloat>, 8> = MidpointSpline::from_slice(&[
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ])
        .unwrap();
        let session = Session::new(spline, 255, 5.0).unwrap();
        let mut presenter = RecordingPresenter::default();
        let mut out = Vec::new();
        let session = run_editor(
            session,
            &mut presenter,
            &MARKERS,
            Cursor::new("left 2 0\nright 4 0\nkey space\n"),
            &mut out,
        )
        .unwrap();
        assert_eq!(session.curve().start(), Point2::new(2.0, 0.0));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[[0, 0], [4, 0], [2, 2], [0, 2]]\n"
        );
        assert_eq!(presenter.commands.last(), Some(&Command::Redraw));
    }
}
