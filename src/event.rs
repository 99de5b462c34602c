//! Toolkit independent input events and their textual form.
//!
//! Scripted input has one event per line:
//!
//! ```text
//! left 312 240     # select the control point nearest to screen pixel (312, 240)
//! right 0.5 1.25   # move the selected control point to data coordinates (0.5, 1.25)
//! key space        # dump the control path
//! ```

use core::str::FromStr;

use super::{NativeFloat, ParseEventError, Point, Point2};

/// A key press the editors distinguish.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Space,
    Enter,
    Escape,
    Char(char),
}

impl Key {
    /// Space and enter print the control path.
    pub fn is_dump(&self) -> bool {
        matches!(self, Key::Space | Key::Enter | Key::Char(' '))
    }
}

impl FromStr for Key {
    type Err = ParseEventError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "space" | " " => Ok(Key::Space),
            "enter" | "return" => Ok(Key::Enter),
            "escape" | "esc" => Ok(Key::Escape),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Key::Char(c)),
                    _ => Err(ParseEventError::UnknownKey(name.to_string())),
                }
            }
        }
    }
}

/// One user input, handled to completion before the next one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EditorEvent<P: Point> {
    /// Left click at a screen position: pick the nearest control point.
    Select { screen: P },
    /// Right click at a data position: move the selected control point there.
    Drag { data: P },
    KeyPress(Key),
}

/// Parse a finite coordinate. `nan` and `inf` are valid floats but never valid positions.
fn parse_coordinate(token: &str) -> Result<NativeFloat, ParseEventError> {
    match token.parse::<NativeFloat>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseEventError::InvalidNumber(token.to_string())),
    }
}

fn parse_pair(kind: &'static str, args: &[&str]) -> Result<Point2<NativeFloat>, ParseEventError> {
    match *args {
        [x, y] => Ok(Point2::new(parse_coordinate(x)?, parse_coordinate(y)?)),
        _ => Err(ParseEventError::WrongArity {
            kind,
            expected: 2,
            found: args.len(),
        }),
    }
}

impl FromStr for EditorEvent<Point2<NativeFloat>> {
    type Err = ParseEventError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let kind = tokens.next().ok_or(ParseEventError::Empty)?;
        let args: Vec<&str> = tokens.collect();

        match kind {
            "left" | "select" => Ok(EditorEvent::Select {
                screen: parse_pair("left", &args)?,
            }),
            "right" | "drag" | "move" => Ok(EditorEvent::Drag {
                data: parse_pair("right", &args)?,
            }),
            "key" => match *args.as_slice() {
                [name] => Ok(EditorEvent::KeyPress(name.parse()?)),
                _ => Err(ParseEventError::WrongArity {
                    kind: "key",
                    expected: 1,
                    found: args.len(),
                }),
            },
            other => Err(ParseEventError::UnknownKind(other.to_string())),
        }
    }
}
