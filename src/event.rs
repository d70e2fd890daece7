//! Decoding of legacy mouse records (`/dev/input/mice` style).
//!
//! Every record is exactly three bytes: a button bitmask followed by the
//! signed horizontal and vertical deltas.

use bitflags::bitflags;
use std::fmt;
use std::io::{self, Read};
use thiserror::Error;

/// Size in bytes of one record as produced by the kernel's mousedev protocol.
pub const RECORD_SIZE: usize = 3;

bitflags! {
    /// Button state carried in the first byte of a record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Buttons: u8 {
        const LEFT   = 0x01;
        const RIGHT  = 0x02;
        const MIDDLE = 0x04;
    }
}

/// A single decoded record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub left_pressed: bool,
    pub middle_pressed: bool,
    pub right_pressed: bool,
    /// Negative is leftward motion.
    pub delta_x: i8,
    /// Negative is upward motion.
    pub delta_y: i8,
}

impl MouseEvent {
    /// Decodes one raw record. Bits above the middle button are ignored.
    #[must_use]
    pub fn decode(record: [u8; RECORD_SIZE]) -> Self {
        let buttons = Buttons::from_bits_truncate(record[0]);
        MouseEvent {
            left_pressed: buttons.contains(Buttons::LEFT),
            middle_pressed: buttons.contains(Buttons::MIDDLE),
            right_pressed: buttons.contains(Buttons::RIGHT),
            delta_x: record[1] as i8,
            delta_y: record[2] as i8,
        }
    }

    /// Returns the pressed buttons as a flag set.
    #[must_use]
    pub fn buttons(&self) -> Buttons {
        let mut buttons = Buttons::empty();
        buttons.set(Buttons::LEFT, self.left_pressed);
        buttons.set(Buttons::RIGHT, self.right_pressed);
        buttons.set(Buttons::MIDDLE, self.middle_pressed);
        buttons
    }

    #[inline]
    pub fn horizontal_glyph(&self) -> Glyph {
        horizontal_glyph(self.delta_x)
    }

    #[inline]
    pub fn vertical_glyph(&self) -> Glyph {
        vertical_glyph(self.delta_y)
    }
}

/// Renders the line printed for each event, without the trailing newline.
impl fmt::Display for MouseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (x: {}, y: {})",
            self.horizontal_glyph(),
            self.vertical_glyph(),
            self.delta_x,
            self.delta_y
        )
    }
}

/// Direction marker for one axis of motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Left,
    Right,
    Up,
    Down,
    /// No motion on the axis, printed as a blank.
    None,
}

impl Glyph {
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Glyph::Left => '←',
            Glyph::Right => '→',
            Glyph::Up => '↑',
            Glyph::Down => '↓',
            Glyph::None => ' ',
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Picks the glyph for a horizontal delta.
#[inline]
pub fn horizontal_glyph(dx: i8) -> Glyph {
    match dx {
        d if d < 0 => Glyph::Left,
        d if d > 0 => Glyph::Right,
        _ => Glyph::None,
    }
}

/// Picks the glyph for a vertical delta. Positive values point down.
#[inline]
pub fn vertical_glyph(dy: i8) -> Glyph {
    match dy {
        d if d < 0 => Glyph::Up,
        d if d > 0 => Glyph::Down,
        _ => Glyph::None,
    }
}

/// Failure to read a whole record. End of stream and I/O errors are not
/// told apart by the caller.
#[derive(Debug, Error)]
#[error("failed to read mouse record: {source}")]
pub struct ReadError {
    #[from]
    source: io::Error,
}

impl ReadError {
    /// True when the source closed before a full record arrived.
    pub fn is_eof(&self) -> bool {
        self.source.kind() == io::ErrorKind::UnexpectedEof
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

/// Reads exactly one record from the reader and decodes it.
/// Blocks until three bytes are available.
pub fn read_event(reader: &mut impl Read) -> Result<MouseEvent, ReadError> {
    let mut buf = [0u8; RECORD_SIZE];
    reader.read_exact(&mut buf)?;
    Ok(MouseEvent::decode(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn decodes_rightward_motion() {
        let ev = MouseEvent::decode([0x00, 0x05, 0x00]);
        assert_eq!(ev.delta_x, 5);
        assert_eq!(ev.delta_y, 0);
        assert_eq!(ev.buttons(), Buttons::empty());
        assert_eq!(ev.to_string(), "→   (x: 5, y: 0)");
    }

    #[test]
    fn decodes_left_button_with_motion() {
        let ev = MouseEvent::decode([0x01, 0xFB, 0x03]);
        assert!(ev.left_pressed);
        assert!(!ev.middle_pressed);
        assert!(!ev.right_pressed);
        assert_eq!((ev.delta_x, ev.delta_y), (-5, 3));
        assert_eq!(ev.to_string(), "← ↓ (x: -5, y: 3)");
    }

    #[test]
    fn decodes_middle_button_upward() {
        let ev = MouseEvent::decode([0x04, 0x00, 0xFE]);
        assert!(ev.middle_pressed);
        assert!(!ev.left_pressed && !ev.right_pressed);
        assert_eq!(ev.horizontal_glyph(), Glyph::None);
        assert_eq!(ev.vertical_glyph(), Glyph::Up);
        assert_eq!(ev.to_string(), "  ↑ (x: 0, y: -2)");
    }

    #[test]
    fn delta_extremes() {
        let min = MouseEvent::decode([0x00, 0x80, 0x80]);
        assert_eq!((min.delta_x, min.delta_y), (-128, -128));
        assert_eq!(min.horizontal_glyph(), Glyph::Left);
        assert_eq!(min.vertical_glyph(), Glyph::Up);

        let max = MouseEvent::decode([0x00, 0x7F, 0x7F]);
        assert_eq!((max.delta_x, max.delta_y), (127, 127));
        assert_eq!(max.horizontal_glyph(), Glyph::Right);
        assert_eq!(max.vertical_glyph(), Glyph::Down);
    }

    #[test]
    fn upper_bits_of_button_byte_are_ignored() {
        // 0x08 is the "always one" bit of the PS/2 packet, the rest are sign/overflow bits.
        let ev = MouseEvent::decode([0xFA, 0x00, 0x00]);
        assert!(ev.right_pressed);
        assert!(!ev.left_pressed);
        assert!(!ev.middle_pressed);
        assert_eq!(ev.buttons(), Buttons::RIGHT);
    }

    #[test]
    fn idle_record_prints_blank_glyphs() {
        let ev = MouseEvent::decode([0x00, 0x00, 0x00]);
        assert_eq!(ev.to_string(), "    (x: 0, y: 0)");
    }

    #[test]
    fn read_event_consumes_one_record() {
        let mut src = Cursor::new(vec![0x00, 0x05, 0x00, 0x01, 0xFB, 0x03]);
        let first = read_event(&mut src).unwrap();
        let second = read_event(&mut src).unwrap();
        assert_eq!(first, MouseEvent::decode([0x00, 0x05, 0x00]));
        assert_eq!(second, MouseEvent::decode([0x01, 0xFB, 0x03]));
        let err = read_event(&mut src).unwrap_err();
        assert!(err.is_eof());
    }

    #[test]
    fn short_record_is_a_read_error() {
        let mut src = Cursor::new(vec![0x01, 0x02]);
        let err = read_event(&mut src).unwrap_err();
        assert!(err.is_eof());
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn io_failure_is_a_read_error() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "nope"))
            }
        }
        let err = read_event(&mut Broken).unwrap_err();
        assert!(!err.is_eof());
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
