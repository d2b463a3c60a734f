// Grid position - musical time representation
// A bar.beat.subbeat.cent timestamp with exact integer carry/borrow arithmetic

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A position (or duration) on the scale grid.
///
/// The grid is a fixed mixed-radix numeral system: 240 cents per subbeat,
/// 4 subbeats per beat, 4 beats per bar, with `bar` unbounded. Arithmetic is
/// exact over the integer components, so repeated grid snapping never
/// accumulates the drift a floating beat count would. `beats()` provides the
/// lossy float projection that playback and rendering consume.
///
/// Values built through [`NotePosition::new`] or the arithmetic operators are
/// always normalized (each component in range, overflow carried upward).
/// Ordering is lexicographic by field: bar, then beat, subbeat, cent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NotePosition {
    /// Bar number (unbounded).
    pub bar: i32,
    /// Beat within the bar, 0..4.
    pub beat: i32,
    /// Subbeat within the beat, 0..4.
    pub subbeat: i32,
    /// Cent within the subbeat, 0..240.
    pub cent: i32,
}

impl NotePosition {
    /// Cents per subbeat.
    pub const CENTS_PER_SUBBEAT: i32 = 240;

    /// Subbeats per beat.
    pub const SUBBEATS_PER_BEAT: i32 = 4;

    /// Beats per bar.
    pub const BEATS_PER_BAR: i32 = 4;

    /// Creates a position, carrying any out-of-range component into the next
    /// higher field so that `cent`, `subbeat` and `beat` land in range.
    /// Negative components borrow downward the same way, ending up in `bar`.
    pub fn new(bar: i32, beat: i32, subbeat: i32, cent: i32) -> Self {
        let carry = cent.div_euclid(Self::CENTS_PER_SUBBEAT);
        let cent = cent.rem_euclid(Self::CENTS_PER_SUBBEAT);

        let subbeat = subbeat + carry;
        let carry = subbeat.div_euclid(Self::SUBBEATS_PER_BEAT);
        let subbeat = subbeat.rem_euclid(Self::SUBBEATS_PER_BEAT);

        let beat = beat + carry;
        let carry = beat.div_euclid(Self::BEATS_PER_BAR);
        let beat = beat.rem_euclid(Self::BEATS_PER_BAR);

        Self {
            bar: bar + carry,
            beat,
            subbeat,
            cent,
        }
    }

    /// Zero position, the start of the grid.
    pub fn zero() -> Self {
        Self {
            bar: 0,
            beat: 0,
            subbeat: 0,
            cent: 0,
        }
    }

    /// True if the position sits exactly on the start of a bar.
    pub fn is_bar_position(&self) -> bool {
        self.beat == 0 && self.subbeat == 0 && self.cent == 0
    }

    /// Linear beat count of this position.
    ///
    /// Ignores `cent`, so positions differing only in cent project to the
    /// same beat; saved scales and playback timing depend on exactly this.
    // TODO: remove the hardcoded 4 beats per bar once the time signature is
    // carried with the scale instead of the editor
    pub fn beats(&self) -> f32 {
        self.beat as f32 + self.bar as f32 * 4.0 + self.subbeat as f32 / 4.0
    }
}

impl Default for NotePosition {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for NotePosition {
    type Output = NotePosition;

    /// Component-wise addition with carry propagation from cent up to bar.
    fn add(self, rhs: NotePosition) -> NotePosition {
        let mut cent = self.cent + rhs.cent;
        let subbeat_carry = cent / Self::CENTS_PER_SUBBEAT;
        cent -= subbeat_carry * Self::CENTS_PER_SUBBEAT;

        let mut subbeat = self.subbeat + rhs.subbeat + subbeat_carry;
        let beat_carry = subbeat / Self::SUBBEATS_PER_BEAT;
        subbeat -= beat_carry * Self::SUBBEATS_PER_BEAT;

        let mut beat = self.beat + rhs.beat + beat_carry;
        let bar_carry = beat / Self::BEATS_PER_BAR;
        beat -= bar_carry * Self::BEATS_PER_BAR;

        NotePosition {
            bar: self.bar + rhs.bar + bar_carry,
            beat,
            subbeat,
            cent,
        }
    }
}

impl Sub for NotePosition {
    type Output = NotePosition;

    /// Component-wise subtraction with borrow propagation from cent up to
    /// bar, saturating at [`NotePosition::zero`] when `rhs > self`.
    ///
    /// Callers must not rely on the result to detect underflow; compare the
    /// operands first if the distinction matters.
    fn sub(self, rhs: NotePosition) -> NotePosition {
        let mut cent = self.cent - rhs.cent;
        let mut subbeat_borrow = 0;
        if cent < 0 {
            subbeat_borrow = 1 + -cent / Self::CENTS_PER_SUBBEAT;
            cent += subbeat_borrow * Self::CENTS_PER_SUBBEAT;
        }

        let mut subbeat = self.subbeat - rhs.subbeat - subbeat_borrow;
        let mut beat_borrow = 0;
        if subbeat < 0 {
            beat_borrow = 1 + -subbeat / Self::SUBBEATS_PER_BEAT;
            subbeat += beat_borrow * Self::SUBBEATS_PER_BEAT;
        }

        let mut beat = self.beat - rhs.beat - beat_borrow;
        let mut bar_borrow = 0;
        if beat < 0 {
            bar_borrow = 1 + -beat / Self::BEATS_PER_BAR;
            beat += bar_borrow * Self::BEATS_PER_BAR;
        }

        let bar = self.bar - rhs.bar - bar_borrow;
        if bar < 0 {
            NotePosition::zero()
        } else {
            NotePosition {
                bar,
                beat,
                subbeat,
                cent,
            }
        }
    }
}

impl fmt::Display for NotePosition {
    /// Grid label: trailing zero components are omitted, so a bar start
    /// prints as `2`, a beat as `2.1`, and so on down to `2.1.3.120`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.beat == 0 && self.subbeat == 0 && self.cent == 0 {
            write!(f, "{}", self.bar)
        } else if self.subbeat == 0 && self.cent == 0 {
            write!(f, "{}.{}", self.bar, self.beat)
        } else if self.cent == 0 {
            write!(f, "{}.{}.{}", self.bar, self.beat, self.subbeat)
        } else {
            write!(f, "{}.{}.{}.{}", self.bar, self.beat, self.subbeat, self.cent)
        }
    }
}
