// Note values - named musical durations
// Maps between grid durations and standard note lengths for measure lines
// and gesture snapping

use crate::sequencer::position::NotePosition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard musical note lengths, double whole down to sixty-fourth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteValue {
    DoubleWhole,
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
    SixtyFourth,
}

impl NoteValue {
    /// Canonical grid duration of this note value.
    ///
    /// Defined for every value, including `DoubleWhole` and `Sixteenth`,
    /// which [`NotePosition::note_value`] never produces.
    pub fn duration(self) -> NotePosition {
        match self {
            NoteValue::DoubleWhole => NotePosition::new(2, 0, 0, 0),
            NoteValue::Whole => NotePosition::new(1, 0, 0, 0),
            NoteValue::Half => NotePosition::new(0, 2, 0, 0),
            NoteValue::Quarter => NotePosition::new(0, 1, 0, 0),
            NoteValue::Eighth => NotePosition::new(0, 0, 2, 0),
            NoteValue::Sixteenth => NotePosition::new(0, 0, 1, 0),
            NoteValue::ThirtySecond => NotePosition::new(0, 0, 0, 120),
            NoteValue::SixtyFourth => NotePosition::new(0, 0, 0, 60),
        }
    }
}

impl fmt::Display for NoteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoteValue::DoubleWhole => "double whole",
            NoteValue::Whole => "whole",
            NoteValue::Half => "half",
            NoteValue::Quarter => "quarter",
            NoteValue::Eighth => "eighth",
            NoteValue::Sixteenth => "sixteenth",
            NoteValue::ThirtySecond => "thirty-second",
            NoteValue::SixtyFourth => "sixty-fourth",
        };
        write!(f, "{}", name)
    }
}

impl NotePosition {
    /// Classifies a duration as a named note value by exact pattern match.
    ///
    /// Whole, half and quarter are matched before eighth, which is matched
    /// before the cent-based values, so a duration of `0.0.0.0` (or any bar
    /// start) classifies as a whole note rather than a quarter. Durations
    /// matching no pattern return `None`; that is expected for off-grid
    /// lengths, not an error.
    pub fn note_value(&self) -> Option<NoteValue> {
        if self.beat == 0 && self.subbeat == 0 && self.cent == 0 {
            Some(NoteValue::Whole)
        } else if self.beat == 2 && self.subbeat == 0 && self.cent == 0 {
            Some(NoteValue::Half)
        } else if self.subbeat == 0 && self.cent == 0 {
            Some(NoteValue::Quarter)
        } else if self.subbeat == 2 && self.cent == 0 {
            Some(NoteValue::Eighth)
        } else if self.cent == 120 {
            Some(NoteValue::ThirtySecond)
        } else if self.cent == 60 {
            Some(NoteValue::SixtyFourth)
        } else {
            None
        }
    }
}
