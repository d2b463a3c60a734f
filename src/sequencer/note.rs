// Note representation for the scale grid
// A MIDI note bound to a start position and a duration on the grid

use crate::sequencer::position::NotePosition;
use serde::{Deserialize, Serialize};

/// A MIDI note on the scale grid.
///
/// An immutable value: equality and hashing are structural over all four
/// fields. Pitch and velocity are stored as given; clamping to 0-127 is the
/// caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleNote {
    /// MIDI note number (0-127, where 60 = C4).
    pub midi_note: u8,

    /// MIDI velocity (0-127).
    pub velocity: u8,

    /// Starting position on the grid.
    pub position: NotePosition,

    /// Elapsed length of the note.
    pub duration: NotePosition,
}

impl ScaleNote {
    /// Creates a new note.
    pub fn new(
        midi_note: u8,
        velocity: u8,
        position: NotePosition,
        duration: NotePosition,
    ) -> Self {
        Self {
            midi_note,
            velocity,
            position,
            duration,
        }
    }

    /// Position where the note stops sounding.
    pub fn end_position(&self) -> NotePosition {
        self.position + self.duration
    }

    /// End of the note on the linear beat clock.
    pub fn end_in_beats(&self) -> f32 {
        self.end_position().beats()
    }

    /// Get the note name (e.g. "C4", "A#5").
    pub fn note_name(&self) -> String {
        const NOTE_NAMES: [&str; 12] = [
            "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
        ];

        let octave = (self.midi_note / 12) as i32 - 1;
        let note_index = (self.midi_note % 12) as usize;

        format!("{}{}", NOTE_NAMES[note_index], octave)
    }
}
