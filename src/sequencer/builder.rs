// Builder to help quickly construct midi lines
// Keeps a running cursor so fixtures and experiments don't do position
// bookkeeping by hand

use crate::sequencer::note::ScaleNote;
use crate::sequencer::position::NotePosition;

/// Velocity applied to every built note.
const BUILD_VELOCITY: u8 = 60;

/// Fluent builder for note sequences.
///
/// The cursor starts at zero and the current duration at one beat. `play`
/// emits a note at the cursor; both `play` and `rest` then advance the
/// cursor by the current duration, so the n-th note's position is exactly
/// the sum of the durations applied by the preceding calls.
#[derive(Debug, Clone)]
pub struct ScaleBuilder {
    current_duration: NotePosition,
    cursor: NotePosition,
    notes: Vec<ScaleNote>,
}

impl ScaleBuilder {
    /// Creates a builder with the cursor at zero and a one-beat duration.
    pub fn new() -> Self {
        Self {
            current_duration: NotePosition::new(0, 1, 0, 0),
            cursor: NotePosition::zero(),
            notes: Vec::new(),
        }
    }

    /// Sets the duration applied to subsequent notes and rests.
    pub fn duration(self, beat: i32) -> Self {
        self.duration_parts(beat, 0)
    }

    /// Sets the duration with a subbeat component.
    pub fn duration_parts(mut self, beat: i32, subbeat: i32) -> Self {
        self.current_duration = NotePosition::new(0, beat, subbeat, 0);
        self
    }

    /// Advances the cursor without emitting a note.
    pub fn rest(mut self) -> Self {
        self.cursor = self.current_duration + self.cursor;
        self
    }

    /// Emits a note at the cursor, then advances past it.
    pub fn play(mut self, midi_note: u8) -> Self {
        self.notes.push(ScaleNote::new(
            midi_note,
            BUILD_VELOCITY,
            self.cursor,
            self.current_duration,
        ));
        self.cursor = self.current_duration + self.cursor;
        self
    }

    /// The accumulated notes, in emission order.
    pub fn notes(self) -> Vec<ScaleNote> {
        self.notes
    }
}

impl Default for ScaleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_emits_at_cursor() {
        let notes = ScaleBuilder::new().play(60).play(62).notes();

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].position, NotePosition::zero());
        assert_eq!(notes[0].duration, NotePosition::new(0, 1, 0, 0));
        assert_eq!(notes[0].velocity, 60);
        assert_eq!(notes[1].position, NotePosition::new(0, 1, 0, 0));
    }

    #[test]
    fn test_rest_advances_without_emitting() {
        let notes = ScaleBuilder::new().rest().play(60).notes();

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].position, NotePosition::new(0, 1, 0, 0));
    }

    #[test]
    fn test_duration_applies_to_following_calls() {
        let notes = ScaleBuilder::new()
            .duration(1)
            .play(60)
            .duration(2)
            .rest()
            .play(62)
            .notes();

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].position, NotePosition::zero());
        assert_eq!(notes[0].duration, NotePosition::new(0, 1, 0, 0));
        // 1 beat (first play) + 2 beats (rest) = beat 3
        assert_eq!(notes[1].position, NotePosition::new(0, 3, 0, 0));
        assert_eq!(notes[1].duration, NotePosition::new(0, 2, 0, 0));
    }

    #[test]
    fn test_subbeat_durations_carry_across_bars() {
        // Eight dotted-ish 1.2 durations: 8 * 1.5 beats = 12 beats = 3 bars
        let mut builder = ScaleBuilder::new().duration_parts(1, 2);
        for pitch in [60, 62, 64, 65, 67, 69, 71, 72] {
            builder = builder.play(pitch);
        }
        let notes = builder.notes();

        assert_eq!(notes.len(), 8);
        assert_eq!(notes[7].position, NotePosition::new(2, 2, 2, 0));
        assert_eq!(notes[7].end_position(), NotePosition::new(3, 0, 0, 0));
    }
}
