// Practice scale - a named sequence of notes
// Notes persist as a JSON array sorted by the linear beat position of each
// note's start

use crate::sequencer::note::ScaleNote;

/// Errors from encoding or decoding a scale's note list.
#[derive(Debug, thiserror::Error)]
pub enum ScaleError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A user-authored scale: a name plus an ordered list of notes.
///
/// Edit order is arbitrary; persistence sorts ascending by the float beat
/// projection of each start position (not the exact field-wise order), which
/// is the order saved data has always used. The sort is stable, so notes
/// whose projections tie (e.g. differing only in cent) keep edit order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PracticeScale {
    /// Display name of the scale.
    pub name: String,

    /// Notes in edit order.
    notes: Vec<ScaleNote>,
}

impl PracticeScale {
    /// Creates an empty scale.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notes: Vec::new(),
        }
    }

    /// Creates a scale from an existing note list.
    pub fn with_notes(name: impl Into<String>, notes: Vec<ScaleNote>) -> Self {
        Self {
            name: name.into(),
            notes,
        }
    }

    /// Get all notes, in edit order.
    pub fn notes(&self) -> &[ScaleNote] {
        &self.notes
    }

    /// Add a note to the scale.
    pub fn add_note(&mut self, note: ScaleNote) {
        self.notes.push(note);
    }

    /// Replace the note list.
    pub fn set_notes(&mut self, notes: Vec<ScaleNote>) {
        self.notes = notes;
    }

    /// Clear all notes.
    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// Get the number of notes.
    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// Check if the scale is empty.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes sorted ascending by `position.beats()`, the persistence order.
    pub fn sorted_notes(&self) -> Vec<ScaleNote> {
        let mut notes = self.notes.clone();
        notes.sort_by(|a, b| a.position.beats().total_cmp(&b.position.beats()));
        notes
    }

    /// Encodes the note list as the persisted JSON array, sorted for storage.
    pub fn notes_to_json(&self) -> Result<String, ScaleError> {
        Ok(serde_json::to_string(&self.sorted_notes())?)
    }

    /// Decodes a persisted JSON note array into a scale. Any note order is
    /// accepted.
    pub fn notes_from_json(name: impl Into<String>, json: &str) -> Result<Self, ScaleError> {
        Ok(Self {
            name: name.into(),
            notes: serde_json::from_str(json)?,
        })
    }
}
