// ScalePlayer core - musical time model for scale practice
// Library exports for consumers and tests

pub mod sequencer;

// Re-export commonly used types for convenience
pub use sequencer::{
    NotePosition, NoteValue, PracticeScale, ScaleBuilder, ScaleError, ScaleNote,
};
