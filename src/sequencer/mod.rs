// Sequencer module - the musical time core
// Grid positions, note values, notes, scales, and the fixture builder

pub mod builder;
pub mod note;
pub mod note_value;
pub mod position;
pub mod scale;

pub use builder::ScaleBuilder;
pub use note::ScaleNote;
pub use note_value::NoteValue;
pub use position::NotePosition;
pub use scale::{PracticeScale, ScaleError};
