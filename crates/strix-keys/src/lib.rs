//! strix key bindings
//!
//! Key sequences in the host's notation (`,d`, `xx`, `<Ctrl-Shift-J>`)
//! bound to command strings in the host's command language. Sequences are
//! parsed into tokens at build time so malformed notation is rejected
//! before the profile ships; command strings stay opaque apart from chain
//! splitting, argv tokenization, and spawn-directive detection.

mod bindings;
mod command;
mod sequence;

pub use bindings::{Binding, Bindings};
pub use command::{Command, SimpleCommand};
pub use sequence::{KeySeq, KeyToken, Modifiers};

/// Errors raised while parsing key sequences and commands.
#[derive(Debug, thiserror::Error)]
pub enum KeysError {
    #[error("empty key sequence")]
    EmptySequence,

    #[error("unclosed `<` in key sequence {sequence:?}")]
    UnclosedChord { sequence: String },

    #[error("empty chord in key sequence {sequence:?}")]
    EmptyChord { sequence: String },

    #[error("unknown modifier {modifier:?} in key sequence {sequence:?}")]
    UnknownModifier { sequence: String, modifier: String },

    #[error("chord without a key in key sequence {sequence:?}")]
    MissingKey { sequence: String },

    #[error("empty command string")]
    EmptyCommand,
}
