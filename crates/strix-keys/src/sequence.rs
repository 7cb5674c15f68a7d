//! Key sequence notation.

use crate::KeysError;
use serde::{Serialize, Serializer};

/// Modifier keys held for a chord.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    /// True if no modifier is held.
    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.alt || self.meta || self.shift)
    }
}

/// One element of a key sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyToken {
    /// A bare printable key, e.g. the `,` and `d` of `,d`.
    Char(char),
    /// A `<...>` chord: optional modifiers plus a named key,
    /// e.g. `<Ctrl-Shift-J>` or `<Shift-Escape>`.
    Chord { mods: Modifiers, key: String },
}

/// An ordered sequence of key presses that triggers a bound command when
/// matched in full.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeySeq {
    tokens: Vec<KeyToken>,
}

impl KeySeq {
    /// Parse the host's key notation.
    pub fn parse(sequence: &str) -> Result<Self, KeysError> {
        if sequence.is_empty() {
            return Err(KeysError::EmptySequence);
        }

        let mut tokens = Vec::new();
        let mut chars = sequence.chars();

        while let Some(ch) = chars.next() {
            if ch != '<' {
                tokens.push(KeyToken::Char(ch));
                continue;
            }

            let mut chord = String::new();
            loop {
                match chars.next() {
                    Some('>') => break,
                    Some(c) => chord.push(c),
                    None => {
                        return Err(KeysError::UnclosedChord {
                            sequence: sequence.to_string(),
                        });
                    }
                }
            }
            tokens.push(Self::parse_chord(sequence, &chord)?);
        }

        Ok(Self { tokens })
    }

    fn parse_chord(sequence: &str, chord: &str) -> Result<KeyToken, KeysError> {
        if chord.is_empty() {
            return Err(KeysError::EmptyChord {
                sequence: sequence.to_string(),
            });
        }

        let mut parts: Vec<&str> = chord.split('-').collect();
        let key = parts.pop().unwrap_or_default();
        if key.is_empty() {
            return Err(KeysError::MissingKey {
                sequence: sequence.to_string(),
            });
        }

        let mut mods = Modifiers::default();
        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" => mods.ctrl = true,
                "alt" => mods.alt = true,
                "meta" => mods.meta = true,
                "shift" => mods.shift = true,
                _ => {
                    return Err(KeysError::UnknownModifier {
                        sequence: sequence.to_string(),
                        modifier: part.to_string(),
                    });
                }
            }
        }

        Ok(KeyToken::Chord {
            mods,
            key: key.to_string(),
        })
    }

    /// Tokens in press order.
    pub fn tokens(&self) -> &[KeyToken] {
        &self.tokens
    }

    /// Number of key presses in the sequence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True for a zero-length sequence (never produced by `parse`).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for KeySeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            match token {
                KeyToken::Char(c) => write!(f, "{c}")?,
                KeyToken::Chord { mods, key } => {
                    write!(f, "<")?;
                    if mods.ctrl {
                        write!(f, "Ctrl-")?;
                    }
                    if mods.alt {
                        write!(f, "Alt-")?;
                    }
                    if mods.meta {
                        write!(f, "Meta-")?;
                    }
                    if mods.shift {
                        write!(f, "Shift-")?;
                    }
                    write!(f, "{key}>")?;
                }
            }
        }
        Ok(())
    }
}

impl Serialize for KeySeq {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
