//! Command strings.
//!
//! Commands are written in the host's own command language and stay
//! opaque to us: we never validate command names. The model only splits
//! `;;` chains, tokenizes arguments with quote awareness, and surfaces
//! the argv of process-spawning directives so the profile can be
//! inspected without executing anything.

use crate::KeysError;
use serde::{Serialize, Serializer};

/// One command of a chain: a name plus tokenized arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleCommand {
    name: String,
    args: Vec<String>,
}

impl SimpleCommand {
    /// Command name, e.g. `spawn` or `config-cycle`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tokenized arguments with quotes stripped.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Argument vector of the external process this command launches,
    /// if it is a spawn directive.
    ///
    /// Covers `spawn [--flags] argv...` and the hint form
    /// `hint <group> spawn argv...`. Leading `--` flags belong to the
    /// directive itself, not the process.
    pub fn spawn_argv(&self) -> Option<&[String]> {
        let after_spawn = match self.name.as_str() {
            "spawn" => &self.args[..],
            "hint" => {
                let pos = self.args.iter().position(|a| a == "spawn")?;
                &self.args[pos + 1..]
            }
            _ => return None,
        };

        let start = after_spawn
            .iter()
            .position(|a| !a.starts_with("--"))
            .unwrap_or(after_spawn.len());
        Some(&after_spawn[start..])
    }
}

/// A bound command string: the raw text plus its parsed chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    raw: String,
    chain: Vec<SimpleCommand>,
}

impl Command {
    /// Parse a command string. Chains split on `;;`; arguments split on
    /// whitespace outside quotes.
    pub fn parse(raw: &str) -> Result<Self, KeysError> {
        if raw.trim().is_empty() {
            return Err(KeysError::EmptyCommand);
        }

        let mut chain = Vec::new();
        for part in raw.split(";;") {
            let tokens = tokenize(part);
            if let Some((name, args)) = tokens.split_first() {
                chain.push(SimpleCommand {
                    name: name.clone(),
                    args: args.to_vec(),
                });
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            chain,
        })
    }

    /// The command string as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parsed chain in execution order.
    pub fn chain(&self) -> &[SimpleCommand] {
        &self.chain
    }

    /// Argv of the first spawn directive in the chain, if any.
    pub fn spawn_argv(&self) -> Option<&[String]> {
        self.chain.iter().find_map(SimpleCommand::spawn_argv)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// Split a command into tokens, honoring single and double quotes.
/// Quotes group text into one token and are stripped; there is no escape
/// character, matching the host's splitter.
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for ch in text.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '\'' || ch == '"' => {
                quote = Some(ch);
                in_token = true;
            }
            None if ch.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(ch);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }

    tokens
}
