//! Authentication tokens with an interactive fallback.

use std::fmt;
use std::io;

use super::{FlagValue, ValueError, ValueKind};

/// Reads a token when the flag is given without one.
pub type TokenPrompt = fn() -> io::Result<String>;

/// Masked terminal prompt.
fn prompt_terminal() -> io::Result<String> {
    rpassword::prompt_password("Enter authentication token: ")
}

/// A secret token.
///
/// `-auth TOKEN` stores the token; a bare `-auth` (or a boolean-like value
/// such as `true`) asks for it through the [`TokenPrompt`], which defaults to
/// a masked terminal prompt. The token is never shown by `Debug`.
#[derive(Clone)]
pub struct Auth {
    token: String,
    prompt: TokenPrompt,
}

impl Auth {
    /// Creates an empty token that prompts on the terminal.
    #[must_use]
    pub fn new() -> Self {
        Self::with_prompt(prompt_terminal)
    }

    /// Creates an empty token read through `prompt`.
    #[must_use]
    pub const fn with_prompt(prompt: TokenPrompt) -> Self {
        Self {
            token: String::new(),
            prompt,
        }
    }

    /// The token; empty when none was given.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Default for Auth {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .finish_non_exhaustive()
    }
}

impl FlagValue for Auth {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        self.token = if is_bool_like(raw) {
            (self.prompt)().map_err(|source| ValueError::Prompt { source })?
        } else {
            raw.to_owned()
        };
        Ok(())
    }

    fn render(&self) -> String {
        self.token.clone()
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Optional("string")
    }
}

fn is_bool_like(raw: &str) -> bool {
    matches!(raw, "true" | "TRUE" | "True" | "t" | "T" | "1")
}
