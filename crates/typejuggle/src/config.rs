use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const LOSSY_ENV: &str = "TYPEJUGGLE_LOSSY";
pub const STRICT_ENV: &str = "TYPEJUGGLE_STRICT";

/// Knobs for a single `fill_fields_with` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Permit scalar coercions that may lose precision or overflow.
    pub lossy: bool,
    /// Fail with every recorded mismatch once the traversal finishes.
    pub strict: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lossy(mut self, lossy: bool) -> Self {
        self.lossy = lossy;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Options taken from `TYPEJUGGLE_LOSSY` / `TYPEJUGGLE_STRICT`,
    /// read once per process.
    pub fn from_env() -> Self {
        Self {
            lossy: lossy_mode(),
            strict: strict_mode(),
        }
    }
}

pub(crate) fn flag_enabled(val: &str) -> bool {
    let trimmed = val.trim();
    !trimmed.is_empty() && !matches!(trimmed, "0" | "false" | "FALSE" | "False")
}

fn env_true(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|val| flag_enabled(&val))
}

fn bool_from_env(key: &str) -> bool {
    env_true(key).unwrap_or(false)
}

pub fn lossy_mode() -> bool {
    static LOSSY: OnceLock<bool> = OnceLock::new();
    *LOSSY.get_or_init(|| bool_from_env(LOSSY_ENV))
}

pub fn strict_mode() -> bool {
    static STRICT: OnceLock<bool> = OnceLock::new();
    *STRICT.get_or_init(|| bool_from_env(STRICT_ENV))
}
