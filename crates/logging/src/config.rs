//! crates/logging/src/config.rs
//! Verbosity configuration built from `-v` counts and `--debug` tokens.

use super::levels::{DebugFlag, DebugLevels};

/// Combined verbosity configuration.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a verbose level.
    ///
    /// Two `-v` flags report every include/exclude decision; three or more
    /// also report rule additions, list clearing and exclude list exchange.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        match level {
            0 | 1 => {}
            2 => {
                config.debug.filter = 1;
            }
            _ => {
                config.debug.filter = 2;
                config.debug.proto = 1;
            }
        }

        config
    }

    /// Apply a single debug flag token (e.g., "filter2", "proto").
    ///
    /// The pseudo flag `all` sets every category at once.
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        if name == "all" {
            self.debug.set_all(level);
            return Ok(());
        }

        let flag =
            DebugFlag::from_name(name).ok_or_else(|| format!("unknown debug flag: {name}"))?;
        self.debug.set(flag, level);
        Ok(())
    }
}

/// Parse a flag token like "filter2" into ("filter", 2) or "proto" into ("proto", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(pos) => {
            let level = token[pos..]
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((&token[..pos], level))
        }
        None => Ok((token, 1)),
    }
}
