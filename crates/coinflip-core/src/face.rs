//! Coin faces and legacy value aliases.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoinError;

/// Settled (or pending) face of the coin.
///
/// `Blank` only occurs before the first flip, when no start value was
/// configured; a flip always resolves to `Heads` or `Tails`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Heads,
    Tails,
    Blank,
}

impl Face {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Heads => "heads",
            Self::Tails => "tails",
            Self::Blank => "blank",
        }
    }

    /// Resolve a loosely-typed value into a face.
    ///
    /// Callers predating the enum form pass booleans or numbers; only
    /// `1`/`true` (heads) and `0`/`false` (tails) are honored as aliases.
    /// `null` resolves to `Blank` (an unset start value). Anything else is
    /// [`CoinError::InvalidValue`].
    pub fn resolve(input: &serde_json::Value) -> Result<Self, CoinError> {
        use serde_json::Value;
        match input {
            Value::Null => Ok(Self::Blank),
            Value::Bool(true) => Ok(Self::Heads),
            Value::Bool(false) => Ok(Self::Tails),
            Value::Number(n) => match n.as_i64() {
                Some(1) => Ok(Self::Heads),
                Some(0) => Ok(Self::Tails),
                _ => Err(CoinError::InvalidValue {
                    got: input.to_string(),
                }),
            },
            Value::String(s) => match s.as_str() {
                "heads" => Ok(Self::Heads),
                "tails" => Ok(Self::Tails),
                "blank" => Ok(Self::Blank),
                _ => Err(CoinError::InvalidValue {
                    got: input.to_string(),
                }),
            },
            _ => Err(CoinError::InvalidValue {
                got: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
