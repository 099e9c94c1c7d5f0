use anyhow::{anyhow, Result};
use log::trace;
use serde::{Deserialize, Serialize};

/// Code point and byte counts for a piece of UTF-8 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub code_points: usize,
    pub bytes: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let stats = Self {
            code_points: count_code_points(text),
            bytes: byte_len(text),
        };
        trace!("Measured {:?}: {:?}", text, stats);
        stats
    }

    /// Decode `bytes` as UTF-8 and measure the result.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            anyhow!(
                "Invalid UTF-8 at byte offset {}: {}",
                e.valid_up_to(),
                e
            )
        })?;
        Ok(Self::of(text))
    }

    /// True when every code point fits in a single byte.
    pub fn is_ascii(&self) -> bool {
        self.code_points == self.bytes
    }
}

/// Number of Unicode scalar values in `text`.
pub fn count_code_points(text: &str) -> usize {
    text.chars().count()
}

/// Number of bytes `text` occupies in UTF-8.
pub fn byte_len(text: &str) -> usize {
    text.len()
}
