//! Interactive selection through an external menu program.
//!
//! The rest of the crate only sees the [`Picker`] trait: offer some lines
//! under a prompt, get back what the user chose. [`RofiPicker`] is the real
//! implementation; tests substitute in-memory pickers.

mod rofi;

pub use rofi::RofiPicker;

use crate::error::Result;
use async_trait::async_trait;

/// Raw outcome of one picker invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Chosen line with its line terminator removed.
    pub text: String,
    /// Exit code of the picker process (`-1` if it was killed by a signal).
    pub exit_code: i32,
}

impl Selection {
    pub fn new(text: impl Into<String>, exit_code: i32) -> Self {
        let mut text = text.into();
        let trimmed_len = text.trim_end_matches(['\n', '\r']).len();
        text.truncate(trimmed_len);
        Self { text, exit_code }
    }

    /// A cancelled picker (Escape in rofi) prints nothing.
    pub fn cancelled(exit_code: i32) -> Self {
        Self {
            text: String::new(),
            exit_code,
        }
    }

    /// Empty or whitespace-only output means the user backed out.
    pub fn is_cancelled(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Something that can present a list and return the user's choice.
#[async_trait]
pub trait Picker: Send + Sync {
    /// Show `lines` under `prompt` and block until the user picks or cancels.
    async fn show(&self, prompt: &str, lines: &[String]) -> Result<Selection>;
}

/// Decode picker output as UTF-8, dropping invalid byte sequences.
pub fn decode_permissive(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
