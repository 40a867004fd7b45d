//! rofi in dmenu mode as the picker.

use super::{decode_permissive, Picker, Selection};
use crate::config::PickerConfig;
use crate::error::{Result, RofiJiraError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs an external menu program with the offered lines on stdin.
///
/// The lines are staged in a transient file that is rewritten on every call,
/// so a `RofiPicker` must not be shared between concurrent callers.
#[derive(Debug, Clone)]
pub struct RofiPicker {
    program: String,
    args: Vec<String>,
    transient_file: PathBuf,
}

impl RofiPicker {
    /// `rofi -dmenu -i -no-custom`, staging lines in the shared temp file.
    pub fn new() -> Self {
        Self::with_command(
            PickerConfig::PROGRAM,
            PickerConfig::BASE_ARGS.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Use a different menu program. The prompt is appended as
    /// `-p <prompt>` after `args`.
    pub fn with_command(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            transient_file: PickerConfig::transient_file(),
        }
    }

    pub fn with_transient_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.transient_file = path.into();
        self
    }

    pub fn transient_file(&self) -> &Path {
        &self.transient_file
    }

    /// Overwrite the transient file with one row per line.
    async fn stage_lines(&self, lines: &[String]) -> Result<()> {
        let mut contents = String::new();
        for line in lines {
            contents.push_str(line);
            contents.push('\n');
        }

        tokio::fs::write(&self.transient_file, contents)
            .await
            .map_err(|e| RofiJiraError::io_with_path(e, &self.transient_file))
    }
}

impl Default for RofiPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Picker for RofiPicker {
    async fn show(&self, prompt: &str, lines: &[String]) -> Result<Selection> {
        // The write handle is closed before the picker opens the file.
        self.stage_lines(lines).await?;

        let input = std::fs::File::open(&self.transient_file)
            .map_err(|e| RofiJiraError::io_with_path(e, &self.transient_file))?;

        debug!(
            "Running {} with {} lines (prompt {:?})",
            self.program,
            lines.len(),
            prompt
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(PickerConfig::PROMPT_FLAG)
            .arg(prompt)
            .stdin(Stdio::from(input))
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| RofiJiraError::PickerLaunch {
                program: self.program.clone(),
                source: e,
            })?;

        let exit_code = output.status.code().unwrap_or(-1);
        let selection = Selection::new(decode_permissive(&output.stdout), exit_code);
        debug!(
            "{} exited with {} (cancelled: {})",
            self.program,
            exit_code,
            selection.is_cancelled()
        );

        Ok(selection)
    }
}
