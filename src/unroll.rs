//! Runs the DALiuGE translator to unroll a logical graph template.

use crate::error::UnrollError;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Translator executable used when none is configured.
pub const DEFAULT_TRANSLATOR: &str = "dlg";

/// Arguments placed before the LGT path.
const UNROLL_ARGS: [&str; 3] = ["unroll", "-fv", "-L"];

/// Invokes `<program> unroll -fv -L <lgt>` and stores its standard output.
#[derive(Debug, Clone)]
pub struct Unroller {
    program: String,
}

pub struct UnrollerBuilder {
    program: String,
}

impl UnrollerBuilder {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_TRANSLATOR.to_string(),
        }
    }

    /// Uses a different translator executable (a path or a name on `PATH`).
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn build(self) -> Unroller {
        Unroller {
            program: self.program,
        }
    }
}

impl Default for UnrollerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Unroller {
    fn default() -> Self {
        UnrollerBuilder::new().build()
    }
}

impl Unroller {
    pub fn builder() -> UnrollerBuilder {
        UnrollerBuilder::new()
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Unrolls `lgt_path` and writes the physical graph JSON to `output_path`.
    ///
    /// Blocks until the translator exits. The output file is only written when the
    /// translator succeeded and printed something.
    pub fn unroll(
        &self,
        lgt_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<PathBuf, UnrollError> {
        let lgt_path = lgt_path.as_ref();
        let output_path = output_path.as_ref();
        if !lgt_path.is_file() {
            return Err(UnrollError::MissingInput(lgt_path.to_path_buf()));
        }

        log::info!(
            "Unrolling '{}' with '{}'",
            lgt_path.display(),
            self.program
        );
        let output = Command::new(&self.program)
            .args(UNROLL_ARGS)
            .arg(lgt_path)
            .output()
            .map_err(|source| UnrollError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(UnrollError::Failed {
                code: output.status.code(),
                stderr,
            });
        }
        if !stderr.is_empty() {
            log::debug!("Translator diagnostics:\n{}", stderr);
        }
        if output.stdout.iter().all(u8::is_ascii_whitespace) {
            return Err(UnrollError::EmptyOutput(self.program.clone()));
        }

        fs::write(output_path, &output.stdout).map_err(|source| UnrollError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;
        log::info!("  -> Wrote physical graph to '{}'", output_path.display());
        Ok(output_path.to_path_buf())
    }
}

/// Unrolls with the default `dlg` translator.
pub fn unroll_logical_graph(
    lgt_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<PathBuf, UnrollError> {
    Unroller::default().unroll(lgt_path, output_path)
}
