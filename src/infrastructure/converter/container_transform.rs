//! container-transform converter
//!
//! Runs the `container-transform` image with the compose file on stdin and
//! reads an ECS task definition from stdout.

use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::ConverterConfig;
use crate::domain::entities::TaskDefinition;
use crate::domain::ports::{ConversionError, TaskConverter};

/// Converter that shells out to an external program
pub struct ContainerTransformConverter {
    program: String,
    args: Vec<String>,
}

impl ContainerTransformConverter {
    /// `docker run --rm -i <image>`
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::with_command(
            &config.program,
            vec![
                "run".to_string(),
                "--rm".to_string(),
                "-i".to_string(),
                config.image.clone(),
            ],
        )
    }

    /// Any program that reads a compose file on stdin and writes a task
    /// definition on stdout
    pub fn with_command(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn parse_output(stdout: &[u8]) -> Result<TaskDefinition, ConversionError> {
        let document: serde_json::Value =
            serde_json::from_slice(stdout).map_err(|e| ConversionError::MalformedOutput {
                message: e.to_string(),
            })?;

        TaskDefinition::from_document(document).map_err(|e| ConversionError::MalformedOutput {
            message: e.to_string(),
        })
    }
}

impl TaskConverter for ContainerTransformConverter {
    fn convert(&self, path: &Path) -> Result<TaskDefinition, ConversionError> {
        let input = File::open(path).map_err(|source| ConversionError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::from(input))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ConversionError::Unavailable {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ConversionError::ConversionFailure {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Self::parse_output(&output.stdout)
    }
}
