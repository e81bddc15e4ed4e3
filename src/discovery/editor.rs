//! Editor contents.
//!
//! The text of a playground project: a main-process file, a renderer file
//! and, optionally, a preload script.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ModsyncError, Result};

/// File names used when reading editor contents from a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorFiles {
    /// Main-process source file
    pub main: PathBuf,

    /// Renderer source file
    pub renderer: PathBuf,

    /// Optional preload script; skipped when the file does not exist
    pub preload: PathBuf,
}

impl Default for EditorFiles {
    fn default() -> Self {
        Self {
            main: PathBuf::from("main.js"),
            renderer: PathBuf::from("renderer.js"),
            preload: PathBuf::from("preload.js"),
        }
    }
}

/// Source text of each editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorValues {
    pub main: String,
    pub renderer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preload: Option<String>,
}

impl EditorValues {
    /// Create values for the two required editors.
    pub fn new(main: impl Into<String>, renderer: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            renderer: renderer.into(),
            preload: None,
        }
    }

    /// Attach a preload script.
    pub fn with_preload(mut self, preload: impl Into<String>) -> Self {
        self.preload = Some(preload.into());
        self
    }

    /// Texts in scan order: main, renderer, then preload if present.
    pub fn files(&self) -> Vec<&str> {
        let mut files = vec![self.main.as_str(), self.renderer.as_str()];
        if let Some(preload) = &self.preload {
            files.push(preload);
        }
        files
    }

    /// Read editor contents from `dir` using the given file names.
    ///
    /// `main` and `renderer` must exist; `preload` is optional.
    pub fn from_dir(dir: &Path, files: &EditorFiles) -> Result<Self> {
        let main = read_required(&dir.join(&files.main))?;
        let renderer = read_required(&dir.join(&files.renderer))?;

        let preload_path = dir.join(&files.preload);
        let preload = if preload_path.is_file() {
            Some(fs::read_to_string(&preload_path)?)
        } else {
            None
        };

        Ok(Self {
            main,
            renderer,
            preload,
        })
    }

    /// Read editor contents from a JSON document with `main`, `renderer`
    /// and optional `preload` string fields.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = read_required(path)?;
        serde_json::from_str(&content).map_err(|e| ModsyncError::EditorParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

fn read_required(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ModsyncError::EditorSourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ModsyncError::Io(e)
        }
    })
}
