//! Built-in module lists.
//!
//! The set of module names the host runtime provides on its own. Anything in
//! this set never needs installing. A list that cannot be obtained is an
//! error: treating every candidate as external would silently install
//! packages named `fs` or `path`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ModsyncError, Result};
use crate::shell;

/// Scheme prefix that marks a module as built-in regardless of the list.
pub const NODE_SCHEME: &str = "node:";

const BUNDLED_LIST: &str = include_str!("../../data/builtin-modules.txt");

const NODE_QUERY: &str = "console.log(require('module').builtinModules.join('\\n'))";

/// Immutable set of built-in module names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuiltinModules {
    names: HashSet<String>,
}

impl BuiltinModules {
    /// Build a set from an iterator of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether `name` is provided by the runtime.
    pub fn contains(&self, name: &str) -> bool {
        name.starts_with(NODE_SCHEME) || self.names.contains(name)
    }

    /// Number of names in the list.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Something that can produce the built-in module list on demand.
pub trait BuiltinCatalog: Send + Sync {
    /// Short description used in errors and logs.
    fn describe(&self) -> String;

    /// Load the list.
    fn load(&self) -> Result<BuiltinModules>;
}

/// Where the built-in module list comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BuiltinSource {
    /// The list compiled into the binary.
    #[default]
    Bundled,

    /// Ask the local `node` executable.
    Node,

    /// A newline-separated file or a JSON array of strings.
    File {
        /// Path to the list
        path: PathBuf,
    },
}

impl BuiltinCatalog for BuiltinSource {
    fn describe(&self) -> String {
        match self {
            Self::Bundled => "bundled".to_string(),
            Self::Node => "node".to_string(),
            Self::File { path } => format!("file {}", path.display()),
        }
    }

    fn load(&self) -> Result<BuiltinModules> {
        let names = match self {
            Self::Bundled => parse_list(BUNDLED_LIST),
            Self::Node => query_node()?,
            Self::File { path } => read_list_file(path)?,
        };

        if names.is_empty() {
            return Err(self.unavailable("list is empty"));
        }

        tracing::debug!(
            "Loaded {} built-in modules from {}",
            names.len(),
            self.describe()
        );
        Ok(BuiltinModules::from_names(names))
    }
}

impl BuiltinSource {
    fn unavailable(&self, message: impl Into<String>) -> ModsyncError {
        ModsyncError::BuiltinsUnavailable {
            source_desc: self.describe(),
            message: message.into(),
        }
    }
}

/// Parse a newline-separated list. Blank lines and `#` comments are skipped.
pub fn parse_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn read_list_file(path: &Path) -> Result<Vec<String>> {
    let source = BuiltinSource::File {
        path: path.to_path_buf(),
    };
    let content = fs::read_to_string(path).map_err(|e| source.unavailable(e.to_string()))?;

    if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<String>>(&content)
            .map_err(|e| source.unavailable(format!("malformed JSON list: {}", e)))
    } else {
        Ok(parse_list(&content))
    }
}

fn query_node() -> Result<Vec<String>> {
    let args = vec!["-e".to_string(), NODE_QUERY.to_string()];

    let result = shell::execute_quiet("node", &args, None)
        .map_err(|e| BuiltinSource::Node.unavailable(e.to_string()))?;

    if !result.success {
        return Err(BuiltinSource::Node.unavailable(format!(
            "node exited with code {:?}: {}",
            result.exit_code,
            result.stderr.trim()
        )));
    }

    Ok(parse_list(&result.stdout))
}
