//! Module discovery.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::config::ScanConfig;
use crate::error::Result;

use super::builtins::{BuiltinCatalog, BuiltinModules, BuiltinSource};
use super::editor::EditorValues;
use super::scanner::{find_candidates, MatchMode};

/// Module name reserved by the host runtime.
pub const DEFAULT_RESERVED_MODULE: &str = "electron";

/// Finds externally-required module names in source text.
///
/// The built-in module list is loaded on the first discovery call and reused
/// for the lifetime of the discoverer.
pub struct Discoverer {
    match_mode: MatchMode,
    reserved_module: String,
    ignore: Vec<String>,
    catalog: Box<dyn BuiltinCatalog>,
    builtins: OnceLock<BuiltinModules>,
}

impl Default for Discoverer {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::default(),
            reserved_module: DEFAULT_RESERVED_MODULE.to_string(),
            ignore: Vec::new(),
            catalog: Box::new(BuiltinSource::Bundled),
            builtins: OnceLock::new(),
        }
    }
}

impl std::fmt::Debug for Discoverer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Discoverer")
            .field("match_mode", &self.match_mode)
            .field("reserved_module", &self.reserved_module)
            .field("ignore", &self.ignore)
            .field("catalog", &self.catalog.describe())
            .finish()
    }
}

impl Discoverer {
    /// Create a discoverer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a discoverer from the `scan` section of the configuration.
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new()
            .with_match_mode(config.match_mode)
            .with_reserved_module(&config.reserved_module)
            .with_ignore(config.ignore.clone())
            .with_catalog(Box::new(config.builtins.clone()))
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn with_reserved_module(mut self, name: &str) -> Self {
        self.reserved_module = name.to_string();
        self
    }

    /// Extra names that are never reported.
    pub fn with_ignore(mut self, ignore: Vec<String>) -> Self {
        self.ignore = ignore;
        self
    }

    /// Replace the built-in list source. Drops any cached list.
    pub fn with_catalog(mut self, catalog: Box<dyn BuiltinCatalog>) -> Self {
        self.catalog = catalog;
        self.builtins = OnceLock::new();
        self
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// The built-in module list, loading it if this is the first use.
    pub fn builtins(&self) -> Result<&BuiltinModules> {
        if let Some(builtins) = self.builtins.get() {
            return Ok(builtins);
        }
        let loaded = self.catalog.load()?;
        Ok(self.builtins.get_or_init(|| loaded))
    }

    /// Discover external module names in a single text.
    pub fn discover_in_text(&self, source: &str) -> Result<Vec<String>> {
        let builtins = self.builtins()?;

        let modules = find_candidates(source, self.match_mode)
            .into_iter()
            .filter(|candidate| {
                let keep = self.is_external(candidate, builtins);
                if !keep {
                    tracing::debug!("Skipping non-external module '{}'", candidate);
                }
                keep
            })
            .collect();

        Ok(modules)
    }

    /// Discover external module names across several texts.
    ///
    /// Results are concatenated in the order the texts are supplied.
    /// Duplicates are kept; see [`dedupe`].
    pub fn discover_in_editors<'a, I>(&self, sources: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut modules = Vec::new();
        for source in sources {
            modules.extend(self.discover_in_text(source)?);
        }
        Ok(modules)
    }

    /// Discover external module names in every editor of a project.
    pub fn discover_in_values(&self, values: &EditorValues) -> Result<Vec<String>> {
        self.discover_in_editors(values.files())
    }

    fn is_external(&self, candidate: &str, builtins: &BuiltinModules) -> bool {
        !candidate.is_empty()
            && candidate != self.reserved_module
            && !builtins.contains(candidate)
            && !candidate.starts_with('.')
            && !self.ignore.iter().any(|name| name == candidate)
    }
}

/// Remove repeated names, keeping the first occurrence of each.
pub fn dedupe(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
