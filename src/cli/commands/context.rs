//! Shared setup for commands: configuration, editor sources, targets.

use std::path::{Path, PathBuf};

use crate::cli::args::SourceArgs;
use crate::config::{load_config, ModsyncConfig};
use crate::discovery::{Discoverer, EditorValues, MatchMode};
use crate::error::Result;
use crate::install::{Installer, PackageManager};

/// Project root plus the configuration loaded for it.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub project_root: PathBuf,
    pub config: ModsyncConfig,
}

impl ProjectContext {
    /// Load the configuration for `project_root`.
    pub fn load(project_root: &Path, config_path: Option<&Path>) -> Result<Self> {
        Ok(Self {
            project_root: project_root.to_path_buf(),
            config: load_config(project_root, config_path)?,
        })
    }

    /// Read editor sources, preferring explicit flags over configured names.
    ///
    /// Relative paths resolve against the project root.
    pub fn editor_values(&self, sources: &SourceArgs) -> Result<EditorValues> {
        if let Some(editors) = &sources.editors {
            return EditorValues::from_json_file(&self.resolve(editors));
        }

        let mut files = self.config.editors.clone();
        if let Some(main) = &sources.main {
            files.main = main.clone();
        }
        if let Some(renderer) = &sources.renderer {
            files.renderer = renderer.clone();
        }
        if let Some(preload) = &sources.preload {
            files.preload = preload.clone();
        }

        EditorValues::from_dir(&self.project_root, &files)
    }

    /// Build a discoverer from config, honouring `--first-only`.
    pub fn discoverer(&self, sources: &SourceArgs) -> Discoverer {
        let discoverer = Discoverer::from_config(&self.config.scan);
        if sources.first_only {
            discoverer.with_match_mode(MatchMode::First)
        } else {
            discoverer
        }
    }

    /// Install target: the flag, then `install.dir`, then the project root.
    pub fn install_target(&self, dir: Option<&Path>) -> PathBuf {
        match dir.or(self.config.install.dir.as_deref()) {
            Some(dir) => self.resolve(dir),
            None => self.project_root.clone(),
        }
    }

    /// Build an installer from config, honouring `--package-manager`.
    pub fn installer(&self, package_manager: Option<PackageManager>) -> Installer {
        let mut install = self.config.install.clone();
        if let Some(pm) = package_manager {
            install.package_manager = pm;
        }
        Installer::from_config(&install)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn context(root: &Path) -> ProjectContext {
        ProjectContext::load(root, None).unwrap()
    }

    #[test]
    fn editor_values_use_default_names() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("main.js"), "m").unwrap();
        fs::write(temp.path().join("renderer.js"), "r").unwrap();

        let values = context(temp.path())
            .editor_values(&SourceArgs::default())
            .unwrap();

        assert_eq!(values, EditorValues::new("m", "r"));
    }

    #[test]
    fn flags_override_configured_names() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/app.js"), "m").unwrap();
        fs::write(temp.path().join("renderer.js"), "r").unwrap();
        let sources = SourceArgs {
            main: Some(PathBuf::from("src/app.js")),
            ..Default::default()
        };

        let values = context(temp.path()).editor_values(&sources).unwrap();

        assert_eq!(values.main, "m");
    }

    #[test]
    fn editors_json_takes_priority() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("editors.json"),
            r#"{"main": "a", "renderer": "b"}"#,
        )
        .unwrap();
        let sources = SourceArgs {
            editors: Some(PathBuf::from("editors.json")),
            ..Default::default()
        };

        let values = context(temp.path()).editor_values(&sources).unwrap();

        assert_eq!(values, EditorValues::new("a", "b"));
    }

    #[test]
    fn install_target_precedence() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(temp.path());

        assert_eq!(ctx.install_target(None), temp.path());

        ctx.config.install.dir = Some(PathBuf::from("app"));
        assert_eq!(ctx.install_target(None), temp.path().join("app"));
        assert_eq!(
            ctx.install_target(Some(Path::new("/abs/target"))),
            PathBuf::from("/abs/target")
        );
    }

    #[test]
    fn first_only_flag_overrides_config() {
        let temp = TempDir::new().unwrap();
        let sources = SourceArgs {
            first_only: true,
            ..Default::default()
        };

        let discoverer = context(temp.path()).discoverer(&sources);

        assert_eq!(discoverer.match_mode(), MatchMode::First);
    }

    #[test]
    fn package_manager_flag_overrides_config() {
        let temp = TempDir::new().unwrap();
        let installer = context(temp.path()).installer(Some(PackageManager::Pnpm));
        assert_eq!(installer.package_manager(), PackageManager::Pnpm);
    }
}
