//! Platform-specific process details.

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Resolve the executable name for a Node tool.
///
/// On Windows, npm, yarn and pnpm are installed as `.cmd` shims which
/// `CreateProcess` will not find without the extension.
pub fn node_tool_program(name: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("{}.cmd", name)
    } else {
        name.to_string()
    }
}
