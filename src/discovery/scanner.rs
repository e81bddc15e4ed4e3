//! `require()` call scanning.
//!
//! A plain textual scan: no parsing, no evaluation. Only calls whose single
//! argument is a quoted string literal are recognised.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

static REQUIRE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"require\(\s*(?:'([\w@./-]*)'|"([\w@./-]*)")\s*\)"#).unwrap()
});

/// Narrower pattern for [`MatchMode::First`]: bare names and subpaths only.
/// Relative and scoped requires never match, so they cannot use up the
/// single match.
static PLAIN_REQUIRE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"require\(\s*(?:'([\w/-]*)'|"([\w/-]*)")\s*\)"#).unwrap()
});

/// How much of a text to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every `require()` call in the text.
    #[default]
    All,
    /// Only the first `require()` call of a bare module name in the text.
    First,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "first" => Ok(Self::First),
            _ => Err(format!("unknown match mode: {}", s)),
        }
    }
}

/// Extract the raw quoted arguments of `require()` calls, in text order.
///
/// Nothing is filtered here; see [`super::Discoverer`] for that.
pub fn find_candidates(source: &str, mode: MatchMode) -> Vec<String> {
    match mode {
        MatchMode::All => captures(&REQUIRE_CALL, source).collect(),
        MatchMode::First => captures(&PLAIN_REQUIRE_CALL, source).take(1).collect(),
    }
}

fn captures<'a>(re: &'a Regex, source: &'a str) -> impl Iterator<Item = String> + 'a {
    re.captures_iter(source).filter_map(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    })
}
