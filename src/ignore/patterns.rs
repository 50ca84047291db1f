//! `.gitignore`-style pattern parsing and matching.
//!
//! These are deliberately NOT full gitignore semantics. Three pattern kinds
//! exist, chosen by shape and nothing else:
//!
//! - leading `*` — simplified glob: literal `.` is escaped, every `*` becomes
//!   "any sequence", and the result is searched **anywhere within** the
//!   relative path (substring semantics, so `*.log` also matches
//!   `app.logtxt`). Other regex metacharacters in the pattern are not
//!   escaped and leak straight into the compiled expression; known
//!   limitation, kept for behavioral fidelity.
//! - trailing `/` — literal prefix match against the relative path. The slash
//!   participates, so `build/` matches `build/out.o` but never `builder.txt`.
//! - anything else — whole-relative-path equality.
//!
//! No negation, no `**`, no anchoring, no nested pattern files.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::core::errors::{FsjError, Result};

/// Name of the pattern file consumed from the project directory root.
pub const PATTERN_FILE_NAME: &str = ".gitignore";

#[derive(Debug, Clone)]
enum PatternKind {
    /// Leading-`*` pattern, compiled to an unanchored regex.
    Wildcard(Regex),
    /// Trailing-`/` pattern, matched as a literal prefix.
    DirPrefix,
    /// Everything else: exact relative-path equality.
    Exact,
}

/// One compiled pattern line, paired with its exact source text.
///
/// The source text is what match reports attribute hits to, so it is kept
/// verbatim (trimmed, but otherwise untouched).
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    raw: String,
    kind: PatternKind,
}

impl IgnorePattern {
    /// Compile a single (already trimmed) pattern line.
    ///
    /// Fails only for leading-`*` patterns whose derived expression the regex
    /// engine rejects; the run aborts in that case, matching the reference.
    pub fn compile(line: &str) -> Result<Self> {
        let kind = if line.starts_with('*') {
            // Order matters: escape literal dots before `*` expansion so the
            // dot inside the inserted `.*` stays unescaped.
            let source = line.replace('.', r"\.").replace('*', ".*");
            let regex = Regex::new(&source).map_err(|e| FsjError::Pattern {
                pattern: line.to_string(),
                details: e.to_string(),
            })?;
            PatternKind::Wildcard(regex)
        } else if line.ends_with('/') {
            PatternKind::DirPrefix
        } else {
            PatternKind::Exact
        };

        Ok(Self {
            raw: line.to_string(),
            kind,
        })
    }

    /// The exact pattern text as it appeared in the pattern file.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Test this pattern against a path relative to the project directory.
    #[must_use]
    pub fn matches(&self, relative: &str) -> bool {
        match &self.kind {
            PatternKind::Wildcard(regex) => regex.is_match(relative),
            PatternKind::DirPrefix => relative.starts_with(self.raw.as_str()),
            PatternKind::Exact => relative == self.raw,
        }
    }
}

/// Parse a pattern file into an ordered compiled pattern list.
///
/// Lines are trimmed; blank lines and `#` comments are dropped. Order is
/// preserved and duplicates are kept — attribution goes to the first match
/// in file order.
pub fn parse_pattern_file(path: &Path) -> Result<Vec<IgnorePattern>> {
    let content = fs::read_to_string(path).map_err(|e| FsjError::io(path, e))?;

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(IgnorePattern::compile)
        .collect()
}

/// Return the first pattern (file order) matching `relative`, if any.
#[must_use]
pub fn first_match<'a>(patterns: &'a [IgnorePattern], relative: &str) -> Option<&'a IgnorePattern> {
    patterns.iter().find(|p| p.matches(relative))
}
