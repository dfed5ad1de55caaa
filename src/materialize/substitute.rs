use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use walkdir::WalkDir;

use crate::error::GenerateError;
use crate::tokens::TokenMap;

/// Extensions whose files are substitution candidates. Everything else is
/// left byte-for-byte as copied.
pub const TEXT_EXTENSIONS: &[&str] = &[
    "js", "jsx", "ts", "tsx", "mjs", "cjs", "json", "html", "css", "scss", "md", "mdx", "txt",
    "xml", "svg", "yml", "yaml", "env", "webmanifest",
];

// Primary grammar: {{TOKEN}}, optional whitespace inside the braces.
static BRACE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\{\{\s*([A-Z][A-Z0-9_]*)\s*\}\}").expect("brace token regex is valid")
});

// Deprecated shim grammar: __TOKEN__. Kept for templates that predate the
// brace grammar; substitutions through it are counted and warned about.
static LEGACY_TOKEN: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"__([A-Z][A-Z0-9_]*)__").expect("legacy token regex is valid")
});

/// Knobs for the substitution pass.
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionOptions {
    /// Honor the deprecated `__TOKEN__` grammar (default: true).
    pub legacy_tokens: bool,
    /// Fail the run when any placeholder has no Token Map entry
    /// (default: false - unresolved placeholders pass through verbatim).
    pub strict: bool,
}

impl Default for SubstitutionOptions {
    fn default() -> Self {
        Self {
            legacy_tokens: true,
            strict: false,
        }
    }
}

/// Outcome of a substitution pass over a destination tree.
#[derive(Debug, Default, Clone)]
pub struct SubstitutionReport {
    /// Text files visited
    pub files_visited: usize,
    /// Files whose content actually changed and were rewritten
    pub files_modified: usize,
    /// Substitutions performed through the deprecated `__TOKEN__` grammar
    pub legacy_hits: usize,
    /// Placeholder names with no Token Map entry, across both grammars
    pub unresolved: BTreeSet<String>,
}

/// Substitute both token grammars in a single string.
///
/// Placeholders whose name is absent from `tokens` are left unchanged
/// verbatim - substitution is best effort, never strict at this level; the
/// caller decides what to do with `report.unresolved`.
pub fn substitute_str(
    input: &str,
    tokens: &TokenMap,
    options: &SubstitutionOptions,
    report: &mut SubstitutionReport,
) -> String {
    let mut unresolved = BTreeSet::new();
    let pass = BRACE_TOKEN.replace_all(input, |caps: &Captures<'_>| {
        match tokens.get(&caps[1]) {
            Some(value) => value.clone(),
            None => {
                unresolved.insert(caps[1].to_string());
                caps[0].to_string()
            }
        }
    });

    let output = if options.legacy_tokens {
        let mut hits = 0usize;
        let replaced = LEGACY_TOKEN.replace_all(&pass, |caps: &Captures<'_>| {
            match tokens.get(&caps[1]) {
                Some(value) => {
                    hits += 1;
                    value.clone()
                }
                None => {
                    unresolved.insert(caps[1].to_string());
                    caps[0].to_string()
                }
            }
        });
        report.legacy_hits += hits;
        replaced.into_owned()
    } else {
        pass.into_owned()
    };

    report.unresolved.append(&mut unresolved);
    output
}

/// Rewrite every text file under `root` in place using `tokens`.
///
/// A file is only rewritten when its content actually changed; the count of
/// rewritten files lands in the report. Files that are not valid UTF-8 are
/// treated as binary and skipped even when their extension is on the
/// allowlist. In strict mode the pass completes (so the report is whole) and
/// then fails with the sorted list of unresolved names.
pub fn substitute_tree(
    root: &Path,
    tokens: &TokenMap,
    options: &SubstitutionOptions,
) -> Result<SubstitutionReport, GenerateError> {
    let mut report = SubstitutionReport::default();

    for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() || !is_text_candidate(entry.path()) {
            continue;
        }
        let path = entry.path();
        let Ok(content) = fs::read_to_string(path) else {
            tracing::debug!(path = %path.display(), "skipping non-UTF-8 file");
            continue;
        };
        report.files_visited += 1;

        let rewritten = substitute_str(&content, tokens, options, &mut report);
        if rewritten != content {
            fs::write(path, rewritten).map_err(|source| GenerateError::FileCopy {
                path: path.to_path_buf(),
                source,
            })?;
            report.files_modified += 1;
        }
    }

    if report.legacy_hits > 0 {
        tracing::warn!(
            hits = report.legacy_hits,
            "substituted deprecated __TOKEN__ placeholders; migrate the template to the brace grammar"
        );
    }

    if options.strict && !report.unresolved.is_empty() {
        return Err(GenerateError::UnresolvedTokens(
            report.unresolved.iter().cloned().collect(),
        ));
    }

    Ok(report)
}

fn is_text_candidate(path: &Path) -> bool {
    // `.env` style dotfiles have no stem-extension split; match the name.
    if path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(".env"))
    {
        return true;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
