//! Heuristic public-module discovery and stability probing.
//!
//! The scanner is intentionally a line-anchored text scan, not a parser.
//! Declarations spanning multiple lines, nested inside blocks, or produced by
//! macros are not recognized; the two crates it reads have a fixed, known
//! layout, so the heuristic match set is part of the output contract.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Marker denoting non-stable API status in a module's own source file.
pub const UNSTABLE_MARKER: &str = "#![unstable";

/// Matches `pub mod name;` and single-level `pub use path::to::name;`.
///
/// A same-line prefix is allowed only when it starts with a non-space
/// character (attributes, for instance); indented declarations stay invisible.
static DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^(?:\S.*)?pub\s+(?:mod\s+|use\s+(?:[A-Za-z_][A-Za-z0-9_]*::)*)([A-Za-z_][A-Za-z0-9_]*);",
    )
    .expect("module declaration pattern is valid")
});

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed reading entry file '{path}' for crate '{crate_name}': {source}")]
    EntryRead {
        crate_name: String,
        path: PathBuf,
        source: io::Error,
    },
}

/// One scanned public module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleEntry {
    /// Whether the module's own source carries [`UNSTABLE_MARKER`].
    pub unstable: bool,
    /// Extra cfg predicates appended verbatim after the feature guards.
    pub cfgs: Vec<String>,
}

/// The public module surface of one crate.
#[derive(Debug, Clone)]
pub struct ScannedNamespace {
    /// Crate the surface belongs to.
    pub crate_name: String,
    /// Module name -> classification. Names are unique per crate by key.
    pub modules: BTreeMap<String, ModuleEntry>,
}

impl ScannedNamespace {
    /// Force the stability classification of `name`.
    ///
    /// No effect when the scanner never saw `name`; a correction for a module
    /// that does not exist has nothing to correct.
    pub fn force_unstable(&mut self, name: &str, unstable: bool) {
        if let Some(entry) = self.modules.get_mut(name) {
            entry.unstable = unstable;
        }
    }

    /// Append an extra cfg predicate to `name`, preserving append order.
    ///
    /// No effect when the scanner never saw `name`.
    pub fn append_cfg(&mut self, name: &str, cfg: &str) {
        if let Some(entry) = self.modules.get_mut(name) {
            entry.cfgs.push(cfg.to_string());
        }
    }
}

/// Extract declared public module names from entry-file contents, in
/// declaration order. Repeated declarations of the same name are kept;
/// namespace insertion deduplicates them.
#[must_use]
pub fn collect_module_names(contents: &str) -> Vec<String> {
    DECL_RE
        .captures_iter(contents)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Check module source contents for the unstable marker.
#[must_use]
pub fn is_marked_unstable(contents: &str) -> bool {
    contents.contains(UNSTABLE_MARKER)
}

/// Scan one crate's public modules and classify their stability.
///
/// `library_root` holds one subdirectory per crate; the entry file is
/// `<library_root>/<crate>/src/lib.rs`. A missing entry file is fatal. A
/// missing or unreadable per-module file only downgrades that module to
/// stable, with a diagnostic on stderr.
pub fn scan_crate(crate_name: &str, library_root: &Path) -> Result<ScannedNamespace, ScanError> {
    let root = library_root.join(crate_name).join("src");
    let entry = root.join("lib.rs");
    let contents = std::fs::read_to_string(&entry).map_err(|source| ScanError::EntryRead {
        crate_name: crate_name.to_string(),
        path: entry,
        source,
    })?;

    let mut modules = BTreeMap::new();
    for name in collect_module_names(&contents) {
        if modules.contains_key(&name) {
            continue;
        }
        let unstable = probe_stability(crate_name, &root, &name);
        modules.insert(
            name,
            ModuleEntry {
                unstable,
                cfgs: Vec::new(),
            },
        );
    }

    Ok(ScannedNamespace {
        crate_name: crate_name.to_string(),
        modules,
    })
}

/// Best-effort stability probe: `<root>/<module>.rs`, then
/// `<root>/<module>/mod.rs`.
fn probe_stability(crate_name: &str, root: &Path, module: &str) -> bool {
    let mut path = root.join(format!("{module}.rs"));
    if !path.is_file() {
        path = root.join(module).join("mod.rs");
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => {
            let unstable = is_marked_unstable(&contents);
            if unstable {
                eprintln!("module '{module}' from '{crate_name}' appears unstable");
            }
            unstable
        }
        Err(err) => {
            eprintln!("skipping stability probe for '{}': {err}", path.display());
            false
        }
    }
}
