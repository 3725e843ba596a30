//! Conditional re-export block construction and rendering.
//!
//! Blocks are built as structured values first ([`ModuleBlock`] holding
//! ordered [`ReExportLine`]s) and serialized in a separate step, so tests can
//! assert on guard lists and paths without diffing rendered text.

use crate::merge::Provider;

/// The crate whose surface needs no feature gate of its own.
pub const ALWAYS_PRESENT_CRATE: &str = "core";

/// Module whose block is hand-authored and substituted by the assembler.
pub const PRELUDE_MODULE: &str = "prelude";

/// One guarded re-export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReExportLine {
    /// Conditional-compilation predicates, conjoined in order when rendered.
    pub cfgs: Vec<String>,
    /// Path expression after `pub use`.
    pub path: String,
}

impl ReExportLine {
    /// Render as a single `pub use` statement, guard included.
    #[must_use]
    pub fn render(&self) -> String {
        let guard = match self.cfgs.len() {
            0 => String::new(),
            1 => format!("#[cfg({})] ", self.cfgs[0]),
            _ => format!("#[cfg(all({}))] ", self.cfgs.join(", ")),
        };
        format!("{guard}pub use {};", self.path)
    }
}

/// Structured form of one generated module block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleBlock {
    /// Module name the block declares.
    pub name: String,
    /// Re-export lines, in emission order.
    pub lines: Vec<ReExportLine>,
}

impl ModuleBlock {
    /// Serialize to the final `pub mod` block text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("pub mod {} {{\n", self.name);
        for line in &self.lines {
            out.push_str("    ");
            out.push_str(&line.render());
            out.push('\n');
        }
        out.push('}');
        out
    }
}

/// Build the guarded re-export block for `name` from its providers.
///
/// Guards are constructed independently per provider; one crate's extra cfgs
/// never leak into another crate's line. Returns `None` for the prelude.
#[must_use]
pub fn build_module(name: &str, providers: &[Provider<'_>]) -> Option<ModuleBlock> {
    if name == PRELUDE_MODULE {
        return None;
    }

    let mut lines = Vec::new();
    for provider in providers {
        let mut cfgs = Vec::new();
        if provider.crate_name != ALWAYS_PRESENT_CRATE {
            cfgs.push(format!("feature = \"{}\"", provider.crate_name));
        }
        if provider.entry.unstable {
            cfgs.push(String::from("feature = \"unstable\""));
        }
        cfgs.extend(provider.entry.cfgs.iter().cloned());

        lines.push(ReExportLine {
            cfgs,
            path: format!("__{}::{name}::*", provider.crate_name),
        });
    }

    match name {
        "collections" => {
            for item in ["HashMap", "HashSet"] {
                lines.push(polyfill_line("compat_hash", &format!("hashbrown::{item}")));
            }
        }
        "sync" => {
            for item in [
                "Mutex",
                "MutexGuard",
                "Once",
                "RwLock",
                "RwLockReadGuard",
                "RwLockWriteGuard",
            ] {
                lines.push(polyfill_line("compat_sync", &format!("spin::{item}")));
            }
        }
        "ffi" => {
            lines.push(polyfill_line("compat_cstr", "cstr_core::CStr"));
        }
        _ => {}
    }

    Some(ModuleBlock {
        name: name.to_string(),
        lines,
    })
}

/// Polyfill re-exports share one gating shape: the allocator feature conjoined
/// with a dedicated compatibility feature.
fn polyfill_line(compat_feature: &str, path: &str) -> ReExportLine {
    ReExportLine {
        cfgs: vec![
            String::from("feature = \"alloc\""),
            format!("feature = \"{compat_feature}\""),
        ],
        path: path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::ModuleEntry;

    fn entry(unstable: bool, cfgs: &[&str]) -> ModuleEntry {
        ModuleEntry {
            unstable,
            cfgs: cfgs.iter().map(|cfg| cfg.to_string()).collect(),
        }
    }

    #[test]
    fn core_stable_module_renders_unconditionally() {
        let entry = entry(false, &[]);
        let block = build_module(
            "fmt",
            &[Provider {
                crate_name: "core",
                entry: &entry,
            }],
        )
        .expect("fmt is not suppressed");

        assert_eq!(block.lines.len(), 1);
        assert!(block.lines[0].cfgs.is_empty());
        assert_eq!(block.render(), "pub mod fmt {\n    pub use __core::fmt::*;\n}");
    }

    #[test]
    fn single_predicate_uses_bare_cfg() {
        let entry = entry(false, &[]);
        let block = build_module(
            "boxed",
            &[Provider {
                crate_name: "alloc",
                entry: &entry,
            }],
        )
        .expect("boxed is not suppressed");

        assert_eq!(
            block.lines[0].render(),
            "#[cfg(feature = \"alloc\")] pub use __alloc::boxed::*;"
        );
    }

    #[test]
    fn predicates_conjoin_in_fixed_order() {
        let entry = entry(true, &["not(target_os = \"none\")"]);
        let block = build_module(
            "task",
            &[Provider {
                crate_name: "alloc",
                entry: &entry,
            }],
        )
        .expect("task is not suppressed");

        assert_eq!(
            block.lines[0].cfgs,
            vec![
                "feature = \"alloc\"",
                "feature = \"unstable\"",
                "not(target_os = \"none\")",
            ]
        );
        assert_eq!(
            block.lines[0].render(),
            "#[cfg(all(feature = \"alloc\", feature = \"unstable\", not(target_os = \"none\")))] \
             pub use __alloc::task::*;"
        );
    }

    #[test]
    fn both_providers_emit_core_line_first() {
        let stable = entry(false, &[]);
        let block = build_module(
            "slice",
            &[
                Provider {
                    crate_name: "core",
                    entry: &stable,
                },
                Provider {
                    crate_name: "alloc",
                    entry: &stable,
                },
            ],
        )
        .expect("slice is not suppressed");

        assert_eq!(block.lines.len(), 2);
        assert_eq!(block.lines[0].path, "__core::slice::*");
        assert_eq!(block.lines[1].path, "__alloc::slice::*");
    }

    #[test]
    fn extra_cfgs_stay_isolated_per_provider() {
        let plain = entry(false, &[]);
        let gated = entry(false, &["not(target_os = \"none\")"]);
        let block = build_module(
            "sync",
            &[
                Provider {
                    crate_name: "core",
                    entry: &plain,
                },
                Provider {
                    crate_name: "alloc",
                    entry: &gated,
                },
            ],
        )
        .expect("sync is not suppressed");

        assert!(block.lines[0].cfgs.is_empty());
        assert_eq!(
            block.lines[1].cfgs,
            vec!["feature = \"alloc\"", "not(target_os = \"none\")"]
        );
    }

    #[test]
    fn prelude_is_suppressed() {
        let entry = entry(false, &[]);
        let providers = [Provider {
            crate_name: "core",
            entry: &entry,
        }];
        assert!(build_module("prelude", &providers).is_none());
    }

    #[test]
    fn collections_appends_hash_polyfills_after_standard_lines() {
        let entry = entry(false, &[]);
        let block = build_module(
            "collections",
            &[Provider {
                crate_name: "alloc",
                entry: &entry,
            }],
        )
        .expect("collections is not suppressed");

        assert_eq!(block.lines.len(), 3);
        assert_eq!(block.lines[0].path, "__alloc::collections::*");
        assert_eq!(block.lines[1].path, "hashbrown::HashMap");
        assert_eq!(block.lines[2].path, "hashbrown::HashSet");
        for line in &block.lines[1..] {
            assert_eq!(
                line.cfgs,
                vec!["feature = \"alloc\"", "feature = \"compat_hash\""]
            );
        }
    }

    #[test]
    fn sync_appends_spin_polyfills_in_fixed_order() {
        let entry = entry(false, &[]);
        let block = build_module(
            "sync",
            &[Provider {
                crate_name: "core",
                entry: &entry,
            }],
        )
        .expect("sync is not suppressed");

        let paths: Vec<&str> = block.lines[1..].iter().map(|l| l.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "spin::Mutex",
                "spin::MutexGuard",
                "spin::Once",
                "spin::RwLock",
                "spin::RwLockReadGuard",
                "spin::RwLockWriteGuard",
            ]
        );
        for line in &block.lines[1..] {
            assert_eq!(
                line.cfgs,
                vec!["feature = \"alloc\"", "feature = \"compat_sync\""]
            );
        }
    }

    #[test]
    fn ffi_appends_cstr_polyfill() {
        let entry = entry(false, &[]);
        let block = build_module(
            "ffi",
            &[Provider {
                crate_name: "core",
                entry: &entry,
            }],
        )
        .expect("ffi is not suppressed");

        assert_eq!(block.lines.len(), 2);
        assert_eq!(block.lines[1].path, "cstr_core::CStr");
        assert_eq!(
            block.lines[1].cfgs,
            vec!["feature = \"alloc\"", "feature = \"compat_cstr\""]
        );
    }
}
