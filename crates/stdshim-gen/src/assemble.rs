//! Pipeline driver: scan, override, merge, generate, sort, concatenate.

use std::collections::BTreeMap;
use std::path::Path;

use crate::codegen::build_module;
use crate::merge::merge_namespaces;
use crate::overrides::{apply_scan_overrides, output_overrides};
use crate::scan::{ScanError, scan_crate};

/// Provenance header prepended to the generated document.
pub const SHIM_HEADER: &str = "//! Generated by stdshim-gen; do not edit by hand\n\
                               //! stdshim-gen > src/generated.rs";

/// Generate the complete shim document for the crates under `library_root`.
///
/// Output is fully deterministic: entries are keyed and emitted in
/// case-sensitive lexicographic module-name order, and rerunning over an
/// identical tree reproduces byte-identical text.
pub fn generate_shim(library_root: &Path) -> Result<String, ScanError> {
    let mut core = scan_crate("core", library_root)?;
    let mut alloc = scan_crate("alloc", library_root)?;
    apply_scan_overrides(&mut core, &mut alloc);

    let mut generated: BTreeMap<String, String> = BTreeMap::new();
    for (name, providers) in merge_namespaces(&core, &alloc) {
        if let Some(block) = build_module(name, &providers) {
            generated.insert(name.to_string(), block.render());
        }
    }

    for (name, text) in output_overrides() {
        generated.insert(name.to_string(), text.to_string());
    }

    let mut out = String::from(SHIM_HEADER);
    out.push('\n');
    for text in generated.values() {
        out.push_str(text);
        out.push('\n');
    }
    Ok(out)
}
