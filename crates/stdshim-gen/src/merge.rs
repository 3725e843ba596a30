//! Priority-ordered union of the two scanned namespaces.

use std::collections::BTreeMap;

use crate::scan::{ModuleEntry, ScannedNamespace};

/// One crate's contribution to a merged module name.
#[derive(Debug, Clone, Copy)]
pub struct Provider<'a> {
    /// Crate declaring the module.
    pub crate_name: &'a str,
    /// The module's scanned classification within that crate.
    pub entry: &'a ModuleEntry,
}

/// For every module name in either namespace, the ordered provider list.
///
/// `primary` outranks `secondary`: when both declare a name, the primary
/// provider comes first. No name from either input is ever dropped.
#[must_use]
pub fn merge_namespaces<'a>(
    primary: &'a ScannedNamespace,
    secondary: &'a ScannedNamespace,
) -> BTreeMap<&'a str, Vec<Provider<'a>>> {
    let mut merged: BTreeMap<&str, Vec<Provider>> = BTreeMap::new();

    for (name, entry) in &primary.modules {
        merged.entry(name.as_str()).or_default().push(Provider {
            crate_name: &primary.crate_name,
            entry,
        });
    }
    for (name, entry) in &secondary.modules {
        merged.entry(name.as_str()).or_default().push(Provider {
            crate_name: &secondary.crate_name,
            entry,
        });
    }

    merged
}
