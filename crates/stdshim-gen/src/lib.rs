//! Generator for the feature-gated `std` compatibility shim over `core` and
//! `alloc`.
//!
//! This crate provides:
//! - Module scanning: extract declared public module names from a crate's
//!   entry file via a line-anchored heuristic
//! - Stability probing: classify each module by inspecting its own source
//! - Namespace merging: rank providers (`core` before `alloc`) per name
//! - Conditional codegen: emit `#[cfg]`-guarded wildcard re-export blocks,
//!   plus fixed polyfills for `collections`/`sync`/`ffi`
//! - Assembly: hand-authored overrides, sorting, provenance header

#![forbid(unsafe_code)]

pub mod assemble;
pub mod codegen;
pub mod merge;
pub mod overrides;
pub mod scan;

pub use assemble::generate_shim;
pub use codegen::{ModuleBlock, ReExportLine, build_module};
pub use merge::{Provider, merge_namespaces};
pub use scan::{ModuleEntry, ScanError, ScannedNamespace, scan_crate};
