//! Hand-specified corrections applied after scanning and generation.

use crate::scan::ScannedNamespace;

/// Correct the two known gaps the marker heuristic cannot see.
///
/// `core::async_iter` keeps its gate attribute where the stability probe does
/// not look, and the allocator's `sync`/`task` modules must additionally be
/// excluded on bare-metal targets.
pub fn apply_scan_overrides(core: &mut ScannedNamespace, alloc: &mut ScannedNamespace) {
    core.force_unstable("async_iter", true);
    alloc.append_cfg("sync", "not(target_os = \"none\")");
    alloc.append_cfg("task", "not(target_os = \"none\")");
}

/// Whole-module replacement texts, keyed by module name.
///
/// The assembler substitutes these unconditionally into the generated mapping,
/// so a name never seen during scanning still gains its block here.
#[must_use]
pub fn output_overrides() -> [(&'static str, &'static str); 4] {
    [
        ("compat_guard_unwrap", GUARD_UNWRAP_MODULE),
        ("os", OS_MODULE),
        ("path", PATH_MODULE),
        ("prelude", PRELUDE_MODULE),
    ]
}

/// No-op consuming `unwrap` for the spin lock-guard polyfills, mirroring the
/// `Result`-returning std guards.
const GUARD_UNWRAP_MODULE: &str = r#"#[cfg(feature = "compat_guard_unwrap")]
pub mod compat_guard_unwrap {
    pub trait UnwrapExt: Sized {
        fn unwrap(self) -> Self { self }
    }
    #[cfg(all(feature = "alloc", feature = "compat_sync"))] impl<'a, T: ?Sized> UnwrapExt for super::sync::MutexGuard<'a, T> {}
    #[cfg(all(feature = "alloc", feature = "compat_sync"))] impl<'a, T: ?Sized> UnwrapExt for super::sync::RwLockReadGuard<'a, T> {}
    #[cfg(all(feature = "alloc", feature = "compat_sync"))] impl<'a, T: ?Sized> UnwrapExt for super::sync::RwLockWriteGuard<'a, T> {}
}"#;

/// Raw C-ABI type aliases; widened aliases come from `libc` when enabled.
const OS_MODULE: &str = r#"pub mod os {
    pub mod raw {
        pub use __core::ffi::c_void;
        #[cfg(feature = "compat_osraw")] pub use libc::{c_char, c_double, c_float, c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint, c_ulong, c_ulonglong, c_ushort};
    }
}"#;

const PATH_MODULE: &str = r#"pub mod path {
    #[cfg(feature = "compat_path")] pub use unix_path::*;
}"#;

const PRELUDE_MODULE: &str = r#"pub mod prelude {
    pub mod v1 {
        // Prelude
        pub use __core::prelude::rust_2021::*;
        #[cfg(all(feature = "alloc", not(feature = "unstable")))]
        pub use __alloc::{
            // UNSTABLE: slice::SliceConcatExt,
        };

        // Other imports
        #[cfg(feature = "alloc")]
        pub use __alloc::{format, vec, vec::Vec, string::String, string::ToString, borrow::ToOwned, boxed::Box};
        #[cfg(feature = "compat_macros")]
        pub use crate::{print, println, eprint, eprintln, dbg};
        #[cfg(feature = "compat_guard_unwrap")] pub use crate::compat_guard_unwrap::UnwrapExt as __CompatGuardUnwrapExt;
    }
}"#;
