//! HTTP/2 protocol symbol names.
//!
//! h2sym maps the numeric codes found in HTTP/2 frames to their canonical
//! names: frame types, SETTINGS parameters and error codes. It does not
//! parse frames; it only names what a parser has already extracted.
//!
//! # Crate Structure
//!
//! - [`registry`]: the code tables and lookup functions
//!
//! With the default `cli` feature the crate also builds the `h2sym` binary.
//!
//! ```
//! use h2sym::{describe, lookup, Category};
//!
//! assert_eq!(lookup(Category::ErrorCode, 8), Ok("CANCEL"));
//! assert_eq!(describe(Category::SettingsParameter, 0).to_string(), "UNKNOWN(0x0)");
//! ```

/// Re-export registry types.
pub mod registry {
    pub use h2sym_registry::*;
}

pub use h2sym_registry::{code_for, describe, lookup, Category, RegistryError, Symbol};
