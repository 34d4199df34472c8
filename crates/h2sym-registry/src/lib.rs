//! Canonical names for HTTP/2 protocol codes.
//!
//! Three read-only tables map wire codes to their uppercase identifiers:
//! - frame types (`4` is `SETTINGS`)
//! - SETTINGS parameter identifiers (`5` is `MAX_FRAME_SIZE`)
//! - RST_STREAM / GOAWAY error codes (`11` is `ENHANCE_YOUR_CALM`)
//!
//! The tables are static data. Lookups never allocate on success and are
//! safe from any number of threads.
//!
//! ```
//! use h2sym_registry::{describe, lookup, Category, RegistryError};
//!
//! assert_eq!(lookup(Category::FrameType, 4), Ok("SETTINGS"));
//! assert!(matches!(
//!     lookup(Category::ErrorCode, 14),
//!     Err(RegistryError::UnrecognizedCode { .. })
//! ));
//! assert_eq!(describe(Category::FrameType, 0xfa).to_string(), "UNKNOWN(0xfa)");
//! ```

pub mod category;
pub mod error;
pub mod error_code;
pub mod frame_type;
pub mod registry;
pub mod settings;
pub mod table;

pub use category::Category;
pub use error::{RegistryError, Result};
pub use registry::{code_for, describe, lookup, table, Symbol};
pub use table::CodeTable;
