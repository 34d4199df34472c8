//! HTTP/2 SETTINGS parameter identifiers.
//!
//! Identifier 0 is not assigned. Unknown identifiers must be ignored by the
//! receiver.

use crate::category::Category;
use crate::table::CodeTable;

/// Maximum size of the peer's HPACK dynamic table.
pub const HEADER_TABLE_SIZE: u32 = 0x1;
/// Whether server push is permitted.
pub const ENABLE_PUSH: u32 = 0x2;
/// Maximum number of concurrent streams the sender will allow.
pub const MAX_CONCURRENT_STREAMS: u32 = 0x3;
/// Initial stream-level flow-control window.
pub const INITIAL_WINDOW_SIZE: u32 = 0x4;
/// Largest frame payload the sender is willing to receive.
pub const MAX_FRAME_SIZE: u32 = 0x5;
/// Advisory limit on the size of a header list.
pub const MAX_HEADER_LIST_SIZE: u32 = 0x6;

/// Settings parameter names, keyed by identifier.
pub static TABLE: CodeTable = CodeTable::new(
    Category::SettingsParameter,
    &[
        (HEADER_TABLE_SIZE, "HEADER_TABLE_SIZE"),
        (ENABLE_PUSH, "ENABLE_PUSH"),
        (MAX_CONCURRENT_STREAMS, "MAX_CONCURRENT_STREAMS"),
        (INITIAL_WINDOW_SIZE, "INITIAL_WINDOW_SIZE"),
        (MAX_FRAME_SIZE, "MAX_FRAME_SIZE"),
        (MAX_HEADER_LIST_SIZE, "MAX_HEADER_LIST_SIZE"),
    ],
);
