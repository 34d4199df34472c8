//! HTTP/2 frame type codes.
//!
//! The type is the fourth octet of the 9-byte frame header. Types 0x0-0x9
//! are defined by the core protocol; anything else belongs to an extension
//! and must be ignored by endpoints that do not understand it.

use crate::category::Category;
use crate::table::CodeTable;

/// Arbitrary, variable-length octets for a stream.
pub const DATA: u32 = 0x0;

/// Opens a stream and carries a header block fragment.
pub const HEADERS: u32 = 0x1;

/// Sender-advised stream priority.
pub const PRIORITY: u32 = 0x2;

/// Immediate termination of a stream.
pub const RST_STREAM: u32 = 0x3;

/// Connection configuration parameters.
pub const SETTINGS: u32 = 0x4;

/// Notifies the peer of a stream the sender intends to initiate.
pub const PUSH_PROMISE: u32 = 0x5;

/// Round-trip measurement and liveness check.
pub const PING: u32 = 0x6;

/// Initiates connection shutdown.
pub const GOAWAY: u32 = 0x7;

/// Flow-control window increment.
pub const WINDOW_UPDATE: u32 = 0x8;

/// Continues a sequence of header block fragments.
pub const CONTINUATION: u32 = 0x9;

/// Frame type names, keyed by type code.
pub static TABLE: CodeTable = CodeTable::new(
    Category::FrameType,
    &[
        (DATA, "DATA"),
        (HEADERS, "HEADERS"),
        (PRIORITY, "PRIORITY"),
        (RST_STREAM, "RST_STREAM"),
        (SETTINGS, "SETTINGS"),
        (PUSH_PROMISE, "PUSH_PROMISE"),
        (PING, "PING"),
        (GOAWAY, "GOAWAY"),
        (WINDOW_UPDATE, "WINDOW_UPDATE"),
        (CONTINUATION, "CONTINUATION"),
    ],
);

/// Returns true if `code` is a frame type defined by the core protocol.
pub fn is_core(code: u32) -> bool {
    code <= CONTINUATION
}
