//! HTTP/2 error codes, as carried by RST_STREAM and GOAWAY.

use crate::category::Category;
use crate::table::CodeTable;

pub const NO_ERROR: u32 = 0x0;
pub const PROTOCOL_ERROR: u32 = 0x1;
pub const INTERNAL_ERROR: u32 = 0x2;
pub const FLOW_CONTROL_ERROR: u32 = 0x3;
pub const SETTINGS_TIMEOUT: u32 = 0x4;
pub const STREAM_CLOSED: u32 = 0x5;
pub const FRAME_SIZE_ERROR: u32 = 0x6;
pub const REFUSED_STREAM: u32 = 0x7;
pub const CANCEL: u32 = 0x8;
pub const COMPRESSION_ERROR: u32 = 0x9;
pub const CONNECT_ERROR: u32 = 0xa;
/// The peer may be generating excessive load.
pub const ENHANCE_YOUR_CALM: u32 = 0xb;
pub const INADEQUATE_SECURITY: u32 = 0xc;
/// The endpoint requires HTTP/1.1 instead of HTTP/2.
pub const HTTP_1_1_REQUIRED: u32 = 0xd;

/// Error code names, keyed by code.
pub static TABLE: CodeTable = CodeTable::new(
    Category::ErrorCode,
    &[
        (NO_ERROR, "NO_ERROR"),
        (PROTOCOL_ERROR, "PROTOCOL_ERROR"),
        (INTERNAL_ERROR, "INTERNAL_ERROR"),
        (FLOW_CONTROL_ERROR, "FLOW_CONTROL_ERROR"),
        (SETTINGS_TIMEOUT, "SETTINGS_TIMEOUT"),
        (STREAM_CLOSED, "STREAM_CLOSED"),
        (FRAME_SIZE_ERROR, "FRAME_SIZE_ERROR"),
        (REFUSED_STREAM, "REFUSED_STREAM"),
        (CANCEL, "CANCEL"),
        (COMPRESSION_ERROR, "COMPRESSION_ERROR"),
        (CONNECT_ERROR, "CONNECT_ERROR"),
        (ENHANCE_YOUR_CALM, "ENHANCE_YOUR_CALM"),
        (INADEQUATE_SECURITY, "INADEQUATE_SECURITY"),
        (HTTP_1_1_REQUIRED, "HTTP_1_1_REQUIRED"),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_wire_codes() {
        let expected: [(u32, &str); 14] = [
            (0, "NO_ERROR"),
            (1, "PROTOCOL_ERROR"),
            (2, "INTERNAL_ERROR"),
            (3, "FLOW_CONTROL_ERROR"),
            (4, "SETTINGS_TIMEOUT"),
            (5, "STREAM_CLOSED"),
            (6, "FRAME_SIZE_ERROR"),
            (7, "REFUSED_STREAM"),
            (8, "CANCEL"),
            (9, "COMPRESSION_ERROR"),
            (10, "CONNECT_ERROR"),
            (11, "ENHANCE_YOUR_CALM"),
            (12, "INADEQUATE_SECURITY"),
            (13, "HTTP_1_1_REQUIRED"),
        ];
        assert_eq!(TABLE.len(), 14);
        assert!(TABLE.iter().eq(expected.iter().copied()));
    }

    #[test]
    fn first_unassigned_code_misses() {
        assert_eq!(TABLE.get(14), None);
    }
}
