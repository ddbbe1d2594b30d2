//! Handshake constants
//!
//! See <https://wiki.vg/Server_List_Ping#1.6>.

/// Legacy Server List Ping request, sent as-is after connecting
pub const SERVER_LIST_PING: [u8; 2] = [0xFE, 0x01];

/// Capacity of the buffer the response is read into
pub const RESPONSE_BUFFER_SIZE: usize = 512;
