//! Protocol Module
//!
//! The legacy (1.6) Server List Ping.
//!
//! ## Request
//! ```text
//! ┌──────┬──────┐
//! │  FE  │  01  │
//! └──────┴──────┘
//! ```
//!
//! ### Response (up to 512 bytes, UTF-16BE text)
//! ```text
//! ┌────────┬─────────┬─────────┬──────┬─────────┬─────────┐
//! │ header │ proto   │ version │ motd │ current │   max   │
//! └────────┴─────────┴─────────┴──────┴─────────┴─────────┘
//!   seg 0    seg 1     seg 2    seg 3   seg 4     seg 5
//! ```
//! Segments are separated by `00 00 00`. Each segment still carries the
//! high `00` byte of every UTF-16 code unit, which is stripped on decode.

mod handshake;
mod response;
mod status;
mod decoder;

pub use handshake::{RESPONSE_BUFFER_SIZE, SERVER_LIST_PING};
pub use response::RawResponse;
pub use status::Status;
pub use decoder::{decode, split_segments, strip_nul, MIN_SEGMENTS, SEGMENT_DELIMITER};
