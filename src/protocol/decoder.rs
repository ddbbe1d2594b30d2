//! Status decoder
//!
//! Turns a raw Server List Ping response into a [`Status`].
//!
//! ## Steps
//! 1. Drop the zero fill after the last non-zero byte
//! 2. Split on `00 00 00`, left to right, non-overlapping
//! 3. Require at least [`MIN_SEGMENTS`] segments
//! 4. Strip every `00` byte from segments 2..=5 and read them as text

use crate::diagnostics::Diagnostics;
use crate::error::{McstatError, Result};

use super::Status;

/// Separator between text fields
pub const SEGMENT_DELIMITER: [u8; 3] = [0x00, 0x00, 0x00];

/// Segments a well-formed response splits into, at least
pub const MIN_SEGMENTS: usize = 6;

// Positional field layout
const VERSION_SEGMENT: usize = 2;
const MOTD_SEGMENT: usize = 3;
const CURRENT_PLAYERS_SEGMENT: usize = 4;
const MAX_PLAYERS_SEGMENT: usize = 5;

/// Decode a response buffer.
///
/// Trailing zero padding is tolerated. Fails with
/// [`McstatError::MalformedResponse`] when fewer than six segments remain,
/// which includes responses with an empty MOTD or an empty last field: the
/// first loses a segment to the merged delimiters, the second to the trim.
pub fn decode(raw: &[u8], diagnostics: Option<&dyn Diagnostics>) -> Result<Status> {
    let result = decode_segments(&split_segments(raw));

    if let Some(sink) = diagnostics {
        match &result {
            Ok(status) => sink.decoded(status),
            Err(e) => sink.failed(e),
        }
    }

    result
}

fn decode_segments(segments: &[&[u8]]) -> Result<Status> {
    if segments.len() < MIN_SEGMENTS {
        return Err(McstatError::MalformedResponse {
            expected: MIN_SEGMENTS,
            found: segments.len(),
        });
    }

    Ok(Status::new(
        segment_text(segments[VERSION_SEGMENT]),
        segment_text(segments[MOTD_SEGMENT]),
        segment_text(segments[CURRENT_PLAYERS_SEGMENT]),
        segment_text(segments[MAX_PLAYERS_SEGMENT]),
    ))
}

/// Split a response into its delimited segments.
///
/// The zero fill after the payload is ignored, so an all-zero buffer yields
/// a single empty segment.
pub fn split_segments(raw: &[u8]) -> Vec<&[u8]> {
    let mut rest = trim_padding(raw);
    let mut segments = Vec::new();

    while let Some(pos) = find_delimiter(rest) {
        segments.push(&rest[..pos]);
        rest = &rest[pos + SEGMENT_DELIMITER.len()..];
    }
    segments.push(rest);

    segments
}

/// Remove every `00` byte
pub fn strip_nul(segment: &[u8]) -> Vec<u8> {
    segment.iter().copied().filter(|&b| b != 0x00).collect()
}

fn segment_text(segment: &[u8]) -> String {
    String::from_utf8_lossy(&strip_nul(segment)).into_owned()
}

fn find_delimiter(haystack: &[u8]) -> Option<usize> {
    haystack
        .windows(SEGMENT_DELIMITER.len())
        .position(|window| window == &SEGMENT_DELIMITER[..])
}

fn trim_padding(raw: &[u8]) -> &[u8] {
    let end = raw.iter().rposition(|&b| b != 0x00).map_or(0, |i| i + 1);
    &raw[..end]
}
