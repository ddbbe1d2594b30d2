//! Transport Session
//!
//! One request/response exchange with a server using the legacy handshake.

use std::io::{self, ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::error::{McstatError, Result};
use crate::protocol::{RawResponse, RESPONSE_BUFFER_SIZE, SERVER_LIST_PING};

use super::Endpoint;

/// Timeouts applied to a single session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Bound on name resolution plus every connect attempt together
    pub connect_timeout: Duration,

    /// Must be non-zero, like `write_timeout`
    pub read_timeout: Duration,

    pub write_timeout: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            connect_timeout: Duration::from_millis(config.connect_timeout_ms),
            read_timeout: Duration::from_millis(config.read_timeout_ms),
            write_timeout: Duration::from_millis(config.write_timeout_ms),
        }
    }
}

/// Connect to the first of `addrs` that accepts within `timeout`.
///
/// The timeout covers all attempts: each address only gets what the
/// previous ones left over. Returns the last attempt's error on failure.
pub fn connect_within(addrs: &[SocketAddr], timeout: Duration) -> io::Result<TcpStream> {
    let deadline = Instant::now() + timeout;
    let mut last_error = None;

    for addr in addrs {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            last_error = Some(io::Error::new(ErrorKind::TimedOut, "connect timed out"));
            break;
        }

        match TcpStream::connect_timeout(addr, remaining) {
            Ok(stream) => return Ok(stream),
            Err(e) => last_error = Some(e),
        }
    }

    Err(last_error
        .unwrap_or_else(|| io::Error::new(ErrorKind::NotFound, "no address to connect to")))
}

/// Send a Server List Ping to `endpoint` and return the raw response.
///
/// Exactly one connection is opened and it is closed again before this
/// returns, whatever the outcome. The response is the 512-byte buffer of a
/// single read, zero-filled past what was received.
pub fn fetch_status(
    endpoint: &Endpoint,
    options: &SessionOptions,
    diagnostics: Option<&dyn Diagnostics>,
) -> Result<RawResponse> {
    let result = Session::connect(endpoint, options, diagnostics).and_then(|mut session| {
        session.send_ping()?;
        session.read_response()
    });

    if let (Err(e), Some(sink)) = (&result, diagnostics) {
        sink.failed(e);
    }

    result
}

/// An open connection; closed when dropped
struct Session<'a> {
    stream: TcpStream,
    endpoint: &'a Endpoint,
    diagnostics: Option<&'a dyn Diagnostics>,
}

impl<'a> Session<'a> {
    fn connect(
        endpoint: &'a Endpoint,
        options: &SessionOptions,
        diagnostics: Option<&'a dyn Diagnostics>,
    ) -> Result<Self> {
        if let Some(sink) = diagnostics {
            sink.connecting(endpoint);
        }

        let started = Instant::now();
        let addrs = endpoint.resolve(options.connect_timeout)?;
        let remaining = options.connect_timeout.saturating_sub(started.elapsed());

        let stream = connect_within(&addrs, remaining)
            .map_err(|e| McstatError::connection(endpoint.to_string(), e))?;

        // From here on the stream is owned by the session and Drop closes it
        let session = Self {
            stream,
            endpoint,
            diagnostics,
        };
        session.stream.set_nodelay(true)?;
        session.stream.set_read_timeout(Some(options.read_timeout))?;
        session.stream.set_write_timeout(Some(options.write_timeout))?;

        Ok(session)
    }

    fn send_ping(&mut self) -> Result<()> {
        self.stream.write_all(&SERVER_LIST_PING)?;
        self.stream.flush()?;

        if let Some(sink) = self.diagnostics {
            sink.handshake_sent(self.endpoint);
        }
        Ok(())
    }

    /// A single read into a fresh buffer. Short reads are passed on as-is.
    fn read_response(&mut self) -> Result<RawResponse> {
        let mut buffer = vec![0u8; RESPONSE_BUFFER_SIZE];
        let received = self.stream.read(&mut buffer)?;

        if received == 0 {
            return Err(McstatError::Io(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                format!("{} closed the connection without responding", self.endpoint),
            )));
        }

        let response = RawResponse::new(buffer, received);
        if let Some(sink) = self.diagnostics {
            sink.response_received(self.endpoint, response.received());
        }
        Ok(response)
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        // The peer may already have closed; the socket is released either way
        let _ = self.stream.shutdown(Shutdown::Both);

        if let Some(sink) = self.diagnostics {
            sink.connection_released(self.endpoint);
        }
    }
}
