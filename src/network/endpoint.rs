//! Target endpoint

use std::fmt;
use std::io;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::thread;
use std::time::Duration;

use crossbeam::channel::{self, RecvTimeoutError};

use crate::error::{McstatError, Result};

/// Host and port of a server to query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    /// No validation happens here; a bad host surfaces as a connection
    /// error when the endpoint is resolved.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Resolve to socket addresses, in resolver order, within `timeout`.
    ///
    /// IP literals resolve immediately. Names are looked up on a helper
    /// thread; if the resolver does not answer in time the lookup is
    /// abandoned and a timed-out connection error is returned.
    pub fn resolve(&self, timeout: Duration) -> Result<Vec<SocketAddr>> {
        if let Ok(ip) = self.host.parse::<IpAddr>() {
            return Ok(vec![SocketAddr::new(ip, self.port)]);
        }

        let (sender, receiver) = channel::bounded(1);
        let target = (self.host.clone(), self.port);
        thread::Builder::new()
            .name("mcstat-resolve".to_string())
            .spawn(move || {
                let addrs = target
                    .to_socket_addrs()
                    .map(|addrs| addrs.collect::<Vec<SocketAddr>>());
                // The caller may have given up already
                let _ = sender.send(addrs);
            })
            .map_err(|e| self.connection_error(e))?;

        let addrs = match receiver.recv_timeout(timeout) {
            Ok(result) => result.map_err(|e| self.connection_error(e))?,
            Err(RecvTimeoutError::Timeout) => {
                return Err(self.connection_error(io::Error::new(
                    io::ErrorKind::TimedOut,
                    "name resolution timed out",
                )))
            }
            Err(RecvTimeoutError::Disconnected) => {
                return Err(self.connection_error(io::Error::new(
                    io::ErrorKind::Other,
                    "resolver thread exited without an answer",
                )))
            }
        };

        if addrs.is_empty() {
            return Err(self.connection_error(io::Error::new(
                io::ErrorKind::NotFound,
                "host resolved to no addresses",
            )));
        }

        Ok(addrs)
    }

    fn connection_error(&self, source: io::Error) -> McstatError {
        McstatError::connection(self.to_string(), source)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') && !self.host.starts_with('[') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

impl From<SocketAddr> for Endpoint {
    fn from(addr: SocketAddr) -> Self {
        Self::new(addr.ip().to_string(), addr.port())
    }
}
