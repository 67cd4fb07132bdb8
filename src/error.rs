//! Error types for the IRC client library.
//!
//! `ClientError` covers the connection-facing surface (connect, TLS, loop
//! I/O, thread spawning). `MessageParseError` covers inbound line parsing;
//! the session drops those silently and keeps reading.

use thiserror::Error;

/// Convenience type alias for Results using [`ClientError`].
pub type Result<T, E = ClientError> = std::result::Result<T, E>;

/// Errors surfaced by the session and its event loop.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// TCP connect or name resolution failure.
    #[error("connection to {host}:{port} failed: {source}")]
    Connect {
        /// The configured server host.
        host: String,
        /// The configured port.
        port: u16,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The system certificate store yielded no usable roots.
    #[error("no native root certificates available")]
    NoRootCerts,

    /// The server host is not a valid TLS server name.
    #[error("invalid server name: {0}")]
    ServerName(#[from] rustls::pki_types::InvalidDnsNameError),

    /// TLS-level failure (certificate processing, protocol violation).
    #[error("tls error: {0}")]
    Tls(#[from] rustls::Error),

    /// I/O failure while completing the TLS handshake.
    #[error("tls handshake failed: {0}")]
    Handshake(#[source] std::io::Error),

    /// I/O failure while reading from the transport.
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),

    /// I/O failure while writing to the transport.
    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),

    /// An inbound line exceeded the 512-byte protocol limit.
    #[error("line exceeds the {0}-byte message limit")]
    LineTooLong(usize),

    /// The writer or a callback worker thread could not be spawned.
    #[error("failed to spawn {name} thread: {source}")]
    ThreadSpawn {
        /// Label of the thread that failed to start.
        name: &'static str,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// An operation that requires an open transport was called before
    /// `connect` (or after `disconnect`).
    #[error("not connected")]
    NotConnected,
}

/// Errors encountered when parsing inbound IRC lines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// Fewer than three bytes remained after trimming.
    #[error("message too short")]
    TooShort,

    /// Line exceeded the protocol's 512-byte limit.
    #[error("message too long: {0} bytes")]
    TooLong(usize),

    /// No command token could be extracted.
    #[error("missing command")]
    MissingCommand,

    /// Command token is outside the recognised taxonomy.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
