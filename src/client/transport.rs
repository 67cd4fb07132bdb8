//! Blocking TCP and TLS byte streams.
//!
//! A [`Transport`] is a cheaply cloneable handle to one connection; reads
//! and writes from different threads proceed independently. The plain-TCP
//! path leans on the OS for that independence. The TLS path shares one
//! rustls state machine behind a mutex: blocking socket reads stay outside
//! the lock so an idle reader never starves the writer, while all record
//! encryption and socket writes happen under it.

use std::io::{Read, Write};
use std::net::{Shutdown, TcpStream};
use std::sync::{Arc, Mutex, MutexGuard};

use rustls::pki_types::ServerName;
use rustls::{ClientConnection, RootCertStore};
use tracing::{debug, warn};

use crate::error::{ClientError, Result};

#[derive(Clone, Debug)]
pub(crate) enum Transport {
    Tcp(Arc<TcpStream>),
    Tls(Arc<TlsStream>),
}

impl Transport {
    /// Resolve and connect, optionally completing a TLS handshake with the
    /// host as SNI before returning.
    pub fn connect(host: &str, port: u16, tls: bool) -> Result<Transport> {
        let stream = TcpStream::connect((host, port)).map_err(|source| ClientError::Connect {
            host: host.to_string(),
            port,
            source,
        })?;

        if tls {
            Ok(Transport::Tls(Arc::new(TlsStream::handshake(stream, host)?)))
        } else {
            Ok(Transport::Tcp(Arc::new(stream)))
        }
    }

    pub fn read(&self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Transport::Tcp(stream) => (&**stream).read(buf),
            Transport::Tls(tls) => tls.read(buf),
        }
    }

    pub fn write_all(&self, buf: &[u8]) -> std::io::Result<()> {
        match self {
            Transport::Tcp(stream) => (&**stream).write_all(buf),
            Transport::Tls(tls) => tls.write_all(buf),
        }
    }

    /// Close the connection: TLS close_notify first when applicable, then
    /// TCP shutdown. Errors are ignored; the peer may already be gone.
    pub fn close(&self) {
        match self {
            Transport::Tcp(stream) => {
                let _ = stream.shutdown(Shutdown::Both);
            }
            Transport::Tls(tls) => tls.close(),
        }
    }
}

/// One TLS connection: the rustls state machine plus the underlying socket.
pub(crate) struct TlsStream {
    conn: Mutex<ClientConnection>,
    sock: TcpStream,
}

impl std::fmt::Debug for TlsStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TlsStream").finish_non_exhaustive()
    }
}

impl TlsStream {
    fn handshake(mut sock: TcpStream, host: &str) -> Result<TlsStream> {
        let loaded = rustls_native_certs::load_native_certs();
        if !loaded.errors.is_empty() {
            warn!(
                count = loaded.errors.len(),
                "some native root certificates failed to load"
            );
        }

        let mut roots = RootCertStore::empty();
        for cert in loaded.certs {
            if let Err(err) = roots.add(cert) {
                debug!(%err, "skipping unusable native root certificate");
            }
        }
        if roots.is_empty() {
            return Err(ClientError::NoRootCerts);
        }

        let config = rustls::ClientConfig::builder()
            .with_root_certificates(roots)
            .with_no_client_auth();
        let name = ServerName::try_from(host.to_string())?;
        let mut conn = ClientConnection::new(Arc::new(config), name)?;

        while conn.is_handshaking() {
            conn.complete_io(&mut sock).map_err(ClientError::Handshake)?;
        }

        Ok(TlsStream {
            conn: Mutex::new(conn),
            sock,
        })
    }

    fn read(&self, buf: &mut [u8]) -> std::io::Result<usize> {
        loop {
            {
                let mut conn = self.lock();
                match conn.reader().read(buf) {
                    Ok(n) => return Ok(n),
                    Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {}
                    Err(err) => return Err(err),
                }
            }

            // No plaintext buffered. Pull more records off the socket with
            // the lock released so concurrent writes can proceed.
            let mut raw = [0u8; 4096];
            let n = (&self.sock).read(&mut raw)?;
            if n == 0 {
                return Ok(0);
            }

            let mut conn = self.lock();
            let mut records: &[u8] = &raw[..n];
            while !records.is_empty() {
                if conn.read_tls(&mut records)? == 0 {
                    break;
                }
                conn.process_new_packets()
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
            }
            // Session-level responses (key updates, close_notify acks).
            let mut sock = &self.sock;
            while conn.wants_write() {
                conn.write_tls(&mut sock)?;
            }
        }
    }

    fn write_all(&self, buf: &[u8]) -> std::io::Result<()> {
        let mut conn = self.lock();
        conn.writer().write_all(buf)?;
        let mut sock = &self.sock;
        while conn.wants_write() {
            conn.write_tls(&mut sock)?;
        }
        Ok(())
    }

    fn close(&self) {
        let mut conn = self.lock();
        conn.send_close_notify();
        let mut sock = &self.sock;
        while conn.wants_write() {
            if conn.write_tls(&mut sock).is_err() {
                break;
            }
        }
        drop(conn);
        let _ = self.sock.shutdown(Shutdown::Both);
    }

    fn lock(&self) -> MutexGuard<'_, ClientConnection> {
        self.conn.lock().unwrap_or_else(|err| err.into_inner())
    }
}
