use std::io;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::ConnectionParams;
use crate::error::{MotdError, Result};
use crate::network::connector::{Connector, MessageStream};
use crate::network::Message;

const READ_CHUNK: usize = 4096;

/// Fetches the message of the day from a single server
pub struct Client<C> {
    params: ConnectionParams,
    connector: C,
}

impl<C: Connector> Client<C> {
    pub fn new(params: ConnectionParams, connector: C) -> Self {
        Self { params, connector }
    }

    /// Connect, read everything until the server closes, and disconnect.
    ///
    /// The connection is dropped before this returns, whatever the outcome.
    pub fn fetch(&self) -> Result<Message> {
        let address = self.params.address();
        let timeout = self.params.timeout;

        debug!(%address, ?timeout, "Connecting to server");

        let mut stream = self
            .connector
            .connect(&self.params.host, self.params.port, timeout)
            .map_err(|source| MotdError::Connect {
                address: address.clone(),
                source,
            })?;

        debug!(%address, "Connected to server");

        let message = read_until_eof(&mut stream, timeout)?;
        debug!(length = message.len(), "Message received");

        Ok(message)
    }
}

/// Read until EOF, failing if `timeout` elapses first.
///
/// The deadline is fixed when reading starts; each read waits at most for
/// the time that is left.
fn read_until_eof<S: MessageStream>(stream: &mut S, timeout: Duration) -> Result<Message> {
    let deadline = Instant::now() + timeout;
    let mut buf = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(MotdError::ReadTimeout { timeout });
        }
        stream
            .set_read_timeout(Some(remaining))
            .map_err(MotdError::Read)?;

        match stream.read(&mut chunk) {
            Ok(0) => return Ok(Message::from(buf)),
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) if is_timeout(&e) => return Err(MotdError::ReadTimeout { timeout }),
            Err(e) => return Err(MotdError::Read(e)),
        }
    }
}

// Unix reports an expired SO_RCVTIMEO as WouldBlock, Windows as TimedOut
fn is_timeout(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
    )
}
