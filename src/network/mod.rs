//! Network module
//!
//! Fetches the message of the day: one TCP connection, everything the
//! server writes until it closes, bounded by the configured timeout.

mod client;
mod connector;

pub use client::Client;
pub use connector::{Connector, TcpConnector};

#[cfg(test)]
pub use connector::MessageStream;

/// Raw bytes received from the server, kept verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message(Vec<u8>);

impl Message {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Message {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}
