//! Escape-sequence wrapping and display

use std::io::Write;

use tracing::{debug, warn};

use crate::error::Result;
use crate::network::Message;
use crate::terminal::Environment;

/// Wrap `message` in the environment's start/end sequences.
///
/// An empty message yields empty output.
pub fn format(env: &Environment, message: &[u8]) -> Vec<u8> {
    if message.is_empty() {
        return Vec::new();
    }

    let mut out =
        Vec::with_capacity(env.start_sequence.len() + message.len() + env.end_sequence.len());
    out.extend_from_slice(env.start_sequence.as_bytes());
    out.extend_from_slice(message);
    out.extend_from_slice(env.end_sequence.as_bytes());
    out
}

/// Write the formatted message to `out` in a single write
pub fn print_message(env: &Environment, message: &Message, out: &mut impl Write) -> Result<()> {
    if message.is_empty() {
        warn!("Received empty message from server");
        return Ok(());
    }

    out.write_all(&format(env, message.as_bytes()))?;
    out.flush()?;

    debug!(message_length = message.len(), "Message displayed");
    Ok(())
}
