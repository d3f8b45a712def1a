//! Terminal module
//!
//! Detects the terminal context and wraps the message in matching escape
//! sequences.

mod detect;
mod formatter;

pub use detect::Environment;
pub use formatter::print_message;
