use std::io::Write;

use crate::config::ConnectionParams;
use crate::error::Result;
use crate::network::{Client, Connector};
use crate::terminal::{self, Environment};
use crate::vars::EnvVars;

/// Fetch, detect, format, print
pub struct App<C, V> {
    client: Client<C>,
    vars: V,
}

impl<C: Connector, V: EnvVars> App<C, V> {
    pub fn new(params: ConnectionParams, connector: C, vars: V) -> Self {
        Self {
            client: Client::new(params, connector),
            vars,
        }
    }

    /// Run once, writing the formatted message to `out`
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let message = self.client.fetch()?;

        // Terminal detection only runs after a successful fetch
        let env = Environment::detect(&self.vars)?;

        terminal::print_message(&env, &message, out)
    }
}
