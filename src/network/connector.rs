use std::io::{self, Read};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// A readable connection whose blocking reads can be bounded
pub trait MessageStream: Read {
    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()>;
}

impl MessageStream for TcpStream {
    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        TcpStream::set_read_timeout(self, timeout)
    }
}

/// Opens connections to the MOTD server
pub trait Connector {
    type Stream: MessageStream;

    /// Connect to `host:port`, giving up once `timeout` has elapsed
    fn connect(&self, host: &str, port: u16, timeout: Duration) -> io::Result<Self::Stream>;
}

/// Plain TCP connector
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector;

impl Connector for TcpConnector {
    type Stream = TcpStream;

    fn connect(&self, host: &str, port: u16, timeout: Duration) -> io::Result<TcpStream> {
        let deadline = Instant::now() + timeout;
        let mut last_err = None;

        let lookup_host = host.to_string();
        let addrs = resolve_within(
            move || (lookup_host.as_str(), port).to_socket_addrs().map(|addrs| addrs.collect()),
            timeout,
        )?;

        // Lookup and every resolved address share one deadline
        for addr in addrs {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("connection timed out after {:?}", timeout),
                ));
            }

            match TcpStream::connect_timeout(&addr, remaining) {
                Ok(stream) => return Ok(stream),
                Err(e) => {
                    tracing::debug!(%addr, error = %e, "Connection attempt failed");
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no addresses found for {}", host),
            )
        }))
    }
}

/// Run a blocking name lookup, giving up once `timeout` has elapsed.
///
/// The lookup thread is left to finish on its own after a timeout.
fn resolve_within<F>(lookup: F, timeout: Duration) -> io::Result<Vec<SocketAddr>>
where
    F: FnOnce() -> io::Result<Vec<SocketAddr>> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    thread::Builder::new()
        .name("motd-resolve".to_string())
        .spawn(move || {
            let _ = tx.send(lookup());
        })?;

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => Err(io::Error::new(
            io::ErrorKind::TimedOut,
            format!("name lookup timed out after {:?}", timeout),
        )),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(io::Error::other(
            "name lookup thread exited without a result",
        )),
    }
}
