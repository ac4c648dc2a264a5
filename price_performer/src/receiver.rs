use crossbeam_channel::Sender;
use log::{debug, error, info};
use price_common::PerformerError;
use std::net::{TcpListener, TcpStream};

/// TCP task receiver that accepts connections from the dispatch side.
///
/// Each accepted stream is forwarded as-is into a channel; reading the task and
/// answering it happens on a per-connection thread owned by the main loop.
pub struct TaskReceiver {
    /// The underlying TCP listening socket.
    pub(crate) socket: TcpListener,
}

impl TaskReceiver {
    /// Bind a new TCP receiver to the provided `bind_addr` (e.g., `0.0.0.0:8080`).
    pub fn new(bind_addr: &str) -> Result<Self, PerformerError> {
        let socket = TcpListener::bind(bind_addr)?;
        Ok(Self { socket })
    }

    /// Blocking loop that accepts TCP connections and forwards them to `tx`.
    ///
    /// A failed accept is logged and skipped. The loop only ends once the
    /// receiving side of `tx` is gone.
    pub(crate) fn accept_loop(self, tx: Sender<TcpStream>) -> Result<(), PerformerError> {
        info!("Task TCP server is started on {}", self.socket.local_addr()?);

        for stream in self.socket.incoming() {
            match stream {
                Ok(stream) => {
                    if let Ok(peer) = stream.peer_addr() {
                        debug!("Accepted task connection from {}", peer);
                    }
                    tx.send(stream)
                        .map_err(|e| PerformerError::ChannelSend(e.to_string()))?;
                }
                Err(e) => error!("TCP connection error: {}", e),
            }
        }
        Ok(())
    }
}
