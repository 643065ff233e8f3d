//! Network actor - runs directory fetches in the Tokio async runtime

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::traits::DirectoryService;

/// Network actor that executes fetch commands concurrently
pub struct NetworkActor<D> {
    directory: Arc<D>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl<D: DirectoryService + 'static> NetworkActor<D> {
    pub fn new(directory: D, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            directory: Arc::new(directory),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchStates { id }) => {
                            let directory = Arc::clone(&self.directory);
                            let response_tx = self.response_tx.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Fetching states");
                                let response = match directory.fetch_states().await {
                                    Ok(states) => NetworkResponse::States { id, states },
                                    Err(e) => NetworkResponse::Error { id, message: e.describe() },
                                };
                                tracing::info!(id, "States request completed");
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::FetchCities { id, state }) => {
                            let directory = Arc::clone(&self.directory);
                            let response_tx = self.response_tx.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, state = %state, "Fetching cities");
                                let response = match directory.fetch_cities(&state).await {
                                    Ok(cities) => NetworkResponse::Cities { id, state, cities },
                                    Err(e) => NetworkResponse::Error { id, message: e.describe() },
                                };
                                tracing::info!(id, "Cities request completed");
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
