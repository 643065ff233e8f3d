//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // The form is the initial route, so it mounts right away
        let cmd = self.state.mount_form();
        self.send_command(cmd);
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn send_command(&self, cmd: NetworkCommand) {
        if self.network_tx.send(cmd).is_err() {
            tracing::warn!("Network actor is gone; command dropped");
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        let cmd = match event {
            // Focus
            UiEvent::NextField => {
                self.state.next_field();
                None
            }
            UiEvent::PrevField => {
                self.state.prev_field();
                None
            }

            // Pickers
            UiEvent::HighlightNext => {
                self.state.highlight_next();
                None
            }
            UiEvent::HighlightPrev => {
                self.state.highlight_prev();
                None
            }
            UiEvent::Choose => self.state.choose(),
            UiEvent::ClearState => self.state.clear_state(),

            // Form / routing
            UiEvent::Submit => {
                self.state.submit();
                None
            }
            UiEvent::Back => self.state.back(),

            // Popups
            UiEvent::ToggleHelp => {
                self.state.toggle_help();
                None
            }
            UiEvent::CloseHelp => {
                self.state.close_help();
                None
            }

            // System
            UiEvent::Quit => return true,
        };

        if let Some(cmd) = cmd {
            self.send_command(cmd);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ui_events::Screen;
    use crate::models::{CityName, StateName};
    use pretty_assertions::assert_eq;

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        net_resp_tx: mpsc::UnboundedSender<NetworkResponse>,
        net_cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
    }

    impl Harness {
        fn start() -> Self {
            let (ui_tx, ui_rx) = mpsc::unbounded_channel();
            let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
            let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
            let (render_tx, render_rx) = mpsc::unbounded_channel();
            tokio::spawn(AppActor::new(net_cmd_tx, render_tx).run(ui_rx, net_resp_rx));
            Harness { ui_tx, net_resp_tx, net_cmd_rx, render_rx }
        }

        async fn command(&mut self) -> NetworkCommand {
            self.net_cmd_rx.recv().await.unwrap()
        }

        async fn render(&mut self) -> RenderState {
            self.render_rx.recv().await.unwrap()
        }

        async fn ui(&mut self, event: UiEvent) -> RenderState {
            self.ui_tx.send(event).unwrap();
            self.render().await
        }

        async fn respond(&mut self, response: NetworkResponse) -> RenderState {
            self.net_resp_tx.send(response).unwrap();
            self.render().await
        }
    }

    #[tokio::test]
    async fn test_search_flow_through_actor() {
        let mut h = Harness::start();

        let NetworkCommand::FetchStates { id } = h.command().await else {
            panic!("expected states fetch on mount");
        };
        let initial = h.render().await;
        assert!(initial.states.is_empty());
        assert!(!initial.city_enabled);

        let render = h
            .respond(NetworkResponse::States {
                id,
                states: vec![StateName::new("CA"), StateName::new("NY")],
            })
            .await;
        assert_eq!(render.states, vec![StateName::new("CA"), StateName::new("NY")]);

        h.ui(UiEvent::Choose).await;
        let NetworkCommand::FetchCities { id, state } = h.command().await else {
            panic!("expected cities fetch");
        };
        assert_eq!(state, StateName::new("CA"));

        h.respond(NetworkResponse::Cities {
            id,
            state,
            cities: vec![CityName::new("LA"), CityName::new("SF")],
        })
        .await;

        h.ui(UiEvent::NextField).await;
        h.ui(UiEvent::Choose).await;
        let render = h.ui(UiEvent::Submit).await;
        assert_eq!(render.screen, Screen::Results);
        assert_eq!(render.path, "/search?state=CA&city=LA");

        h.ui_tx.send(UiEvent::Quit).unwrap();
        assert_eq!(h.command().await, NetworkCommand::Shutdown);
    }

    #[tokio::test]
    async fn test_states_error_keeps_form_usable() {
        let mut h = Harness::start();
        let NetworkCommand::FetchStates { id } = h.command().await else {
            panic!("expected states fetch on mount");
        };
        h.render().await;

        let render = h
            .respond(NetworkResponse::Error { id, message: "Connection failed".into() })
            .await;
        assert!(render.states.is_empty());
        assert_eq!(render.screen, Screen::Form);

        let render = h.ui(UiEvent::Submit).await;
        assert_eq!(render.screen, Screen::Form);
        assert_eq!(render.validation_hint.as_deref(), Some("Please select a state"));
    }
}
