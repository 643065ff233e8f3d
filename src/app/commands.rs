//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::ui_events::Field;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{CityName, Selection, StateName};
use crate::router::Route;

impl AppState {
    // ========================
    // Mount
    // ========================

    /// Enter the form: fresh selection, empty lists, states requested
    pub fn mount_form(&mut self) -> NetworkCommand {
        self.selection = Selection::new();
        self.states.clear();
        self.cities.clear();
        self.focus = Field::State;
        self.highlighted_state = 0;
        self.highlighted_city = 0;
        self.validation_hint = None;
        self.pending_cities_id = None;

        let id = self.next_id();
        self.pending_states_id = Some(id);
        NetworkCommand::FetchStates { id }
    }

    // ========================
    // Focus
    // ========================

    pub fn next_field(&mut self) {
        self.focus = self.focus.next(self.city_enabled());
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev(self.city_enabled());
    }

    // ========================
    // Picker options
    // ========================

    pub fn highlight_next(&mut self) {
        match self.focus {
            Field::State if !self.states.is_empty() => {
                self.highlighted_state = (self.highlighted_state + 1) % self.states.len();
            }
            Field::City if !self.cities.is_empty() => {
                self.highlighted_city = (self.highlighted_city + 1) % self.cities.len();
            }
            _ => {}
        }
    }

    pub fn highlight_prev(&mut self) {
        match self.focus {
            Field::State if !self.states.is_empty() => {
                self.highlighted_state = self
                    .highlighted_state
                    .checked_sub(1)
                    .unwrap_or(self.states.len() - 1);
            }
            Field::City if !self.cities.is_empty() => {
                self.highlighted_city = self
                    .highlighted_city
                    .checked_sub(1)
                    .unwrap_or(self.cities.len() - 1);
            }
            _ => {}
        }
    }

    /// Commit the highlighted option of the focused picker
    pub fn choose(&mut self) -> Option<NetworkCommand> {
        match self.focus {
            Field::State => {
                let state = self.states.get(self.highlighted_state)?.clone();
                self.select_state(state)
            }
            Field::City => {
                let city = self.cities.get(self.highlighted_city)?.clone();
                self.select_city(city);
                None
            }
            Field::Search => None,
        }
    }

    // ========================
    // Selection
    // ========================

    /// Select a state; a change triggers a fresh city fetch
    pub fn select_state(&mut self, state: StateName) -> Option<NetworkCommand> {
        if self.selection.set_state(state) {
            self.on_state_changed()
        } else {
            None
        }
    }

    pub fn clear_state(&mut self) -> Option<NetworkCommand> {
        if self.selection.clear_state() {
            self.on_state_changed()
        } else {
            None
        }
    }

    pub fn select_city(&mut self, city: CityName) {
        if self.selection.set_city(city) {
            self.validation_hint = None;
        }
    }

    /// Clear the city list and, if a state is selected, request its cities.
    /// Any city request still in flight becomes stale.
    fn on_state_changed(&mut self) -> Option<NetworkCommand> {
        self.cities.clear();
        self.highlighted_city = 0;
        self.validation_hint = None;
        self.pending_cities_id = None;

        let state = match self.selection.state() {
            Some(state) => state.clone(),
            None => {
                if self.focus == Field::City {
                    self.focus = Field::State;
                }
                return None;
            }
        };

        let id = self.next_id();
        self.pending_cities_id = Some(id);
        Some(NetworkCommand::FetchCities { id, state })
    }

    // ========================
    // Submission & routing
    // ========================

    /// Navigate to the results route if both fields are filled.
    /// Returns true if navigation happened.
    pub fn submit(&mut self) -> bool {
        let route = match self.selection.complete() {
            Some((state, city)) => Route::search(state.clone(), city.clone()),
            None => {
                let missing = if self.selection.state().is_none() { "state" } else { "city" };
                self.validation_hint = Some(format!("Please select a {}", missing));
                return false;
            }
        };

        self.router.navigate(route);

        // Leaving the form discards its state
        self.selection = Selection::new();
        self.states.clear();
        self.cities.clear();
        self.pending_states_id = None;
        self.pending_cities_id = None;
        self.validation_hint = None;
        true
    }

    /// Go back; landing on the form mounts it again
    pub fn back(&mut self) -> Option<NetworkCommand> {
        if self.router.back() && self.router.current() == &Route::Form {
            Some(self.mount_form())
        } else {
            None
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        let id = response.id();

        match response {
            NetworkResponse::States { states, .. } => {
                if self.pending_states_id == Some(id) {
                    tracing::info!(id, count = states.len(), "States loaded");
                    self.states = states;
                    self.highlighted_state = 0;
                    self.pending_states_id = None;
                } else {
                    tracing::debug!(id, "Discarding stale states response");
                }
            }
            NetworkResponse::Cities { state, cities, .. } => {
                if self.pending_cities_id == Some(id) && self.selection.state() == Some(&state) {
                    tracing::info!(id, state = %state, count = cities.len(), "Cities loaded");
                    self.cities = cities;
                    self.highlighted_city = 0;
                    self.pending_cities_id = None;
                } else {
                    tracing::debug!(id, state = %state, "Discarding stale cities response");
                }
            }
            NetworkResponse::Error { message, .. } => {
                if self.pending_states_id == Some(id) {
                    tracing::error!(id, error = %message, "Error fetching states");
                    self.pending_states_id = None;
                } else if self.pending_cities_id == Some(id) {
                    tracing::error!(id, error = %message, "Error fetching cities");
                    self.pending_cities_id = None;
                } else {
                    tracing::debug!(id, error = %message, "Discarding stale error response");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ui_events::Screen;
    use pretty_assertions::assert_eq;

    fn states(names: &[&str]) -> Vec<StateName> {
        names.iter().map(|n| StateName::new(*n)).collect()
    }

    fn cities(names: &[&str]) -> Vec<CityName> {
        names.iter().map(|n| CityName::new(*n)).collect()
    }

    /// Mounted form with the states response already applied
    fn loaded(names: &[&str]) -> AppState {
        let mut app = AppState::new();
        let NetworkCommand::FetchStates { id } = app.mount_form() else {
            panic!("mount must fetch states");
        };
        app.handle_response(NetworkResponse::States { id, states: states(names) });
        app
    }

    fn cities_request(cmd: Option<NetworkCommand>) -> (u64, StateName) {
        match cmd {
            Some(NetworkCommand::FetchCities { id, state }) => (id, state),
            other => panic!("expected cities fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_mount_requests_states() {
        let mut app = AppState::new();
        let cmd = app.mount_form();
        assert_eq!(cmd, NetworkCommand::FetchStates { id: 1 });
        assert_eq!(app.pending_states_id, Some(1));
        assert!(app.to_render_state().loading_states);
    }

    #[test]
    fn test_states_rendered_in_fetched_order() {
        let app = loaded(&["NY", "CA", "TX"]);
        let render = app.to_render_state();
        assert_eq!(render.states, states(&["NY", "CA", "TX"]));
        assert!(!render.loading_states);
    }

    #[test]
    fn test_city_disabled_until_state_selected() {
        let mut app = loaded(&["CA", "NY"]);
        let render = app.to_render_state();
        assert!(!render.city_enabled);
        assert!(render.cities.is_empty());

        app.next_field();
        assert_eq!(app.focus, Field::Search);

        app.focus = Field::City;
        app.select_city(CityName::new("LA"));
        assert!(app.selection.city().is_none());
    }

    #[test]
    fn test_full_search_flow() {
        let mut app = loaded(&["CA", "NY"]);

        let (id, state) = cities_request(app.choose());
        assert_eq!(state, StateName::new("CA"));
        app.handle_response(NetworkResponse::Cities { id, state, cities: cities(&["LA", "SF"]) });
        assert_eq!(app.cities, cities(&["LA", "SF"]));

        app.next_field();
        assert_eq!(app.focus, Field::City);
        assert_eq!(app.choose(), None);
        assert_eq!(app.selection.city(), Some(&CityName::new("LA")));

        assert!(app.submit());
        let render = app.to_render_state();
        assert_eq!(render.screen, Screen::Results);
        assert_eq!(render.path, "/search?state=CA&city=LA");
        assert_eq!(render.result_state, Some(StateName::new("CA")));
        assert_eq!(render.result_city, Some(CityName::new("LA")));
    }

    #[test]
    fn test_reselecting_state_clears_city_and_refetches() {
        let mut app = loaded(&["CA", "NY"]);
        let (id, state) = cities_request(app.select_state(StateName::new("CA")));
        app.handle_response(NetworkResponse::Cities { id, state, cities: cities(&["LA", "SF"]) });
        app.select_city(CityName::new("SF"));

        let (id, state) = cities_request(app.select_state(StateName::new("NY")));
        assert_eq!(state, StateName::new("NY"));
        assert!(app.selection.city().is_none());
        assert!(app.cities.is_empty());
        assert_eq!(app.pending_cities_id, Some(id));
    }

    #[test]
    fn test_same_state_does_not_refetch() {
        let mut app = loaded(&["CA"]);
        assert!(app.select_state(StateName::new("CA")).is_some());
        assert!(app.select_state(StateName::new("CA")).is_none());
    }

    #[test]
    fn test_stale_cities_response_is_ignored() {
        let mut app = loaded(&["CA", "NY"]);
        let (old_id, old_state) = cities_request(app.select_state(StateName::new("CA")));
        let (new_id, new_state) = cities_request(app.select_state(StateName::new("NY")));

        app.handle_response(NetworkResponse::Cities {
            id: new_id,
            state: new_state,
            cities: cities(&["NYC"]),
        });
        // Slow response for the superseded selection arrives last
        app.handle_response(NetworkResponse::Cities {
            id: old_id,
            state: old_state,
            cities: cities(&["LA", "SF"]),
        });

        assert_eq!(app.cities, cities(&["NYC"]));
    }

    #[test]
    fn test_clearing_state_disables_city() {
        let mut app = loaded(&["CA"]);
        let (id, state) = cities_request(app.select_state(StateName::new("CA")));
        app.handle_response(NetworkResponse::Cities { id, state, cities: cities(&["LA"]) });
        app.focus = Field::City;
        app.select_city(CityName::new("LA"));

        assert!(app.clear_state().is_none());
        let render = app.to_render_state();
        assert!(!render.city_enabled);
        assert!(render.cities.is_empty());
        assert_eq!(render.selected_city, None);
        assert_eq!(app.focus, Field::State);
    }

    #[test]
    fn test_states_failure_leaves_list_empty() {
        let mut app = AppState::new();
        let NetworkCommand::FetchStates { id } = app.mount_form() else {
            panic!("mount must fetch states");
        };
        app.handle_response(NetworkResponse::Error { id, message: "Connection failed".into() });

        let render = app.to_render_state();
        assert!(render.states.is_empty());
        assert!(!render.loading_states);
        assert_eq!(render.screen, Screen::Form);
        assert_eq!(app.choose(), None);
    }

    #[test]
    fn test_cities_failure_keeps_state() {
        let mut app = loaded(&["CA"]);
        let (id, _) = cities_request(app.select_state(StateName::new("CA")));
        app.handle_response(NetworkResponse::Error { id, message: "unexpected status 500".into() });

        assert_eq!(app.selection.state(), Some(&StateName::new("CA")));
        assert!(app.cities.is_empty());
        assert_eq!(app.pending_cities_id, None);
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut app = loaded(&["CA"]);
        assert!(!app.submit());
        assert_eq!(app.validation_hint.as_deref(), Some("Please select a state"));

        app.select_state(StateName::new("CA"));
        assert!(app.validation_hint.is_none());
        assert!(!app.submit());
        assert_eq!(app.validation_hint.as_deref(), Some("Please select a city"));
        assert_eq!(app.screen(), Screen::Form);
        assert_eq!(app.router.depth(), 1);
    }

    #[test]
    fn test_back_remounts_form() {
        let mut app = loaded(&["CA"]);
        let (id, state) = cities_request(app.select_state(StateName::new("CA")));
        app.handle_response(NetworkResponse::Cities { id, state, cities: cities(&["LA"]) });
        app.select_city(CityName::new("LA"));
        assert!(app.submit());

        let cmd = app.back();
        assert!(matches!(cmd, Some(NetworkCommand::FetchStates { .. })));
        assert_eq!(app.screen(), Screen::Form);
        assert_eq!(app.selection, Selection::new());
        assert!(app.states.is_empty());

        // Already on the first route
        assert_eq!(app.back(), None);
    }

    #[test]
    fn test_stale_states_response_after_remount_is_ignored() {
        let mut app = AppState::new();
        let NetworkCommand::FetchStates { id: first_id } = app.mount_form() else {
            panic!("mount must fetch states");
        };
        app.handle_response(NetworkResponse::States { id: first_id, states: states(&["CA"]) });
        let (id, state) = cities_request(app.select_state(StateName::new("CA")));
        app.handle_response(NetworkResponse::Cities { id, state, cities: cities(&["LA"]) });
        app.select_city(CityName::new("LA"));
        assert!(app.submit());

        let Some(NetworkCommand::FetchStates { id: second_id }) = app.back() else {
            panic!("back must remount the form");
        };
        assert_ne!(first_id, second_id);

        // A late reply tagged with the first mount's id
        app.handle_response(NetworkResponse::States { id: first_id, states: states(&["OLD"]) });
        assert!(app.states.is_empty());
        assert_eq!(app.pending_states_id, Some(second_id));

        app.handle_response(NetworkResponse::States { id: second_id, states: states(&["CA", "NY"]) });
        assert_eq!(app.states, states(&["CA", "NY"]));
        assert_eq!(app.pending_states_id, None);
    }

    #[test]
    fn test_highlight_wraps() {
        let mut app = loaded(&["A", "B", "C"]);
        app.highlight_prev();
        assert_eq!(app.highlighted_state, 2);
        app.highlight_next();
        assert_eq!(app.highlighted_state, 0);
        app.highlight_next();
        let (_, state) = cities_request(app.choose());
        assert_eq!(state, StateName::new("B"));
    }
}
