//! App state - pure data structure with no I/O logic

use crate::messages::ui_events::{Field, Screen};
use crate::messages::RenderState;
use crate::models::{CityName, Selection, StateName};
use crate::router::{Route, Router};

/// Main application state - pure data, no I/O
#[derive(Debug)]
pub struct AppState {
    // Routing
    pub router: Router,

    // Form data
    pub selection: Selection,
    pub states: Vec<StateName>,
    pub cities: Vec<CityName>,

    // UI state
    pub focus: Field,
    pub highlighted_state: usize,
    pub highlighted_city: usize,
    pub validation_hint: Option<String>,

    // In-flight fetches; responses carrying any other id are stale
    pub next_request_id: u64,
    pub pending_states_id: Option<u64>,
    pub pending_cities_id: Option<u64>,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            router: Router::new(),
            selection: Selection::new(),
            states: Vec::new(),
            cities: Vec::new(),
            focus: Field::State,
            highlighted_state: 0,
            highlighted_city: 0,
            validation_hint: None,
            next_request_id: 1,
            pending_states_id: None,
            pending_cities_id: None,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// The city picker is interactive only once a state is chosen
    pub fn city_enabled(&self) -> bool {
        self.selection.state().is_some()
    }

    pub fn screen(&self) -> Screen {
        match self.router.current() {
            Route::Form => Screen::Form,
            Route::Search { .. } => Screen::Results,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let (result_state, result_city) = match self.router.current() {
            Route::Search { state, city } => (Some(state.clone()), Some(city.clone())),
            Route::Form => (None, None),
        };

        RenderState {
            screen: self.screen(),
            path: self.router.current().path(),
            focus: self.focus,
            states: self.states.clone(),
            cities: self.cities.clone(),
            selected_state: self.selection.state().cloned(),
            selected_city: self.selection.city().cloned(),
            highlighted_state: self.highlighted_state,
            highlighted_city: self.highlighted_city,
            city_enabled: self.city_enabled(),
            loading_states: self.pending_states_id.is_some(),
            loading_cities: self.pending_cities_id.is_some(),
            validation_hint: self.validation_hint.clone(),
            result_state,
            result_city,
            show_help: self.show_help,
        }
    }
}
