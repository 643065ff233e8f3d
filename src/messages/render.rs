//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{Field, Screen};
use crate::models::{CityName, StateName};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderState {
    pub screen: Screen,
    /// Current route path, e.g. `/search?state=CA&city=LA`
    pub path: String,

    // Form
    pub focus: Field,
    pub states: Vec<StateName>,
    pub cities: Vec<CityName>,
    pub selected_state: Option<StateName>,
    pub selected_city: Option<CityName>,
    pub highlighted_state: usize,
    pub highlighted_city: usize,
    pub city_enabled: bool,
    pub loading_states: bool,
    pub loading_cities: bool,
    /// Shown when submit is attempted with a missing field
    pub validation_hint: Option<String>,

    // Results
    pub result_state: Option<StateName>,
    pub result_city: Option<CityName>,

    // Popups
    pub show_help: bool,
}
