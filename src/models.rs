use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a state as returned by the directory service
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateName(String);

impl StateName {
    pub fn new(name: impl Into<String>) -> Self {
        StateName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a city; only meaningful together with its `StateName`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityName(String);

impl CityName {
    pub fn new(name: impl Into<String>) -> Self {
        CityName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The user's current (state, city) pair.
///
/// The city is cleared every time the state changes, and a city can only
/// be set while a state is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    state: Option<StateName>,
    city: Option<CityName>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<&StateName> {
        self.state.as_ref()
    }

    pub fn city(&self) -> Option<&CityName> {
        self.city.as_ref()
    }

    /// Select a state. Returns true if the selection actually changed.
    pub fn set_state(&mut self, state: StateName) -> bool {
        if self.state.as_ref() == Some(&state) {
            return false;
        }
        self.state = Some(state);
        self.city = None;
        true
    }

    /// Clear the state (and with it the city). Returns true if a state was set.
    pub fn clear_state(&mut self) -> bool {
        self.city = None;
        self.state.take().is_some()
    }

    /// Select a city. Refused while no state is selected.
    pub fn set_city(&mut self, city: CityName) -> bool {
        if self.state.is_none() {
            return false;
        }
        self.city = Some(city);
        true
    }

    /// Both fields, if the form is complete
    pub fn complete(&self) -> Option<(&StateName, &CityName)> {
        match (&self.state, &self.city) {
            (Some(state), Some(city)) => Some((state, city)),
            _ => None,
        }
    }
}
