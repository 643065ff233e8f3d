//! Network messages - communication between App and Network layers

use crate::models::{CityName, StateName};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Fetch the list of states
    FetchStates { id: u64 },
    /// Fetch the cities of a state
    FetchCities { id: u64, state: StateName },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// State list received
    States { id: u64, states: Vec<StateName> },
    /// City list received for `state`
    Cities {
        id: u64,
        state: StateName,
        cities: Vec<CityName>,
    },
    /// A fetch failed
    Error { id: u64, message: String },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::States { id, .. } => *id,
            NetworkResponse::Cities { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }
}
