//! In-app routes and navigation history

use reqwest::Url;

use crate::constants::SEARCH_PATH;
use crate::models::{CityName, StateName};

/// Origin used only to borrow `Url`'s encoding for in-app paths
const ROUTE_ORIGIN: &str = "http://localhost";

/// A screen the app can show
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// The state/city search form
    Form,
    /// Results for a state and city
    Search { state: StateName, city: CityName },
}

impl Route {
    pub fn search(state: StateName, city: CityName) -> Self {
        Route::Search { state, city }
    }

    /// Path with query string, e.g. `/search?state=CA&city=LA`
    pub fn path(&self) -> String {
        match self {
            Route::Form => String::from("/"),
            Route::Search { state, city } => {
                let url = Url::parse(ROUTE_ORIGIN).and_then(|base| base.join(SEARCH_PATH));
                match url {
                    Ok(mut url) => {
                        url.query_pairs_mut()
                            .append_pair("state", state.as_str())
                            .append_pair("city", city.as_str());
                        format!("{}?{}", url.path(), url.query().unwrap_or_default())
                    }
                    Err(_) => String::from(SEARCH_PATH),
                }
            }
        }
    }

    /// Parse a path produced by `path`
    pub fn parse(path: &str) -> Option<Route> {
        let url = Url::parse(ROUTE_ORIGIN).ok()?.join(path).ok()?;
        match url.path() {
            "/" => Some(Route::Form),
            SEARCH_PATH => {
                let mut state = None;
                let mut city = None;
                for (key, value) in url.query_pairs() {
                    match key.as_ref() {
                        "state" => state = Some(StateName::new(value.into_owned())),
                        "city" => city = Some(CityName::new(value.into_owned())),
                        _ => {}
                    }
                }
                match (state, city) {
                    (Some(state), Some(city)) if !state.as_str().is_empty() && !city.as_str().is_empty() => {
                        Some(Route::Search { state, city })
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// Navigation history; starts on the form
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    previous: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Router {
            current: Route::Form,
            previous: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::info!(path = %route.path(), "Navigating");
        let left = std::mem::replace(&mut self.current, route);
        self.previous.push(left);
    }

    /// Go back one entry. Returns false when already at the first route.
    pub fn back(&mut self) -> bool {
        match self.previous.pop() {
            Some(route) => {
                self.current = route;
                tracing::info!(path = %self.current.path(), "Navigated back");
                true
            }
            None => false,
        }
    }

    pub fn depth(&self) -> usize {
        self.previous.len() + 1
    }
}
