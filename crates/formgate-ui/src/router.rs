//! Router configuration for the formgate UI
//!
//! This module defines the routes and navigation structure for the application.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::Menu;
use crate::dialogs::browser_window;
use crate::error::{Result, UiError};
use crate::pages::{About, Home, NotFound};

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
    pub const ABOUT: &str = "/about";
}

/// Pages reachable by path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
}

impl Page {
    /// Every page, in menu order
    pub const ALL: [Self; 2] = [Self::Home, Self::About];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => routes::HOME,
            Self::About => routes::ABOUT,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
        }
    }

    /// Resolves a path to its page, ignoring one trailing slash
    ///
    /// # Errors
    /// Returns `UiError::RouteNotFound` for unknown paths.
    pub fn from_path(path: &str) -> Result<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        match trimmed {
            routes::HOME | "" => Ok(Self::Home),
            routes::ABOUT => Ok(Self::About),
            other => Err(UiError::RouteNotFound(other.to_string())),
        }
    }
}

/// Path of the URL the browser is showing
///
/// # Errors
/// Returns `UiError::BrowserUnavailable` outside a browser.
pub fn browser_path() -> Result<String> {
    browser_window()?
        .location()
        .pathname()
        .map_err(|e| UiError::BrowserUnavailable(format!("{e:?}")))
}

/// Main router component: menu on top, the routed page below
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Menu />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment("") view=Home />
                    <Route path=StaticSegment("about") view=About />
                </Routes>
            </main>
        </Router>
    }
}
