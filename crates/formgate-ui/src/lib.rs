//! Leptos 0.7 CSR frontend: a guarded form and an about page
//!
//! The home page holds a single required field. While it has unsaved edits,
//! leaving through the menu asks for confirmation and closing the tab is
//! intercepted.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Type-safe routing with leptos_router
//! - Browser dialogs behind traits so form and guard logic run natively
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `router`: Route definitions and navigation
//! - `pages`: Top-level page components
//! - `components`: Menu and guarded links
//! - `guard`: Navigation veto capability and registry
//! - `models`: Form state and validation
//! - `dialogs`: Confirm/alert abstractions
//! - `state`: Form state shared through context
//! - `config`: UI text and form settings
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod dialogs;
pub mod error;
pub mod guard;
pub mod models;
pub mod pages;
pub mod router;
pub mod state;

#[cfg(test)]
mod tests;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;
