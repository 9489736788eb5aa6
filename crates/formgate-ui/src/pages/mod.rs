//! Page components for the formgate UI
//!
//! This module contains the top-level page components for each route.

pub mod about;
pub mod home;
pub mod not_found;

pub use about::About;
pub use home::Home;
pub use not_found::NotFound;
