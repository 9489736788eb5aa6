//! Reusable UI components

pub mod guarded_link;
pub mod menu;

pub use guarded_link::GuardedLink;
pub use menu::Menu;
