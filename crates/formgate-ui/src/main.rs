//! WASM entry point for the Leptos CSR app
//!
//! This is the main entry point that Trunk compiles to WASM.
//! It mounts the Leptos App component to the document body.

use formgate_ui::App;
use leptos::prelude::*;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    // Route tracing events to the browser console
    tracing_wasm::set_as_global_default();

    mount_to_body(|| {
        view! {
            <App />
        }
    })
}
