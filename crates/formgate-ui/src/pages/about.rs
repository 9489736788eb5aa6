//! About page component

use leptos::prelude::*;

/// About page component
#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About"</h1>
        </div>
    }
}
