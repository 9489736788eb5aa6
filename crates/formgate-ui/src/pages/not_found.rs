//! 404 Not Found page component

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::GuardedLink;
use crate::router::{Page, routes};

/// 404 Not Found page component
#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    let detail = move || {
        Page::from_path(&location.pathname.get())
            .err()
            .map(|err| err.to_string())
    };

    view! {
        <div class="not-found-page">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <p class="not-found-detail">{detail}</p>
            <GuardedLink href=routes::HOME>"Go to Home"</GuardedLink>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_component_exists() {
        let _component = NotFound;
    }
}
