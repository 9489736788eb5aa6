//! Anchor that consults the navigation guard before navigating

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use web_sys::MouseEvent;

use crate::guard::use_navigation_guard;

/// In-app link honoring the active view's veto
///
/// The anchor carries no `href`, so the router's global click handling
/// ignores it; navigation happens here and only once the guard allows it.
#[component]
pub fn GuardedLink(#[prop(into)] href: String, children: Children) -> impl IntoView {
    let guard = use_navigation_guard();
    let location = use_location();
    let navigate = use_navigate();
    let target = href.clone();

    let on_click = move |e: MouseEvent| {
        e.prevent_default();
        let current = location.pathname.get_untracked();
        if guard.leave(&current, &target) {
            navigate(&target, NavigateOptions::default());
        } else {
            tracing::info!(from = %current, to = %target, "navigation vetoed");
        }
    };

    view! {
        <a role="link" data-href=href style="cursor: pointer;" on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guarded_link_component_exists() {
        let _component = GuardedLink;
    }
}
