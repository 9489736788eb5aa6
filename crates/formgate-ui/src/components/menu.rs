//! Top navigation menu

use leptos::prelude::*;

use crate::components::GuardedLink;
use crate::router::Page;

/// Navigation menu with a link per page
#[component]
pub fn Menu() -> impl IntoView {
    view! {
        <menu class="app-menu" style="display: flex; flex-direction: row; gap: 1em;">
            <li>
                {Page::ALL
                    .into_iter()
                    .map(|page| view! { <GuardedLink href=page.path()>{page.label()}</GuardedLink> })
                    .collect_view()}
            </li>
        </menu>
    }
}
