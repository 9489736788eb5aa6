//! Home page: the guarded single-field form

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::use_form_config;
use crate::dialogs::use_dialogs;
use crate::guard::{FormGuard, use_navigation_guard};
use crate::models::FormState;
use crate::router::{browser_path, routes};
use crate::state::use_form_state;

/// Home page component
///
/// While mounted it arms the navigation guard with the form's veto, puts
/// the URL back when a back/forward move is vetoed, and intercepts tab
/// close/reload when the field holds unsubmitted text. All three are
/// released on cleanup.
#[component]
pub fn Home() -> impl IntoView {
    let config = use_form_config();
    let dialogs = use_dialogs();
    let state = use_form_state();

    let guard = use_navigation_guard();
    guard.register(Arc::new(FormGuard::new(
        state,
        dialogs.prompt,
        config.leave_message.clone(),
    )));

    let unload = window_event_listener(ev::beforeunload, move |e| {
        let blocks = state
            .try_with_untracked(FormState::blocks_unload)
            .unwrap_or(false);
        if blocks {
            tracing::debug!("blocking unload with unsaved input");
            e.prevent_default();
            e.set_return_value("");
        }
    });

    // The router has already moved to the new URL when this runs
    let history_guard = guard.clone();
    let navigate = use_navigate();
    let history = window_event_listener(ev::popstate, move |_| {
        let to = browser_path().unwrap_or_default();
        if let Some(back) = history_guard.restore_target(routes::HOME, &to) {
            tracing::info!(to = %to, "history navigation vetoed, restoring");
            navigate(
                &back,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    on_cleanup(move || {
        unload.remove();
        history.remove();
        guard.clear();
        tracing::debug!("home page released listeners and guard");
    });

    let field = config.field_name.clone();
    let notifier = dialogs.notifier;
    let on_submit = move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        let outcome = state.try_update(|s| s.submit_with(&field, notifier.as_ref()));
        if let Some(Err(err)) = outcome {
            tracing::debug!(%err, "submit ignored");
        }
    };

    let notice = config.unsaved_notice;

    view! {
        <div class="home-page">
            <form class="name-form" on:submit=on_submit>
                <label for="name-field">{config.field_label}</label>
                <input
                    id="name-field"
                    type="text"
                    name=config.field_name
                    placeholder=config.placeholder
                    required=true
                    on:input=move |ev| state.update(|s| s.edit(event_target_value(&ev)))
                    prop:value=move || state.with(|s| s.name().to_string())
                />

                <button type="submit" disabled=move || !state.with(FormState::is_valid)>
                    {config.submit_label}
                </button>
            </form>

            <Show when=move || state.with(FormState::has_unsaved_changes)>
                <p class="unsaved-notice">{notice.clone()}</p>
            </Show>
        </div>
    }
}
