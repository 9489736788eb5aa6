//! Browser tests, run with `wasm-pack test --headless --firefox`
//!
//! These mount the real `App` (router, menu, home page) with scripted
//! dialogs and drive it through the DOM.

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use formgate_ui::App;
use formgate_ui::dialogs::{ConfirmPrompt, Dialogs, Notifier, browser_window};
use formgate_ui::router::{Page, browser_path, routes};
use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventInit, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Clone)]
struct Scripted {
    answer: bool,
    asked: Arc<AtomicUsize>,
}

impl ConfirmPrompt for Scripted {
    fn confirm(&self, _message: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

struct Silent;

impl Notifier for Silent {
    fn notify(&self, _message: &str) {}
}

fn document() -> Document {
    browser_window().unwrap().document().unwrap()
}

fn set_path(path: &str) {
    browser_window()
        .unwrap()
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(path))
        .unwrap();
}

/// An `App` mounted in its own container
struct Mounted<H> {
    container: HtmlElement,
    asked: Arc<AtomicUsize>,
    _handle: H,
}

impl<H> Mounted<H> {
    fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }

    fn find<T: JsCast>(&self, selector: &str) -> Option<T> {
        self.container
            .query_selector(selector)
            .unwrap()
            .map(JsCast::unchecked_into)
    }

    fn type_name(&self, value: &str) {
        let input: HtmlInputElement = self.find("#name-field").expect("name field rendered");
        input.set_value(value);
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("input", &init).unwrap();
        input.dispatch_event(&event).unwrap();
    }

    fn click_menu(&self, href: &str) {
        let link: HtmlElement = self
            .find(&format!("menu a[data-href='{href}']"))
            .expect("menu link rendered");
        link.click();
    }

    fn unsaved_notice_shown(&self) -> bool {
        self.find::<HtmlElement>(".unsaved-notice").is_some()
    }

    fn field_value(&self) -> String {
        self.find::<HtmlInputElement>("#name-field")
            .expect("name field rendered")
            .value()
    }
}

impl<H> Drop for Mounted<H> {
    fn drop(&mut self) {
        self.container.remove();
    }
}

/// Mounts `App` with a prompt that always answers `answer`
fn mount_app(answer: bool) -> Mounted<impl Sized> {
    let asked = Arc::new(AtomicUsize::new(0));
    let prompt = Scripted {
        answer,
        asked: Arc::clone(&asked),
    };
    let container: HtmlElement = document().create_element("div").unwrap().unchecked_into();
    document().body().unwrap().append_child(&container).unwrap();
    let handle = mount_to(container.clone(), move || {
        view! { <App dialogs=Dialogs::new(prompt, Silent) /> }
    });
    Mounted {
        container,
        asked,
        _handle: handle,
    }
}

async fn settle() {
    TimeoutFuture::new(50).await;
}

#[wasm_bindgen_test]
fn window_is_reachable() {
    assert!(browser_window().is_ok());
}

#[wasm_bindgen_test]
fn current_location_resolves_or_reports_not_found() {
    let path = browser_path().unwrap_or_else(|_| routes::HOME.to_string());
    match Page::from_path(&path) {
        Ok(page) => assert!(Page::ALL.contains(&page)),
        Err(err) => assert!(err.to_string().starts_with("Route not found")),
    }
}

#[wasm_bindgen_test]
async fn declining_the_prompt_keeps_the_user_on_home() {
    set_path(routes::HOME);
    let app = mount_app(false);
    settle().await;

    app.type_name("draft");
    settle().await;
    assert!(app.unsaved_notice_shown());

    app.click_menu(routes::ABOUT);
    settle().await;

    assert_eq!(app.times_asked(), 1);
    assert_eq!(browser_path().unwrap(), routes::HOME);
    assert!(app.unsaved_notice_shown());
    assert_eq!(app.field_value(), "draft");
}

#[wasm_bindgen_test]
async fn accepting_the_prompt_navigates_to_about() {
    set_path(routes::HOME);
    let app = mount_app(true);
    settle().await;

    app.type_name("draft");
    settle().await;
    app.click_menu(routes::ABOUT);
    settle().await;

    assert_eq!(app.times_asked(), 1);
    assert_eq!(browser_path().unwrap(), routes::ABOUT);
    assert!(!app.unsaved_notice_shown());
    assert!(app.find::<HtmlElement>(".about-page").is_some());
}

#[wasm_bindgen_test]
async fn untouched_form_navigates_without_prompt() {
    set_path(routes::HOME);
    let app = mount_app(false);
    settle().await;

    app.click_menu(routes::ABOUT);
    settle().await;

    assert_eq!(app.times_asked(), 0);
    assert_eq!(browser_path().unwrap(), routes::ABOUT);
}

#[wasm_bindgen_test]
async fn declining_on_back_restores_home_with_draft() {
    // History: /about, then / on top
    set_path(routes::ABOUT);
    browser_window()
        .unwrap()
        .history()
        .unwrap()
        .push_state_with_url(&JsValue::NULL, "", Some(routes::HOME))
        .unwrap();
    let app = mount_app(false);
    settle().await;

    app.type_name("draft");
    settle().await;

    browser_window().unwrap().history().unwrap().back().unwrap();
    settle().await;

    assert_eq!(app.times_asked(), 1);
    assert_eq!(browser_path().unwrap(), routes::HOME);
    assert!(app.unsaved_notice_shown());
    assert_eq!(app.field_value(), "draft");
}
