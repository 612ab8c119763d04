//! WASM build test
//!
//! Browser checks for the web-sys bindings. Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use codeblock_wasm::api::{BackToTop, CodeBlockHandle, MobileMenu};
use codeblock_wasm::clipboard::web::{WebCopyCommand, WebSelection};
use codeblock_wasm::clipboard::{LegacyCopyCommand, SelectionService};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn element(tag: &str, text: &str) -> Element {
    let document = document();
    let element = document.create_element(tag).unwrap();
    element.set_text_content(Some(text));
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn test_code_block_creation() {
    let pre = element("pre", "docker compose up -d");
    let button = element("button", "").dyn_into::<HtmlElement>().unwrap();

    let block = CodeBlockHandle::new(
        "docker compose up -d".to_string(),
        "bash".to_string(),
        pre,
        Some(button.clone()),
        JsValue::UNDEFINED,
    )
    .unwrap();

    assert_eq!(block.state().unwrap(), "idle");
    assert_eq!(block.control_label().unwrap(), "Copiar");
    assert_eq!(button.text_content().unwrap(), "Copiar");
}

#[wasm_bindgen_test]
fn test_disposed_code_block_errors() {
    let pre = element("pre", "make ingest");
    let mut block = CodeBlockHandle::new(
        "make ingest".to_string(),
        "bash".to_string(),
        pre,
        None,
        JsValue::NULL,
    )
    .unwrap();

    block.dispose();
    assert!(block.state().is_err());
}

#[wasm_bindgen_test]
fn test_selection_is_cleared_after_legacy_copy() {
    let pre = element("pre", "echo hola");
    let selection = WebSelection;

    selection.select_node_contents(&pre).unwrap();
    let active = web_sys::window().unwrap().get_selection().unwrap().unwrap();
    assert_eq!(active.range_count(), 1);

    // Result depends on the browser's user-activation rules
    let _ = WebCopyCommand.copy();

    selection.clear();
    assert_eq!(active.range_count(), 0);
}

#[wasm_bindgen_test]
fn test_back_to_top_threshold() {
    let button = element("button", "↑").dyn_into::<HtmlElement>().unwrap();
    let back_to_top = BackToTop::new(button.clone(), JsValue::UNDEFINED).unwrap();

    assert!(back_to_top.on_scroll(601.0));
    assert!(!button.hidden());
    assert!(!back_to_top.on_scroll(600.0));
    assert!(button.hidden());
}

#[wasm_bindgen_test]
fn test_mobile_menu_toggle() {
    let toggle = element("button", "menu");
    let menu = element("nav", "links");
    let mobile_menu = MobileMenu::new(toggle.clone(), menu.clone()).unwrap();

    assert!(mobile_menu.toggle());
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(menu.class_list().contains("is-open"));

    assert!(!mobile_menu.navigate());
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!menu.class_list().contains("is-open"));
}

fn child(parent: &Element, tag: &str, class: &str) -> HtmlElement {
    let element = document().create_element(tag).unwrap();
    element.set_class_name(class);
    parent.append_child(&element).unwrap();
    element.dyn_into::<HtmlElement>().unwrap()
}

#[wasm_bindgen_test]
fn test_mobile_menu_closes_only_on_overlay_or_nav_link() {
    let toggle = element("button", "menu");
    let menu = element("div", "");
    let panel = child(&menu, "div", "mobile-menu-panel");
    let title = child(&panel, "div", "toc-title");
    let nav_link = child(&panel, "a", "navlink");
    let external = child(&panel, "a", "btn-link");
    let mobile_menu = MobileMenu::new(toggle.clone(), menu.clone()).unwrap();

    mobile_menu.toggle();
    panel.click();
    title.click();
    external.click();
    assert!(mobile_menu.is_open());
    assert!(menu.class_list().contains("is-open"));

    nav_link.click();
    assert!(!mobile_menu.is_open());
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));

    mobile_menu.toggle();
    menu.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(!mobile_menu.is_open());
}
