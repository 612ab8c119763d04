//! `BackToTop` JS class
//!
//! Shows its button once the window is scrolled past the threshold and
//! smooth-scrolls to the top when clicked.

use crate::api::helpers::{js_error, EventListener};
use crate::config::WidgetConfig;
use crate::wasm_warn;
use crate::widgets::ScrollVisibility;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

#[wasm_bindgen]
pub struct BackToTop {
    visibility: Rc<RefCell<ScrollVisibility>>,
    button: HtmlElement,
    listeners: Vec<EventListener>,
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

fn render(button: &HtmlElement, visible: bool) {
    button.set_hidden(!visible);
}

fn scroll_to_top() -> Result<(), JsValue> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

#[wasm_bindgen]
impl BackToTop {
    #[wasm_bindgen(constructor)]
    pub fn new(button: HtmlElement, config: JsValue) -> Result<BackToTop, JsValue> {
        let config = WidgetConfig::from_js(config).map_err(|e| js_error("Invalid BackToTop config", e))?;
        let window = window()?;

        let visibility = Rc::new(RefCell::new(ScrollVisibility::new(config.scroll_threshold)));
        visibility.borrow_mut().on_scroll(window.scroll_y().unwrap_or(0.0));
        render(&button, visibility.borrow().is_visible());

        let on_scroll = {
            let visibility = visibility.clone();
            let button = button.clone();
            let scroll_window = window.clone();
            EventListener::new(&window, "scroll", move |_event| {
                let offset = scroll_window.scroll_y().unwrap_or(0.0);
                let mut visibility = visibility.borrow_mut();
                if visibility.on_scroll(offset) {
                    render(&button, visibility.is_visible());
                }
            })?
        };

        let on_click = EventListener::new(&button, "click", |_event| {
            if let Err(e) = scroll_to_top() {
                wasm_warn!("scrollTo failed: {:?}", e);
            }
        })?;

        Ok(BackToTop {
            visibility,
            button,
            listeners: vec![on_scroll, on_click],
        })
    }

    /// Feed a scroll offset directly; returns the new visibility
    #[wasm_bindgen(js_name = onScroll)]
    pub fn on_scroll(&self, offset: f64) -> bool {
        let mut visibility = self.visibility.borrow_mut();
        if visibility.on_scroll(offset) {
            render(&self.button, visibility.is_visible());
        }
        visibility.is_visible()
    }

    #[wasm_bindgen(js_name = isVisible)]
    pub fn is_visible(&self) -> bool {
        self.visibility.borrow().is_visible()
    }

    #[wasm_bindgen(js_name = scrollToTop)]
    pub fn scroll_to_top(&self) -> Result<(), JsValue> {
        scroll_to_top()
    }

    /// Detach the scroll and click listeners
    pub fn dispose(&mut self) {
        self.listeners.clear();
    }
}
