//! `MobileMenu` JS class

use crate::api::helpers::EventListener;
use crate::wasm_warn;
use crate::widgets::{MenuClick, MenuToggle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

const OPEN_CLASS: &str = "is-open";
const NAV_LINK_SELECTOR: &str = "a.navlink";

#[wasm_bindgen]
pub struct MobileMenu {
    toggle: Rc<RefCell<MenuToggle>>,
    toggle_element: Element,
    menu_element: Element,
    listeners: Vec<EventListener>,
}

/// Mirror the open flag into `aria-expanded` and the `is-open` class
fn render(toggle_element: &Element, menu_element: &Element, open: bool) {
    if let Err(e) = toggle_element.set_attribute("aria-expanded", if open { "true" } else { "false" }) {
        wasm_warn!("failed to set aria-expanded: {:?}", e);
    }
    if let Err(e) = menu_element.class_list().toggle_with_force(OPEN_CLASS, open) {
        wasm_warn!("failed to toggle `{}` class: {:?}", OPEN_CLASS, e);
    }
}

/// Overlay when the menu element itself was clicked, nav link when the
/// target sits inside a section link of the menu, panel otherwise
fn classify_click(menu_element: &Element, event: &Event) -> MenuClick {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return MenuClick::Panel;
    };

    if &target == menu_element {
        return MenuClick::Overlay;
    }

    match target.closest(NAV_LINK_SELECTOR) {
        Ok(Some(link)) if menu_element.contains(Some(link.as_ref())) => MenuClick::NavLink,
        Ok(_) => MenuClick::Panel,
        Err(e) => {
            wasm_warn!("closest(`{}`) failed: {:?}", NAV_LINK_SELECTOR, e);
            MenuClick::Panel
        }
    }
}

#[wasm_bindgen]
impl MobileMenu {
    /// Clicking `toggle_element` flips the menu; inside `menu_element`, only
    /// the overlay itself and `a.navlink` links close it
    #[wasm_bindgen(constructor)]
    pub fn new(toggle_element: Element, menu_element: Element) -> Result<MobileMenu, JsValue> {
        let toggle = Rc::new(RefCell::new(MenuToggle::new()));
        render(&toggle_element, &menu_element, false);

        let on_toggle = {
            let toggle = toggle.clone();
            let (toggle_el, menu_el) = (toggle_element.clone(), menu_element.clone());
            EventListener::new(&toggle_element, "click", move |_event| {
                let open = toggle.borrow_mut().toggle();
                render(&toggle_el, &menu_el, open);
            })?
        };

        let on_menu_click = {
            let toggle = toggle.clone();
            let (toggle_el, menu_el) = (toggle_element.clone(), menu_element.clone());
            EventListener::new(&menu_element, "click", move |event| {
                let click = classify_click(&menu_el, &event);
                let open = toggle.borrow_mut().on_click(click);
                render(&toggle_el, &menu_el, open);
            })?
        };

        Ok(MobileMenu {
            toggle,
            toggle_element,
            menu_element,
            listeners: vec![on_toggle, on_menu_click],
        })
    }

    pub fn toggle(&self) -> bool {
        let open = self.toggle.borrow_mut().toggle();
        render(&self.toggle_element, &self.menu_element, open);
        open
    }

    /// A navigation choice was made from inside the menu
    pub fn navigate(&self) -> bool {
        let open = self.toggle.borrow_mut().navigate();
        render(&self.toggle_element, &self.menu_element, open);
        open
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.toggle.borrow().is_open()
    }

    pub fn dispose(&mut self) {
        self.listeners.clear();
    }
}
