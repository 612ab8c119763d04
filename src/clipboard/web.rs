//! Browser implementations of the copy capabilities
//!
//! - `WebClipboard`: `navigator.clipboard.writeText(text)`
//! - `WebSelection`: `document.createRange()` + `window.getSelection()`
//! - `WebCopyCommand`: `document.execCommand("copy")`
//!
//! `navigator.clipboard` is looked up dynamically because it is `undefined`
//! in insecure contexts.

use super::{ClipboardService, LegacyCopyCommand, SelectionService};
use crate::models::CopyError;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlDocument, Selection, Window};

/// DOMException names that mean the clipboard service refused or is missing
const CLIPBOARD_REJECTIONS: [&str; 3] = ["NotAllowedError", "SecurityError", "NotSupportedError"];

fn window() -> Result<Window, CopyError> {
    web_sys::window().ok_or_else(|| CopyError::Unknown("no window".to_string()))
}

fn document() -> Result<Document, CopyError> {
    window()?
        .document()
        .ok_or_else(|| CopyError::Unknown("no document".to_string()))
}

/// Text of a thrown JS value, used for diagnostics only
fn describe(value: &JsValue) -> String {
    if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", exception.name(), exception.message());
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn clipboard_error(value: JsValue) -> CopyError {
    match value.dyn_ref::<web_sys::DomException>() {
        Some(exception) if CLIPBOARD_REJECTIONS.contains(&exception.name().as_str()) => {
            CopyError::ClipboardUnavailable(describe(&value))
        }
        _ => CopyError::Unknown(describe(&value)),
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WebClipboard;

impl WebClipboard {
    fn write_promise(text: &str) -> Result<Promise, CopyError> {
        let navigator = window()?.navigator();
        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(clipboard_error)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(CopyError::ClipboardUnavailable(
                "navigator.clipboard is not available".to_string(),
            ));
        }

        let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(clipboard_error)?
            .dyn_into::<Function>()
            .map_err(|_| {
                CopyError::ClipboardUnavailable("clipboard.writeText is not a function".to_string())
            })?;

        write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(clipboard_error)?
            .dyn_into::<Promise>()
            .map_err(|value| CopyError::Unknown(format!("writeText returned {:?}", value)))
    }
}

impl ClipboardService for WebClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CopyError> {
        let promise = Self::write_promise(text)?;
        JsFuture::from(promise).await.map(|_| ()).map_err(|value| {
            // A rejected writeText is the service refusing, whatever the exception
            match clipboard_error(value) {
                CopyError::Unknown(message) => CopyError::ClipboardUnavailable(message),
                other => other,
            }
        })
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WebSelection;

impl WebSelection {
    fn active_selection() -> Result<Selection, CopyError> {
        window()?
            .get_selection()
            .map_err(|e| CopyError::SelectionCopyFailed(describe(&e)))?
            .ok_or_else(|| CopyError::SelectionCopyFailed("no active selection object".to_string()))
    }
}

impl SelectionService for WebSelection {
    type Node = Element;

    fn select_node_contents(&self, node: &Element) -> Result<(), CopyError> {
        let range = document()?
            .create_range()
            .map_err(|e| CopyError::SelectionCopyFailed(describe(&e)))?;
        range
            .select_node_contents(node)
            .map_err(|e| CopyError::SelectionCopyFailed(describe(&e)))?;

        let selection = Self::active_selection()?;
        selection
            .remove_all_ranges()
            .map_err(|e| CopyError::SelectionCopyFailed(describe(&e)))?;
        selection
            .add_range(&range)
            .map_err(|e| CopyError::SelectionCopyFailed(describe(&e)))
    }

    fn clear(&self) {
        match Self::active_selection() {
            Ok(selection) => {
                if let Err(e) = selection.remove_all_ranges() {
                    log::warn!("failed to clear selection: {}", describe(&e));
                }
            }
            Err(err) => log::warn!("failed to clear selection: {}", err),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WebCopyCommand;

impl LegacyCopyCommand for WebCopyCommand {
    fn copy(&self) -> Result<bool, CopyError> {
        let document = document()?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| CopyError::SelectionCopyFailed("document has no execCommand".to_string()))?;

        document
            .exec_command("copy")
            .map_err(|e| CopyError::Unknown(describe(&e)))
    }
}
