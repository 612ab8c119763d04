//! `CodeBlock` JS class
//!
//! Binds a browser copy widget to a `<pre>` element and, optionally, to the
//! button whose text mirrors the feedback state.

use crate::api::helpers::{js_error, serialize};
use crate::clipboard::web::{WebClipboard, WebCopyCommand, WebSelection};
use crate::clipboard::CopyOutcomeResolver;
use crate::config::WidgetConfig;
use crate::feedback::{FeedbackStateController, WebTimer};
use crate::widgets::{control_label_for, CodeBlockWidget};
use crate::{wasm_info, wasm_log};
use js_sys::Promise;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{Element, HtmlElement};

type WebCodeBlock = CodeBlockWidget<WebClipboard, WebSelection, WebCopyCommand, WebTimer>;

#[wasm_bindgen(js_name = CodeBlock)]
pub struct CodeBlockHandle {
    widget: Option<Rc<WebCodeBlock>>,
}

impl CodeBlockHandle {
    fn widget(&self) -> Result<&Rc<WebCodeBlock>, JsValue> {
        self.widget
            .as_ref()
            .ok_or_else(|| JsValue::from_str("CodeBlock has been disposed"))
    }
}

#[wasm_bindgen(js_class = CodeBlock)]
impl CodeBlockHandle {
    /// Create a copy widget for `text`, shown under the language `label`
    ///
    /// # Parameters
    /// - `code_element`: the `<pre>` whose contents mirror `text` (selection fallback)
    /// - `button`: copy control whose text follows the feedback state
    /// - `config`: optional `WidgetConfig` object
    #[wasm_bindgen(constructor)]
    pub fn new(
        text: String,
        label: String,
        code_element: Element,
        button: Option<HtmlElement>,
        config: JsValue,
    ) -> Result<CodeBlockHandle, JsValue> {
        let config = WidgetConfig::from_js(config).map_err(|e| js_error("Invalid CodeBlock config", e))?;

        let mut feedback = FeedbackStateController::new(WebTimer, config.revert_delay_ms);
        if let Some(button) = button {
            let idle = config.idle_label.clone();
            let confirmed = config.confirmed_label.clone();
            button.set_text_content(Some(&idle));
            feedback = feedback.with_listener(move |state| {
                button.set_text_content(Some(control_label_for(&idle, &confirmed, state)));
            });
        }

        let resolver = CopyOutcomeResolver::new(WebClipboard, WebSelection, WebCopyCommand);
        let widget = CodeBlockWidget::new(text, label, code_element, resolver, feedback, &config);
        wasm_log!("CodeBlock mounted: label={}, {} bytes", widget.label(), widget.text().len());

        Ok(CodeBlockHandle {
            widget: Some(Rc::new(widget)),
        })
    }

    /// Copy the text; resolves to `true` on success, never rejects
    pub fn copy(&self) -> Result<Promise, JsValue> {
        let widget = self.widget()?.clone();
        Ok(future_to_promise(async move {
            let outcome = widget.trigger().await;
            wasm_info!("CodeBlock `{}` copy: {:?}", widget.label(), outcome);
            Ok(JsValue::from_bool(outcome.is_success()))
        }))
    }

    #[wasm_bindgen(js_name = controlLabel)]
    pub fn control_label(&self) -> Result<String, JsValue> {
        Ok(self.widget()?.control_label().to_string())
    }

    pub fn label(&self) -> Result<String, JsValue> {
        Ok(self.widget()?.label().to_string())
    }

    pub fn text(&self) -> Result<String, JsValue> {
        Ok(self.widget()?.text().to_string())
    }

    /// `"idle"` or `"confirmed"`
    pub fn state(&self) -> Result<String, JsValue> {
        Ok(self.widget()?.state().as_str().to_string())
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serialize(&self.widget()?.snapshot(), "Failed to serialize CodeBlock snapshot")
    }

    /// Cancel the pending revert; an in-flight copy still completes
    pub fn dispose(&mut self) {
        if let Some(widget) = self.widget.take() {
            match Rc::try_unwrap(widget) {
                Ok(widget) => widget.unmount(),
                Err(shared) => shared.feedback().teardown(),
            }
        }
    }
}
