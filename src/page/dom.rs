//! `web_sys` implementation of the page traits.

use super::{CookieJar, Dom, FormHandle, InputHandle, SlotHandle, link_selector};
use crate::common::SetupError;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument, HtmlElement, HtmlFormElement, HtmlInputElement};

const SUBMITTED_KEY: &str = "submitted";

/// The live document.
#[derive(Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn current() -> Result<Self, SetupError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(SetupError::NoDocument)?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element<T: JsCast>(&self, id: &str) -> Option<T> {
        self.document.get_element_by_id(id)?.dyn_into::<T>().ok()
    }
}

impl Dom for WebDom {
    type Form = HtmlFormElement;
    type Input = HtmlInputElement;
    type Slot = HtmlElement;
    type Link = HtmlElement;
    type Cookies = HtmlDocument;

    fn form(&self, id: &str) -> Option<Self::Form> {
        self.element(id)
    }

    fn input(&self, id: &str) -> Option<Self::Input> {
        self.element(id)
    }

    fn slot(&self, id: &str) -> Option<Self::Slot> {
        self.element(id)
    }

    fn link_to(&self, href: &str) -> Option<Self::Link> {
        self.document
            .query_selector(&link_selector(href))
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn cookies(&self) -> Self::Cookies {
        self.document.clone().unchecked_into::<HtmlDocument>()
    }
}

impl FormHandle for HtmlFormElement {
    fn is_submitted(&self) -> bool {
        self.dataset().get(SUBMITTED_KEY).as_deref() == Some("true")
    }

    fn mark_submitted(&self) {
        if let Err(err) = self.dataset().set(SUBMITTED_KEY, "true") {
            warn!(error = ?err, "failed to set form submitted flag");
        }
    }

    fn submit(&self) {
        if let Err(err) = HtmlFormElement::submit(self) {
            warn!(error = ?err, "native form submission failed");
        }
    }
}

impl InputHandle for HtmlInputElement {
    fn value(&self) -> String {
        HtmlInputElement::value(self)
    }
}

impl SlotHandle for HtmlElement {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(err) = self.style().set_property("display", display) {
            warn!(error = ?err, "failed to toggle element visibility");
        }
    }
}

impl CookieJar for HtmlDocument {
    fn cookie_string(&self) -> String {
        self.cookie().unwrap_or_default()
    }
}
