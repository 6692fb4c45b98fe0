use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::error::{DomError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Looks up an element by id, `Ok(None)` when the page has no such element.
pub fn element_by_id(id: &str) -> Result<Option<HtmlElement>> {
    Ok(document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

pub fn query_html(selector: &str) -> Result<HtmlElement> {
    document()?
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| DomError::MissingElement(selector.to_string()))
}
