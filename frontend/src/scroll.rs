//! In-page navigation: every `#fragment` link and every "jump to section"
//! button goes through [`scroll_to_section`].

use log::{debug, warn};
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::SCROLL_GAP;
use crate::dom;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction {
    /// Leave the click to the browser (bare `#` scrolls to the top).
    PassThrough,
    ScrollTo(String),
}

pub fn classify_href(href: &str) -> AnchorAction {
    match href.strip_prefix('#') {
        Some("") | None => AnchorAction::PassThrough,
        Some(id) => AnchorAction::ScrollTo(id.to_string()),
    }
}

/// Destination so the section top lands just below the fixed navbar.
pub fn scroll_offset(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height - SCROLL_GAP
}

/// Where to scroll for a section at `section_top`, or `None` when the
/// section does not exist. The header is only measured for a real target.
pub fn plan_scroll(
    section_top: Option<f64>,
    header_height: impl FnOnce() -> Result<f64>,
) -> Result<Option<f64>> {
    match section_top {
        Some(top) => Ok(Some(scroll_offset(top, header_height()?))),
        None => Ok(None),
    }
}

/// Smoothly scrolls to the element with `section_id`. Returns `Ok(false)` when
/// there is no such element, which is not an error.
pub fn try_scroll_to_section(section_id: &str) -> Result<bool> {
    let section_top = dom::element_by_id(section_id)?.map(|section| section.offset_top() as f64);
    let planned = plan_scroll(section_top, || {
        Ok(dom::query_html(".navbar")?.offset_height() as f64)
    })?;
    let Some(top) = planned else {
        return Ok(false);
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}

pub fn scroll_to_section(section_id: &str) {
    match try_scroll_to_section(section_id) {
        Ok(true) => debug!("Scrolling to #{}", section_id),
        Ok(false) => debug!("No section #{}, ignoring", section_id),
        Err(e) => warn!("Could not scroll to #{}: {}", section_id, e),
    }
}

/// Click handler for a link pointing at `href`.
pub fn anchor_click(href: &str) -> Callback<MouseEvent> {
    let action = classify_href(href);
    Callback::from(move |e: MouseEvent| {
        if let AnchorAction::ScrollTo(id) = &action {
            e.prevent_default();
            scroll_to_section(id);
        }
    })
}

/// Button handler that jumps to a fixed section.
pub fn jump_to(section_id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| scroll_to_section(section_id))
}

#[derive(Properties, PartialEq)]
pub struct FragmentLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// An `<a href="#...">` routed through the smooth scroller.
#[function_component(FragmentLink)]
pub fn fragment_link(props: &FragmentLinkProps) -> Html {
    let onclick = {
        let scroll = anchor_click(&props.href);
        let extra = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(extra) = &extra {
                extra.emit(e.clone());
            }
            scroll.emit(e);
        })
    };

    html! {
        <a href={props.href.clone()} class={props.classes.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
