use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::error::{DomError, Result};

pub const REVEAL_CLASS: &str = "animate-in";

/// Fires once: the first time the element is seen intersecting.
#[derive(Debug, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    target: &Element,
    on_reveal: impl Fn() + 'static,
) -> Result<(IntersectionObserver, ObserverCallback)> {
    let mut latch = RevealLatch::default();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if latch.observe(entry.is_intersecting()) {
                observer.unobserve(&entry.target());
                on_reveal();
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);
    Ok((observer, callback))
}

/// Returns true once the element behind `node` has scrolled into view. The
/// observer is dropped after the first reveal or when the component unmounts.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observed = node
                    .cast::<Element>()
                    .ok_or(DomError::Unmounted)
                    .and_then(|el| observe_once(&el, move || revealed.set(true)));
                let observed = match observed {
                    Ok(pair) => Some(pair),
                    Err(e) => {
                        warn!("Scroll reveal disabled for card: {}", e);
                        None
                    }
                };
                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_on_first_intersection_only() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(!latch.observe(true));
    }
}
