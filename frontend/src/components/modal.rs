use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

/// Only a click that lands on the backdrop itself counts, not one that
/// bubbled up from the content inside it.
pub fn is_backdrop_click<T: PartialEq>(target: Option<&T>, backdrop: Option<&T>) -> bool {
    matches!((target, backdrop), (Some(target), Some(backdrop)) if target == backdrop)
}

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Confirmation shown after a lead is captured. Closes from the close button
/// or a click on the backdrop itself; clicks inside the content are ignored.
#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    let backdrop = use_node_ref();

    let on_backdrop_click = {
        let backdrop = backdrop.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            if is_backdrop_click(target.as_ref(), backdrop.cast::<Element>().as_ref()) {
                on_close.emit(());
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            ref={backdrop}
            class={classes!("modal", props.open.then_some("active"))}
            id="successModal"
            onclick={on_backdrop_click}
        >
            <div class="modal-content">
                <div class="modal-icon"><i class="fas fa-check-circle"></i></div>
                <h3>{"Thank you for your interest!"}</h3>
                <p>{"Our partnership team will call you within 24 hours to walk you through the next steps."}</p>
                <button class="modal-close-btn" id="modalCloseBtn" onclick={on_close_click}>
                    {"Got it"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_click_closes() {
        assert!(is_backdrop_click(Some(&"successModal"), Some(&"successModal")));
    }

    #[test]
    fn content_click_does_not_close() {
        assert!(!is_backdrop_click(Some(&"modal-content"), Some(&"successModal")));
        assert!(!is_backdrop_click(Some(&"modalCloseBtn"), Some(&"successModal")));
    }

    #[test]
    fn unknown_target_or_unmounted_backdrop_is_ignored() {
        assert!(!is_backdrop_click(None, Some(&"successModal")));
        assert!(!is_backdrop_click(Some(&"successModal"), None));
        assert!(!is_backdrop_click::<&str>(None, None));
    }
}
