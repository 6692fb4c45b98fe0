use std::collections::HashSet;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config::RIPPLE_LIFETIME_MS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    /// A ripple big enough to cover the button, centred on the click.
    pub fn at(id: u64, origin: (f64, f64), extent: (f64, f64), click: (f64, f64)) -> Self {
        let size = extent.0.max(extent.1);
        Ripple {
            id,
            size,
            x: click.0 - origin.0 - size / 2.0,
            y: click.1 - origin.1 - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.5); \
             transform: scale(0); animation: ripple-animation 0.6s linear; \
             width: {size}px; height: {size}px; top: {y}px; left: {x}px; pointer-events: none;",
            size = self.size,
            x = self.x,
            y = self.y,
        )
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Primary/secondary button that drops a fading ripple where it is clicked.
/// Each ripple owns its removal timer; unmounting the button cancels them.
#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    let node = use_node_ref();
    let ripples = use_mut_ref(Vec::<Ripple>::new);
    let timers = use_mut_ref(Vec::<(u64, Timeout)>::new);
    let next_id = use_mut_ref(|| 0u64);
    let redraw = use_force_update();

    {
        let timers = timers.clone();
        use_effect_with_deps(
            move |_| move || timers.borrow_mut().clear(),
            (),
        );
    }

    let onclick = {
        let node = node.clone();
        let ripples = ripples.clone();
        let timers = timers.clone();
        let redraw = redraw.clone();
        let user_onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(button) = node.cast::<HtmlElement>() {
                let rect = button.get_bounding_client_rect();
                let id = {
                    let mut next = next_id.borrow_mut();
                    *next += 1;
                    *next
                };
                let ripple = Ripple::at(
                    id,
                    (rect.left(), rect.top()),
                    (rect.width(), rect.height()),
                    (e.client_x() as f64, e.client_y() as f64),
                );
                ripples.borrow_mut().push(ripple);

                // Handles whose ripple is gone have already fired.
                let live: HashSet<u64> = ripples.borrow().iter().map(|r| r.id).collect();
                timers.borrow_mut().retain(|(id, _)| live.contains(id));

                let expire = {
                    let ripples = ripples.clone();
                    let redraw = redraw.clone();
                    Timeout::new(RIPPLE_LIFETIME_MS, move || {
                        ripples.borrow_mut().retain(|r| r.id != id);
                        redraw.force_update();
                    })
                };
                timers.borrow_mut().push((id, expire));
                redraw.force_update();
            }

            if let Some(onclick) = &user_onclick {
                onclick.emit(e);
            }
        })
    };

    let ripple_nodes: Html = ripples
        .borrow()
        .iter()
        .map(|r| html! { <span key={r.id} class="ripple" style={r.style()}></span> })
        .collect();

    html! {
        <button
            ref={node}
            id={props.id.clone()}
            type={props.button_type.clone()}
            class={classes!(props.variant.class(), props.classes.clone())}
            disabled={props.disabled}
            {onclick}
        >
            { for props.children.iter() }
            { ripple_nodes }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_centred_on_click() {
        let ripple = Ripple::at(1, (10.0, 20.0), (120.0, 40.0), (70.0, 40.0));
        assert_eq!(ripple.size, 120.0);
        assert_eq!(ripple.x, 0.0);
        assert_eq!(ripple.y, -40.0);
    }

    #[test]
    fn tall_buttons_use_height() {
        let ripple = Ripple::at(2, (0.0, 0.0), (30.0, 90.0), (15.0, 45.0));
        assert_eq!(ripple.size, 90.0);
        assert_eq!((ripple.x, ripple.y), (-30.0, 0.0));
    }

    #[test]
    fn style_places_the_ripple() {
        let style = Ripple::at(3, (0.0, 0.0), (100.0, 50.0), (50.0, 25.0)).style();
        assert!(style.contains("width: 100px; height: 100px; top: -25px; left: 0px;"));
        assert!(style.contains("ripple-animation 0.6s linear"));
    }

    #[test]
    fn variants_map_to_button_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn-secondary");
    }
}
