use yew::prelude::*;

use crate::components::reveal::{use_reveal, REVEAL_CLASS};
use crate::components::tilt::use_tilt;

/// The card families that fade in on scroll.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CardKind {
    Step,
    Business,
    Feature,
    Testimonial,
}

impl CardKind {
    pub fn class(self) -> &'static str {
        match self {
            CardKind::Step => "step-card",
            CardKind::Business => "business-card",
            CardKind::Feature => "feature-card",
            CardKind::Testimonial => "testimonial-card",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub kind: CardKind,
    #[prop_or_default]
    pub tilt: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let tilt = use_tilt(node.clone(), props.tilt);

    html! {
        <div
            ref={node}
            class={classes!(props.kind.class(), revealed.then_some(REVEAL_CLASS))}
            data-tilt={props.tilt.then_some(AttrValue::Static(""))}
            style={tilt.transform.map(|t| format!("transform: {};", t))}
            onmousemove={tilt.onmousemove}
            onmouseleave={tilt.onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}
