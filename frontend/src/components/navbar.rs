use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::ripple::RippleButton;
use crate::config::{LEAD_FORM_SECTION, NAVBAR_SCROLL_THRESHOLD};
use crate::dom;
use crate::scroll::{jump_to, FragmentLink};

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

pub fn menu_icon(open: bool) -> &'static str {
    if open {
        "fa-times"
    } else {
        "fa-bars"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    LinkClick,
    CtaClick,
}

/// Mobile menu state after `event`. Links and the CTA always close it.
pub fn next_menu_state(open: bool, event: MenuEvent) -> bool {
    match event {
        MenuEvent::Toggle => !open,
        MenuEvent::LinkClick | MenuEvent::CtaClick => false,
    }
}

const NAV_LINKS: [(&str, &str); 4] = [
    ("#how-it-works", "How It Works"),
    ("#businesses", "Who It's For"),
    ("#features", "Benefits"),
    ("#testimonials", "Stories"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = dom::window().map(|window| {
                    let watched = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        scrolled.set(is_scrolled(watched.scroll_y().unwrap_or(0.0)));
                    }) as Box<dyn FnMut()>);

                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    {
                        warn!("Navbar scroll listener not attached: {:?}", e);
                    }
                    (window, scroll_callback)
                });
                if let Err(e) = &listener {
                    warn!("Navbar scroll state unavailable: {}", e);
                }

                move || {
                    if let Ok((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(next_menu_state(*menu_open, MenuEvent::Toggle)))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(next_menu_state(*menu_open, MenuEvent::LinkClick)))
    };

    let cta_click = {
        let menu_open = menu_open.clone();
        let scroll = jump_to(LEAD_FORM_SECTION);
        Callback::from(move |e: MouseEvent| {
            menu_open.set(next_menu_state(*menu_open, MenuEvent::CtaClick));
            scroll.emit(e);
        })
    };

    html! {
        <nav class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <div class="container nav-container">
                <FragmentLink href="#" classes="logo">
                    <i class="fas fa-link"></i>
                    <span>{"Internadda "}<span class="logo-accent">{"Connect"}</span></span>
                </FragmentLink>

                <ul class={classes!("nav-menu", (*menu_open).then_some("active"))} id="navMenu">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li>
                            <FragmentLink href={*href} classes="nav-link" onclick={close_menu.clone()}>
                                {*label}
                            </FragmentLink>
                        </li>
                    }) }
                    <li>
                        <RippleButton id="navCta" classes="nav-cta" onclick={cta_click}>
                            {"Partner With Us"}
                        </RippleButton>
                    </li>
                </ul>

                <button class="mobile-toggle" id="mobileToggle" onclick={toggle_menu}>
                    <i class={classes!("fas", menu_icon(*menu_open))}></i>
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_strictly_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(900.0));
    }

    #[test]
    fn toggle_flips_the_menu() {
        assert!(next_menu_state(false, MenuEvent::Toggle));
        assert!(!next_menu_state(true, MenuEvent::Toggle));
    }

    #[test]
    fn links_and_cta_always_close_the_menu() {
        for event in [MenuEvent::LinkClick, MenuEvent::CtaClick] {
            assert!(!next_menu_state(true, event));
            assert!(!next_menu_state(false, event));
        }
        assert_eq!(menu_icon(next_menu_state(true, MenuEvent::CtaClick)), "fa-bars");
    }

    #[test]
    fn icon_follows_menu_state() {
        assert_eq!(menu_icon(false), "fa-bars");
        assert_eq!(menu_icon(true), "fa-times");
    }
}
