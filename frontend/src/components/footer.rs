use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::scroll::FragmentLink;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_state(|| Local::now().year());

    html! {
        <footer class="footer">
            <div class="container footer-content">
                <div class="footer-brand">
                    <FragmentLink href="#" classes="logo">
                        <i class="fas fa-link"></i>
                        <span>{"Internadda "}<span class="logo-accent">{"Connect"}</span></span>
                    </FragmentLink>
                    <p>{"Connecting local businesses with the students next door."}</p>
                </div>
                <div class="footer-links">
                    <FragmentLink href="#how-it-works">{"How It Works"}</FragmentLink>
                    <FragmentLink href="#features">{"Benefits"}</FragmentLink>
                    <FragmentLink href="#lead-form">{"Partner With Us"}</FragmentLink>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© "}<span id="currentYear">{*year}</span>{" Internadda. All rights reserved."}</p>
            </div>
        </footer>
    }
}
