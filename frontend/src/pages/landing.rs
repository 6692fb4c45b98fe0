use log::info;
use yew::prelude::*;

use crate::components::card::{Card, CardKind};
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::lead_form::LeadFormSection;
use crate::components::modal::SuccessModal;
use crate::components::navbar::Navbar;

/// Keyframes the effects rely on; everything else comes from the site stylesheet.
const ANIMATION_STYLES: &str = r#"
    @keyframes ripple-animation {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }

    .animate-in {
        animation: fadeInUp 0.6s ease forwards;
    }

    @keyframes fadeInUp {
        from {
            opacity: 0;
            transform: translateY(30px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }
"#;

const STEPS: [(&str, &str, &str); 3] = [
    ("fa-clipboard-list", "Tell us what you need", "Share your business details and the kind of help or audience you are looking for."),
    ("fa-users", "We match you with students", "Our campus network brings you interns, brand ambassadors and customers nearby."),
    ("fa-chart-line", "Grow together", "Track walk-ins, sign-ups and hires while students gain real work experience."),
];

const BUSINESSES: [(&str, &str, &str); 4] = [
    ("fa-mug-hot", "Cafes & Restaurants", "Student discounts and events that keep tables full on weekdays."),
    ("fa-chalkboard-teacher", "Coaching Centres", "Reach students actively looking for courses and mentors."),
    ("fa-shopping-bag", "Retail Stores", "Campus promotions that turn students into regulars."),
    ("fa-rocket", "Startups & Agencies", "Hire pre-screened interns for marketing, design and tech."),
];

const FEATURES: [(&str, &str, &str); 4] = [
    ("fa-bullseye", "Targeted reach", "Promotions go to students within your locality."),
    ("fa-rupee-sign", "No upfront cost", "Start free and pay only for the results you see."),
    ("fa-user-check", "Verified students", "Every intern is screened by the Internadda team."),
    ("fa-headset", "Dedicated support", "A partner manager helps you plan every campaign."),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("Our weekday footfall went up by a third within two months of partnering.", "Rahul M.", "Cafe owner, Pune"),
    ("We hired three interns for our social media in a single week.", "Sneha K.", "Founder, design studio"),
    ("The student ambassadors filled our new batch before we even advertised.", "Vikram S.", "Coaching centre, Jaipur"),
];

fn icon_card(kind: CardKind, tilt: bool, (icon, title, body): (&str, &str, &str)) -> Html {
    html! {
        <Card {kind} {tilt}>
            <div class="card-icon"><i class={classes!("fas", icon.to_string())}></i></div>
            <h3>{title}</h3>
            <p>{body}</p>
        </Card>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal_open = use_state(|| false);

    let on_submitted = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| {
            info!("Lead captured, showing confirmation");
            modal_open.set(true);
        })
    };

    let on_close = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    html! {
        <div class="landing-page">
            <style>{ ANIMATION_STYLES }</style>
            <Navbar />
            <Hero />

            <section class="how-it-works" id="how-it-works">
                <div class="container">
                    <h2 class="section-title">{"How It Works"}</h2>
                    <div class="steps-grid">
                        { for STEPS.iter().enumerate().map(|(i, step)| html! {
                            <Card kind={CardKind::Step}>
                                <span class="step-number">{i + 1}</span>
                                <div class="card-icon"><i class={classes!("fas", step.0)}></i></div>
                                <h3>{step.1}</h3>
                                <p>{step.2}</p>
                            </Card>
                        }) }
                    </div>
                </div>
            </section>

            <section class="businesses" id="businesses">
                <div class="container">
                    <h2 class="section-title">{"Who It's For"}</h2>
                    <div class="business-grid">
                        { for BUSINESSES.iter().map(|b| icon_card(CardKind::Business, true, *b)) }
                    </div>
                </div>
            </section>

            <section class="features" id="features">
                <div class="container">
                    <h2 class="section-title">{"Why Partner With Internadda"}</h2>
                    <div class="features-grid">
                        { for FEATURES.iter().map(|f| icon_card(CardKind::Feature, true, *f)) }
                    </div>
                </div>
            </section>

            <section class="testimonials" id="testimonials">
                <div class="container">
                    <h2 class="section-title">{"What Our Partners Say"}</h2>
                    <div class="testimonials-grid">
                        { for TESTIMONIALS.iter().map(|(quote, who, role)| html! {
                            <Card kind={CardKind::Testimonial}>
                                <p class="testimonial-text">{*quote}</p>
                                <div class="testimonial-author">
                                    <strong>{*who}</strong>
                                    <span>{*role}</span>
                                </div>
                            </Card>
                        }) }
                    </div>
                </div>
            </section>

            <LeadFormSection {on_submitted} />
            <SuccessModal open={*modal_open} {on_close} />
            <Footer />
        </div>
    }
}
