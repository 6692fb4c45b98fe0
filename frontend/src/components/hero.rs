use log::debug;
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::components::ripple::{ButtonVariant, RippleButton};
use crate::config::{HOW_IT_WORKS_SECTION, LEAD_FORM_SECTION, PARTICLE_COLORS, PARTICLE_COUNT};
use crate::scroll::jump_to;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub color: &'static str,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    /// Builds a particle from six uniform samples in `[0, 1)`:
    /// size, x, y, color, duration and delay.
    pub fn from_samples(samples: [f64; 6]) -> Self {
        let [size, x, y, color, duration, delay] = samples;
        let color_index = ((color * PARTICLE_COLORS.len() as f64) as usize).min(PARTICLE_COLORS.len() - 1);
        Particle {
            size: size * 10.0 + 5.0,
            left: x * 100.0,
            top: y * 100.0,
            color: PARTICLE_COLORS[color_index],
            duration: duration * 10.0 + 10.0,
            delay: delay * 5.0,
        }
    }

    pub fn random() -> Self {
        Self::from_samples(std::array::from_fn(|_| Math::random()))
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; background: {color}; \
             border-radius: 50%; top: {top}%; left: {left}%; \
             animation: float {duration}s ease-in-out infinite; animation-delay: {delay}s; z-index: 1;",
            size = self.size,
            color = self.color,
            top = self.top,
            left = self.left,
            duration = self.duration,
            delay = self.delay,
        )
    }
}

/// Staggered start for the static floating decorations.
pub fn floating_delay(index: usize) -> String {
    format!("animation-delay: {}s;", index as f64 * 0.5)
}

const FLOATING_ICONS: [&str; 4] = ["fa-graduation-cap", "fa-briefcase", "fa-store", "fa-handshake"];

#[function_component(Hero)]
pub fn hero() -> Html {
    let particles = use_state(|| {
        debug!("Generating {} hero particles", PARTICLE_COUNT);
        (0..PARTICLE_COUNT).map(|_| Particle::random()).collect::<Vec<_>>()
    });

    html! {
        <section class="hero" id="home">
            <div class="hero-bg" id="heroBg">
                { for FLOATING_ICONS.iter().enumerate().map(|(i, icon)| html! {
                    <div class={classes!("floating-element", format!("floating-element-{}", i + 1))} style={floating_delay(i)}>
                        <i class={classes!("fas", *icon)}></i>
                    </div>
                }) }
                { for particles.iter().map(|p| html! {
                    <div class="floating-particle" style={p.style()}></div>
                }) }
            </div>
            <div class="container hero-content">
                <span class="hero-badge">{"Internadda Connect"}</span>
                <h1 class="hero-title">
                    {"Grow your business with "}
                    <span class="gradient-text">{"motivated student talent"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Partner with Internadda to reach thousands of students in your area. Hire interns, promote your brand on campus and fill seats faster, with zero upfront cost."}
                </p>
                <div class="hero-buttons">
                    <RippleButton id="becomePartnerBtn" onclick={jump_to(LEAD_FORM_SECTION)}>
                        {"Become a Partner "}<i class="fas fa-arrow-right"></i>
                    </RippleButton>
                    <RippleButton id="getStudentsBtn" variant={ButtonVariant::Secondary} onclick={jump_to(HOW_IT_WORKS_SECTION)}>
                        {"See How It Works"}
                    </RippleButton>
                </div>
                <div class="hero-stats">
                    <div class="stat"><span class="stat-number">{"10,000+"}</span><span class="stat-label">{"Students"}</span></div>
                    <div class="stat"><span class="stat-number">{"500+"}</span><span class="stat-label">{"Partner businesses"}</span></div>
                    <div class="stat"><span class="stat-number">{"25+"}</span><span class="stat-label">{"Cities"}</span></div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_map_onto_ranges() {
        let low = Particle::from_samples([0.0; 6]);
        assert_eq!(low.size, 5.0);
        assert_eq!((low.left, low.top), (0.0, 0.0));
        assert_eq!(low.color, PARTICLE_COLORS[0]);
        assert_eq!((low.duration, low.delay), (10.0, 0.0));

        let high = Particle::from_samples([0.999; 6]);
        assert!(high.size < 15.0 && high.size > 14.9);
        assert!(high.left < 100.0 && high.top < 100.0);
        assert_eq!(high.color, PARTICLE_COLORS[1]);
        assert!(high.duration < 20.0 && high.delay < 5.0);
    }

    #[test]
    fn color_sample_of_one_stays_in_bounds() {
        let p = Particle::from_samples([0.5, 0.5, 0.5, 1.0, 0.5, 0.5]);
        assert_eq!(p.color, PARTICLE_COLORS[1]);
    }

    #[test]
    fn style_carries_every_parameter() {
        let style = Particle::from_samples([0.5, 0.25, 0.75, 0.0, 0.5, 0.2]).style();
        assert!(style.contains("width: 10px; height: 10px;"));
        assert!(style.contains("top: 75%; left: 25%;"));
        assert!(style.contains("animation: float 15s ease-in-out infinite; animation-delay: 1s;"));
    }

    #[test]
    fn floating_elements_are_staggered() {
        assert_eq!(floating_delay(0), "animation-delay: 0s;");
        assert_eq!(floating_delay(3), "animation-delay: 1.5s;");
    }
}
