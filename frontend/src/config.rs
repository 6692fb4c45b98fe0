use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Local builds log every interaction
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// Vertical scroll offset past which the navbar switches to its "scrolled" look.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Gap kept between the fixed navbar and a section we scroll to.
pub const SCROLL_GAP: f64 = 20.0;

pub const LEAD_FORM_SECTION: &str = "lead-form";
pub const HOW_IT_WORKS_SECTION: &str = "how-it-works";

pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const RIPPLE_LIFETIME_MS: u32 = 600;

pub const ERROR_BORDER_COLOR: &str = "#FF6B6B";

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const PARTICLE_COUNT: usize = 15;
pub const PARTICLE_COLORS: [&str; 2] = ["rgba(108, 99, 255, 0.2)", "rgba(0, 212, 170, 0.2)"];
