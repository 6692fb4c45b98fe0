use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

pub const RESTING_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) translateZ(0)";

const MAX_TILT_DEG: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    fn of(element: &HtmlElement) -> Self {
        let rect = element.get_bounding_client_rect();
        CardRect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Rotation in degrees `(x, y)` for a pointer at `(client_x, client_y)`.
/// Pointer above the centre tips the card back, pointer right turns it right.
pub fn tilt_angles(rect: &CardRect, client_x: f64, client_y: f64) -> (f64, f64) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return (0.0, 0.0);
    }
    let dx = client_x - (rect.left + rect.width / 2.0);
    let dy = client_y - (rect.top + rect.height / 2.0);
    ((dy / rect.height) * -MAX_TILT_DEG, (dx / rect.width) * MAX_TILT_DEG)
}

pub fn tilt_transform(rect: &CardRect, client_x: f64, client_y: f64) -> String {
    let (rotate_x, rotate_y) = tilt_angles(rect, client_x, client_y);
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) translateZ(10px)",
        rotate_x, rotate_y
    )
}

pub struct Tilt {
    pub transform: Option<String>,
    pub onmousemove: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

/// Pointer-following tilt for the element behind `node`. When `enabled` is
/// false the handlers do nothing.
#[hook]
pub fn use_tilt(node: NodeRef, enabled: bool) -> Tilt {
    let transform = use_state(|| None::<String>);

    let onmousemove = {
        let transform = transform.clone();
        Callback::from(move |e: MouseEvent| {
            if !enabled {
                return;
            }
            if let Some(card) = node.cast::<HtmlElement>() {
                let rect = CardRect::of(&card);
                transform.set(Some(tilt_transform(&rect, e.client_x() as f64, e.client_y() as f64)));
            }
        })
    };

    let onmouseleave = {
        let transform = transform.clone();
        Callback::from(move |_: MouseEvent| {
            if enabled {
                transform.set(Some(RESTING_TRANSFORM.to_string()));
            }
        })
    };

    Tilt {
        transform: (*transform).clone(),
        onmousemove,
        onmouseleave,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: CardRect = CardRect { left: 100.0, top: 200.0, width: 200.0, height: 100.0 };

    #[test]
    fn centre_is_flat() {
        assert_eq!(tilt_angles(&CARD, 200.0, 250.0), (-0.0, 0.0));
    }

    #[test]
    fn corners_reach_half_the_maximum() {
        // top-left corner: pointer half a card above and left of the centre
        assert_eq!(tilt_angles(&CARD, 100.0, 200.0), (5.0, -5.0));
        assert_eq!(tilt_angles(&CARD, 300.0, 300.0), (-5.0, 5.0));
    }

    #[test]
    fn transform_keeps_forward_translation() {
        assert_eq!(
            tilt_transform(&CARD, 300.0, 250.0),
            "perspective(1000px) rotateX(-0deg) rotateY(5deg) translateZ(10px)"
        );
    }

    #[test]
    fn collapsed_card_does_not_divide_by_zero() {
        let flat = CardRect { width: 0.0, ..CARD };
        assert_eq!(tilt_angles(&flat, 10.0, 10.0), (0.0, 0.0));
    }
}
