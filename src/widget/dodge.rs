//! Placement math for the evasive "No" button.
//!
//! The button reserves a 90x60 footprint inside its card and jumps to a
//! fresh uniform position whenever the pointer gets close. Positions are
//! plain numbers here; the browser layer turns them into inline styles.

use crate::rng::RandomSource;

/// Horizontal footprint reserved for the button, in px.
pub const DODGE_WIDTH: f64 = 90.0;
/// Vertical footprint reserved for the button, in px.
pub const DODGE_HEIGHT: f64 = 60.0;

/// Where a freshly mounted button sits until its first dodge fires.
pub const OFFSCREEN: DodgePoint = DodgePoint {
    left: -200.0,
    top: -200.0,
};

/// Top-left corner of the button, relative to its card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DodgePoint {
    pub left: f64,
    pub top: f64,
}

/// Inner size of the card the button must stay within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBounds {
    pub width: f64,
    pub height: f64,
}

/// Picks a uniform position with the whole footprint inside the card:
/// `left` in `[0, width - 90)`, `top` in `[0, height - 60)`. Cards smaller
/// than the footprint clamp the span to zero, pinning the button to the
/// top-left corner instead of pushing it outside.
pub fn dodge_point<R: RandomSource>(bounds: CardBounds, rng: &mut R) -> DodgePoint {
    let span_x = (bounds.width - DODGE_WIDTH).max(0.0);
    let span_y = (bounds.height - DODGE_HEIGHT).max(0.0);
    DodgePoint {
        left: rng.next_unit() * span_x,
        top: rng.next_unit() * span_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Lcg;

    #[test]
    fn test_points_stay_inside_the_card() {
        let bounds = CardBounds {
            width: 430.0,
            height: 240.0,
        };
        let mut rng = Lcg::new(5);
        for _ in 0..500 {
            let p = dodge_point(bounds, &mut rng);
            assert!(p.left >= 0.0 && p.left <= bounds.width - DODGE_WIDTH);
            assert!(p.top >= 0.0 && p.top <= bounds.height - DODGE_HEIGHT);
        }
    }

    #[test]
    fn test_footprint_exactly_fits() {
        let bounds = CardBounds {
            width: DODGE_WIDTH,
            height: DODGE_HEIGHT,
        };
        let mut rng = Lcg::new(9);
        let p = dodge_point(bounds, &mut rng);
        assert_eq!(p, DodgePoint { left: 0.0, top: 0.0 });
    }

    #[test]
    fn test_undersized_card_clamps_to_corner() {
        let bounds = CardBounds {
            width: 40.0,
            height: 10.0,
        };
        let mut rng = Lcg::new(13);
        for _ in 0..20 {
            let p = dodge_point(bounds, &mut rng);
            assert_eq!(
                p,
                DodgePoint { left: 0.0, top: 0.0 },
                "undersized card must pin the button to the corner"
            );
        }
    }

    #[test]
    fn test_positions_spread_over_the_card() {
        let bounds = CardBounds {
            width: 430.0,
            height: 240.0,
        };
        let mut rng = Lcg::new(21);
        let left_half = (0..200)
            .filter(|_| dodge_point(bounds, &mut rng).left < (bounds.width - DODGE_WIDTH) / 2.0)
            .count();
        assert!(
            (20..180).contains(&left_half),
            "positions should not cluster on one side, got {left_half}/200 on the left"
        );
    }

    #[test]
    fn test_offscreen_start_is_outside_any_card() {
        assert!(OFFSCREEN.left < -DODGE_WIDTH && OFFSCREEN.top < -DODGE_HEIGHT);
    }
}
