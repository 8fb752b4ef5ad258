//! Carousel state machine and scroll geometry.
//!
//! Navigation is circular: requested indices are normalized modulo the card
//! count, and the rendered order is a rotation of the logical sequence that
//! keeps one predecessor card to the left of the active card, so wrap-around
//! scrolling stays visually continuous instead of jumping across the list.
//!
//! The controller owns only logical state. Pixel measurements come in as
//! [`CardGeometry`]/[`Viewport`] snapshots and leave as a target scroll
//! offset; the DOM layer does the measuring and the scrolling.
//!
//! Phases replace ad-hoc timing flags: a navigation request enters
//! `Animating`, dispatching the smooth scroll enters `Settling`, and the end
//! of the settle window returns to `Idle`. Passive scroll detection only runs
//! in `Idle`, which is what keeps programmatic scrolling from feeding back
//! into index detection.

/// Gap between cards, in CSS pixels. Must match the stylesheet.
pub const CARD_GAP: f64 = 20.0;

/// How long a programmatic smooth scroll is given to finish before passive
/// scroll detection is re-enabled, in milliseconds.
pub const SETTLE_WINDOW_MS: u32 = 500;

/// Debounce applied to manual scroll events before resynchronizing.
pub const SCROLL_DEBOUNCE_MS: u32 = 150;

/// Movement direction of a navigation transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Animation phase of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing in flight; passive scroll detection may run.
    #[default]
    Idle,
    /// A navigation was requested and the rotated order is being laid out.
    Animating,
    /// The smooth scroll is dispatched; waiting out the settle window.
    Settling,
}

/// The outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    /// True when the transition crosses the ends of the sequence
    /// (first to last or last to first).
    pub wrapped: bool,
}

/// Circular carousel controller.
///
/// Constructed fresh for each rendered card list; holds the active card's
/// logical index, the previously active index, and the animation phase.
/// Invariants: `current` stays in `[0, len)` and exactly one card is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    previous: Option<usize>,
    phase: Phase,
}

impl Carousel {
    /// A controller for `len` cards, starting at card 0.
    ///
    /// Returns `None` for an empty card list: the section is hidden and no
    /// controller is attached.
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            len,
            current: 0,
            previous: None,
            phase: Phase::Idle,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Logical index of the active card.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Logical index of the previously active card, once any navigation has
    /// happened.
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether passive scroll detection may run right now.
    pub fn accepts_user_scroll(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Wrap a signed requested index into `[0, len)`.
    ///
    /// Navigation is closed under modulo: `len` maps to 0 and `-1` maps to
    /// `len - 1`. Never clamps.
    pub fn normalize(&self, index: isize) -> usize {
        index.rem_euclid(self.len as isize) as usize
    }

    /// Movement direction toward `target`, treating last-to-first as forward
    /// and first-to-last as backward.
    pub fn direction_to(&self, target: usize) -> Direction {
        let last = self.len - 1;
        if self.current == last && target == 0 {
            Direction::Forward
        } else if self.current == 0 && target == last {
            Direction::Backward
        } else if target >= self.current {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Handle a navigation request (buttons, dots, keyboard, card click, or
    /// passive scroll resync). Normalizes the index, records the move, and
    /// enters `Animating`.
    ///
    /// Requesting the already-current index is valid: the state is unchanged
    /// and the caller re-centers the active card.
    pub fn request_navigation(&mut self, requested: isize) -> Transition {
        let target = self.normalize(requested);
        let direction = self.direction_to(target);
        let last = self.len - 1;
        let wrapped = self.len > 1
            && ((self.current == 0 && target == last) || (self.current == last && target == 0));

        let transition = Transition {
            from: self.current,
            to: target,
            direction,
            wrapped,
        };

        self.previous = Some(self.current);
        self.current = target;
        self.phase = Phase::Animating;
        transition
    }

    /// The smooth scroll for the last navigation has been dispatched.
    pub fn begin_settle(&mut self) {
        if self.phase == Phase::Animating {
            self.phase = Phase::Settling;
        }
    }

    /// The settle window elapsed; passive detection may resume.
    pub fn scroll_settled(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Rendered order: the logical sequence rotated to start one position
    /// before the active card.
    ///
    /// For two or more cards the active card lands at position 1, so a
    /// predecessor is always adjacent on the left; a single card degenerates
    /// to `[0]`.
    pub fn rotation(&self) -> Vec<usize> {
        (0..self.len)
            .map(|offset| (self.current + self.len - 1 + offset) % self.len)
            .collect()
    }

    /// Whether `logical_index` is the active card. True for exactly one
    /// index.
    pub fn is_active(&self, logical_index: usize) -> bool {
        logical_index == self.current
    }
}

/// Post-layout measurements of one card, keyed by logical index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    pub logical_index: usize,
    /// Offset of the card's left edge within the scroll container.
    pub left: f64,
    pub width: f64,
}

impl CardGeometry {
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Scroll container measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_left: f64,
    pub client_width: f64,
    pub scroll_width: f64,
}

impl Viewport {
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    /// Absolute position of the visible midpoint.
    pub fn center(&self) -> f64 {
        self.scroll_left + self.client_width / 2.0
    }
}

/// Scroll offset that centers `card` in the viewport, before correction and
/// clamping.
pub fn centering_offset(card: &CardGeometry, viewport: &Viewport) -> f64 {
    card.left - viewport.client_width / 2.0 + card.width / 2.0
}

/// Final scroll target for a navigation transition.
///
/// Centers the active card, then applies the direction-consistency nudge:
/// if the computed center would move the viewport against the direction of
/// travel, override with a one-card-step move in the intended direction
/// instead. Wrap-around and self-navigation trust the computed center
/// directly. The result is clamped to the scrollable range.
pub fn resolve_scroll_target(
    card: &CardGeometry,
    viewport: &Viewport,
    transition: &Transition,
) -> f64 {
    let mut target = centering_offset(card, viewport);

    if !transition.wrapped && transition.from != transition.to {
        let step = card.width + CARD_GAP;
        match transition.direction {
            Direction::Forward if target < viewport.scroll_left => {
                target = viewport.scroll_left + step;
            }
            Direction::Backward if target > viewport.scroll_left => {
                target = viewport.scroll_left - step;
            }
            _ => {}
        }
    }

    target.clamp(0.0, viewport.max_scroll())
}

/// Logical index of the card whose visual center is closest to the viewport
/// center. Drives resynchronization after manual drag/swipe scrolling.
pub fn closest_to_center(cards: &[CardGeometry], viewport: &Viewport) -> Option<usize> {
    let viewport_center = viewport.center();
    cards
        .iter()
        .min_by(|a, b| {
            let da = (a.center() - viewport_center).abs();
            let db = (b.center() - viewport_center).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|card| card.logical_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(len).unwrap()
    }

    #[test]
    fn test_empty_list_has_no_controller() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn test_starts_at_first_card() {
        let c = carousel(5);
        assert_eq!(c.current(), 0);
        assert_eq!(c.previous(), None);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_normalize_is_closed_under_modulo() {
        let c = carousel(5);
        assert_eq!(c.normalize(5), 0);
        assert_eq!(c.normalize(-1), 4);
        assert_eq!(c.normalize(7), 2);
        assert_eq!(c.normalize(-6), 4);
    }

    #[test]
    fn test_navigation_wraps_past_the_end() {
        let mut c = carousel(3);
        c.request_navigation(1);
        c.request_navigation(2);
        let t = c.request_navigation(3);
        assert_eq!(t.to, 0);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_navigation_wraps_below_zero() {
        let mut c = carousel(3);
        let t = c.request_navigation(-1);
        assert_eq!(t.to, 2);
        assert_eq!(t.direction, Direction::Backward);
        assert!(t.wrapped);
    }

    #[test]
    fn test_exactly_one_active_card() {
        let mut c = carousel(4);
        c.request_navigation(2);
        let active: Vec<usize> = (0..c.len()).filter(|&i| c.is_active(i)).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn test_rotation_puts_active_at_position_one() {
        let mut c = carousel(4);
        assert_eq!(c.rotation(), vec![3, 0, 1, 2]);

        c.request_navigation(2);
        assert_eq!(c.rotation(), vec![1, 2, 3, 0]);

        c.request_navigation(3);
        assert_eq!(c.rotation(), vec![2, 3, 0, 1]);

        // Wrap to 0: rotation keeps the predecessor adjacent
        c.request_navigation(4);
        assert_eq!(c.rotation(), vec![3, 0, 1, 2]);
    }

    #[test]
    fn test_rotation_invariant_holds_after_any_transition() {
        let mut c = carousel(5);
        for requested in [-3isize, 7, 2, 2, -1, 5, 0] {
            c.request_navigation(requested);
            assert_eq!(c.rotation()[1], c.current());
        }
    }

    #[test]
    fn test_single_card_rotation_degenerates() {
        let c = carousel(1);
        assert_eq!(c.rotation(), vec![0]);
        assert!(c.is_active(0));
    }

    #[test]
    fn test_self_navigation_is_idempotent() {
        let mut c = carousel(3);
        c.request_navigation(1);
        c.scroll_settled();
        let t = c.request_navigation(1);
        assert_eq!(t.from, 1);
        assert_eq!(t.to, 1);
        assert!(!t.wrapped);
        assert_eq!(c.current(), 1);
        assert_eq!(c.rotation()[1], 1);
    }

    #[test]
    fn test_direction_resolution() {
        let mut c = carousel(4);
        c.request_navigation(1);
        assert_eq!(c.direction_to(2), Direction::Forward);
        assert_eq!(c.direction_to(0), Direction::Backward);

        // Wrap cases override numeric comparison
        c.request_navigation(3);
        assert_eq!(c.direction_to(0), Direction::Forward);
        c.request_navigation(0);
        assert_eq!(c.direction_to(3), Direction::Backward);
    }

    #[test]
    fn test_wrapped_flag_only_at_the_ends() {
        let mut c = carousel(4);
        assert!(c.request_navigation(-1).wrapped);
        assert!(c.request_navigation(0).wrapped);
        assert!(!c.request_navigation(1).wrapped);
        assert!(!c.request_navigation(2).wrapped);
    }

    #[test]
    fn test_phase_walk() {
        let mut c = carousel(2);
        assert!(c.accepts_user_scroll());

        c.request_navigation(1);
        assert_eq!(c.phase(), Phase::Animating);
        assert!(!c.accepts_user_scroll());

        c.begin_settle();
        assert_eq!(c.phase(), Phase::Settling);
        assert!(!c.accepts_user_scroll());

        c.scroll_settled();
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.accepts_user_scroll());
    }

    #[test]
    fn test_begin_settle_requires_animation() {
        let mut c = carousel(2);
        c.begin_settle();
        assert_eq!(c.phase(), Phase::Idle);
    }

    fn geometry(logical_index: usize, left: f64, width: f64) -> CardGeometry {
        CardGeometry {
            logical_index,
            left,
            width,
        }
    }

    fn viewport(scroll_left: f64) -> Viewport {
        Viewport {
            scroll_left,
            client_width: 800.0,
            scroll_width: 2000.0,
        }
    }

    #[test]
    fn test_centering_offset_centers_the_card_midpoint() {
        let card = geometry(1, 500.0, 320.0);
        let target = centering_offset(&card, &viewport(0.0));
        // 500 - 400 + 160
        assert_eq!(target, 260.0);
    }

    #[test]
    fn test_forward_nudge_when_center_moves_backward() {
        let transition = Transition {
            from: 1,
            to: 2,
            direction: Direction::Forward,
            wrapped: false,
        };
        // Centered target (260) is behind the current scroll position
        let card = geometry(2, 500.0, 320.0);
        let target = resolve_scroll_target(&card, &viewport(600.0), &transition);
        assert_eq!(target, 600.0 + 320.0 + CARD_GAP);
    }

    #[test]
    fn test_backward_nudge_when_center_moves_forward() {
        let transition = Transition {
            from: 2,
            to: 1,
            direction: Direction::Backward,
            wrapped: false,
        };
        let card = geometry(1, 900.0, 320.0);
        // Centered target would be 660, ahead of the current 400
        let target = resolve_scroll_target(&card, &viewport(400.0), &transition);
        assert_eq!(target, 400.0 - (320.0 + CARD_GAP));
    }

    #[test]
    fn test_wrap_around_trusts_computed_center() {
        let transition = Transition {
            from: 3,
            to: 0,
            direction: Direction::Forward,
            wrapped: true,
        };
        let card = geometry(0, 500.0, 320.0);
        let target = resolve_scroll_target(&card, &viewport(600.0), &transition);
        assert_eq!(target, 260.0);
    }

    #[test]
    fn test_self_navigation_trusts_computed_center() {
        let transition = Transition {
            from: 2,
            to: 2,
            direction: Direction::Forward,
            wrapped: false,
        };
        let card = geometry(2, 500.0, 320.0);
        // Slightly ahead of the center; a nudge here would jump a full card
        let target = resolve_scroll_target(&card, &viewport(261.0), &transition);
        assert_eq!(target, 260.0);
    }

    #[test]
    fn test_target_clamped_to_scroll_extent() {
        let transition = Transition {
            from: 0,
            to: 1,
            direction: Direction::Forward,
            wrapped: false,
        };
        let far_right = geometry(1, 1900.0, 320.0);
        let target = resolve_scroll_target(&far_right, &viewport(0.0), &transition);
        // max_scroll = 2000 - 800
        assert_eq!(target, 1200.0);

        let transition = Transition {
            from: 1,
            to: 0,
            direction: Direction::Backward,
            wrapped: false,
        };
        let far_left = geometry(0, 0.0, 320.0);
        let target = resolve_scroll_target(&far_left, &viewport(100.0), &transition);
        assert_eq!(target, 0.0);
    }

    #[test]
    fn test_closest_to_center_resolves_logical_index() {
        // DOM order is a rotation; logical indices are not positional
        let cards = vec![
            geometry(2, 0.0, 320.0),
            geometry(0, 340.0, 320.0),
            geometry(1, 680.0, 320.0),
        ];
        let view = Viewport {
            scroll_left: 100.0,
            client_width: 800.0,
            scroll_width: 1020.0,
        };
        // Viewport center is 500; card 0 spans 340..660, center 500
        assert_eq!(closest_to_center(&cards, &view), Some(0));
    }

    #[test]
    fn test_closest_to_center_empty_input() {
        let view = viewport(0.0);
        assert_eq!(closest_to_center(&[], &view), None);
    }
}
