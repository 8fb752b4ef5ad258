//! Insight-card carousel.
//!
//! Cards come from splitting the insights text on `## ` headings
//! (`repodeck_core::cards`). The display order is the cyclic rotation the
//! controller derives, so the active card always has a predecessor adjacent
//! on the left and wrap-around scrolling stays visually continuous.
//!
//! All navigation state and pixel math live in `repodeck_core::carousel`;
//! this component measures the DOM, issues scrolls, and runs the settle and
//! debounce timers.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use repodeck_core::cards::split_insights;
use repodeck_core::carousel::{Carousel, SCROLL_DEBOUNCE_MS, SETTLE_WINDOW_MS};
use repodeck_core::markdown;

const TRACK_ID: &str = "rd-insight-track";

/// Short deferral before geometry reads, so measurements reflect the layout
/// produced by the latest render.
const LAYOUT_SETTLE_MS: u32 = 50;

fn card_dom_id(logical_index: usize) -> String {
    format!("rd-insight-card-{logical_index}")
}

/// Cross-platform delay. The carousel is only interactive in the browser;
/// the native path exists for non-wasm builds and tests.
async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// One card with its body already rendered to HTML.
#[derive(Debug, Clone, PartialEq)]
struct RenderedCard {
    index: usize,
    heading: String,
    body_html: String,
}

/// Run a navigation transition: update the controller, let the rotated order
/// reach the DOM, scroll the active card to center, and wait out the settle
/// window before passive detection resumes.
fn navigate(mut carousel: Signal<Option<Carousel>>, requested: isize) {
    let transition = match carousel.write().as_mut() {
        Some(c) => c.request_navigation(requested),
        None => return,
    };
    debug!(
        from = transition.from,
        to = transition.to,
        wrapped = transition.wrapped,
        "carousel navigate"
    );

    spawn(async move {
        sleep_ms(LAYOUT_SETTLE_MS).await;

        #[cfg(target_arch = "wasm32")]
        if let Some(target) = dom::scroll_plan(&transition) {
            dom::scroll_track_to(target, true);
        }

        if let Some(c) = carousel.write().as_mut() {
            c.begin_settle();
        }
        sleep_ms(SETTLE_WINDOW_MS).await;
        if let Some(c) = carousel.write().as_mut() {
            c.scroll_settled();
        }
    });
}

/// Jump (not animate) the view so the active card starts centered.
fn initial_center(carousel: Signal<Option<Carousel>>) {
    spawn(async move {
        sleep_ms(LAYOUT_SETTLE_MS).await;

        let current = carousel.read().as_ref().map(|c| c.current());
        let Some(current) = current else { return };

        #[cfg(target_arch = "wasm32")]
        {
            if let (Some(viewport), Some(card)) = (dom::viewport(), dom::card_geometry(current)) {
                let target =
                    repodeck_core::carousel::centering_offset(&card, &viewport).max(0.0);
                dom::scroll_track_to(target, false);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = current;
    });
}

/// Circular carousel of insight cards with prev/next controls, indicator
/// dots, keyboard navigation, and manual-scroll resynchronization.
#[component]
pub fn InsightCarousel(insights: ReadOnlySignal<String>) -> Element {
    let rendered = use_memo(move || {
        split_insights(&insights.read())
            .into_iter()
            .map(|card| RenderedCard {
                index: card.index,
                heading: card.heading,
                body_html: markdown::to_html(&card.body),
            })
            .collect::<Vec<_>>()
    });

    let mut carousel = use_signal(|| Carousel::new(rendered.read().len()));
    let mut scroll_epoch = use_signal(|| 0u64);

    // Cards are rebuilt wholesale on every new response; so is the
    // controller, which restarts at card 0 and re-centers instantly.
    use_effect(move || {
        let count = rendered.read().len();
        carousel.set(Carousel::new(count));
        if count > 0 {
            initial_center(carousel);
        }
    });

    let cards = rendered.read().clone();
    if cards.is_empty() {
        return rsx! {};
    }

    // Right after the insights change, the controller signal may still
    // describe the previous card list; render from a consistent snapshot.
    let state = match carousel.read().clone() {
        Some(c) if c.len() == cards.len() => c,
        _ => match Carousel::new(cards.len()) {
            Some(c) => c,
            None => return rsx! {},
        },
    };

    // Debounced scroll resync: find the card closest to the viewport center
    // and navigate to it. Programmatic scrolls are suppressed by phase, not
    // by event ordering.
    let handle_scroll = move |_| {
        let idle = carousel
            .read()
            .as_ref()
            .is_some_and(|c| c.accepts_user_scroll());
        if !idle {
            return;
        }

        let epoch = scroll_epoch() + 1;
        scroll_epoch.set(epoch);

        spawn(async move {
            sleep_ms(SCROLL_DEBOUNCE_MS).await;
            if scroll_epoch() != epoch {
                return;
            }

            let state = carousel.read().clone();
            let Some(state) = state else { return };
            if !state.accepts_user_scroll() {
                return;
            }

            #[cfg(target_arch = "wasm32")]
            {
                let geometries = dom::all_card_geometries(state.len());
                if let Some(viewport) = dom::viewport() {
                    if let Some(closest) =
                        repodeck_core::carousel::closest_to_center(&geometries, &viewport)
                    {
                        if closest != state.current() {
                            navigate(carousel, closest as isize);
                        }
                    }
                }
            }
        });
    };

    let handle_keydown = move |evt: KeyboardEvent| {
        let current = carousel.read().as_ref().map(|c| c.current() as isize);
        let Some(current) = current else { return };

        match evt.key() {
            Key::ArrowLeft => {
                evt.prevent_default();
                navigate(carousel, current - 1);
            }
            Key::ArrowRight => {
                evt.prevent_default();
                navigate(carousel, current + 1);
            }
            _ => {}
        }
    };

    let rotation = state.rotation();
    let dots: Vec<(usize, bool, String)> = (0..state.len())
        .map(|index| {
            (
                index,
                state.is_active(index),
                format!("Go to card {}", index + 1),
            )
        })
        .collect();

    rsx! {
        section {
            class: "rd-panel rd-insights-panel",
            tabindex: "0",
            onkeydown: handle_keydown,

            h2 { class: "rd-panel-title", "Insight Cards" }

            div {
                id: TRACK_ID,
                class: "rd-insight-track",
                onscroll: handle_scroll,

                for logical in rotation {
                    InsightCardView {
                        key: "{logical}",
                        card: cards[logical].clone(),
                        active: state.is_active(logical),
                        on_select: move |index: usize| navigate(carousel, index as isize),
                    }
                }
            }

            nav { class: "rd-carousel-nav",
                // Both controls stay enabled: navigation is circular
                button {
                    class: "rd-carousel-btn",
                    "aria-label": "Previous card",
                    onclick: move |_| {
                        let current = carousel.read().as_ref().map(|c| c.current() as isize);
                        if let Some(current) = current {
                            navigate(carousel, current - 1);
                        }
                    },
                    "‹"
                }
                div { class: "rd-carousel-dots",
                    for (index, active, label) in dots {
                        button {
                            key: "{index}",
                            class: if active {
                                "rd-carousel-dot rd-carousel-dot--active"
                            } else {
                                "rd-carousel-dot"
                            },
                            "aria-label": "{label}",
                            onclick: move |_| navigate(carousel, index as isize),
                        }
                    }
                }
                button {
                    class: "rd-carousel-btn",
                    "aria-label": "Next card",
                    onclick: move |_| {
                        let current = carousel.read().as_ref().map(|c| c.current() as isize);
                        if let Some(current) = current {
                            navigate(carousel, current + 1);
                        }
                    },
                    "›"
                }
            }
        }
    }
}

/// One insight card. Clicking it navigates the carousel to its logical
/// index.
#[component]
fn InsightCardView(card: RenderedCard, active: bool, on_select: EventHandler<usize>) -> Element {
    let index = card.index;
    let id = card_dom_id(index);

    rsx! {
        article {
            id: "{id}",
            class: if active {
                "rd-insight-card rd-insight-card--active"
            } else {
                "rd-insight-card"
            },
            onclick: move |_| on_select.call(index),

            h3 { class: "rd-insight-heading", "{card.heading}" }
            div {
                class: "rd-insight-body",
                dangerous_inner_html: "{card.body_html}",
            }
        }
    }
}

// =============================================================================
// DOM glue (web only): geometry reads and programmatic scrolling
// =============================================================================

#[cfg(target_arch = "wasm32")]
mod dom {
    use repodeck_core::carousel::{resolve_scroll_target, CardGeometry, Transition, Viewport};
    use wasm_bindgen::JsCast;

    use super::{card_dom_id, TRACK_ID};

    fn document() -> Option<web_sys::Document> {
        web_sys::window().and_then(|w| w.document())
    }

    fn track() -> Option<web_sys::Element> {
        document()?.get_element_by_id(TRACK_ID)
    }

    /// Snapshot of the scroll container.
    pub(super) fn viewport() -> Option<Viewport> {
        let track = track()?;
        Some(Viewport {
            scroll_left: track.scroll_left() as f64,
            client_width: track.client_width() as f64,
            scroll_width: track.scroll_width() as f64,
        })
    }

    /// Post-layout geometry of one card, keyed by logical index.
    pub(super) fn card_geometry(logical_index: usize) -> Option<CardGeometry> {
        let element = document()?.get_element_by_id(&card_dom_id(logical_index))?;
        let element = element.dyn_ref::<web_sys::HtmlElement>()?;
        Some(CardGeometry {
            logical_index,
            left: f64::from(element.offset_left()),
            width: f64::from(element.offset_width()),
        })
    }

    pub(super) fn all_card_geometries(len: usize) -> Vec<CardGeometry> {
        (0..len).filter_map(card_geometry).collect()
    }

    /// Target offset for a navigation transition, measured after the rotated
    /// order has been laid out.
    pub(super) fn scroll_plan(transition: &Transition) -> Option<f64> {
        let viewport = viewport()?;
        let card = card_geometry(transition.to)?;
        Some(resolve_scroll_target(&card, &viewport, transition))
    }

    /// Scroll the track to `left`, smoothly or instantly.
    pub(super) fn scroll_track_to(left: f64, smooth: bool) {
        let Some(track) = track() else { return };
        let options = web_sys::ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(if smooth {
            web_sys::ScrollBehavior::Smooth
        } else {
            web_sys::ScrollBehavior::Auto
        });
        track.scroll_to_with_scroll_to_options(&options);
    }
}
