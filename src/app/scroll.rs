use leptos::{html, prelude::*};
use leptos_use::{
    use_element_size, use_intersection_observer_with_options, use_window_scroll, use_window_size,
    UseElementSizeReturn, UseIntersectionObserverOptions, UseWindowSizeReturn,
};

/// Fraction of a block that must be visible before it reveals.
const REVEAL_THRESHOLD: f64 = 0.15;

/// Normalized fraction of the total scrollable distance the viewport has
/// traversed, clamped to [0, 1] so overscroll on either end stays in range.
/// A page no taller than the viewport has no scrollable distance and reports 0.
pub fn scroll_progress(offset: f64, content_height: f64, viewport_height: f64) -> f64 {
    let track = content_height - viewport_height;
    if track <= 0.0 {
        return 0.0;
    }
    (offset / track).clamp(0.0, 1.0)
}

/// Tracks window scroll against the rendered height of the element behind
/// `page_ref` and derives the page-wide scroll progress. All three inputs are
/// reactive, so the value follows scroll, window resize, and content resize.
/// On the server every source reports 0 and the progress renders as 0.
pub fn use_scroll_progress(page_ref: NodeRef<html::Div>) -> Signal<f64> {
    let (_, scroll_y) = use_window_scroll();
    let UseElementSizeReturn {
        height: content_height,
        ..
    } = use_element_size(page_ref);
    let UseWindowSizeReturn {
        height: viewport_height,
        ..
    } = use_window_size();

    Signal::derive(move || {
        scroll_progress(scroll_y.get(), content_height.get(), viewport_height.get())
    })
}

/// Visibility lifecycle of a content block. Revealed is terminal - a block
/// that has animated in never returns to hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

impl RevealState {
    /// Advance the state for one intersection sample.
    pub fn observe(self, intersecting: bool) -> Self {
        match self {
            RevealState::Hidden if intersecting => RevealState::Revealed,
            state => state,
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// One-shot viewport reveal for the element behind `target`. The underlying
/// observer is disconnected on the Hidden -> Revealed edge, so later
/// scroll-outs and scroll-ins cannot re-trigger the transition and the
/// observation does not outlive its usefulness.
pub fn use_reveal_once(target: NodeRef<html::Div>) -> Signal<RevealState> {
    let (state, set_state) = signal(RevealState::Hidden);

    let _ = use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            if state.get_untracked().observe(intersecting).is_revealed() {
                set_state(RevealState::Revealed);
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    state.into()
}

/// Wraps a content block in the one-shot reveal transition: blocks start
/// faded and shifted down, then settle the first time they enter the
/// viewport. `delay_ms` staggers siblings for a cascading effect.
#[component]
pub fn Reveal(#[prop(optional)] delay_ms: u32, children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let state = use_reveal_once(target);

    view! {
        <div
            node_ref=target
            class=move || {
                if state.get().is_revealed() { "reveal reveal-settled" } else { "reveal" }
            }
            style:transition-delay=format!("{delay_ms}ms")
        >
            {children()}
        </div>
    }
}

/// Fixed indicator bar across the top of the page, scaled horizontally by the
/// current scroll progress.
#[component]
pub fn ScrollProgressBar(progress: Signal<f64>) -> impl IntoView {
    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-cyan-500 origin-left z-50"
            style=move || format!("transform: scaleX({})", progress.get())
        ></div>
    }
}
