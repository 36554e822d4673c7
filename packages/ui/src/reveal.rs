//! Scroll-triggered entrance for landing page sections.
//!
//! A [`RevealSection`] starts hidden and flips to visible the first time at
//! least `threshold` of its height is inside the viewport. The flip is
//! one-way: scrolling back out leaves it visible.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::context::use_site_config;

/// One-shot visibility flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one measurement. Returns `true` only on the hidden to visible
    /// transition.
    pub fn observe(&mut self, fraction: f64, threshold: f64) -> bool {
        if self.revealed || fraction <= 0.0 || fraction < threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Share of an element's height inside a viewport of `viewport_height`,
/// given the element's top edge relative to the viewport.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

#[component]
pub fn RevealSection(
    id: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let threshold = use_site_config().reveal.threshold;
    let latch = use_signal(RevealLatch::default);
    let mut mounted = use_signal(|| Option::<Rc<MountedData>>::None);

    use_future(move || watch(mounted, latch, threshold));

    let state = if latch.read().is_revealed() {
        "reveal reveal--visible"
    } else {
        "reveal"
    };

    rsx! {
        section {
            id: "{id}",
            class: "{state} {class}",
            onmounted: move |evt| mounted.set(Some(evt.data())),
            {children}
        }
    }
}

#[cfg(target_arch = "wasm32")]
const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(150);

#[cfg(target_arch = "wasm32")]
async fn watch(
    mounted: Signal<Option<Rc<MountedData>>>,
    mut latch: Signal<RevealLatch>,
    threshold: f64,
) {
    loop {
        let element = mounted.peek().clone();
        if let Some(element) = element {
            match element.get_client_rect().await {
                Ok(rect) => {
                    let viewport = web_sys::window()
                        .and_then(|w| w.inner_height().ok())
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    let fraction = visible_fraction(rect.origin.y, rect.size.height, viewport);
                    if latch.write().observe(fraction, threshold) {
                        tracing::debug!(fraction, "section revealed");
                        return;
                    }
                }
                Err(e) => tracing::debug!("Could not measure section: {:?}", e),
            }
        }
        gloo_timers::future::sleep(POLL_INTERVAL).await;
    }
}

/// Without a browser viewport there is nothing to scroll into view.
#[cfg(not(target_arch = "wasm32"))]
async fn watch(
    _mounted: Signal<Option<Rc<MountedData>>>,
    mut latch: Signal<RevealLatch>,
    threshold: f64,
) {
    latch.write().observe(1.0, threshold);
}
