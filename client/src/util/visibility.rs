//! Reveal-on-scroll visibility capability.
//!
//! DESIGN
//! ======
//! Sections fade in the first time they scroll into view. Components do not
//! talk to `IntersectionObserver` themselves; they ask the
//! `VisibilityHandle` found in context to flip a signal once their element
//! is visible.
//! - Browser: `IntersectionSource`, reveal once at 20% visibility
//! - Server render: `Deferred`, leave every section hidden
//!
//! TRADE-OFFS
//! ==========
//! Hydration does not patch a reactive class on its first run, so the
//! server must emit exactly what the browser starts from: hidden sections
//! and empty skill bars. Visitors without scripts get `NO_SCRIPT_CSS`
//! instead, which the shell wraps in `<noscript>`.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use std::sync::Arc;

use leptos::html::Div;
use leptos::prelude::*;

/// Fraction of the element that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Delay between consecutive siblings in a staggered list.
pub const STAGGER_STEP_MS: u32 = 100;

/// Shows revealed content when the WASM bundle never runs.
pub const NO_SCRIPT_CSS: &str = ".reveal { opacity: 1; transform: none; } \
.skill-bar__fill { width: var(--level) !important; }";

/// Animation delay for the `index`th item of a list.
#[must_use]
pub fn stagger_ms(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(STAGGER_STEP_MS))
}

pub trait VisibilitySource: Send + Sync {
    /// Set `visible` to `true` once `target` has been on screen.
    fn watch(&self, target: NodeRef<Div>, visible: RwSignal<bool>);
}

/// Context handle shared by every `Reveal`.
#[derive(Clone)]
pub struct VisibilityHandle(Arc<dyn VisibilitySource>);

impl VisibilityHandle {
    pub fn new(source: impl VisibilitySource + 'static) -> Self {
        Self(Arc::new(source))
    }

    /// The source used by the running build.
    #[must_use]
    pub fn for_environment() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(IntersectionSource { threshold: REVEAL_THRESHOLD })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(Deferred)
        }
    }

    pub fn watch(&self, target: NodeRef<Div>, visible: RwSignal<bool>) {
        self.0.watch(target, visible);
    }
}

/// Leaves `visible` untouched until the browser takes over.
pub struct Deferred;

impl VisibilitySource for Deferred {
    fn watch(&self, _target: NodeRef<Div>, _visible: RwSignal<bool>) {}
}

#[cfg(feature = "hydrate")]
pub struct IntersectionSource {
    pub threshold: f64,
}

#[cfg(feature = "hydrate")]
impl VisibilitySource for IntersectionSource {
    fn watch(&self, target: NodeRef<Div>, visible: RwSignal<bool>) {
        let threshold = self.threshold;
        Effect::new(move || {
            if let Some(el) = target.get() {
                observe_once(&el, threshold, visible);
            }
        });
    }
}

#[cfg(feature = "hydrate")]
fn observe_once(el: &web_sys::HtmlDivElement, threshold: f64, visible: RwSignal<bool>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<web_sys::IntersectionObserverEntry>();
                if entry.is_intersecting() {
                    visible.set(true);
                    observer.unobserve(&entry.target());
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    match web_sys::IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(el);
            on_intersect.forget();
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable, revealing immediately: {e:?}");
            visible.set(true);
        }
    }
}
