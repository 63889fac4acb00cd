//! Fade-in wrapper driven by the `VisibilityHandle` in context.

use leptos::prelude::*;

use crate::util::visibility::VisibilityHandle;

/// Children fade and slide in the first time the wrapper is on screen.
/// `delay_ms` staggers siblings.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let target = NodeRef::<leptos::html::Div>::new();
    let visible = RwSignal::new(false);
    expect_context::<VisibilityHandle>().watch(target, visible);

    view! {
        <div
            node_ref=target
            class=format!("reveal {class}")
            class:visible=move || visible.get()
            style=format!("transition-delay: {delay_ms}ms;")
        >
            {children()}
        </div>
    }
}
