//! Client-only rendering boundary.
//!
//! DESIGN
//! ======
//! Rendering happens in two phases. The server pass and the first client
//! render both see `mounted == false` and emit the placeholder, so the
//! hydrated DOM always matches the server markup. Effects run only in the
//! browser; flipping `mounted` there swaps in the real children right
//! after hydration, and on the server the children builder is never
//! invoked at all.

#[cfg(test)]
#[path = "client_only_test.rs"]
mod client_only_test;

use leptos::prelude::*;

/// Defer `children` until a live browser runtime is confirmed.
///
/// `fallback` renders during the server pass and for the instant before
/// the client mount effect fires. The transition is one-way: once
/// mounted, the boundary never returns to the placeholder.
#[component]
pub fn ClientOnly(
    /// Placeholder shown until the client mount completes.
    #[prop(optional, into)]
    fallback: ViewFn,
    /// Lazy builder for the client-only content.
    children: ChildrenFn,
) -> impl IntoView {
    let mounted = RwSignal::new(false);

    Effect::new(move || mounted.set(true));

    move || select_view(mounted.get(), || fallback.run(), || children())
}

/// Pick the view for the current phase. Exactly one of the two builders
/// runs per call, and `content` only ever runs once mounted.
fn select_view<T>(
    mounted: bool,
    placeholder: impl FnOnce() -> T,
    content: impl FnOnce() -> T,
) -> T {
    if mounted { content() } else { placeholder() }
}
