//! Landing page: fixed document metadata plus the client-only boundary
//! around the interactive content.
//!
//! DESIGN
//! ======
//! The title and description are emitted on both the server pass and in
//! the browser, so crawlers and the hydrated page always agree. The
//! interactive content itself is deferred behind [`ClientOnly`] and the
//! server only ever ships the loading placeholder for it.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::client_only::ClientOnly;
use crate::components::home_content::HomeContent;

/// Document title served on every rendering pass.
pub const PAGE_TITLE: &str = "MirrorLingo - Your Personal Spanish Learning Coach";

/// Meta description served on every rendering pass.
pub const PAGE_DESCRIPTION: &str =
    "Learn Spanish based on your unique speaking style and daily phrases";

/// Placeholder text shown while the client bundle boots.
pub const LOADING_TEXT: &str = "Loading MirrorLingo...";

/// The single route of the product.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE/>
        <Meta name="description" content=PAGE_DESCRIPTION/>

        <main class="page">
            <ClientOnly fallback=|| {
                view! {
                    <div class="page__loading">
                        <p>{LOADING_TEXT}</p>
                    </div>
                }
            }>
                <HomeContent/>
            </ClientOnly>
        </main>
    }
}
