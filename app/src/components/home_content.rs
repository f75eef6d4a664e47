//! Client-only landing content: product chrome plus the capture/results
//! flow.

use leptos::prelude::*;

use crate::components::analysis_view::AnalysisView;
use crate::components::phrase_input::PhraseInput;
use crate::state::session::{SessionPhase, SessionState};

/// Interactive landing content. This component only ever runs in the
/// browser, so it restores a persisted session as soon as it appears.
#[component]
pub fn HomeContent() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // Restore a previous session once, and only over a pristine state.
    Effect::new(move || {
        if let Some(stored) = crate::util::storage::load_session() {
            session.update(|s| {
                if s.phase == SessionPhase::Input && s.phrases.is_empty() {
                    *s = SessionState::restored(stored.phrases, stored.profile);
                }
            });
        }
    });

    let start_over = move |_| {
        crate::util::storage::clear_session();
        session.update(|s| s.start_over());
    };

    let captured_line = move || {
        let n = session.with(|s| s.phrases.len());
        (n > 0).then(|| {
            view! {
                <div class="home__captured">
                    {format!("\u{2713} {} captured", crate::util::text::phrase_count_label(n))}
                </div>
            }
        })
    };

    view! {
        <div class="home">
            <header class="home__header">
                <div class="home__wordmark">
                    <h1>"MirrorLingo"</h1>
                    <p>"Your Personal Spanish Learning Coach"</p>
                </div>
                {move || {
                    (session.with(|s| s.phase) == SessionPhase::Results)
                        .then(|| {
                            view! {
                                <button class="home__start-over" on:click=start_over>
                                    "Analyze New Phrases"
                                </button>
                            }
                        })
                }}
            </header>

            <div class="home__content">
                {move || match session.with(|s| s.phase) {
                    SessionPhase::Input | SessionPhase::Analyzing => {
                        view! {
                            <section class="home__hero">
                                <h2 class="home__title">
                                    "Learn Spanish That Matches How You "
                                    <span class="home__highlight">"Actually Speak"</span>
                                </h2>
                                <p class="home__subtitle">
                                    "MirrorLingo analyzes your unique speaking style and creates "
                                    "Spanish lessons perfectly tailored to your personality."
                                </p>
                            </section>
                            <section class="home__flow">
                                <PhraseInput/>
                            </section>
                        }
                            .into_any()
                    }
                    SessionPhase::Results => {
                        view! {
                            <section class="home__flow">
                                <AnalysisView/>
                            </section>
                            {captured_line}
                        }
                            .into_any()
                    }
                }}
            </div>

            <footer class="home__footer">
                <p>"\u{00A9} 2026 MirrorLingo - Master your own Spanish"</p>
            </footer>
        </div>
    }
}
