//! Speaking-style analysis cards shown once a batch has been analyzed.

#[cfg(test)]
#[path = "analysis_view_test.rs"]
mod analysis_view_test;

use idiolect::{IntentCategory, Phrase};
use leptos::prelude::*;

use crate::state::session::SessionState;

/// Intent rows shown in the topic focus card.
const MAX_INTENT_ROWS: usize = 4;
/// Patterns shown in the signature patterns card.
const MAX_PATTERN_ROWS: usize = 2;
/// Captures shown in the recent list.
const MAX_RECENT_PHRASES: usize = 5;

/// Complexity label: elevated once the batch exceeds five phrases.
fn complexity_label(analysis_count: usize) -> &'static str {
    if analysis_count > 5 { "Elevated" } else { "Developing" }
}

/// Intent distribution trimmed to the display rows.
fn top_intents(phrases: &[Phrase]) -> Vec<(IntentCategory, usize)> {
    let mut distribution = idiolect::intent_distribution(phrases);
    distribution.truncate(MAX_INTENT_ROWS);
    distribution
}

/// Analysis results: core identity, topic focus, signature patterns, and
/// the most recent captures.
#[component]
pub fn AnalysisView() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let summary_line = move || {
        let n = session.with(|s| s.phrases.len());
        format!("Synthesized from {n} recorded phrase{}", if n == 1 { "" } else { "s" })
    };

    let cards = move || {
        let state = session.get();
        let profile = state.profile?;
        let phrases = state.phrases;
        let total = phrases.len();

        Some(view! {
            <div class="analysis__grid">
                <div class="analysis__card">
                    <h3>"Core Identity"</h3>
                    <div class="analysis__metric">
                        <span class="analysis__metric-label">"Vibe"</span>
                        <span class="analysis__badge analysis__badge--primary">
                            {profile.tone.display_name()}
                        </span>
                    </div>
                    <div class="analysis__metric">
                        <span class="analysis__metric-label">"Formality"</span>
                        <span class="analysis__badge analysis__badge--secondary">
                            {profile.formality.display_name()}
                        </span>
                    </div>
                    <div class="analysis__metric">
                        <span class="analysis__metric-label">"Complexity"</span>
                        <span class="analysis__metric-value">
                            {complexity_label(profile.analysis_count)}
                        </span>
                    </div>
                </div>

                <div class="analysis__card">
                    <h3>"Topic Focus"</h3>
                    {top_intents(&phrases)
                        .into_iter()
                        .map(|(intent, count)| {
                            let pct = idiolect::percentage(count, total);
                            view! {
                                <div class="analysis__intent">
                                    <div class="analysis__intent-label">
                                        <span class="analysis__intent-name">
                                            {intent.display_name()}
                                        </span>
                                        <span class="analysis__intent-pct">{format!("{pct}%")}</span>
                                    </div>
                                    <div class="analysis__intent-bar">
                                        <div
                                            class="analysis__intent-fill"
                                            style=format!("width: {pct}%")
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="analysis__card">
                    <h3>"Signature Patterns"</h3>
                    {profile
                        .patterns
                        .iter()
                        .take(MAX_PATTERN_ROWS)
                        .map(|pattern| {
                            view! {
                                <div class="analysis__pattern">
                                    <span class="analysis__pattern-name">
                                        {pattern.display_name()}
                                    </span>
                                    <p class="analysis__pattern-desc">{pattern.description()}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="analysis__card analysis__card--wide">
                    <h3>"Recent Style Captures"</h3>
                    <div class="analysis__phrases">
                        {phrases
                            .iter()
                            .take(MAX_RECENT_PHRASES)
                            .map(|phrase| {
                                view! {
                                    <div class="analysis__phrase">
                                        <div class="analysis__phrase-text">
                                            {format!("\"{}\"", phrase.text)}
                                        </div>
                                        <span class="analysis__phrase-intent">
                                            {phrase.intent.display_name()}
                                        </span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <NextSteps/>
        })
    };

    view! {
        <section class="analysis">
            <header class="analysis__header">
                <h2>"Your " <span class="analysis__highlight">"Mirror Analysis"</span></h2>
                <p>{summary_line}</p>
            </header>

            {cards}
        </section>
    }
}

/// Upcoming learning features, shown beneath the analysis. Static for now;
/// each card unlocks as its feature ships.
#[component]
fn NextSteps() -> impl IntoView {
    let steps = [
        (
            "\u{1F3AF} Spanish Translations",
            "Get personalized Spanish versions of your phrases with literal and natural translations",
        ),
        (
            "\u{1F504} Spaced Practice",
            "Review your phrases with adaptive scheduling to build long-term memory",
        ),
        (
            "\u{1F393} Mistake Coaching",
            "Get targeted lessons on grammar patterns specific to your speaking style",
        ),
    ];

    view! {
        <div class="analysis__next">
            <h3>"What's Next?"</h3>
            <div class="analysis__next-grid">
                {steps
                    .into_iter()
                    .map(|(title, blurb)| {
                        view! {
                            <div class="analysis__step">
                                <h4>{title}</h4>
                                <p>{blurb}</p>
                                <button class="analysis__step-btn" disabled>
                                    "Coming Soon"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
