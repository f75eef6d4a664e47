//! Phrase capture form: five rows by default, expandable to the batch
//! limit, with per-row prompts and live validation feedback.

#[cfg(test)]
#[path = "phrase_input_test.rs"]
mod phrase_input_test;

use idiolect::{MAX_PHRASE_LEN, MAX_PHRASES};
use leptos::prelude::*;

use crate::state::session::SessionState;

/// Rows shown before the user asks for more.
const INITIAL_ROWS: usize = 5;

/// Simulated analysis latency so the analyzing state reads as real work.
#[cfg(feature = "hydrate")]
const ANALYSIS_DELAY_MS: u32 = 2_000;

/// Example phrases cycled through the input placeholders.
const ROW_PROMPTS: [&str; 10] = [
    "e.g., Could you take a look at this when you get a chance?",
    "e.g., Hang on, I'm just finishing something up",
    "e.g., No worries, take your time",
    "e.g., I totally forgot to send that email, my bad",
    "e.g., Let me know if you need anything else",
    "e.g., Thanks for getting back to me so quickly",
    "e.g., I'll circle back with you on this",
    "e.g., Does that make sense to you?",
    "e.g., I'm running a bit behind schedule",
    "e.g., Catch you later!",
];

/// Placeholder text for the input at `index`.
fn row_prompt(index: usize) -> &'static str {
    ROW_PROMPTS
        .get(index)
        .copied()
        .unwrap_or("Enter a phrase you commonly use...")
}

/// How many rows are visible: the first five until the form is expanded.
fn visible_rows(total: usize, expanded: bool) -> usize {
    if expanded { total } else { total.min(INITIAL_ROWS) }
}

/// Rows can be added until the batch limit.
fn can_add_row(total: usize) -> bool {
    total < MAX_PHRASES
}

/// Every row but the first is removable once the form is expanded, as
/// long as another row remains.
fn can_remove_row(index: usize, total: usize, expanded: bool) -> bool {
    expanded && index > 0 && total > 1
}

/// Count rows with any non-blank text.
fn filled_count(texts: &[String]) -> usize {
    texts.iter().filter(|t| !t.trim().is_empty()).count()
}

fn row_texts(rows: &[RwSignal<String>]) -> Vec<String> {
    rows.iter().map(|r| r.get()).collect()
}

/// Phrase capture form. Validates the batch on submit, runs the analysis
/// off the render path, and reports progress through the shared session.
#[component]
pub fn PhraseInput() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let rows = RwSignal::new(
        (0..INITIAL_ROWS)
            .map(|_| RwSignal::new(String::new()))
            .collect::<Vec<_>>(),
    );
    let expanded = RwSignal::new(false);

    let analyzing = move || session.with(|s| s.is_analyzing());
    let filled = move || filled_count(&row_texts(&rows.get()));

    // Typing clears a stale validation message.
    let clear_error = move || {
        if session.with(|s| s.error.is_some()) {
            session.update(|s| s.error = None);
        }
    };

    let add_row = move |_| {
        rows.update(|r| {
            if can_add_row(r.len()) {
                r.push(RwSignal::new(String::new()));
            }
        });
        expanded.set(true);
    };

    let submit = Callback::new(move |()| {
        if session.with(|s| s.is_analyzing()) {
            return;
        }
        match idiolect::validate_batch(&row_texts(&rows.get())) {
            Ok(cleaned) => {
                session.update(|s| s.begin_analysis());
                run_analysis(session, cleaned);
            }
            Err(err) => session.update(|s| s.fail_analysis(err.to_string())),
        }
    });

    let inputs = move || {
        let all = rows.get();
        let total = all.len();
        all.into_iter()
            .take(visible_rows(total, expanded.get()))
            .enumerate()
            .map(|(index, row)| {
                view! {
                    <div class="phrase-row">
                        <label class="phrase-row__label">
                            <span class="phrase-row__name">
                                {format!("Phrase {}", index + 1)}
                                {(index >= INITIAL_ROWS)
                                    .then(|| {
                                        view! {
                                            <span class="phrase-row__optional">" (optional)"</span>
                                        }
                                    })}
                            </span>
                            <input
                                class="phrase-row__input"
                                type="text"
                                placeholder=row_prompt(index)
                                maxlength=MAX_PHRASE_LEN.to_string()
                                prop:value=move || row.get()
                                disabled=analyzing
                                on:input=move |ev| {
                                    row.set(event_target_value(&ev));
                                    clear_error();
                                }
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        submit.run(());
                                    }
                                }
                            />
                        </label>
                        {can_remove_row(index, total, expanded.get())
                            .then(|| {
                                view! {
                                    <button
                                        class="phrase-row__remove"
                                        title="Remove phrase"
                                        disabled=analyzing
                                        on:click=move |_| {
                                            rows.update(|r| {
                                                if r.len() > 1 {
                                                    r.remove(index);
                                                }
                                            });
                                        }
                                    >
                                        "\u{00D7}"
                                    </button>
                                }
                            })}
                        <div class="phrase-row__count">
                            {move || format!("{}/{}", row.get().chars().count(), MAX_PHRASE_LEN)}
                        </div>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="phrase-form">
            <div class="phrase-form__header">
                <h2>"Tell us how you speak"</h2>
                <p>
                    "Enter 5-10 common English phrases you use in daily life. "
                    "We'll analyze your speaking style to create personalized Spanish lessons."
                </p>
            </div>

            <div class="phrase-form__rows">{inputs}</div>

            {move || {
                if !can_add_row(rows.get().len()) {
                    return None;
                }
                let label = if expanded.get() {
                    "+ Add another phrase"
                } else {
                    "Add more phrases (optional)"
                };
                Some(
                    view! {
                        <button class="phrase-form__add" disabled=analyzing on:click=add_row>
                            {label}
                        </button>
                    },
                )
            }}

            <div class="phrase-form__footer">
                <div class="phrase-form__entered">
                    {move || format!("{} entered", crate::util::text::phrase_count_label(filled()))}
                </div>

                {move || {
                    session
                        .with(|s| s.error.clone())
                        .map(|msg| view! { <div class="phrase-form__error">{msg}</div> })
                }}

                <button
                    class="phrase-form__submit"
                    disabled=move || analyzing() || filled() == 0
                    on:click=move |_| submit.run(())
                >
                    {move || {
                        if analyzing() { "Analyzing your style..." } else { "Analyze My Speaking Style" }
                    }}
                </button>
            </div>
        </div>
    }
}

/// Run the analysis off the render path and persist the result.
fn run_analysis(session: RwSignal<SessionState>, cleaned: Vec<String>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ANALYSIS_DELAY_MS).await;

            let now = crate::util::time::now_ms();
            let analysis = idiolect::analyze_batch(&cleaned, now);
            crate::util::storage::save_session(&crate::util::storage::StoredSession {
                phrases: analysis.phrases.clone(),
                profile: analysis.profile.clone(),
                saved_at_ms: now,
            });
            session.update(|s| s.complete_analysis(analysis));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, cleaned);
    }
}
