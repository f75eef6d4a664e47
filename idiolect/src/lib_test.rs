use super::*;

fn batch(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| (*t).to_owned()).collect()
}

// =============================================================================
// validate_batch
// =============================================================================

#[test]
fn validate_batch_rejects_empty_input() {
    assert_eq!(validate_batch(&[]), Err(BatchError::Empty));
}

#[test]
fn validate_batch_rejects_all_blank_rows() {
    let raw = batch(&["", "   ", "\t"]);
    assert_eq!(validate_batch(&raw), Err(BatchError::Empty));
}

#[test]
fn validate_batch_trims_and_drops_blank_rows() {
    let raw = batch(&["  hello there  ", "", "good morning"]);
    let cleaned = validate_batch(&raw).expect("batch should validate");
    assert_eq!(cleaned, vec!["hello there".to_owned(), "good morning".to_owned()]);
}

#[test]
fn validate_batch_accepts_exactly_max_phrases() {
    let raw: Vec<String> = (0..MAX_PHRASES).map(|i| format!("phrase {i}")).collect();
    assert_eq!(validate_batch(&raw).expect("batch should validate").len(), MAX_PHRASES);
}

#[test]
fn validate_batch_rejects_too_many_phrases() {
    let raw: Vec<String> = (0..=MAX_PHRASES).map(|i| format!("phrase {i}")).collect();
    assert_eq!(validate_batch(&raw), Err(BatchError::TooMany { max: MAX_PHRASES }));
}

#[test]
fn validate_batch_blank_rows_do_not_count_toward_limit() {
    let mut raw: Vec<String> = (0..MAX_PHRASES).map(|i| format!("phrase {i}")).collect();
    raw.push("   ".to_owned());
    assert!(validate_batch(&raw).is_ok());
}

#[test]
fn validate_batch_accepts_phrase_at_length_limit() {
    let raw = vec!["a".repeat(MAX_PHRASE_LEN)];
    assert!(validate_batch(&raw).is_ok());
}

#[test]
fn validate_batch_rejects_over_long_phrase_with_one_based_index() {
    let raw = batch(&["fine", &"a".repeat(MAX_PHRASE_LEN + 1)]);
    assert_eq!(
        validate_batch(&raw),
        Err(BatchError::PhraseTooLong { index: 2, max: MAX_PHRASE_LEN })
    );
}

#[test]
fn batch_error_messages_are_user_facing() {
    assert_eq!(BatchError::Empty.to_string(), "Please enter at least 1 phrase");
    assert_eq!(
        BatchError::TooMany { max: 10 }.to_string(),
        "Please enter no more than 10 phrases"
    );
    assert_eq!(
        BatchError::PhraseTooLong { index: 3, max: 500 }.to_string(),
        "Phrase 3 is too long (max 500 characters)"
    );
}

// =============================================================================
// detect_intent
// =============================================================================

#[test]
fn detect_intent_finds_work_terms() {
    assert_eq!(detect_intent("The meeting ran long again"), IntentCategory::Work);
    assert_eq!(detect_intent("I need to finish this project"), IntentCategory::Work);
}

#[test]
fn detect_intent_finds_family_terms() {
    assert_eq!(detect_intent("The kids are already asleep"), IntentCategory::Family);
}

#[test]
fn detect_intent_finds_errand_terms() {
    assert_eq!(detect_intent("I have a dentist appointment at noon"), IntentCategory::Errands);
}

#[test]
fn detect_intent_finds_social_terms() {
    assert_eq!(detect_intent("Are you free this weekend?"), IntentCategory::Social);
}

#[test]
fn detect_intent_finds_polite_requests() {
    assert_eq!(
        detect_intent("Could you send that over again?"),
        IntentCategory::PoliteRequest
    );
}

#[test]
fn detect_intent_defaults_to_casual() {
    assert_eq!(detect_intent("no idea what to say"), IntentCategory::Casual);
}

#[test]
fn detect_intent_is_case_insensitive() {
    assert_eq!(detect_intent("DEADLINE tomorrow"), IntentCategory::Work);
}

#[test]
fn detect_intent_priority_order_prefers_work() {
    // Contains both a work term and a family term; work is checked first.
    assert_eq!(detect_intent("dinner with a client"), IntentCategory::Work);
}

#[test]
fn detect_intent_matches_substrings() {
    // "homework" contains "work": substring semantics are intentional.
    assert_eq!(detect_intent("homework is due"), IntentCategory::Work);
}

// =============================================================================
// words / count_markers
// =============================================================================

#[test]
fn words_keeps_contractions_intact() {
    assert_eq!(words("don't worry, it's fine"), vec!["don't", "worry", "it's", "fine"]);
}

#[test]
fn words_strips_punctuation_boundaries() {
    assert_eq!(words("hey! you know?"), vec!["hey", "you", "know"]);
}

#[test]
fn words_drops_bare_apostrophes() {
    assert_eq!(words("well ' said"), vec!["well", "said"]);
}

#[test]
fn count_markers_counts_single_word_markers() {
    let tokens = words("please wait please");
    assert_eq!(count_markers(&tokens, &POLITENESS_MARKERS), 2);
}

#[test]
fn count_markers_counts_multi_word_markers() {
    let tokens = words("could you check, and would you reply");
    assert_eq!(count_markers(&tokens, &POLITENESS_MARKERS), 2);
}

#[test]
fn count_markers_requires_word_boundaries() {
    // "dont" without the apostrophe is a different token.
    let tokens = words("dont look");
    assert_eq!(count_markers(&tokens, &CONTRACTION_MARKERS), 0);
}

#[test]
fn count_markers_handles_marker_longer_than_input() {
    let tokens = words("you");
    assert_eq!(count_markers(&tokens, &["you know"]), 0);
}

#[test]
fn count_markers_counts_adjacent_categories_independently() {
    // "could you" is politeness; the trailing "you know" is a filler.
    let tokens = words("could you know");
    assert_eq!(count_markers(&tokens, &POLITENESS_MARKERS), 1);
    assert_eq!(count_markers(&tokens, &FILLER_MARKERS), 1);
}

// =============================================================================
// tone and formality
// =============================================================================

#[test]
fn profile_tone_polite_when_politeness_markers_dominate() {
    let texts = batch(&["Could you help please", "Thank you so much"]);
    let profile = build_profile(&texts, 0);
    assert_eq!(profile.tone, ToneLevel::Polite);
}

#[test]
fn profile_tone_casual_when_contractions_dominate() {
    let texts = batch(&["I'm heading out", "Don't wait up"]);
    let profile = build_profile(&texts, 0);
    assert_eq!(profile.tone, ToneLevel::Casual);
}

#[test]
fn profile_tone_neutral_without_markers() {
    let texts = batch(&["The report is ready", "See the attached notes"]);
    let profile = build_profile(&texts, 0);
    assert_eq!(profile.tone, ToneLevel::Neutral);
}

#[test]
fn profile_formality_formal_with_politeness_and_few_contractions() {
    // One politeness marker over five phrases: below the polite-tone
    // threshold but enough for the formal register.
    let texts = batch(&[
        "Please review the document",
        "The schedule is attached",
        "We will meet at nine",
        "The agenda follows",
        "Regards to the team",
    ]);
    let profile = build_profile(&texts, 0);
    assert_eq!(profile.formality, FormalityLevel::Formal);
    assert_eq!(profile.tone, ToneLevel::Neutral);
}

#[test]
fn profile_formality_informal_with_heavy_contractions() {
    let texts = batch(&["I'm out", "don't care", "it's whatever", "nothing else"]);
    let profile = build_profile(&texts, 0);
    assert_eq!(profile.formality, FormalityLevel::Informal);
}

#[test]
fn profile_formality_semi_formal_in_between() {
    let texts = batch(&["it's on my desk", "the rest arrives tomorrow", "no changes today"]);
    let profile = build_profile(&texts, 0);
    assert_eq!(profile.formality, FormalityLevel::SemiFormal);
}

// =============================================================================
// patterns
// =============================================================================

#[test]
fn profile_patterns_flag_frequent_contractions() {
    let texts = batch(&["I'm sure it's fine", "don't worry"]);
    let profile = build_profile(&texts, 0);
    assert!(profile.patterns.contains(&SpeechPattern::FrequentContractions));
}

#[test]
fn profile_patterns_flag_filler_words() {
    let texts = batch(&["it was basically done"]);
    let profile = build_profile(&texts, 0);
    assert!(profile.patterns.contains(&SpeechPattern::FillerWords));
}

#[test]
fn profile_patterns_flag_questions() {
    let texts = batch(&["ready to go?"]);
    let profile = build_profile(&texts, 0);
    assert!(profile.patterns.contains(&SpeechPattern::FrequentQuestions));
}

#[test]
fn profile_patterns_flag_long_sentences() {
    let texts = batch(&["this sentence keeps going well past the fifty character mark"]);
    let profile = build_profile(&texts, 0);
    assert!(profile.patterns.contains(&SpeechPattern::LongSentences));
    assert!(!profile.patterns.contains(&SpeechPattern::ConciseSentences));
}

#[test]
fn profile_patterns_default_to_concise_sentences() {
    let texts = batch(&["short and sweet"]);
    let profile = build_profile(&texts, 0);
    assert!(profile.patterns.contains(&SpeechPattern::ConciseSentences));
    assert!(!profile.patterns.contains(&SpeechPattern::LongSentences));
}

// =============================================================================
// build_profile / analyze_batch
// =============================================================================

#[test]
fn build_profile_stamps_timestamps_and_count() {
    let texts = batch(&["one", "two", "three"]);
    let profile = build_profile(&texts, 1_700_000_000_000);
    assert_eq!(profile.analysis_count, 3);
    assert_eq!(profile.created_at_ms, 1_700_000_000_000);
    assert_eq!(profile.updated_at_ms, 1_700_000_000_000);
}

#[test]
fn build_profile_is_deterministic() {
    let texts = batch(&["Could you help please", "I'm late for the meeting"]);
    let a = build_profile(&texts, 42);
    let b = build_profile(&texts, 42);
    assert_eq!(a, b);
}

#[test]
fn profile_confidence_stays_below_cap() {
    // A marker-dense batch must still clamp at 0.95.
    let texts = batch(&[
        "please please please thank you sorry excuse me",
        "don't won't can't i'm you're it's that's we're they're",
        "um uh like you know actually basically literally",
    ]);
    let profile = build_profile(&texts, 0);
    assert!((profile.confidence - 0.95).abs() < 1e-6);
}

#[test]
fn analyze_phrase_trims_and_stamps() {
    let phrase = analyze_phrase("  buy milk  ", 99);
    assert_eq!(phrase.text, "buy milk");
    assert_eq!(phrase.intent, IntentCategory::Errands);
    assert_eq!(phrase.captured_at_ms, 99);
    assert!(phrase.confidence >= 0.85 && phrase.confidence <= 0.95);
}

#[test]
fn analyze_phrase_assigns_unique_ids() {
    let a = analyze_phrase("same text", 0);
    let b = analyze_phrase("same text", 0);
    assert_ne!(a.id, b.id);
}

#[test]
fn analyze_batch_produces_one_record_per_phrase() {
    let texts = batch(&["meeting at ten", "kids to school", "weekend plans?"]);
    let analysis = analyze_batch(&texts, 7);
    assert_eq!(analysis.phrases.len(), 3);
    assert_eq!(analysis.profile.analysis_count, 3);
    assert_eq!(analysis.phrases[0].intent, IntentCategory::Work);
    assert_eq!(analysis.phrases[1].intent, IntentCategory::Family);
    assert_eq!(analysis.phrases[2].intent, IntentCategory::Social);
}

// =============================================================================
// intent_distribution / percentage
// =============================================================================

#[test]
fn intent_distribution_counts_and_sorts_descending() {
    let texts = batch(&["meeting prep", "project review", "buy groceries"]);
    let analysis = analyze_batch(&texts, 0);
    let dist = intent_distribution(&analysis.phrases);
    assert_eq!(dist[0], (IntentCategory::Work, 2));
    assert_eq!(dist[1], (IntentCategory::Errands, 1));
}

#[test]
fn intent_distribution_breaks_ties_in_declaration_order() {
    let texts = batch(&["buy groceries", "meeting prep"]);
    let analysis = analyze_batch(&texts, 0);
    let dist = intent_distribution(&analysis.phrases);
    assert_eq!(dist[0].0, IntentCategory::Work);
    assert_eq!(dist[1].0, IntentCategory::Errands);
}

#[test]
fn intent_distribution_empty_input() {
    assert!(intent_distribution(&[]).is_empty());
}

#[test]
fn percentage_rounds_half_up() {
    assert_eq!(percentage(1, 3), 33);
    assert_eq!(percentage(2, 3), 67);
    assert_eq!(percentage(1, 8), 13);
}

#[test]
fn percentage_of_zero_total_is_zero() {
    assert_eq!(percentage(5, 0), 0);
}

// =============================================================================
// serialization
// =============================================================================

#[test]
fn intent_category_serializes_snake_case() {
    let json = serde_json::to_string(&IntentCategory::PoliteRequest).expect("serialize");
    assert_eq!(json, "\"polite_request\"");
}

#[test]
fn formality_level_serializes_snake_case() {
    let json = serde_json::to_string(&FormalityLevel::SemiFormal).expect("serialize");
    assert_eq!(json, "\"semi_formal\"");
}

#[test]
fn phrase_round_trips_through_json() {
    let phrase = analyze_phrase("could you call the store", 1234);
    let json = serde_json::to_string(&phrase).expect("serialize");
    let back: Phrase = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, phrase);
}

// =============================================================================
// display names
// =============================================================================

#[test]
fn display_names_match_product_copy() {
    assert_eq!(IntentCategory::PoliteRequest.display_name(), "Polite Request");
    assert_eq!(ToneLevel::VeryCasual.display_name(), "Very Casual");
    assert_eq!(FormalityLevel::SemiFormal.display_name(), "Semi-Formal");
    assert_eq!(SpeechPattern::FrequentContractions.display_name(), "Frequent Contractions");
    assert_eq!(
        SpeechPattern::ConciseSentences.description(),
        "Prefers concise communication"
    );
}
