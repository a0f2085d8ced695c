//! End-to-end tests for the rewriting engine

use genderstern_core::{GenderProcessor, SpanConfidence};

fn processor() -> GenderProcessor {
    GenderProcessor::new().expect("embedded lexicon loads")
}

#[test]
fn definite_plural_noun() {
    let output = processor().process("die Schüler");
    assert_eq!(output.spans.len(), 1);
    let span = &output.spans[0];
    assert_eq!(span.display, "die Schüler*innen");
    assert_eq!(span.confidence, SpanConfidence::Certain);
    assert_eq!(output.certain_count, 1);
}

#[test]
fn singular_conjunction_collapses_the_pair() {
    let text = "der Schüler und die Schülerin";
    let output = processor().process(text);
    assert_eq!(output.spans.len(), 1);
    let span = &output.spans[0];
    assert_eq!((span.start, span.end), (0, text.len()));
    assert_eq!(span.display, "der*die Schüler*in");
    assert_eq!(span.confidence, SpanConfidence::Certain);
    assert_eq!(output.certain_count, 1);
}

#[test]
fn plural_conjunction_collapses_the_pair() {
    let (text, counter) = processor().rewrite("Die Schülerinnen und Schüler der Stadt");
    assert_eq!(text, "Die Schüler*innen der Stadt");
    assert_eq!(counter, 1);
}

#[test]
fn numeral_phrase_forces_plural_and_keeps_the_digits() {
    let (text, counter) = processor().rewrite("50 Schüler");
    assert_eq!(text, "50 Schüler*innen");
    assert_eq!(counter, 1);

    let (text, _) = processor().rewrite("1.000 Studenten");
    assert_eq!(text, "1.000 Student*innen");
}

#[test]
fn already_canonical_input_is_untouched() {
    let output = processor().process("die Schüler*innen");
    assert!(output.spans.is_empty());
    assert_eq!(output.certain_count, 0);
}

#[test]
fn variant_markers_normalize_to_the_asterisk() {
    let (text, counter) = processor().rewrite("Schüler:innen und SchülerInnen");
    assert_eq!(text, "Schüler*innen und Schüler*innen");
    assert_eq!(counter, 2);
}

#[test]
fn never_double_marks() {
    let (text, _) = processor().rewrite("Schüler*in");
    assert_eq!(text, "Schüler*in");
}

#[test]
fn bare_noun_is_uncertain_and_uncounted() {
    let output = processor().process("Schüler");
    assert_eq!(output.spans.len(), 1);
    assert_eq!(output.spans[0].confidence, SpanConfidence::Uncertain);
    assert_eq!(output.spans[0].display, "Schüler*innen");
    assert_eq!(output.certain_count, 0);
}

#[test]
fn ambiguous_readings_are_joined_and_uncounted() {
    // "der" before a gendered singular can be nominative, genitive or
    // dative; each renders a different merged article
    let output = processor().process("der Schüler*in");
    assert_eq!(output.spans.len(), 1);
    let span = &output.spans[0];
    assert_eq!(span.confidence, SpanConfidence::Ambiguous);
    assert_eq!(span.display.matches(" / ").count(), 2);
    assert_eq!(output.certain_count, 0);
}

#[test]
fn certain_match_forecloses_overlapping_attempts() {
    // "die Schüler" completes certain before the conjunction construct
    // could span the whole phrase
    let (text, counter) = processor().rewrite("die Schüler und die Schülerinnen");
    assert_eq!(text, "die Schüler*innen und die Schülerinnen");
    assert_eq!(counter, 1);
}

#[test]
fn prose_with_several_phrases() {
    let text = "Heute treffen sich die Lehrer, 3 Ärzte und die Studentinnen und Studenten.";
    let output = processor().process(text);
    let displays: Vec<&str> = output.spans.iter().map(|s| s.display.as_str()).collect();
    assert_eq!(
        displays,
        vec!["die Lehrer*innen", "3 Ärzt*innen", "die Student*innen"]
    );
    assert_eq!(
        output.apply(text),
        "Heute treffen sich die Lehrer*innen, 3 Ärzt*innen und die Student*innen."
    );
    assert_eq!(output.certain_count, 3);
}

#[test]
fn span_originals_are_exact_slices() {
    let text = "Ärzte — die Schüler (morgen), bzw. niemand.";
    let output = processor().process(text);
    assert!(!output.spans.is_empty());
    let mut last = 0;
    for span in &output.spans {
        assert_eq!(&text[span.start..span.end], span.original);
        assert!(span.start >= last);
        last = span.end;
    }
}

#[test]
fn weak_nouns_decline_through_the_pair_construct() {
    let (text, counter) = processor().rewrite("der Kollege und die Kollegin");
    assert_eq!(text, "der*die Kolleg*in");
    assert_eq!(counter, 1);
}

#[test]
fn conjunction_variants() {
    let (text, _) = processor().rewrite("Ärztinnen bzw. Ärzte");
    assert_eq!(text, "Ärzt*innen");
    let (text, _) = processor().rewrite("Lehrerinnen/Lehrer");
    assert_eq!(text, "Lehrer*innen");
    let (text, _) = processor().rewrite("Studenten oder Studentinnen");
    assert_eq!(text, "Student*innen");
}

#[test]
fn nothing_to_gender_yields_no_spans() {
    let output = processor().process("Der Himmel über dem Meer ist blau.");
    assert!(output.spans.is_empty());
    assert_eq!(output.certain_count, 0);
}
