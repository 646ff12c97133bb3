//! Positional-alignment and policy-uniformity invariants for scoring.

use newsprep::{
    add_sentiment_scores, clean_text, Column, EmptyTextPolicy, EnrichError, LabelScore,
    MissingLabelPolicy, RecordFrame, RecordingMonitor, ScorePolicy, SentimentModel, Value,
};

/// Returns a malformed response (missing `neutral`) for rows whose text
/// contains the marker, a full triple otherwise.
struct FlakyModel {
    marker: &'static str,
}

impl SentimentModel for FlakyModel {
    fn classify(&self, text: &str) -> Result<Vec<LabelScore>, EnrichError> {
        if text.contains(self.marker) {
            return Ok(vec![LabelScore {
                label: "positive".to_string(),
                score: 1.0,
            }]);
        }
        Ok(vec![
            LabelScore {
                label: "negative".to_string(),
                score: 0.2,
            },
            LabelScore {
                label: "neutral".to_string(),
                score: 0.5,
            },
            LabelScore {
                label: "positive".to_string(),
                score: 0.3,
            },
        ])
    }
}

fn text_frame(texts: &[&str]) -> RecordFrame {
    let mut frame = RecordFrame::new();
    let column: Column = texts.iter().map(|t| Value::Text(t.to_string())).collect();
    frame.append_column("description", column).unwrap();
    frame
}

#[test]
fn output_columns_always_match_input_length() {
    for n in [0usize, 1, 7, 32] {
        let texts: Vec<String> = (0..n).map(|i| format!("record {i}")).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let mut frame = text_frame(&refs);
        let monitor = RecordingMonitor::new();

        add_sentiment_scores(
            &mut frame,
            "description",
            &FlakyModel { marker: "@@" },
            ScorePolicy::default(),
            &monitor,
        )
        .unwrap();

        for field in ["positive_score", "neutral_score", "negative_score"] {
            assert_eq!(frame.column(field).unwrap().len(), n, "n = {n}");
        }
        assert_eq!(monitor.progress_updates().len(), n);
        assert!(monitor.progress_updates().iter().all(|(_, total)| *total == n));
        assert!(monitor.units().iter().all(|unit| unit.as_str() == "text"));
    }
}

#[test]
fn null_triple_policy_is_uniform_and_keeps_neighbors_intact() {
    let mut frame = text_frame(&["ok one", "bad @@ row", "ok two", "bad @@ again", "ok three"]);
    let monitor = RecordingMonitor::new();
    let policy = ScorePolicy {
        missing_label: MissingLabelPolicy::NullTriple,
        empty_text: EmptyTextPolicy::ScoreAsEmpty,
    };

    let outcome = add_sentiment_scores(
        &mut frame,
        "description",
        &FlakyModel { marker: "@@" },
        policy,
        &monitor,
    )
    .unwrap();

    assert_eq!(outcome.scored, 3);
    assert_eq!(outcome.null_triples, 2);
    for row in [1, 3] {
        for field in ["positive_score", "neutral_score", "negative_score"] {
            assert_eq!(frame.cell(field, row), Some(&Value::Null), "row {row}");
        }
    }
    for row in [0, 2, 4] {
        assert_eq!(frame.cell("positive_score", row), Some(&Value::Float(0.3)));
        assert_eq!(frame.cell("neutral_score", row), Some(&Value::Float(0.5)));
        assert_eq!(frame.cell("negative_score", row), Some(&Value::Float(0.2)));
    }
    assert_eq!(frame.len(), 5);
}

#[test]
fn abort_policy_reports_the_offending_record() {
    let mut frame = text_frame(&["fine", "also fine", "bad @@ row"]);
    let monitor = RecordingMonitor::new();

    let result = add_sentiment_scores(
        &mut frame,
        "description",
        &FlakyModel { marker: "@@" },
        ScorePolicy::default(),
        &monitor,
    );

    match result {
        Err(EnrichError::MissingLabel { index, .. }) => assert_eq!(index, 2),
        other => panic!("expected MissingLabel, got {other:?}"),
    }
    // The failed batch installs nothing, so callers can retry or switch
    // policy without tearing down a half-written frame.
    assert!(!frame.has_column("positive_score"));
    assert!(!frame.has_column("neutral_score"));
    assert!(!frame.has_column("negative_score"));
}

#[test]
fn appending_a_desynchronized_column_is_rejected() {
    let mut frame = text_frame(&["a", "b", "c"]);
    let short: Column = vec![Value::Float(0.5)];
    let result = frame.append_column("positive_score", short);
    assert!(matches!(
        result,
        Err(EnrichError::ColumnLengthMismatch {
            expected: 3,
            actual: 1,
            ..
        })
    ));
    assert!(!frame.has_column("positive_score"));
}

#[test]
fn clean_text_is_idempotent_across_varied_inputs() {
    let inputs = [
        "Hello, World! 123  ",
        "\t tabs\tand\nnewlines \n",
        "ALL CAPS WITH 100% PUNCTUATION!!!",
        "unicode: cafe au lait, naive resume",
        "123456",
        "....",
        "",
        "   ",
    ];
    for input in inputs {
        let once = clean_text(input);
        let twice = clean_text(&once);
        assert_eq!(once, twice, "input: {input:?}");
    }
}
