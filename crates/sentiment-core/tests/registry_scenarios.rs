//! End-to-end update semantics of the metrics registry.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sentiment_core::metrics::registry::{LABEL_NEGATIVE, LABEL_POSITIVE};
use sentiment_core::MetricsRegistry;

#[test]
fn two_predictions_one_correct_feedback() {
    let r = MetricsRegistry::new();
    r.record_prediction(25, &[1]).unwrap();
    r.record_prediction(60, &[0]).unwrap();
    r.record_feedback("correct").unwrap();

    assert_eq!(r.predictions_total().read(None).unwrap(), 2);

    let h = r.input_data_size_distribution().snapshot();
    assert_eq!(h.bucket(50.0), Some(1));
    assert_eq!(h.bucket(100.0), Some(2));

    let s = r.sentiment_summary();
    assert_eq!(s.get(LABEL_POSITIVE).unwrap().count, 1);
    assert_eq!(s.get(LABEL_NEGATIVE).unwrap().count, 1);

    assert_eq!(r.prediction_accuracy().read(), 0.5);
}

#[test]
fn incorrect_feedback_on_empty_registry_is_harmless() {
    let r = MetricsRegistry::new();
    r.record_feedback("incorrect").unwrap();
    assert_eq!(r.prediction_accuracy().read(), 0.0);
    assert_eq!(r.user_feedback_total().read(Some("incorrect")).unwrap(), 1);
}

#[test]
fn accuracy_ignores_feedback_order() {
    let orders: [&[&str]; 3] = [
        &["correct", "correct", "incorrect", "other"],
        &["other", "incorrect", "correct", "correct"],
        &["correct", "other", "correct", "incorrect"],
    ];
    for order in orders {
        let r = MetricsRegistry::new();
        for len in [1, 2, 3, 4, 5] {
            r.record_prediction(len, &[1]).unwrap();
        }
        for fb in order {
            r.record_feedback(fb).unwrap();
        }
        assert_eq!(r.prediction_accuracy().read(), 2.0 / 5.0, "order={order:?}");
    }
}

#[test]
fn arbitrary_feedback_labels_get_their_own_series() {
    let r = MetricsRegistry::new();
    for fb in ["correct", "incorrect", "not sure", "correct"] {
        r.record_feedback(fb).unwrap();
    }
    let snap = r.user_feedback_total().snapshot();
    assert_eq!(
        snap.series,
        vec![
            ("correct".to_string(), 2),
            ("incorrect".to_string(), 1),
            ("not sure".to_string(), 1),
        ]
    );
}

#[test]
fn histogram_buckets_match_brute_force_counts() {
    let r = MetricsRegistry::new();
    let values: Vec<u64> = (0..500).map(|i| (i * 37) % 263).collect();
    for &v in &values {
        r.record_prediction(v, &[0]).unwrap();
    }
    let h = r.input_data_size_distribution().snapshot();
    for (le, count) in &h.buckets {
        let expected = values.iter().filter(|&&v| v as f64 <= *le).count() as u64;
        assert_eq!(*count, expected, "le={le}");
    }
    let largest = h.buckets.last().unwrap().1;
    assert!(largest <= h.count);
    assert_eq!(h.count, values.len() as u64);
    assert_eq!(h.sum, values.iter().sum::<u64>() as f64);
}

#[test]
fn summary_sum_equals_count() {
    let r = MetricsRegistry::new();
    let labels = [1u8, 0, 0, 1, 1, 1, 0];
    for l in labels {
        r.record_prediction(10, &[l]).unwrap();
    }
    for (label, cell) in r.sentiment_summary().snapshot().series {
        assert_eq!(cell.sum, cell.count as f64, "label={label}");
    }
    assert_eq!(r.sentiment_summary().get(LABEL_POSITIVE).unwrap().count, 4);
    assert_eq!(r.sentiment_summary().get(LABEL_NEGATIVE).unwrap().count, 3);
}
