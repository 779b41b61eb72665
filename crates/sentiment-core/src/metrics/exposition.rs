//! Prometheus-style text exposition of a [`RegistrySnapshot`].
//!
//! Line shapes (one sample per line, `\n` terminated):
//!
//! ```text
//! # HELP <name> <help>
//! # TYPE <name> <counter|gauge|histogram|summary>
//! <name>[{<key>="<value>",...}] <value>[ <timestamp_ms>]
//! ```
//!
//! Scrapers parse this, so field order, metric order, and number formatting
//! are part of the external contract. Partitioned series are sorted by label
//! value, which makes two renders of the same state byte-identical.

use std::fmt::Write;

use super::{
    CounterSnapshot, GaugeSnapshot, HistogramSnapshot, MetricsRegistry, RegistrySnapshot,
    SummarySnapshot,
};

/// Render the registry's current state without timestamps.
pub fn render(registry: &MetricsRegistry) -> String {
    render_snapshot(&registry.snapshot(), None)
}

/// Render a snapshot. When `timestamp_ms` is set it is appended to every
/// sample line.
pub fn render_snapshot(snap: &RegistrySnapshot, timestamp_ms: Option<i64>) -> String {
    let mut out = String::new();
    render_counter(&snap.predictions_total, timestamp_ms, &mut out);
    render_counter(&snap.user_feedback_total, timestamp_ms, &mut out);
    render_gauge(&snap.prediction_accuracy, timestamp_ms, &mut out);
    render_histogram(&snap.input_data_size_distribution, timestamp_ms, &mut out);
    render_summary(&snap.sentiment_summary, timestamp_ms, &mut out);
    out
}

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Locale-free float text: `Display` for `f64` never uses exponents, and
/// integral values keep a trailing `.0` so floats stay recognisable.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".into();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf".into() } else { "-Inf".into() };
    }
    let mut s = v.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

fn write_header(out: &mut String, name: &str, help: &str, kind: &str) {
    let _ = writeln!(out, "# HELP {} {}", name, escape_help(help));
    let _ = writeln!(out, "# TYPE {} {}", name, kind);
}

fn write_sample(
    out: &mut String,
    name: &str,
    labels: &[(&str, &str)],
    value: &str,
    timestamp_ms: Option<i64>,
) {
    out.push_str(name);
    if !labels.is_empty() {
        let label_str = labels
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
            .collect::<Vec<_>>()
            .join(",");
        let _ = write!(out, "{{{}}}", label_str);
    }
    let _ = write!(out, " {}", value);
    if let Some(ts) = timestamp_ms {
        let _ = write!(out, " {}", ts);
    }
    out.push('\n');
}

fn render_counter(c: &CounterSnapshot, ts: Option<i64>, out: &mut String) {
    let name = c.desc.name.as_str();
    write_header(out, name, &c.desc.help, "counter");
    match &c.label_key {
        None => write_sample(out, name, &[], &c.value.to_string(), ts),
        Some(key) => {
            for (label, v) in &c.series {
                write_sample(out, name, &[(key.as_str(), label.as_str())], &v.to_string(), ts);
            }
        }
    }
}

fn render_gauge(g: &GaugeSnapshot, ts: Option<i64>, out: &mut String) {
    let name = g.desc.name.as_str();
    write_header(out, name, &g.desc.help, "gauge");
    write_sample(out, name, &[], &format_float(g.value), ts);
}

fn render_histogram(h: &HistogramSnapshot, ts: Option<i64>, out: &mut String) {
    let name = h.desc.name.as_str();
    write_header(out, name, &h.desc.help, "histogram");
    let bucket = format!("{name}_bucket");
    for (le, count) in &h.buckets {
        let le = format_float(*le);
        write_sample(out, &bucket, &[("le", le.as_str())], &count.to_string(), ts);
    }
    write_sample(out, &bucket, &[("le", "+Inf")], &h.count.to_string(), ts);
    write_sample(out, &format!("{name}_sum"), &[], &format_float(h.sum), ts);
    write_sample(out, &format!("{name}_count"), &[], &h.count.to_string(), ts);
}

fn render_summary(s: &SummarySnapshot, ts: Option<i64>, out: &mut String) {
    let name = s.desc.name.as_str();
    write_header(out, name, &s.desc.help, "summary");
    let sum_name = format!("{name}_sum");
    let count_name = format!("{name}_count");
    for (label, cell) in &s.series {
        let labels = [(s.label_key.as_str(), label.as_str())];
        write_sample(out, &sum_name, &labels, &format_float(cell.sum), ts);
        write_sample(out, &count_name, &labels, &cell.count.to_string(), ts);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn float_formatting_is_fixed_point() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(0.5), "0.5");
        assert_eq!(format_float(85.0), "85.0");
        assert_eq!(format_float(1e20), "100000000000000000000.0");
        assert_eq!(format_float(1e-7), "0.0000001");
        assert_eq!(format_float(f64::INFINITY), "+Inf");
    }

    #[test]
    fn fresh_registry_renders_headers_and_zeroes() {
        let text = render(&MetricsRegistry::new());
        assert!(text.contains("# TYPE predictions_total counter\npredictions_total 0\n"));
        assert!(text.contains("# TYPE user_feedback_total counter\n# HELP prediction_accuracy"));
        assert!(text.contains("input_data_size_distribution_bucket{le=\"+Inf\"} 0\n"));
        assert!(text.ends_with("# TYPE sentiment_summary summary\n"));
    }

    #[test]
    fn label_values_are_escaped() {
        let r = MetricsRegistry::new();
        r.record_feedback("say \"hi\"\nback\\slash").unwrap();
        let text = render(&r);
        assert!(text.contains(r#"user_feedback_total{feedback="say \"hi\"\nback\\slash"} 1"#));
    }

    #[test]
    fn timestamps_trail_every_sample() {
        let r = MetricsRegistry::new();
        r.record_prediction(3, &[1]).unwrap();
        let text = render_snapshot(&r.snapshot(), Some(1_700_000_000_000));
        for line in text.lines().filter(|l| !l.starts_with('#')) {
            assert!(line.ends_with(" 1700000000000"), "line without timestamp: {line}");
        }
    }
}
