use std::sync::Arc;

use indicatif::ProgressStyle;
use sitelink_core::scanner::ProgressCallback;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg} {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// A span that renders as a spinner while it is entered.
///
/// Returns the span and a callback that advances its position as probes finish.
pub fn scan_span(site: &str, total: usize) -> (Span, ProgressCallback) {
    let span = info_span!("scan", indicatif.pb_show = true);
    span.pb_set_style(&style());
    span.pb_set_length(total as u64);
    span.pb_set_message(&format!("Probing devices at site {site}"));

    let progress_span = span.clone();
    let callback: ProgressCallback = Arc::new(move |done, _total| {
        progress_span.pb_set_position(done as u64);
    });

    (span, callback)
}
