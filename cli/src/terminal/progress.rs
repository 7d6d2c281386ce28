use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TEMPLATE: &str = "[{msg}] {elapsed_precise} {bar:36.cyan/blue} {pos:>4}/{len:4}";

pub fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("■■□")
}

/// Turns `span` into a progress bar of `len` steps labelled `label`.
pub fn attach_bar(span: &Span, label: &str, len: usize) {
    span.pb_set_style(&bar_style());
    span.pb_set_length(len as u64);
    span.pb_set_message(label);
}

/// Progress callback that advances the bar on `span` once per completion.
pub fn advance_on(span: Span) -> Box<dyn Fn(usize) + Send + Sync> {
    Box::new(move |_done| span.pb_inc(1))
}
