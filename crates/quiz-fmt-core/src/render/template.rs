use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use minijinja::value::ViaDeserialize;
use minijinja::{context, Environment};
use tracing::{debug, instrument};

use crate::format::criteria::format_criteria;
use crate::format::quoting::add_quotes_if_needed;
use crate::record::{Criteria, QuizRecord};

/// Timestamp layout used by the `now()` template helper.
pub const TIMESTAMP_FORMAT: &str = "%Y年%m月%d日 %H:%M:%S";

/// Source of the current time for the `now()` helper. Injected so rendering
/// stays deterministic under test; nothing else reads the clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Build a template environment with the quiz helpers registered.
///
/// `format_criteria` and `add_quotes` are available both as functions and as
/// filters; `now()` formats the injected clock. Generic string helpers
/// (upper, lower, replace, join, length) and arithmetic come from the
/// engine's built-ins.
pub fn environment(clock: Arc<dyn Clock>) -> Environment<'static> {
    let mut env = Environment::new();
    // Templates render byte-for-byte; a trailing newline in the source must
    // survive into the output.
    env.set_keep_trailing_newline(true);
    env.add_function("format_criteria", format_criteria_helper);
    env.add_filter("format_criteria", format_criteria_helper);
    env.add_function("add_quotes", add_quotes_helper);
    env.add_filter("add_quotes", add_quotes_helper);
    env.add_function("now", move || {
        clock.now().format(TIMESTAMP_FORMAT).to_string()
    });
    env
}

fn format_criteria_helper(criteria: Option<ViaDeserialize<Criteria>>) -> String {
    criteria
        .map(|criteria| format_criteria(&criteria))
        .unwrap_or_default()
}

fn add_quotes_helper(text: &str) -> String {
    add_quotes_if_needed(text)
}

/// Render `source` with `items` bound to the record list.
#[instrument(skip_all, fields(records = records.len(), template_len = source.len()))]
pub fn render_template(
    records: &[QuizRecord],
    source: &str,
    clock: Arc<dyn Clock>,
) -> Result<String> {
    let env = environment(clock);
    let rendered = env
        .render_str(source, context! { items => records })
        .context("failed to render template")?;
    debug!(bytes = rendered.len(), "template rendering completed");
    Ok(rendered)
}
