//! Server-rendered HTML for the planning page.

use waypoint_core::{
    display::{LocalDateTime, ShortDateTime},
    Decision, Notice, PageView, EXAMPLE_TASKS,
};

/// Characters of the task shown in a collapsed history entry.
const HISTORY_PREVIEW_CHARS: usize = 35;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;display:flex;min-height:100vh;color:#1f2937}\
aside{width:20rem;background:#f3f4f6;padding:1rem;overflow-y:auto}\
main{flex:1;padding:2rem;max-width:48rem}\
.entry{display:flex;gap:.5rem;align-items:flex-start;margin-bottom:.5rem}\
.entry details{flex:1}\
.entry button{background:none;border:none;cursor:pointer;font-size:1.1rem}\
.examples form{display:inline-block;margin-right:.5rem}\
.notice{padding:.75rem;border-radius:.375rem;margin:1rem 0}\
.notice.success{background:#dcfce7}\
.notice.warning{background:#fef9c3}\
.notice.error{background:#fee2e2}\
input[name=task]{width:70%;padding:.5rem}\
footer{margin-top:3rem;color:#6b7280;font-size:.875rem}";

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the whole page for `view`.
pub fn render_page(view: &PageView, model: &str) -> String {
    let current_id = view.state.current.as_ref().map(|d| d.id);

    format!(
        "<!DOCTYPE html>\
<html><head><meta charset=\"utf-8\"><title>Waypoint AI Agent</title><style>{STYLE}</style></head><body>\
<aside><h2>Execution History</h2>{history}</aside>\
<main><h1>Waypoint Stateful AI Agent</h1>\
<section class=\"examples\"><h3>Quick Test Scenarios</h3>{examples}</section>\
<form method=\"post\" action=\"/tasks\">\
<input name=\"task\" placeholder=\"Enter your task\" autofocus>{hidden}\
<button type=\"submit\">Plan</button></form>\
{notice}{current}\
<footer>Powered by Groq {model}</footer></main>\
</body></html>",
        history = render_history(&view.history, current_id),
        examples = render_examples(current_id),
        hidden = current_field(current_id),
        notice = view.state.notice.as_ref().map(render_notice).unwrap_or_default(),
        current = view
            .state
            .current
            .as_ref()
            .map(render_current)
            .unwrap_or_default(),
        model = escape_html(model),
    )
}

/// Hidden form field carrying the current decision between requests.
fn current_field(current_id: Option<u64>) -> String {
    current_id
        .map(|id| format!("<input type=\"hidden\" name=\"current\" value=\"{id}\">"))
        .unwrap_or_default()
}

fn render_examples(current_id: Option<u64>) -> String {
    EXAMPLE_TASKS
        .iter()
        .enumerate()
        .map(|(index, example)| {
            format!(
                "<form method=\"post\" action=\"/examples/{index}\">{hidden}\
<button type=\"submit\" title=\"{task}\">{label}</button></form>",
                hidden = current_field(current_id),
                task = escape_html(example.task),
                label = escape_html(example.label),
            )
        })
        .collect()
}

fn render_notice(notice: &Notice) -> String {
    format!(
        "<div class=\"notice {}\">{}</div>",
        notice.level(),
        escape_html(notice.message())
    )
}

fn render_steps(steps: &[String]) -> String {
    let items: String = steps
        .iter()
        .map(|step| format!("<li>{}</li>", escape_html(step)))
        .collect();
    format!("<ol>{items}</ol>")
}

fn render_current(decision: &Decision) -> String {
    format!(
        "<section class=\"current\"><h3>Execution Plan</h3>\
<p><strong>Task:</strong> {task}</p>{steps}\
<details open><summary>{summary}</summary>\
<p><strong>Why:</strong> {reasoning}</p>\
<p><strong>When:</strong> {when}</p></details></section>",
        task = escape_html(&decision.task_description),
        steps = render_steps(&decision.plan_steps),
        summary = escape_html(&decision.summary()),
        reasoning = escape_html(&decision.reasoning()),
        when = LocalDateTime(&decision.created_at),
    )
}

fn render_history(history: &[Decision], current_id: Option<u64>) -> String {
    if history.is_empty() {
        return "<p>No decisions yet.</p>".to_string();
    }

    history
        .iter()
        .map(|decision| {
            format!(
                "<div class=\"entry\" id=\"decision-{id}\">\
<details><summary>\u{23F0} {when} | {preview}</summary>\
<p><strong>{summary}</strong></p><p>{reasoning}</p>{steps}</details>\
<form method=\"post\" action=\"/decisions/{id}/delete\">{hidden}\
<button type=\"submit\" title=\"Delete entry\">\u{22EE}</button></form></div>",
                id = decision.id,
                when = ShortDateTime::local(&decision.created_at),
                preview = escape_html(&decision.task_preview(HISTORY_PREVIEW_CHARS)),
                summary = escape_html(&decision.summary()),
                reasoning = escape_html(&decision.reasoning()),
                steps = render_steps(&decision.plan_steps),
                hidden = current_field(current_id),
            )
        })
        .collect()
}
