//! Server-side HTML rendering of the dashboard.
//!
//! Layout:
//! ```text
//! Zill Dashboard
//! ├── Prompt Zill          (form -> POST /thoughts)
//! ├── Thought of the Day   (text, "<tag> • <date>")
//! ├── Top 3 Tasks          ("<task> — <status>")
//! ├── This Week's Income   ("$<total>")
//! └── Ask Zill Copilot     (form -> POST /assistant, last reply)
//! ```

use super::DashboardState;

/// Render the full page for a state snapshot.
pub fn render_dashboard(state: &DashboardState) -> String {
    let mut out = String::new();
    out.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Zill Dashboard</title>\n</head>\n<body>\n<main class=\"dashboard\">\n\
         <h1>🧠 Zill Dashboard</h1>\n",
    );

    render_thought_form(&mut out, state);
    render_thoughts(&mut out, state);
    render_tasks(&mut out, state);
    render_income(&mut out, state);
    render_assistant(&mut out, state);

    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn render_thought_form(out: &mut String, state: &DashboardState) {
    out.push_str("<section id=\"prompt\">\n<h2>📝 Prompt Zill</h2>\n");
    out.push_str("<form method=\"post\" action=\"/thoughts\">\n");
    out.push_str(&format!(
        "<input name=\"text\" placeholder=\"Enter a new thought or goal...\" value=\"{}\">\n",
        escape(state.thought_input())
    ));
    out.push_str("<button type=\"submit\">Submit</button>\n</form>\n</section>\n");
}

fn render_thoughts(out: &mut String, state: &DashboardState) {
    out.push_str("<section id=\"thoughts\">\n<h2>🧠 Thought of the Day</h2>\n");
    for thought in state.thoughts() {
        out.push_str(&format!(
            "<div class=\"thought\">\n<div class=\"thought-text\">{}</div>\n\
             <div class=\"thought-meta\">{}</div>\n</div>\n",
            escape(&thought.text),
            escape(&thought.caption())
        ));
    }
    out.push_str("</section>\n");
}

fn render_tasks(out: &mut String, state: &DashboardState) {
    out.push_str("<section id=\"tasks\">\n<h2>✅ Top 3 Tasks</h2>\n<ul>\n");
    for task in state.tasks() {
        out.push_str(&format!(
            "<li class=\"task\">{} — <span class=\"task-status\">{}</span></li>\n",
            escape(&task.description),
            escape(&task.status)
        ));
    }
    out.push_str("</ul>\n</section>\n");
}

fn render_income(out: &mut String, state: &DashboardState) {
    out.push_str(&format!(
        "<section id=\"income\">\n<h2>💰 This Week's Income</h2>\n\
         <div class=\"income-total\">{}</div>\n</section>\n",
        escape(&state.income().display())
    ));
}

fn render_assistant(out: &mut String, state: &DashboardState) {
    out.push_str("<section id=\"assistant\">\n<h2>🤖 Ask Zill Copilot</h2>\n");
    out.push_str("<form method=\"post\" action=\"/assistant\">\n");
    out.push_str(&format!(
        "<input name=\"prompt\" placeholder=\"e.g. Help me earn $1K/week or Plan tomorrow\" value=\"{}\">\n",
        escape(state.assistant_input())
    ));
    out.push_str("<button type=\"submit\">Ask Zill</button>\n</form>\n");
    if let Some(reply) = state.assistant_reply().filter(|r| !r.is_empty()) {
        out.push_str(&format!(
            "<div class=\"assistant-reply\">{}</div>\n",
            escape(reply)
        ));
    }
    out.push_str("</section>\n");
}

/// Escape text for use in element content and double-quoted attributes.
fn escape(text: &str) -> String {
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
