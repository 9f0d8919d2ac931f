//! Server-rendered HTML for the list and failure pages.

use std::fmt::Write;

use todo_core::TodoItem;

use crate::controller::ListView;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Todo</title>
</head>
<body>
"#;

const FOOT: &str = "</body>\n</html>\n";

pub fn render_list(view: &ListView) -> String {
    let mut html = String::from(HEAD);
    html.push_str("<h1>Todo</h1>\n");

    html.push_str(
        r#"<form method="get" action="/">
<input type="hidden" name="action" value="create">
<input type="text" name="title" placeholder="What needs doing?">
<button type="submit">Add</button>
</form>
"#,
    );

    if let Some(error) = &view.error {
        let _ = writeln!(html, r#"<p class="error">{}</p>"#, escape(error));
    }

    if view.items.is_empty() {
        html.push_str("<p>Nothing to do.</p>\n");
    } else {
        html.push_str("<ul>\n");
        for item in &view.items {
            render_item(&mut html, item);
        }
        html.push_str("</ul>\n");
    }

    html.push_str(FOOT);
    html
}

fn render_item(html: &mut String, item: &TodoItem) {
    let (class, mark) = if item.is_done {
        ("done", "[x]")
    } else {
        ("open", "[ ]")
    };
    let _ = writeln!(
        html,
        r#"<li class="{class}">{mark} {title} <a href="/?action=toggle&amp;id={id}">toggle</a> <a href="/?action=delete&amp;id={id}">delete</a></li>"#,
        title = escape(&item.title),
        id = item.id,
    );
}

pub fn render_failure() -> String {
    let mut html = String::from(HEAD);
    html.push_str("<h1>Error</h1>\n");
    html.push_str("<p>An error occurred while processing your request.</p>\n");
    html.push_str(r#"<p><a href="/">Back to the list</a></p>"#);
    html.push('\n');
    html.push_str(FOOT);
    html
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
