//! Server-rendered page chrome shared by the dashboard pages.

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f8fafc; color: #0f172a; }
nav { display: flex; gap: 1rem; padding: 1rem 2rem; background: #111827; }
nav a { color: #e5e7eb; text-decoration: none; font-weight: 600; }
main { padding: 1rem 2rem; max-width: 960px; }
.heading h1 { margin-bottom: 0.25rem; }
.heading p { margin-top: 0; color: #64748b; }
form { display: grid; gap: 1rem; padding: 1rem; border: 1px solid #e2e8f0; border-radius: 0.5rem; background: #fff; }
label { font-weight: 600; }
input { padding: 0.5rem; border: 1px solid #cbd5e1; border-radius: 0.375rem; }
button { padding: 0.5rem 1rem; border: 0; border-radius: 0.375rem; background: #111827; color: #fff; cursor: pointer; }
button:disabled, input:disabled { opacity: 0.5; }
.description { color: #64748b; font-size: 0.875rem; }
.error { color: #dc2626; font-size: 0.875rem; }
.badge { font-size: 0.75rem; padding: 0.125rem 0.5rem; border-radius: 9999px; background: #e2e8f0; }
.badge.stored { background: #dcfce7; color: #166534; }
.empty { padding: 3rem; text-align: center; color: #64748b; }
.loader { padding: 2rem; text-align: center; background: #f1f5f9; border-radius: 0.5rem; }
video { width: 100%; aspect-ratio: 16 / 9; margin-top: 2rem; border-radius: 0.5rem; background: #000; }
"#;

pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<nav>
    <a href="/">Dashboard</a>
    <a href="/video">Video Generation</a>
    <a href="/settings">Settings</a>
</nav>
<main>
{body}
</main>
</body>
</html>"#,
        title = html_escape(title),
    )
}

pub fn heading(title: &str, description: &str) -> String {
    format!(
        r#"<div class="heading"><h1>{}</h1><p>{}</p></div>"#,
        html_escape(title),
        html_escape(description)
    )
}

pub fn empty(label: &str) -> String {
    format!(r#"<div class="empty">{}</div>"#, html_escape(label))
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            html_escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn layout_escapes_title_but_not_body() {
        let page = layout("<Settings>", "<form></form>");

        assert!(page.contains("<title>&lt;Settings&gt;</title>"));
        assert!(page.contains("<form></form>"));
        assert!(page.contains(r#"<a href="/settings">Settings</a>"#));
    }
}
