//! HTML building blocks shared by every page.
use std::fmt::Write as _;

use super::content::APP_NAME;

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Site-wide stylesheet, inlined so pages work without the public directory
const STYLE: &str = r"
:root { --primary: #8B5CF6; --secondary: #EC4899; --bg: #0b0b12; --fg: #f4f4f8; --muted: #9a9ab0; --card: #16161f; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: var(--bg); color: var(--fg); }
a { color: inherit; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
.navbar { display: flex; align-items: center; justify-content: space-between; padding: 1rem 1.5rem; }
.navbar nav a { margin-right: 1.5rem; text-decoration: none; color: var(--muted); }
.btn { display: inline-block; padding: .6rem 1.2rem; border-radius: .6rem; border: 0; background: linear-gradient(90deg, var(--primary), var(--secondary)); color: #fff; text-decoration: none; cursor: pointer; }
.btn[aria-disabled=true] { background: #2a2a36; color: var(--muted); cursor: not-allowed; }
section { padding: 4rem 0; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.5rem; }
.card { background: var(--card); border-radius: 1rem; padding: 1.5rem; }
.muted { color: var(--muted); }
.error { color: #EF4444; }
.stat-value { font-size: 1.8rem; font-weight: 700; }
.chart { width: 100%; height: auto; color: var(--muted); }
.bars { list-style: none; padding: 0; }
.bars li { display: grid; grid-template-columns: 10rem 1fr 9rem; gap: .75rem; align-items: center; margin: .4rem 0; }
.bar-track { background: #24242f; border-radius: 999px; height: .6rem; overflow: hidden; }
.bar-fill { display: block; height: 100%; }
.layout { display: grid; grid-template-columns: 14rem 1fr; min-height: 100vh; }
.sidebar { background: var(--card); padding: 1.5rem; }
.sidebar a { display: block; padding: .5rem 0; text-decoration: none; }
.sidebar a[aria-current=page] { color: var(--primary); font-weight: 600; }
.tabs a { margin-right: 1rem; }
.tabs a[aria-selected=true] { color: var(--primary); font-weight: 600; }
.avatar { width: 2rem; height: 2rem; border-radius: 50%; display: inline-flex; align-items: center; justify-content: center; background: var(--primary); }
";

/// Wrap `body` into a complete HTML document.
#[must_use]
pub fn document(title: &str, description: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + STYLE.len() + 512);
    let page_title = if title.is_empty() {
        APP_NAME.to_owned()
    } else {
        format!("{title} | {APP_NAME}")
    };
    let _ = write!(
        html,
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{}</title><meta name="description" content="{}"><link rel="icon" href="/images/icon.png"><style>{STYLE}</style></head><body>{body}</body></html>"#,
        escape(&page_title),
        escape(description),
    );
    html
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_document_expect_title_and_body() {
        let cut = document("Sign in", "desc", "<main>hi</main>");
        assert!(cut.starts_with("<!DOCTYPE html>"));
        assert!(cut.contains("<title>Sign in | Uwumi</title>"));
        assert!(cut.contains("<main>hi</main>"));
    }
}
