//! Markdown rendering for assistant chat turns.

/// Render markdown to HTML, dropping any raw HTML in the source.
pub fn render_markdown_html(markdown: &str) -> String {
    use pulldown_cmark::{Event, Options, Parser, html};

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::render_markdown_html;

    #[test]
    fn renders_emphasis_and_lists() {
        let html = render_markdown_html("**Top pick**\n\n- quiet\n- cheap");
        assert!(html.contains("<strong>Top pick</strong>"));
        assert!(html.contains("<li>quiet</li>"));
    }

    #[test]
    fn strips_raw_html() {
        let html = render_markdown_html("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("hello"));
    }
}
