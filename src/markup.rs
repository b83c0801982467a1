//! Handling of markup that comes from remote services.
//!
//! Remote text is shown as plain text unless `config::TRUST_REMOTE_MARKUP`
//! is switched on.

use scraper::{ElementRef, Html as Document, Node};
use yew::prelude::*;

use crate::config;

/// Projects `markup` to plain text. Line breaks and the ends of block
/// elements become newlines, entities are decoded by the parser and script
/// or style bodies are dropped.
pub fn to_plain_text(markup: &str) -> String {
    let fragment = Document::parse_fragment(markup);
    let mut text = String::with_capacity(markup.len());
    collect_text(fragment.root_element(), &mut text);
    collapse_blank_lines(&text)
}

fn collect_text(element: ElementRef<'_>, text: &mut String) {
    let name = element.value().name();
    match name {
        "br" => {
            text.push('\n');
            return;
        }
        "script" | "style" => return,
        _ => {}
    }

    for child in element.children() {
        match child.value() {
            Node::Text(fragment) => text.push_str(fragment),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text(child, text);
                }
            }
            _ => {}
        }
    }

    if matches!(name, "p" | "li" | "div") {
        text.push('\n');
    }
}

fn collapse_blank_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() && lines.last().map_or(true, |last| last.trim().is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().map_or(false, |last| last.trim().is_empty()) {
        lines.pop();
    }
    lines.join("\n").trim().to_string()
}

/// `raw` if it is a `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` colour, safe to
/// place inside a `style` attribute.
pub fn css_color(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let hex = raw.strip_prefix('#')?;
    let valid = matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    valid.then_some(raw)
}

/// `raw` if it is an http(s) URL that cannot break out of `url('...')`.
pub fn css_url(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let scheme_ok = raw.starts_with("https://") || raw.starts_with("http://");
    let breaks_out = raw
        .chars()
        .any(|c| matches!(c, '\'' | '"' | '(' | ')' | ';' | '\\') || c.is_whitespace() || c.is_control());
    (scheme_ok && !breaks_out).then_some(raw)
}

/// Inline `background-image` declaration, or nothing when `url` is rejected.
pub fn background_image_style(url: &str) -> Option<String> {
    match css_url(url) {
        Some(url) => Some(format!("background-image: url('{}');", url)),
        None => {
            log::warn!("Refusing image url in style attribute: {}", url);
            None
        }
    }
}

/// Renders a remote description. Escaped text by default; raw markup only
/// when the remote source is configured as trusted.
pub fn render_remote_description(markup: &str) -> Html {
    if config::TRUST_REMOTE_MARKUP {
        if let Some(node) = raw_markup_node(markup) {
            return Html::VRef(node);
        }
    }

    html! {
        <div class="remote-description">
            { for to_plain_text(markup).split("\n").map(|line| html! { <p>{ line.to_string() }</p> }) }
        </div>
    }
}

fn raw_markup_node(markup: &str) -> Option<web_sys::Node> {
    let document = web_sys::window()?.document()?;
    let container = document.create_element("div").ok()?;
    container.set_class_name("remote-description");
    container.set_inner_html(markup);
    Some(container.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_breaks_lines() {
        let markup = "Gon sets out to find his father.<br><br>\n<i>(Source: Wikipedia)</i>";
        assert_eq!(to_plain_text(markup), "Gon sets out to find his father.\n\n(Source: Wikipedia)");
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(to_plain_text("Tom &amp; Jerry &lt;3 &#39;hi&#x27;"), "Tom & Jerry <3 'hi'");
        assert_eq!(to_plain_text("fish & chips"), "fish & chips");
        assert_eq!(to_plain_text("&unknown; stays"), "&unknown; stays");
    }

    #[test]
    fn test_script_tags_do_not_survive() {
        let text = to_plain_text("<script>alert(1)</script>Plot");
        assert!(!text.contains('<'));
        assert_eq!(text, "Plot");
    }

    #[test]
    fn test_less_than_in_prose_is_text() {
        assert_eq!(to_plain_text("Score: 1<2 and 3>2 wins"), "Score: 1<2 and 3>2 wins");
    }

    #[test]
    fn test_quoted_attribute_does_not_end_tag() {
        assert_eq!(to_plain_text(r#"<a title="x>y">Link</a>"#), "Link");
    }

    #[test]
    fn test_paragraphs_become_lines() {
        assert_eq!(to_plain_text("<p>First</p><p>Second</p>"), "First\nSecond");
        assert_eq!(to_plain_text("<ul><li>One</li><li>Two</li></ul>"), "One\nTwo");
    }

    #[test]
    fn test_unterminated_tag_is_kept() {
        assert_eq!(to_plain_text("a < b"), "a < b");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(to_plain_text("  A quiet story.  "), "A quiet story.");
        assert_eq!(to_plain_text(""), "");
    }

    #[test]
    fn test_css_color_accepts_hex_only() {
        assert_eq!(css_color("#f1d65d"), Some("#f1d65d"));
        assert_eq!(css_color("#FFF"), Some("#FFF"));
        assert_eq!(css_color("#11223344"), Some("#11223344"));
        assert_eq!(css_color("red; background:url(x)"), None);
        assert_eq!(css_color("#12345"), None);
        assert_eq!(css_color("#zzzzzz"), None);
        assert_eq!(css_color("f1d65d"), None);
    }

    #[test]
    fn test_css_url_rejects_breakouts() {
        let banner = "https://s4.anilist.co/file/anilistcdn/media/anime/banner/11061.jpg";
        assert_eq!(css_url(banner), Some(banner));
        assert_eq!(css_url("https://x.test/a.png'); color: red; ('"), None);
        assert_eq!(css_url("https://x.test/a.png);"), None);
        assert_eq!(css_url("javascript:alert(1)"), None);
        assert_eq!(
            background_image_style(banner).as_deref(),
            Some("background-image: url('https://s4.anilist.co/file/anilistcdn/media/anime/banner/11061.jpg');")
        );
        assert!(background_image_style("https://x.test/a;b.png").is_none());
    }
}
