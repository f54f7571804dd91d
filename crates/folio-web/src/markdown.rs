//! Markdown for content descriptions and the profile bio, plus the URL rules
//! every content-supplied link and image goes through.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const IMAGES_PREFIX: &str = "/static/images/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    /// Anchors: http(s), `mailto:`, site paths and fragments.
    Link,
    /// Image sources: http(s), or a path under `/static/images`.
    Image,
}

/// The URL a browser should receive for `raw`, or `None` when it is not allowed.
///
/// Relative image paths are rooted at `/static/images/`. Image paths may not
/// climb out of that tree with `..` segments, encoded or not.
pub fn resolve_url(raw: &str, kind: UrlKind) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() || url.starts_with("//") || url.contains('\\') {
        return None;
    }

    if let Some(scheme) = scheme_of(url) {
        let allowed = match kind {
            UrlKind::Link => matches!(scheme.as_str(), "http" | "https" | "mailto"),
            UrlKind::Image => matches!(scheme.as_str(), "http" | "https"),
        };
        return allowed.then(|| url.to_string());
    }

    match kind {
        UrlKind::Link => Some(url.to_string()),
        UrlKind::Image => local_image_path(url),
    }
}

fn scheme_of(url: &str) -> Option<String> {
    let end = url.find([':', '/', '?', '#'])?;
    url[end..]
        .starts_with(':')
        .then(|| url[..end].to_ascii_lowercase())
}

fn local_image_path(url: &str) -> Option<String> {
    let path_end = url.find(['?', '#']).unwrap_or(url.len());
    if url[..path_end].split('/').any(is_parent_segment) {
        return None;
    }
    if url.starts_with('/') {
        return Some(url.to_string());
    }
    let relative = url.trim_start_matches("./");
    if relative.is_empty() || relative.starts_with(['?', '#']) {
        return None;
    }
    Some(format!("{IMAGES_PREFIX}{relative}"))
}

fn is_parent_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        ".." | ".%2e" | "%2e." | "%2e%2e"
    )
}

/// Render author markdown. Raw HTML comes out as text; links and images are
/// rewritten through [`resolve_url`].
pub fn render_markdown_html(content: &str) -> String {
    let events = Parser::new_ext(content, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
        .map(sanitize_event);
    let mut out = String::with_capacity(content.len() + content.len() / 2);
    html::push_html(&mut out, events);
    out
}

fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: rewrite(&dest_url, UrlKind::Link, "#"),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: rewrite(&dest_url, UrlKind::Image, ""),
            title,
            id,
        }),
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    }
}

fn rewrite(dest: &str, kind: UrlKind, rejected: &'static str) -> CowStr<'static> {
    resolve_url(dest, kind).map_or(CowStr::Borrowed(rejected), CowStr::from)
}
