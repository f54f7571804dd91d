//! HTML page rendering.
//!
//! Pages are assembled as strings. Everything that comes from content files
//! passes through [`escape`] or the sanitising markdown renderer.

use std::fmt::Write as _;

use folio_core::LogoLookup;

use crate::markdown::{UrlKind, resolve_url};

mod pages;

pub use pages::{
    about_page, certificates_page, contact_page, error_page, index_page, not_found_page,
    projects_page,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    About,
    Projects,
    Certificates,
    Contact,
    None,
}

const NAV: [(NavItem, &str, &str); 5] = [
    (NavItem::Home, "/", "Home"),
    (NavItem::About, "/about", "About"),
    (NavItem::Projects, "/projects", "Projects"),
    (NavItem::Certificates, "/certificates", "Certificates"),
    (NavItem::Contact, "/contact", "Contact"),
];

pub(crate) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// A content-supplied link, escaped for an attribute, or `None` when not allowed.
pub(crate) fn safe_href(raw: &str) -> Option<String> {
    resolve_url(raw, UrlKind::Link).map(|url| escape(&url))
}

/// A content-supplied image source, escaped for an attribute.
pub(crate) fn image_src(raw: &str) -> Option<String> {
    resolve_url(raw, UrlKind::Image).map(|url| escape(&url))
}

pub(crate) fn tech_badges(names: &[&str], logos: &dyn LogoLookup) -> String {
    if names.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ul class=\"tech-list\">");
    for name in names {
        let label = escape(name);
        let _ = write!(
            out,
            "<li class=\"tech-badge\"><img src=\"{}\" alt=\"{label}\" loading=\"lazy\"><span>{label}</span></li>",
            escape(logos.logo_url(name)),
        );
    }
    out.push_str("</ul>");
    out
}

pub(crate) fn layout(site_title: &str, page_title: &str, active: NavItem, body: &str, scripts: &[&str]) -> String {
    let site = escape(site_title);
    let mut nav = String::new();
    for (item, href, label) in NAV {
        let class = if item == active { "nav-link active" } else { "nav-link" };
        let _ = write!(nav, "<li><a class=\"{class}\" href=\"{href}\">{label}</a></li>");
    }
    let mut script_tags = String::from("<script src=\"/static/js/main.js\" defer></script>");
    for script in scripts {
        let _ = write!(script_tags, "<script src=\"{script}\" defer></script>");
    }
    let title = if page_title.is_empty() {
        site.clone()
    } else {
        format!("{} | {site}", escape(page_title))
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title}</title>\n<link rel=\"stylesheet\" href=\"/static/css/style.css\">\n</head>\n<body>\n\
<nav class=\"navbar\"><a class=\"nav-brand\" href=\"/\">{site}</a>\
<button class=\"nav-toggle\" id=\"navToggle\" aria-label=\"Toggle navigation\">&#9776;</button>\
<ul class=\"nav-menu\" id=\"navMenu\">{nav}</ul></nav>\n<main>\n{body}\n</main>\n\
<footer class=\"footer\"><p>&copy; {site}</p></footer>\n{script_tags}\n</body>\n</html>\n"
    )
}
