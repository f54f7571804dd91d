use std::fmt::Write as _;

use folio_core::{ContentRecord, LogoLookup, Profile, display_date};

use super::{NavItem, escape, image_src, layout, safe_href, tech_badges};
use crate::markdown::render_markdown_html;

const CONTACT_SCRIPT: &str = "/static/js/contact.js";

pub fn index_page(
    site_title: &str,
    profile: &Profile,
    projects: &[ContentRecord],
    certificates: &[ContentRecord],
    logos: &dyn LogoLookup,
) -> String {
    let mut body = hero_section(profile);
    let _ = write!(
        body,
        "<section id=\"about\" class=\"section about-section\"><h2>About Me</h2><div class=\"bio\">{}</div>{}</section>",
        render_markdown_html(profile.field("bio").unwrap_or_default()),
        contact_details(profile),
    );
    let _ = write!(
        body,
        "<section id=\"projects\" class=\"section\"><h2>Projects</h2>{}</section>",
        project_grid(projects, logos),
    );
    let _ = write!(
        body,
        "<section id=\"certificates\" class=\"section\"><h2>Certificates</h2>{}</section>",
        certificate_grid(certificates, logos),
    );
    body.push_str(
        "<section id=\"contact\" class=\"section contact-cta\"><h2>Get In Touch</h2>\
<a class=\"btn btn-primary\" href=\"/contact\">Send a message</a></section>",
    );
    layout(site_title, "", NavItem::Home, &body, &[])
}

pub fn about_page(site_title: &str) -> String {
    let body = "<section class=\"section page-header\"><h1>About</h1>\
<p>A look at the background, skills and interests behind this portfolio.</p>\
<p>Browse the <a href=\"/projects\">projects</a> and <a href=\"/certificates\">certificates</a>, \
or <a href=\"/contact\">get in touch</a>.</p></section>";
    layout(site_title, "About", NavItem::About, body, &[])
}

pub fn projects_page(site_title: &str, projects: &[ContentRecord], logos: &dyn LogoLookup) -> String {
    let body = format!(
        "<section class=\"section\"><h1>Projects</h1>{}</section>",
        project_grid(projects, logos)
    );
    layout(site_title, "Projects", NavItem::Projects, &body, &[])
}

pub fn certificates_page(
    site_title: &str,
    certificates: &[ContentRecord],
    logos: &dyn LogoLookup,
) -> String {
    let body = format!(
        "<section class=\"section\"><h1>Certificates</h1>{}</section>",
        certificate_grid(certificates, logos)
    );
    layout(site_title, "Certificates", NavItem::Certificates, &body, &[])
}

pub fn contact_page(site_title: &str) -> String {
    let body = "<section class=\"section\"><h1>Contact</h1>\
<form id=\"contactForm\" class=\"contact-form\">\
<label for=\"name\">Name</label><input id=\"name\" name=\"name\" type=\"text\" required>\
<label for=\"email\">Email</label><input id=\"email\" name=\"email\" type=\"email\" required>\
<label for=\"message\">Message</label><textarea id=\"message\" name=\"message\" rows=\"6\" required></textarea>\
<button class=\"btn btn-primary\" type=\"submit\">Send Message</button></form></section>";
    layout(site_title, "Contact", NavItem::Contact, body, &[CONTACT_SCRIPT])
}

pub fn error_page(site_title: &str, message: &str, trace_id: &str) -> String {
    let body = format!(
        "<section class=\"section error-page\"><h1>Something went wrong</h1><p>{}</p>\
<p class=\"trace-id\">Reference: <code>{}</code></p></section>",
        escape(message),
        escape(trace_id)
    );
    layout(site_title, "Error", NavItem::None, &body, &[])
}

pub fn not_found_page(site_title: &str, path: &str) -> String {
    let body = format!(
        "<section class=\"section error-page\"><h1>Page not found</h1>\
<p>Nothing lives at <code>{}</code>.</p><a class=\"btn\" href=\"/\">Back home</a></section>",
        escape(path)
    );
    layout(site_title, "Not Found", NavItem::None, &body, &[])
}

fn hero_section(profile: &Profile) -> String {
    let mut out = String::from("<section id=\"home\" class=\"hero-section\">");
    if let Some(src) = profile.field("image").and_then(image_src) {
        let _ = write!(
            out,
            "<img class=\"hero-image\" src=\"{src}\" alt=\"{}\">",
            escape(profile.name())
        );
    }
    let _ = write!(
        out,
        "<h1 class=\"hero-title\">{}</h1>",
        escape(profile.name())
    );
    for (key, class) in [("title", "hero-subtitle"), ("tagline", "hero-tagline")] {
        if let Some(text) = profile.field(key).filter(|text| !text.is_empty()) {
            let _ = write!(out, "<p class=\"{class}\">{}</p>", escape(text));
        }
    }
    out.push_str("<div class=\"hero-links\">");
    for (key, label) in [("github", "GitHub"), ("linkedin", "LinkedIn")] {
        if let Some(href) = profile.field(key).and_then(safe_href) {
            let _ = write!(
                out,
                "<a class=\"btn\" href=\"{href}\" target=\"_blank\" rel=\"noopener\">{label}</a>"
            );
        }
    }
    out.push_str("</div></section>");
    out
}

fn contact_details(profile: &Profile) -> String {
    let mut out = String::from("<ul class=\"contact-details\">");
    if let Some(email) = profile.field("email").filter(|email| !email.is_empty()) {
        let label = escape(email);
        let _ = write!(out, "<li><a href=\"mailto:{label}\">{label}</a></li>");
    }
    for key in ["phone", "location"] {
        if let Some(text) = profile.field(key).filter(|text| !text.is_empty()) {
            let _ = write!(out, "<li>{}</li>", escape(text));
        }
    }
    out.push_str("</ul>");
    out
}

fn project_grid(projects: &[ContentRecord], logos: &dyn LogoLookup) -> String {
    if projects.is_empty() {
        return "<p class=\"empty-state\">No projects yet.</p>".to_string();
    }
    let mut out = String::from("<div class=\"card-grid\">");
    for project in projects {
        out.push_str("<article class=\"project-card\">");
        if let Some(src) = project.text("image").and_then(image_src) {
            let _ = write!(
                out,
                "<img class=\"card-image\" src=\"{src}\" alt=\"\" loading=\"lazy\">"
            );
        }
        card_heading(&mut out, project, "title");
        if let Some(description) = project.text("description") {
            let _ = write!(
                out,
                "<div class=\"card-body\">{}</div>",
                render_markdown_html(description)
            );
        }
        out.push_str(&tech_badges(&project.technologies(), logos));
        out.push_str("<div class=\"card-links\">");
        for (key, label) in [("github", "Code"), ("demo", "Live Demo"), ("link", "View")] {
            if let Some(href) = project.text(key).and_then(safe_href) {
                let _ = write!(
                    out,
                    "<a class=\"project-link\" href=\"{href}\" target=\"_blank\" rel=\"noopener\">{label}</a>"
                );
            }
        }
        out.push_str("</div></article>");
    }
    out.push_str("</div>");
    out
}

fn certificate_grid(certificates: &[ContentRecord], logos: &dyn LogoLookup) -> String {
    if certificates.is_empty() {
        return "<p class=\"empty-state\">No certificates yet.</p>".to_string();
    }
    let mut out = String::from("<div class=\"card-grid\">");
    for certificate in certificates {
        out.push_str("<article class=\"certificate-card\">");
        if let Some(src) = certificate.text("image").and_then(image_src) {
            let _ = write!(
                out,
                "<img class=\"card-image\" src=\"{src}\" alt=\"\" loading=\"lazy\">"
            );
        }
        let title_key = if certificate.text("title").is_some() { "title" } else { "name" };
        card_heading(&mut out, certificate, title_key);
        if let Some(issuer) = certificate.text("issuer") {
            let _ = write!(out, "<p class=\"issuer\">{}</p>", escape(issuer));
        }
        if let Some(description) = certificate.text("description") {
            let _ = write!(
                out,
                "<div class=\"card-body\">{}</div>",
                render_markdown_html(description)
            );
        }
        out.push_str(&tech_badges(&certificate.technologies(), logos));
        let link = certificate
            .text("credential_url")
            .or_else(|| certificate.text("link"));
        if let Some(href) = link.and_then(safe_href) {
            let _ = write!(
                out,
                "<a class=\"cert-link\" href=\"{href}\" target=\"_blank\" rel=\"noopener\">View Credential</a>"
            );
        }
        out.push_str("</article>");
    }
    out.push_str("</div>");
    out
}

fn card_heading(out: &mut String, record: &ContentRecord, title_key: &str) {
    let _ = write!(
        out,
        "<h3>{}</h3>",
        escape(record.text(title_key).unwrap_or("Untitled"))
    );
    if !record.date().is_empty() {
        let _ = write!(
            out,
            "<time datetime=\"{}\">{}</time>",
            escape(record.date()),
            escape(&display_date(record.date()))
        );
    }
}
