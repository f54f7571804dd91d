//! Stylesheet and scripts compiled into the binary.

pub struct EmbeddedAsset {
    pub content_type: &'static str,
    pub body: &'static str,
}

pub const STYLE_CSS: EmbeddedAsset = EmbeddedAsset {
    content_type: "text/css; charset=utf-8",
    body: include_str!("assets/style.css"),
};

pub const MAIN_JS: EmbeddedAsset = EmbeddedAsset {
    content_type: "application/javascript; charset=utf-8",
    body: include_str!("assets/main.js"),
};

pub const CONTACT_JS: EmbeddedAsset = EmbeddedAsset {
    content_type: "application/javascript; charset=utf-8",
    body: include_str!("assets/contact.js"),
};

impl EmbeddedAsset {
    /// Quoted strong validator for the `ETag` header.
    #[must_use]
    pub fn etag(&self) -> String {
        format!("\"{}\"", blake3::hash(self.body.as_bytes()).to_hex())
    }
}

/// Content type for files under the images directory.
#[must_use]
pub fn image_content_type(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etag_is_stable_and_quoted() {
        let first = STYLE_CSS.etag();
        assert_eq!(first, STYLE_CSS.etag());
        assert!(first.starts_with('"') && first.ends_with('"'));
        assert_ne!(first, MAIN_JS.etag());
    }

    #[test]
    fn image_types_by_extension() {
        assert_eq!(image_content_type("me.JPG"), "image/jpeg");
        assert_eq!(image_content_type("projects/chart.svg"), "image/svg+xml");
        assert_eq!(image_content_type("README"), "application/octet-stream");
    }

    #[test]
    fn navigation_script_handles_scroll_and_outside_clicks() {
        for marker in ["behavior: 'smooth'", "'scrolled'", "section[id]", "menu.contains(event.target)"] {
            assert!(MAIN_JS.body.contains(marker), "{marker}");
        }
        assert!(STYLE_CSS.body.contains(".navbar.scrolled"));
    }
}
