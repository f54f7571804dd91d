pub(super) const ENV_HOST: &str = "FOLIO_HOST";
pub(super) const ENV_PORT: &str = "FOLIO_PORT";
pub(super) const ENV_DATA_ROOT: &str = "FOLIO_DATA_ROOT";
pub(super) const ENV_STATIC_ROOT: &str = "FOLIO_STATIC_ROOT";
pub(super) const ENV_SKIP_MALFORMED: &str = "FOLIO_SKIP_MALFORMED";
pub(super) const ENV_SITE_TITLE: &str = "FOLIO_SITE_TITLE";

#[must_use]
pub(super) fn read_non_empty(lookup: &dyn Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
pub(super) fn read_u16(lookup: &dyn Fn(&str) -> Option<String>, name: &str) -> Option<u16> {
    lookup(name).and_then(|raw| raw.trim().parse::<u16>().ok())
}

#[must_use]
pub(super) fn parse_bool(raw: Option<&str>) -> Option<bool> {
    match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
        Some("1" | "true" | "yes" | "on") => Some(true),
        Some("0" | "false" | "no" | "off") => Some(false),
        _ => None,
    }
}
