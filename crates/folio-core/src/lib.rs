// Public fallible APIs in this crate share one concrete error contract (`FolioError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod config;
pub mod content;
pub mod error;
pub mod logos;
pub mod profile;
pub mod site;

pub use config::SiteConfig;
pub use content::{ContentRecord, MalformedPolicy, display_date, load_directory};
pub use error::{FolioError, Result};
pub use logos::{FALLBACK_LOGO_URL, LogoLookup, LogoResolver};
pub use profile::{Profile, load_profile};
pub use site::ContentStore;
