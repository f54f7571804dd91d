use std::fs;
use std::path::{Component, Path as FsPath};

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
};
use serde_json::Value;

use folio_core::{FolioError, Result};

use crate::WebState;
use crate::assets::{CONTACT_JS, EmbeddedAsset, MAIN_JS, STYLE_CSS, image_content_type};
use crate::dto::ContactAck;
use crate::error::{asset_error_response, page_error_response};
use crate::render;

pub async fn index(State(state): State<WebState>) -> Response {
    let site_title = state.site_title();
    let loaded = state.store.profile().and_then(|profile| {
        Ok((
            profile,
            state.store.projects()?,
            state.store.certificates()?,
        ))
    });
    match loaded {
        Ok((profile, projects, certificates)) => Html(render::index_page(
            site_title,
            &profile,
            &projects,
            &certificates,
            state.logos.as_ref(),
        ))
        .into_response(),
        Err(err) => page_error_response(err, "page.index", site_title),
    }
}

pub async fn about(State(state): State<WebState>) -> Html<String> {
    Html(render::about_page(state.site_title()))
}

pub async fn projects(State(state): State<WebState>) -> Response {
    match state.store.projects() {
        Ok(projects) => Html(render::projects_page(
            state.site_title(),
            &projects,
            state.logos.as_ref(),
        ))
        .into_response(),
        Err(err) => page_error_response(err, "page.projects", state.site_title()),
    }
}

pub async fn certificates(State(state): State<WebState>) -> Response {
    match state.store.certificates() {
        Ok(certificates) => Html(render::certificates_page(
            state.site_title(),
            &certificates,
            state.logos.as_ref(),
        ))
        .into_response(),
        Err(err) => page_error_response(err, "page.certificates", state.site_title()),
    }
}

pub async fn contact(State(state): State<WebState>) -> Html<String> {
    Html(render::contact_page(state.site_title()))
}

/// Contact form submissions are acknowledged and dropped.
pub async fn send_message(Json(payload): Json<Value>) -> Json<ContactAck> {
    let field_count = payload.as_object().map_or(0, serde_json::Map::len);
    tracing::info!(field_count, "contact message received");
    Json(ContactAck::received())
}

pub async fn style_css(headers: HeaderMap) -> Response {
    embedded_asset(&STYLE_CSS, &headers)
}

pub async fn main_js(headers: HeaderMap) -> Response {
    embedded_asset(&MAIN_JS, &headers)
}

pub async fn contact_js(headers: HeaderMap) -> Response {
    embedded_asset(&CONTACT_JS, &headers)
}

pub async fn image(State(state): State<WebState>, Path(path): Path<String>) -> Response {
    match read_image(&state.store.config().images_dir(), &path) {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, image_content_type(&path))],
            bytes,
        )
            .into_response(),
        Err(err) => asset_error_response(err, "asset.image", Some(path)),
    }
}

pub async fn not_found(State(state): State<WebState>, uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(render::not_found_page(state.site_title(), uri.path())),
    )
        .into_response()
}

fn embedded_asset(asset: &EmbeddedAsset, headers: &HeaderMap) -> Response {
    let etag = asset.etag();
    let fresh = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.split(',').any(|tag| tag.trim() == etag));
    if fresh {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response();
    }
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, asset.content_type.to_string()),
            (header::ETAG, etag),
        ],
        asset.body,
    )
        .into_response()
}

/// Read `relative` from `images_root`, refusing anything that resolves outside it.
fn read_image(images_root: &FsPath, relative: &str) -> Result<Vec<u8>> {
    let relative_path = FsPath::new(relative);
    if relative.is_empty()
        || !relative_path
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
    {
        return Err(FolioError::PathTraversal(relative.to_string()));
    }

    let candidate = images_root.join(relative_path);
    if !candidate.is_file() {
        return Err(FolioError::NotFound(relative.to_string()));
    }
    let root = images_root.canonicalize()?;
    let resolved = candidate.canonicalize()?;
    if !resolved.starts_with(&root) {
        return Err(FolioError::PathTraversal(relative.to_string()));
    }
    Ok(fs::read(resolved)?)
}
