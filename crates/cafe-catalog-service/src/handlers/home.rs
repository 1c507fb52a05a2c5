//! The static landing page.

use axum::response::Html;

/// Serve the embedded landing page.
///
/// The page is a static asset compiled into the binary; there is no template
/// rendering.
pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
