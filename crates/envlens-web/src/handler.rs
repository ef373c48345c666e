use axum::body::Body;
use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::response::Response;
use include_dir::{include_dir, Dir};
use tracing::debug;

// Embed the viewer assets at compile time
static ASSETS: Dir = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Fallback handler serving the embedded viewer page.
///
/// `/` and unknown paths resolve to `index.html`; everything else is looked
/// up in the embedded asset directory.
pub async fn serve_asset(req: Request) -> Response {
    let path = req.uri().path();

    // Remove leading slash
    let path = path.strip_prefix('/').unwrap_or(path);

    // Default to index.html for directory requests or root
    let path = if path.is_empty() || path.ends_with('/') {
        "index.html"
    } else {
        path
    };

    debug!("Attempting to serve embedded asset: {}", path);

    match ASSETS.get_file(path) {
        Some(file) => {
            let mime_type = mime_guess::from_path(path)
                .first_or_octet_stream()
                .to_string();

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime_type)
                .header(header::CACHE_CONTROL, "public, max-age=3600")
                .body(Body::from(file.contents()))
                .unwrap()
        }
        None => {
            // Unknown paths fall back to the viewer page
            if let Some(index) = ASSETS.get_file("index.html") {
                debug!("Asset not found, serving index.html: {}", path);
                Response::builder()
                    .status(StatusCode::OK)
                    .header(header::CONTENT_TYPE, "text/html")
                    .header(header::CACHE_CONTROL, "no-cache")
                    .body(Body::from(index.contents()))
                    .unwrap()
            } else {
                debug!("Asset not found and no index.html available: {}", path);
                Response::builder()
                    .status(StatusCode::NOT_FOUND)
                    .body(Body::from("404 Not Found"))
                    .unwrap()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router() -> Router {
        Router::new().fallback(serve_asset)
    }

    #[tokio::test]
    async fn root_serves_the_viewer_page() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = std::str::from_utf8(&bytes).unwrap();
        assert!(html.contains("Envlens"));
    }

    #[tokio::test]
    async fn scripts_are_served_with_their_mime_type() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/app.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.contains("javascript"));
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_the_page() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/no/such/path")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );
    }
}
