// src/config/cors.rs
// DOCUMENTATION: CORS middleware configuration
// PURPOSE: Build the actix-cors policy from the configured origin allowlist
//
// Allowlist entries:
// - "*"                   any origin, answered with a literal "*"
// - "*.example.com"       suffix match
// - "https://dev-*"       prefix match
// - "https://example.com" exact match

use actix_cors::Cors;
use actix_web::http::header::HeaderValue;

/// Preflight cache lifetime in seconds
const MAX_AGE_SECONDS: usize = 3600;

/// Build a read-only CORS policy
pub fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET"])
        .allow_any_header()
        .max_age(MAX_AGE_SECONDS);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin().send_wildcard();
    }

    let patterns = allowed_origins.to_vec();
    cors.allowed_origin_fn(move |origin: &HeaderValue, _req| {
        let origin = origin.to_str().unwrap_or("");
        patterns.iter().any(|pattern| origin_matches(pattern, origin))
    })
}

fn origin_matches(pattern: &str, origin: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix('*') {
        origin.ends_with(suffix)
    } else if let Some(prefix) = pattern.strip_suffix('*') {
        origin.starts_with(prefix)
    } else {
        origin == pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, test as actix_test, web, App, HttpResponse};

    async fn allow_origin_header(allowed: &[&str], origin: &str) -> Option<String> {
        let allowed: Vec<String> = allowed.iter().map(|s| s.to_string()).collect();
        let app = actix_test::init_service(
            App::new()
                .wrap(build_cors(&allowed))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, origin))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string())
    }

    #[actix_web::test]
    async fn test_star_allows_everything_with_wildcard() {
        let value = allow_origin_header(&["*"], "http://anything.local").await;
        assert_eq!(value.as_deref(), Some("*"));
    }

    #[actix_web::test]
    async fn test_exact_match() {
        let value =
            allow_origin_header(&["https://maps.example.org"], "https://maps.example.org").await;
        assert_eq!(value.as_deref(), Some("https://maps.example.org"));
    }

    #[test]
    fn test_origin_patterns() {
        assert!(origin_matches("*.example.com", "https://foo.example.com"));
        assert!(!origin_matches("*.example.com", "https://example.org"));
        assert!(origin_matches("https://dev-*", "https://dev-01.example.com"));
        assert!(!origin_matches("https://dev-*", "https://prod-01.example.com"));
        assert!(origin_matches("https://a.example", "https://a.example"));
        assert!(!origin_matches("https://a.example", "https://a.example.evil"));
    }
}
