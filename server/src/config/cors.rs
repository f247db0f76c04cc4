use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

const PREFLIGHT_MAX_AGE_SECS: u64 = 86400;

/// The form posts JSON and follows a cookie-carrying redirect, so only GET
/// and POST are allowed and credentials are on.
pub fn create_cors_layer(allowed_origins: &str) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(parse_origins(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers([header::CONTENT_LENGTH, header::CONTENT_TYPE, header::LOCATION])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(PREFLIGHT_MAX_AGE_SECS))
}

fn valid_origins(origins: &str) -> Vec<HeaderValue> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => {
                tracing::debug!("CORS: Allowing origin: {}", origin);
                Some(value)
            }
            Err(e) => {
                tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                None
            }
        })
        .collect()
}

// Credentials cannot be combined with a wildcard origin, so an empty list
// mirrors the request origin instead.
fn parse_origins(origins: &str) -> AllowOrigin {
    let origins = valid_origins(origins);

    if origins.is_empty() {
        tracing::warn!("CORS: No valid origins configured, mirroring request origin");
        AllowOrigin::mirror_request()
    } else {
        tracing::info!("CORS: Configured with {} allowed origin(s)", origins.len());
        AllowOrigin::list(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ALLOWED_ORIGINS;

    #[test]
    fn test_create_cors_layer() {
        let _layer = create_cors_layer(DEFAULT_ALLOWED_ORIGINS);
        let _empty = create_cors_layer("");
    }

    #[test]
    fn test_valid_origins_skips_blanks_and_garbage() {
        let origins = valid_origins(" http://a.test , ,bad\norigin,http://b.test");
        assert_eq!(
            origins,
            vec![
                HeaderValue::from_static("http://a.test"),
                HeaderValue::from_static("http://b.test"),
            ]
        );
    }

    #[test]
    fn test_default_origins_are_valid() {
        assert_eq!(valid_origins(DEFAULT_ALLOWED_ORIGINS).len(), 2);
    }
}
