use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::header::{
    CONTENT_SECURITY_POLICY, REFERRER_POLICY, STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS,
    X_FRAME_OPTIONS, X_XSS_PROTECTION,
};
use axum::http::{HeaderName, HeaderValue, Request, Response};
use tower::{Layer, Service};

const PERMISSIONS_POLICY: &str = "permissions-policy";
const CSP_VALUE: &str = "default-src 'none'; frame-ancestors 'none'; form-action 'self'";
const HSTS_VALUE: &str = "max-age=31536000; includeSubDomains";

type HeaderSet = Arc<[(HeaderName, HeaderValue)]>;

#[derive(Clone)]
pub struct SecurityHeadersLayer {
    headers: HeaderSet,
}

impl SecurityHeadersLayer {
    pub fn new(include_hsts: bool) -> Self {
        let mut headers: Vec<(HeaderName, HeaderValue)> = [
            (X_CONTENT_TYPE_OPTIONS, "nosniff"),
            (X_FRAME_OPTIONS, "DENY"),
            (X_XSS_PROTECTION, "1; mode=block"),
            (CONTENT_SECURITY_POLICY, CSP_VALUE),
            (REFERRER_POLICY, "strict-origin-when-cross-origin"),
            (
                HeaderName::from_static(PERMISSIONS_POLICY),
                "geolocation=(), microphone=(), camera=()",
            ),
        ]
        .into_iter()
        .map(|(name, value)| (name, HeaderValue::from_static(value)))
        .collect();

        if include_hsts {
            headers.push((STRICT_TRANSPORT_SECURITY, HeaderValue::from_static(HSTS_VALUE)));
        }

        Self {
            headers: headers.into(),
        }
    }

    pub fn includes(&self, name: &HeaderName) -> bool {
        self.headers.iter().any(|(n, _)| n == name)
    }
}

impl<S> Layer<S> for SecurityHeadersLayer {
    type Service = SecurityHeadersService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SecurityHeadersService {
            inner,
            headers: self.headers.clone(),
        }
    }
}

#[derive(Clone)]
pub struct SecurityHeadersService<S> {
    inner: S,
    headers: HeaderSet,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for SecurityHeadersService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = SecurityHeadersFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        SecurityHeadersFuture {
            future: self.inner.call(request),
            headers: self.headers.clone(),
        }
    }
}

#[pin_project::pin_project]
pub struct SecurityHeadersFuture<F> {
    #[pin]
    future: F,
    headers: HeaderSet,
}

impl<F, ResBody, E> std::future::Future for SecurityHeadersFuture<F>
where
    F: std::future::Future<Output = Result<Response<ResBody>, E>>,
{
    type Output = Result<Response<ResBody>, E>;

    fn poll(self: std::pin::Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.future.poll(cx) {
            Poll::Ready(Ok(mut response)) => {
                let headers = response.headers_mut();
                for (name, value) in this.headers.iter() {
                    headers.insert(name.clone(), value.clone());
                }
                Poll::Ready(Ok(response))
            }
            Poll::Ready(Err(e)) => Poll::Ready(Err(e)),
            Poll::Pending => Poll::Pending,
        }
    }
}

pub fn create_security_headers_layer(production: bool) -> SecurityHeadersLayer {
    if production {
        tracing::info!("Security: HSTS header enabled (production mode)");
    } else {
        tracing::info!("Security: HSTS header disabled (development mode)");
    }

    SecurityHeadersLayer::new(production)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_headers_layer_creation() {
        let layer = SecurityHeadersLayer::new(false);
        assert!(layer.includes(&X_FRAME_OPTIONS));
        assert!(!layer.includes(&STRICT_TRANSPORT_SECURITY));

        let layer_with_hsts = SecurityHeadersLayer::new(true);
        assert!(layer_with_hsts.includes(&STRICT_TRANSPORT_SECURITY));
    }
}
