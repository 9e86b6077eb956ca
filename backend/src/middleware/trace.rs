//! Request correlation middleware.
//!
//! Every request runs with a [`TraceId`] in task-local storage. A caller may
//! supply one through the `trace-id` request header; otherwise a fresh UUID is
//! generated. The identifier is echoed back on the response and attached to
//! error logs.
//!
//! Task-local values do not cross `tokio::spawn`; wrap spawned work in
//! [`TraceId::scope`] to keep the identifier.

use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tokio::task_local;
use tracing::{Instrument, info_span, warn};
use uuid::Uuid;

/// Header carrying the trace identifier in both directions.
pub const TRACE_ID_HEADER: HeaderName = HeaderName::from_static("trace-id");

task_local! {
    static CURRENT_TRACE_ID: TraceId;
}

/// Identifier correlating one request's logs and response.
///
/// # Examples
/// ```
/// use exercise_tracker::middleware::trace::TraceId;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let id: TraceId = "2f1c6f52-4d6e-4f0e-9a57-3d2f9d0c8b11".parse().expect("uuid");
/// let seen = TraceId::scope(id, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The identifier in scope for the running task, if any.
    pub fn current() -> Option<Self> {
        CURRENT_TRACE_ID.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` in scope.
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT_TRACE_ID.scope(trace_id, fut).await
    }

    /// Take the caller's identifier from `req` or mint a new one.
    fn for_request(req: &ServiceRequest) -> Self {
        req.headers()
            .get(&TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(Self::generate)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Middleware factory installing [`TraceId`] for each request.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exercise_tracker::Trace;
///
/// let _app = App::new().wrap(Trace);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::for_request(&req);
        let span = info_span!(
            "http_request",
            %trace_id,
            method = %req.method(),
            path = req.path(),
        );
        let fut = self.service.call(req);

        Box::pin(
            TraceId::scope(trace_id, async move {
                let mut res = fut.await?;
                match HeaderValue::from_str(&trace_id.to_string()) {
                    Ok(value) => {
                        res.headers_mut().insert(TRACE_ID_HEADER, value);
                    }
                    Err(error) => warn!(%error, "trace identifier is not a valid header value"),
                }
                Ok(res)
            })
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    async fn echo_trace_id() -> HttpResponse {
        match TraceId::current() {
            Some(id) => HttpResponse::Ok().body(id.to_string()),
            None => HttpResponse::InternalServerError().finish(),
        }
    }

    async fn call(req: test::TestRequest) -> (String, String) {
        let app = test::init_service(
            App::new()
                .wrap(Trace)
                .route("/", web::get().to(echo_trace_id)),
        )
        .await;
        let res = test::call_service(&app, req.uri("/").to_request()).await;
        assert!(res.status().is_success());
        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace-id header")
            .to_str()
            .expect("ascii header")
            .to_owned();
        let body = test::read_body(res).await;
        (header, String::from_utf8(body.to_vec()).expect("utf8 body"))
    }

    #[tokio::test]
    async fn current_is_none_outside_a_request() {
        assert!(TraceId::current().is_none());
    }

    #[actix_web::test]
    async fn handler_sees_the_identifier_echoed_on_the_response() {
        let (header, body) = call(test::TestRequest::get()).await;

        assert_eq!(header, body);
        assert!(Uuid::parse_str(&header).is_ok());
    }

    #[actix_web::test]
    async fn caller_supplied_identifier_is_reused() {
        let supplied = "2f1c6f52-4d6e-4f0e-9a57-3d2f9d0c8b11";
        let (header, body) =
            call(test::TestRequest::get().insert_header(("trace-id", supplied))).await;

        assert_eq!(header, supplied);
        assert_eq!(body, supplied);
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("")]
    #[actix_web::test]
    async fn unparseable_identifiers_are_replaced(#[case] supplied: &str) {
        let (header, _) =
            call(test::TestRequest::get().insert_header(("trace-id", supplied))).await;

        assert_ne!(header, supplied);
        assert!(Uuid::parse_str(&header).is_ok());
    }
}
