//! Tracing/logging for the HTTP server

use std::time::Instant;

use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    HttpMessage,
};
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder};

/// The length of time in milliseconds after which a request is considered slow.
/// Dashboard loads wait on GitHub, so this is generous.
const SLOW_REQUEST_MS: u128 = 3 * 1000;

/// `DefaultRootSpanBuilder` plus request timings and the signed-in user
pub struct UwumiRootSpanBuilder;

/// When the request arrived
struct RequestStart(Instant);

impl RootSpanBuilder for UwumiRootSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> tracing::Span {
        // Scoped so the mutable borrow of the extensions ends before the
        // span macro borrows `request` again.
        {
            let mut request_extensions = request.extensions_mut();
            request_extensions.insert(RequestStart(Instant::now()));
        }

        // Every log line during the request carries these fields. `user_id`
        // is filled in by the gate once the session is resolved.
        tracing_actix_web::root_span!(
            request,
            user_id = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
            duration_ns = tracing::field::Empty,
        )
    }

    fn on_request_end<B: MessageBody>(
        span: tracing::Span,
        outcome: &Result<ServiceResponse<B>, actix_web::Error>,
    ) {
        let () = outcome.as_ref().map_or((), |response| {
            if let Some(req_start) = response.request().extensions().get::<RequestStart>() {
                let elapsed = req_start.0.elapsed();
                let millis = elapsed.as_millis();
                span.record("duration_ms", millis);
                span.record("duration_ns", elapsed.as_nanos());
                if millis > SLOW_REQUEST_MS {
                    tracing::warn!(duration_ms = millis, "Slow HTTP request");
                } else {
                    tracing::trace!("HTTP Request");
                }
            }
        });
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}
