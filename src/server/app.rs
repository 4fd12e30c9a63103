//! Serve the Uwumi site.
#![expect(
    clippy::exit,
    reason = "We exit with 1 error code on any application errors"
)]
use crate::config::Config;
use crate::server::api::state::App as AppState;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{middleware, App, Error, HttpServer};

use std::{io, process};

use actix_http::body::MessageBody;
use actix_service::ServiceFactory;
use tracing_actix_web::TracingLogger;

use super::api::state::Global;
use super::{gate, tracing::UwumiRootSpanBuilder};
use crate::server::api::routes;

/// Serve the site described by `config` until the process is stopped.
#[actix_web::main]
pub async fn serve_site(config: Config) -> io::Result<()> {
    let bind = config.server.bind.clone();
    let port = config.server.port;
    if !config.gate.require_admin {
        tracing::warn!(
            "Admin checks are off: any signed-in user can open the dashboard. Set `gate.require_admin = true` to restrict it to admins."
        );
    }

    let state = AppState::from_config(config).unwrap_or_else(|err| {
        tracing::error!("Unable to initialize application state.");
        tracing::error!("Error: {:?}", err);
        process::exit(1);
    });
    tracing::info!("Serving Uwumi on http://{bind}:{port}.");

    HttpServer::new(move || init_app(&state))
        .bind((bind.as_str(), port))?
        .run()
        .await
}

/// Initialize the application and all routing at start-up time.
///
/// Every request passes the tracing logger first, then the route gate.
///
/// # Arguments
/// * `state` - The application state
pub fn init_app<T: Global + Clone + 'static>(
    state: &T,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
> {
    let app = App::new()
        .wrap(middleware::from_fn(gate::protect::<T, _>))
        .wrap(TracingLogger::<UwumiRootSpanBuilder>::new());
    routes::register_app(app, state)
}
