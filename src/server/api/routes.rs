//! A central place to register App routes.
use actix_files::Files;
use actix_service::ServiceFactory;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    web, App, Error,
};

use super::{
    dashboard::{dashboard, github, me, stats},
    landing::{health, landing, not_found},
    session::{callback, sign_in, sign_out, sign_up, CALLBACK_PATH},
    state::Global,
};

/// Directories under `server.public_dir` served as static files
const PUBLIC_DIRS: [&str; 2] = ["images", "screenshots"];

/// Central place to register all the App routing.
///
/// Pages first, then the `/admin` scope, static files and the not-found fallback.
#[tracing::instrument(skip(app, state))]
pub fn register_app<
    T: Global + Clone + 'static,
    U: MessageBody,
    V: ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<U>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
>(
    mut app: App<V>,
    state: &T,
) -> App<V> {
    app = app
        .app_data(web::Data::new(state.clone()))
        .service(web::resource("/").route(web::get().to(landing::<T>)))
        .service(web::resource("/health").route(web::get().to(health)))
        .service(web::resource("/sign-in").route(web::get().to(sign_in::<T>)))
        .service(web::resource("/sign-up").route(web::get().to(sign_up::<T>)))
        .service(web::resource(CALLBACK_PATH).route(web::get().to(callback::<T>)))
        .service(
            web::resource("/sign-out")
                .route(web::get().to(sign_out::<T>))
                .route(web::post().to(sign_out::<T>)),
        )
        .service(
            web::scope("/admin")
                .service(
                    web::scope("/api")
                        .service(web::resource("/stats").route(web::get().to(stats)))
                        .service(web::resource("/github").route(web::get().to(github::<T>)))
                        .service(web::resource("/me").route(web::get().to(me::<T>))),
                )
                .service(web::resource(["", "/"]).route(web::get().to(dashboard::<T>))),
        );

    let public_dir = &state.config().server.public_dir;
    for dir in PUBLIC_DIRS {
        let path = public_dir.join(dir);
        if path.is_dir() {
            app = app.service(Files::new(&format!("/{dir}"), path));
        } else {
            tracing::debug!("No static files at '{}'", path.display());
        }
    }
    app.default_service(web::to(not_found))
}
