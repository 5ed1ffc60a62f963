mod config;
mod form;
mod middleware;
mod notice;
mod security;
mod template;

use std::sync::Arc;

use actix_web::{error, web};
use actix_web::{App, HttpResponse, HttpServer, Responder, Result};
use askama::Template;
use form::sign_in::{SignInFormData, Submission};
use notice::Notice;
use security::{AuthCollaborator, SignInSeam};

fn render_sign_in(notice: Option<Notice>, email: String) -> Result<HttpResponse> {
    let template = template::sign_in::SignInTemplate { notice, email }
        .render()
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(template))
}

async fn sign_in_ui() -> Result<HttpResponse> {
    render_sign_in(None, String::new())
}

async fn sign_in(
    seam: SignInSeam,
    settings: web::Data<config::Settings>,
    form: web::Form<SignInFormData>,
) -> Result<HttpResponse> {
    let form = form.into_inner();

    match form.submit(seam.collaborator()) {
        Submission::Blocked(e) => render_sign_in(Some(e.into()), form.email),
        Submission::Delegated => Ok(HttpResponse::SeeOther()
            .append_header(("Location", settings.success_redirect.as_str()))
            .finish()),
        Submission::Demo => render_sign_in(Some(Notice::SignedIn), form.email),
    }
}

// Placeholder actions: the sign-in form is posted along so the typed email
// survives, but nothing is validated or handed to the collaborator.

async fn forgot_password(form: web::Form<SignInFormData>) -> Result<HttpResponse> {
    render_sign_in(Some(Notice::ForgotPassword), form.into_inner().email)
}

async fn google_sign_in(form: web::Form<SignInFormData>) -> Result<HttpResponse> {
    render_sign_in(Some(Notice::Google), form.into_inner().email)
}

async fn facebook_sign_in(form: web::Form<SignInFormData>) -> Result<HttpResponse> {
    render_sign_in(Some(Notice::Facebook), form.into_inner().email)
}

async fn index() -> impl Responder {
    HttpResponse::SeeOther()
        .append_header(("Location", "/sign-in"))
        .finish()
}

async fn default_handler() -> Result<HttpResponse> {
    let template = template::error::NotFoundErrorTemplate;
    let content = template.render().map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::NotFound()
        .content_type("text/html")
        .body(content))
}

/// Registers settings, the optional collaborator, and every sign-in route.
fn configure(
    cfg: &mut web::ServiceConfig,
    settings: config::Settings,
    collaborator: Option<Arc<dyn AuthCollaborator>>,
) {
    cfg.app_data(web::Data::new(settings));
    if let Some(collaborator) = collaborator {
        cfg.app_data(web::Data::from(collaborator));
    }

    cfg.route("/", web::get().to(index))
        .service(
            web::resource("/sign-in")
                .route(web::get().to(sign_in_ui))
                .route(web::post().to(sign_in)),
        )
        .service(web::resource("/forgot-password").route(web::post().to(forgot_password)))
        .service(web::resource("/social/google").route(web::post().to(google_sign_in)))
        .service(web::resource("/social/facebook").route(web::post().to(facebook_sign_in)));
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = config::Settings::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let collaborator = settings.collaborator.build();

    log::info!(
        "starting HTTP server at http://{}:{} ({:?} collaborator)",
        settings.host,
        settings.port,
        settings.collaborator
    );

    let bind = (settings.host.clone(), settings.port);
    let workers = settings.workers;

    HttpServer::new(move || {
        let settings = settings.clone();
        let collaborator = collaborator.clone();

        App::new()
            .configure(move |cfg| configure(cfg, settings, collaborator))
            .wrap(middleware::NoStore)
            .wrap(actix_web::middleware::Logger::default())
            .default_service(web::route().to(default_handler))
    })
    .bind(bind)?
    .workers(workers)
    .run()
    .await
}
