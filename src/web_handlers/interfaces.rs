use actix_web::{web, App, HttpResponse, HttpServer};
use log::{debug, error, info};
use serde::Deserialize;
use std::sync::Arc;

use crate::generator::OutputFormat;
use crate::Settings;

/// Query parameters for link conversion
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ConvertQuery {
    /// Output format, `yaml` (default) or `json`
    pub format: Option<String>,
}

/// Handler for link conversion
///
/// The request body is the pasted link list; the response is the rendered
/// config document.
pub async fn convert_handler(
    body: String,
    query: web::Query<ConvertQuery>,
    settings: web::Data<Arc<Settings>>,
) -> HttpResponse {
    debug!("Received convert request: {:?}, {} byte(s)", query, body.len());

    let format = match query.format.as_deref() {
        Some(format) => match format.parse::<OutputFormat>() {
            Ok(format) => format,
            Err(e) => return HttpResponse::BadRequest().body(e),
        },
        None => OutputFormat::Yaml,
    };

    match crate::convert_with(&body, &settings.group_settings(), format) {
        Ok(document) => HttpResponse::Ok()
            .content_type(format.content_type())
            .body(document),
        Err(e) => {
            error!("Failed to render config: {}", e);
            HttpResponse::InternalServerError().body(format!("Failed to render config: {}", e))
        }
    }
}

/// Register web handlers
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/convert", web::post().to(convert_handler))
        // For health check
        .route("/", web::get().to(|| async { "sub2clash is running!" }));
}

/// Start the HTTP server and run until it is stopped
pub async fn run_server(settings: Settings) -> std::io::Result<()> {
    let listen_address = settings.listen_target();
    let settings = Arc::new(settings);

    info!("sub2clash starting on {}", listen_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&settings)))
            .configure(config)
    })
    .bind(listen_address)?
    .run()
    .await
}
