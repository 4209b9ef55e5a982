mod classifier;
mod report;
mod routes;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use classifier::{Classifier, TorchClassifier};
use routes::configure_routes;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    dotenv::dotenv().ok();

    let frontend_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        format!("{}/../frontend/dist", manifest_dir)
    } else {
        "/usr/src/app/frontend/dist".to_string()
    };

    let model_path = PathBuf::from(
        env::var("MODEL_PATH").unwrap_or_else(|_| "models/skin_lesion.pt".to_string()),
    );

    // Loading the TorchScript module is expensive; do it exactly once and
    // share the classifier across workers.
    let classifier: Arc<dyn Classifier> = match TorchClassifier::load(&model_path) {
        Ok(classifier) => {
            log::info!("Loaded classifier from {}", model_path.display());
            Arc::new(classifier)
        }
        Err(e) => {
            log::error!("Failed to preload classifier at startup: {e}");
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Classifier loading failed: {e}"),
            ));
        }
    };

    let port = env::var("PORT").unwrap_or_else(|_| "8081".to_string());
    let bind_address = format!("0.0.0.0:{}", port);

    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::from(classifier.clone()))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
