use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::{Error, HttpResponse, web};
use futures::{StreamExt, TryStreamExt};
use log::{error, info};
use serde::Deserialize;
use serde_json::json;
use shared::knowledge;
use std::io::Write;

use crate::classifier::Classifier;
use crate::report;

#[derive(Deserialize)]
pub struct AnalyzeParams {
    threshold: Option<f32>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/analyze").route(web::post().to(handle_analyze)))
        .service(web::resource("/api/conditions").route(web::get().to(list_conditions)))
        .service(web::resource("/api/conditions/{name}").route(web::get().to(get_condition)));
}

async fn handle_analyze(
    classifier: web::Data<dyn Classifier>,
    params: web::Query<AnalyzeParams>,
    mut payload: Multipart,
) -> Result<HttpResponse, Error> {
    let threshold = params.threshold.unwrap_or(shared::DEFAULT_THRESHOLD_PCT);
    if !(0.0..=100.0).contains(&threshold) {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": format!("threshold must be within 0-100, got {threshold}")
        })));
    }

    let mut image_data = Vec::new();
    while let Ok(Some(mut field)) = payload.try_next().await {
        while let Some(chunk) = field.next().await {
            let data = chunk?;
            image_data.write_all(&data)?;
        }
    }

    if image_data.is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "no image data in request"
        })));
    }

    let predictions = match classifier.classify(&image_data) {
        Ok(predictions) => predictions,
        Err(e) => {
            error!("Inference failed: {e}");
            return Ok(HttpResponse::InternalServerError().json(json!({
                "error": format!("inference failed: {e}")
            })));
        }
    };

    match report::build_assessment(&predictions, threshold) {
        Ok(assessment) => {
            info!(
                "Analyzed {} bytes against threshold {threshold}%",
                image_data.len()
            );
            Ok(HttpResponse::Ok().json(assessment))
        }
        Err(e) => {
            error!("Report construction failed: {e}");
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": format!("report construction failed: {e}")
            })))
        }
    }
}

async fn list_conditions() -> HttpResponse {
    HttpResponse::Ok().json(knowledge::condition_names())
}

async fn get_condition(path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();
    match knowledge::lookup_exact(&name) {
        Some(record) => HttpResponse::Ok().json(record),
        None => HttpResponse::NotFound().json(json!({
            "error": format!("unknown condition: {name}")
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassifierError;
    use actix_web::{App, test};
    use shared::{Assessment, ConditionRecord, Prediction, Severity};
    use std::sync::Arc;

    struct StubClassifier {
        predictions: Vec<Prediction>,
    }

    impl Classifier for StubClassifier {
        fn classify(&self, _image: &[u8]) -> Result<Vec<Prediction>, ClassifierError> {
            Ok(self.predictions.clone())
        }
    }

    struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn classify(&self, _image: &[u8]) -> Result<Vec<Prediction>, ClassifierError> {
            Err(ClassifierError::ScoreShape {
                got: 0,
                expected: 7,
            })
        }
    }

    const BOUNDARY: &str = "test-boundary";

    fn multipart_body(content: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            b"Content-Disposition: form-data; name=\"image\"; filename=\"lesion.jpg\"\r\n",
        );
        body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn analyze_request(uri: &str, content: &[u8]) -> test::TestRequest {
        test::TestRequest::post()
            .uri(uri)
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(multipart_body(content))
    }

    fn stub_data(predictions: Vec<Prediction>) -> web::Data<dyn Classifier> {
        let classifier: Arc<dyn Classifier> = Arc::new(StubClassifier { predictions });
        web::Data::from(classifier)
    }

    fn melanoma_predictions() -> Vec<Prediction> {
        vec![
            Prediction {
                label: "melanoma".to_string(),
                score: 0.92,
            },
            Prediction {
                label: "melanocytic_nevi".to_string(),
                score: 0.05,
            },
            Prediction {
                label: "vascular_lesions".to_string(),
                score: 0.03,
            },
        ]
    }

    #[actix_web::test]
    async fn analyze_returns_report_above_threshold() {
        let app = test::init_service(
            App::new()
                .app_data(stub_data(melanoma_predictions()))
                .configure(configure_api),
        )
        .await;

        let req = analyze_request("/api/analyze?threshold=30", b"fake image bytes").to_request();
        let assessment: Assessment = test::call_and_read_body_json(&app, req).await;

        match assessment {
            Assessment::Report(report) => {
                assert_eq!(report.condition, "Melanoma");
                assert_eq!(report.record.severity, Severity::Critical);
                assert_eq!(report.chart.len(), 3);
            }
            other => panic!("expected report, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn analyze_returns_inconclusive_below_threshold() {
        let app = test::init_service(
            App::new()
                .app_data(stub_data(melanoma_predictions()))
                .configure(configure_api),
        )
        .await;

        let req = analyze_request("/api/analyze?threshold=95", b"fake image bytes").to_request();
        let assessment: Assessment = test::call_and_read_body_json(&app, req).await;

        match assessment {
            Assessment::Inconclusive { threshold_pct, .. } => {
                assert_eq!(threshold_pct, 95.0);
            }
            other => panic!("expected inconclusive, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn analyze_without_threshold_uses_default() {
        // No query string: the 30% default gates the result.
        let below = vec![Prediction {
            label: "melanoma".to_string(),
            score: 0.29,
        }];
        let app = test::init_service(
            App::new().app_data(stub_data(below)).configure(configure_api),
        )
        .await;

        let req = analyze_request("/api/analyze", b"fake image bytes").to_request();
        let assessment: Assessment = test::call_and_read_body_json(&app, req).await;
        match assessment {
            Assessment::Inconclusive { threshold_pct, .. } => {
                assert_eq!(threshold_pct, shared::DEFAULT_THRESHOLD_PCT);
            }
            other => panic!("expected inconclusive, got {other:?}"),
        }

        let above = vec![Prediction {
            label: "melanoma".to_string(),
            score: 0.31,
        }];
        let app = test::init_service(
            App::new().app_data(stub_data(above)).configure(configure_api),
        )
        .await;

        let req = analyze_request("/api/analyze", b"fake image bytes").to_request();
        let assessment: Assessment = test::call_and_read_body_json(&app, req).await;
        assert!(matches!(assessment, Assessment::Report(_)));
    }

    #[actix_web::test]
    async fn analyze_rejects_empty_image() {
        let app = test::init_service(
            App::new()
                .app_data(stub_data(melanoma_predictions()))
                .configure(configure_api),
        )
        .await;

        let req = analyze_request("/api/analyze", b"").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn analyze_rejects_out_of_range_threshold() {
        let app = test::init_service(
            App::new()
                .app_data(stub_data(melanoma_predictions()))
                .configure(configure_api),
        )
        .await;

        let req = analyze_request("/api/analyze?threshold=120", b"fake image bytes").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn analyze_surfaces_classifier_failure() {
        let classifier: Arc<dyn Classifier> = Arc::new(FailingClassifier);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(classifier))
                .configure(configure_api),
        )
        .await;

        let req = analyze_request("/api/analyze?threshold=30", b"corrupt").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }

    #[actix_web::test]
    async fn conditions_endpoint_lists_knowledge_base() {
        let app = test::init_service(App::new().configure(configure_api)).await;

        let req = test::TestRequest::get().uri("/api/conditions").to_request();
        let names: Vec<String> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(names.len(), 7);
        assert!(names.contains(&"Melanoma".to_string()));
    }

    #[actix_web::test]
    async fn condition_endpoint_returns_record_or_404() {
        let app = test::init_service(App::new().configure(configure_api)).await;

        let req = test::TestRequest::get()
            .uri("/api/conditions/Melanoma")
            .to_request();
        let record: ConditionRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(record.severity, Severity::Critical);

        let req = test::TestRequest::get()
            .uri("/api/conditions/Nonexistent")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
