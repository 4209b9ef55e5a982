//! Confidence-gated interpretation of one classification result.
//!
//! Pure and synchronous: one ranked prediction list plus one threshold in,
//! one `Assessment` out. Below-threshold confidence is a normal outcome;
//! an empty prediction list is not.

use shared::{Assessment, ChartEntry, DiagnosisReport, Prediction, knowledge};
use thiserror::Error;

pub const INCONCLUSIVE_GUIDANCE: &str =
    "Confidence is below the sensitivity threshold. Retake the photo in good \
     lighting, fill the frame with the lesion, and make sure the image shows \
     a skin lesion.";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("classifier returned no predictions")]
    EmptyPredictions,
}

/// Builds the assessment for one result. `predictions` must be sorted
/// descending by score; `threshold_pct` is in [0, 100]. The boundary is
/// inclusive: a confidence exactly at the threshold yields a report.
pub fn build_assessment(
    predictions: &[Prediction],
    threshold_pct: f32,
) -> Result<Assessment, ReportError> {
    let top = predictions.first().ok_or(ReportError::EmptyPredictions)?;
    let confidence_pct = top.score * 100.0;

    if confidence_pct < threshold_pct {
        return Ok(Assessment::Inconclusive {
            confidence_pct,
            threshold_pct,
            shortfall_pct: threshold_pct - confidence_pct,
            guidance: INCONCLUSIVE_GUIDANCE.to_string(),
        });
    }

    let (condition, record, matched) = knowledge::lookup(&top.label);
    let chart = predictions
        .iter()
        .map(|p| ChartEntry {
            label: knowledge::normalize_label(&p.label),
            pct: p.score * 100.0,
        })
        .collect();

    Ok(Assessment::Report(DiagnosisReport {
        condition,
        matched,
        confidence_pct,
        record,
        chart,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Severity;

    fn predictions(entries: &[(&str, f32)]) -> Vec<Prediction> {
        entries
            .iter()
            .map(|(label, score)| Prediction {
                label: (*label).to_string(),
                score: *score,
            })
            .collect()
    }

    fn three_class_result() -> Vec<Prediction> {
        predictions(&[
            ("melanoma", 0.92),
            ("melanocytic_nevi", 0.05),
            ("vascular_lesions", 0.03),
        ])
    }

    #[test]
    fn confidence_above_threshold_yields_report() {
        let assessment = build_assessment(&three_class_result(), 30.0).unwrap();
        match assessment {
            Assessment::Report(report) => {
                assert_eq!(report.condition, "Melanoma");
                assert_eq!(report.record.severity, Severity::Critical);
                assert!(report.matched);
                assert_eq!(format!("{:.2}%", report.confidence_pct), "92.00%");
                assert_eq!(report.chart.len(), 3);
                assert_eq!(report.chart[0].label, "Melanoma");
                assert_eq!(report.chart[2].label, "Vascular Lesions");
            }
            other => panic!("expected report, got {other:?}"),
        }
    }

    #[test]
    fn confidence_below_threshold_is_inconclusive() {
        let assessment = build_assessment(&three_class_result(), 95.0).unwrap();
        match assessment {
            Assessment::Inconclusive {
                confidence_pct,
                threshold_pct,
                shortfall_pct,
                guidance,
            } => {
                assert!((confidence_pct - 92.0).abs() < 1e-4);
                assert_eq!(threshold_pct, 95.0);
                assert!((shortfall_pct - 3.0).abs() < 1e-4);
                assert!(!guidance.is_empty());
            }
            other => panic!("expected inconclusive, got {other:?}"),
        }
    }

    #[test]
    fn boundary_confidence_resolves_to_report() {
        let result = predictions(&[("melanoma", 0.30)]);
        let assessment = build_assessment(&result, 30.0).unwrap();
        assert!(matches!(assessment, Assessment::Report(_)));
    }

    #[test]
    fn just_below_boundary_is_inconclusive() {
        let result = predictions(&[("melanoma", 0.2999)]);
        let assessment = build_assessment(&result, 30.0).unwrap();
        assert!(matches!(assessment, Assessment::Inconclusive { .. }));
    }

    #[test]
    fn unknown_label_uses_fallback_record() {
        let result = predictions(&[("unknown_class", 0.80)]);
        let assessment = build_assessment(&result, 30.0).unwrap();
        match assessment {
            Assessment::Report(report) => {
                assert_eq!(report.condition, "Unknown Class");
                assert!(!report.matched);
                assert_eq!(report.record.severity, Severity::Unknown);
            }
            other => panic!("expected report, got {other:?}"),
        }
    }

    #[test]
    fn empty_predictions_is_an_error() {
        let err = build_assessment(&[], 30.0).unwrap_err();
        assert!(matches!(err, ReportError::EmptyPredictions));
    }

    #[test]
    fn zero_threshold_always_reports() {
        let result = predictions(&[("dermatofibroma", 0.01)]);
        let assessment = build_assessment(&result, 0.0).unwrap();
        assert!(matches!(assessment, Assessment::Report(_)));
    }
}
