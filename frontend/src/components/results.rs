use crate::Model;
use shared::{Assessment, DiagnosisReport, Tier};
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    html! {
        <div class="results-section">
            <h2>{"2. Diagnostic Report"}</h2>
            {
                match &model.assessment {
                    Some(Assessment::Report(report)) => render_report(report),
                    Some(Assessment::Inconclusive {
                        confidence_pct,
                        threshold_pct,
                        shortfall_pct,
                        guidance,
                    }) => render_inconclusive(*confidence_pct, *threshold_pct, *shortfall_pct, guidance),
                    None => html! {
                        <p class="no-results-message">
                            {"Waiting for input data... upload an image to begin."}
                        </p>
                    },
                }
            }
        </div>
    }
}

fn render_inconclusive(
    confidence_pct: f32,
    threshold_pct: f32,
    shortfall_pct: f32,
    guidance: &str,
) -> Html {
    html! {
        <div class="results-container inconclusive">
            <div class="result-header">
                <h2><i class="fa-solid fa-circle-question"></i>{" Inconclusive"}</h2>
            </div>
            <p>
                { format!(
                    "Top confidence {confidence_pct:.2}% is below the {threshold_pct:.0}% \
                     sensitivity threshold (short by {shortfall_pct:.2}%)."
                ) }
            </p>
            <p class="guidance">{ guidance }</p>
        </div>
    }
}

fn render_report(report: &DiagnosisReport) -> Html {
    let (tier_class, icon) = match report.record.severity.tier() {
        Tier::Urgent => ("urgent", "fa-triangle-exclamation"),
        Tier::Elevated => ("elevated", "fa-circle-exclamation"),
        Tier::Routine => ("routine", "fa-circle-check"),
    };

    html! {
        <div class={classes!("results-container", tier_class)}>
            <div class="result-header">
                <h2>
                    <i class={format!("fa-solid {icon}")}></i>
                    { format!(" DETECTION: {}", report.condition.to_uppercase()) }
                </h2>
                <div class="confidence-meter">
                    <div class="meter-label">{"AI Confidence Score:"}</div>
                    <div class="meter">
                        <div class="meter-fill" style={format!("width: {}%", report.confidence_pct)}></div>
                    </div>
                    <div class="meter-value">{ format!("{:.2}%", report.confidence_pct) }</div>
                </div>
            </div>

            {
                if !report.matched {
                    html! {
                        <p class="fallback-note">
                            {"This class is not in the condition database; generic guidance is shown."}
                        </p>
                    }
                } else {
                    html! {}
                }
            }

            <div class="clinical-insights">
                <h3>{"Clinical Insights"}</h3>
                <section>
                    <h4><i class="fa-solid fa-book-open"></i>{" What is this condition?"}</h4>
                    <p>{ &report.record.description }</p>
                </section>
                <section>
                    <h4><i class="fa-solid fa-dna"></i>{" Etiology (Causes & Risk Factors)"}</h4>
                    <p>{ &report.record.causes }</p>
                </section>
                <section>
                    <h4><i class="fa-solid fa-pills"></i>{" Standard Treatments & Management"}</h4>
                    <p>{ &report.record.treatment }</p>
                </section>
                <section>
                    <h4><i class="fa-solid fa-shield-halved"></i>{" Recommended Action Plan"}</h4>
                    <p class="risk-status">
                        { format!("Status: {} RISK", report.record.severity.to_string().to_uppercase()) }
                    </p>
                    <p>{ &report.record.action }</p>
                </section>
            </div>

            <div class="detailed-results">
                <h3>{"Differential Diagnosis Probabilities"}</h3>
                <div class="result-bars">
                    { for report.chart.iter().map(|entry| {
                        html! {
                            <div class="result-item">
                                <div class="result-label">{ &entry.label }</div>
                                <div class="result-bar-container">
                                    <div class="result-bar" style={format!("width: {}%", entry.pct)}></div>
                                </div>
                                <div class="result-value">{ format!("{:.1}%", entry.pct) }</div>
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
