//! Static condition knowledge base.
//!
//! Read-only after process start. Keys are canonical display names
//! ("Melanoma"); classifier labels are normalized before lookup so
//! "melanocytic_nevi" and "Melanocytic Nevi" hit the same entry.

use crate::{ConditionRecord, Severity};
use lazy_static::lazy_static;

lazy_static! {
    static ref CONDITIONS: Vec<(String, ConditionRecord)> = vec![
        (
            "Actinic Keratoses".to_string(),
            ConditionRecord {
                severity: Severity::High,
                description: "Also known as solar keratosis, a rough, scaly patch on the skin \
                              caused by years of sun exposure."
                    .to_string(),
                causes: "Long-term exposure to ultraviolet (UV) radiation from sunlight or \
                         tanning beds. Considered a pre-cancerous condition."
                    .to_string(),
                treatment: "Cryotherapy (freezing), topical creams such as 5-fluorouracil, or \
                            laser therapy to remove the damaged cells."
                    .to_string(),
                action: "Consult a dermatologist. Untreated lesions can progress to squamous \
                         cell carcinoma."
                    .to_string(),
            },
        ),
        (
            "Basal Cell Carcinoma".to_string(),
            ConditionRecord {
                severity: Severity::High,
                description: "A type of skin cancer that begins in the basal cells, often \
                              appearing as a slightly transparent bump."
                    .to_string(),
                causes: "Intense sun exposure and UV radiation. The most common form of skin \
                         cancer, but it rarely spreads to other parts of the body."
                    .to_string(),
                treatment: "Surgical excision, Mohs surgery, or electrosurgery. Prognosis is \
                            generally excellent when treated early."
                    .to_string(),
                action: "Schedule a biopsy. While rarely fatal, it can cause significant local \
                         damage if ignored."
                    .to_string(),
            },
        ),
        (
            "Benign Keratosis".to_string(),
            ConditionRecord {
                severity: Severity::Low,
                description: "Often called seborrheic keratosis. Non-cancerous skin growths \
                              that commonly appear with age."
                    .to_string(),
                causes: "The exact cause is unknown; genetics and age play a role. Not caused \
                         by sun exposure and not contagious."
                    .to_string(),
                treatment: "No treatment is medically necessary. Removal via cryotherapy is an \
                            option if irritated or for cosmetic reasons."
                    .to_string(),
                action: "Generally safe. Monitor for changes in shape or color; usually no \
                         urgent action is needed."
                    .to_string(),
            },
        ),
        (
            "Dermatofibroma".to_string(),
            ConditionRecord {
                severity: Severity::Low,
                description: "A common, non-cancerous skin growth that typically appears as a \
                              firm, small bump."
                    .to_string(),
                causes: "Often develops after a minor skin injury such as a bug bite, splinter, \
                         or prick."
                    .to_string(),
                treatment: "Harmless and usually requires no treatment. Surgical removal is \
                            possible if it becomes painful."
                    .to_string(),
                action: "Benign. No action needed unless the spot changes or bleeds.".to_string(),
            },
        ),
        (
            "Melanocytic Nevi".to_string(),
            ConditionRecord {
                severity: Severity::Low,
                description: "Commonly known as a mole. A benign proliferation of melanocytes, \
                              the pigment-producing cells."
                    .to_string(),
                causes: "Clusters of pigment cells. Most adults have between 10 and 40 common \
                         moles."
                    .to_string(),
                treatment: "No treatment needed for common moles. Removal is done only for \
                            cosmetic reasons or if cancer is suspected."
                    .to_string(),
                action: "Monitor using the ABCDE rule. See a doctor if it changes in size or \
                         color."
                    .to_string(),
            },
        ),
        (
            "Melanoma".to_string(),
            ConditionRecord {
                severity: Severity::Critical,
                description: "The most serious type of skin cancer. It develops in the \
                              melanocytes, the cells that produce melanin."
                    .to_string(),
                causes: "DNA damage from UV radiation (sun or tanning) triggers mutations. \
                         Genetics also play a significant role."
                    .to_string(),
                treatment: "Requires immediate surgical removal (wide local excision). Advanced \
                            stages may need immunotherapy, radiation, or chemotherapy."
                    .to_string(),
                action: "URGENT: see a dermatologist immediately for a biopsy. Early detection \
                         is life-saving."
                    .to_string(),
            },
        ),
        (
            "Vascular Lesions".to_string(),
            ConditionRecord {
                severity: Severity::Low,
                description: "Abnormalities of blood vessels, including cherry angiomas and \
                              spider veins."
                    .to_string(),
                causes: "Can be congenital (birthmarks) or acquired with aging, sun exposure, \
                         or hormonal changes."
                    .to_string(),
                treatment: "Laser therapy is the most common treatment for cosmetic removal."
                    .to_string(),
                action: "Usually harmless. Consult a doctor if the lesion bleeds or grows \
                         rapidly."
                    .to_string(),
            },
        ),
    ];

    // Substituted when the classifier emits a label with no entry above.
    static ref FALLBACK: ConditionRecord = ConditionRecord {
        severity: Severity::Unknown,
        description: "No specific data available for this class.".to_string(),
        causes: "Unknown.".to_string(),
        treatment: "Consult a doctor.".to_string(),
        action: "Consult a doctor for a professional evaluation.".to_string(),
    };
}

/// Canonical display form of a classifier label: separators become spaces and
/// each word is title-cased. Idempotent.
pub fn normalize_label(raw: &str) -> String {
    raw.replace(['_', '-'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes the label and looks it up, substituting the fallback record on
/// a miss. Returns (display name, record, matched).
pub fn lookup(raw_label: &str) -> (String, ConditionRecord, bool) {
    let name = normalize_label(raw_label);
    match CONDITIONS.iter().find(|(key, _)| *key == name) {
        Some((_, record)) => (name, record.clone(), true),
        None => (name, FALLBACK.clone(), false),
    }
}

/// Exact-name lookup for the condition browser. No fallback.
pub fn lookup_exact(name: &str) -> Option<ConditionRecord> {
    CONDITIONS
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, record)| record.clone())
}

pub fn condition_names() -> Vec<String> {
    CONDITIONS.iter().map(|(key, _)| key.clone()).collect()
}

pub fn fallback_record() -> ConditionRecord {
    FALLBACK.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let names = condition_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn every_record_has_a_valid_severity() {
        let allowed = [
            Severity::Low,
            Severity::High,
            Severity::Critical,
            Severity::Unknown,
        ];
        for name in condition_names() {
            let record = lookup_exact(&name).unwrap();
            assert!(allowed.contains(&record.severity), "{name}");
        }
        assert!(allowed.contains(&fallback_record().severity));
    }

    #[test]
    fn normalization_handles_raw_labels() {
        assert_eq!(normalize_label("melanocytic_nevi"), "Melanocytic Nevi");
        assert_eq!(normalize_label("basal-cell-carcinoma"), "Basal Cell Carcinoma");
        assert_eq!(normalize_label("MELANOMA"), "Melanoma");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["melanocytic_nevi", "Melanocytic Nevi", "vascular_lesions"] {
            let once = normalize_label(raw);
            assert_eq!(normalize_label(&once), once);
        }
    }

    #[test]
    fn unknown_label_falls_back() {
        let (name, record, matched) = lookup("unknown_class");
        assert_eq!(name, "Unknown Class");
        assert!(!matched);
        assert_eq!(record.severity, Severity::Unknown);
    }

    #[test]
    fn known_label_matches_in_either_form() {
        for raw in ["melanoma", "Melanoma"] {
            let (name, record, matched) = lookup(raw);
            assert_eq!(name, "Melanoma");
            assert!(matched);
            assert_eq!(record.severity, Severity::Critical);
        }
    }
}
