use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::candidate::SubmissionCandidate;
use crate::models::NewSubmission;

pub const MAX_TEXT_LENGTH: usize = 255;

pub const REQUESTER_NAME: &str = "requesterName";
pub const ORGANIZATION: &str = "organization";
pub const DECEASED_NAMES: &str = "deceasedNames";
pub const ALREADY_CONTRIBUTED: &str = "alreadyContributed";

pub const MSG_REQUESTER_NAME_REQUIRED: &str = "Sila masukkan nama pemohon";
pub const MSG_ORGANIZATION_REQUIRED: &str = "Sila pilih PASTI";
pub const MSG_DECEASED_NAMES_REQUIRED: &str = "Sila masukkan sekurang-kurangnya satu nama arwah";

/// Field-scoped error messages, keyed by wire field name.
///
/// Element errors of `deceasedNames` use `deceasedNames.<index>` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let message = message.into();
        let messages = self.0.entry(field.into()).or_default();
        if !messages.contains(&message) {
            messages.push(message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// True when `field` itself or any of its elements failed.
    pub fn mentions(&self, field: &str) -> bool {
        self.0
            .keys()
            .any(|key| key == field || key.strip_prefix(field).is_some_and(|r| r.starts_with('.')))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

}

/// A failed submission: what was wrong, and what the user sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejection {
    pub errors: FieldErrors,
    pub old: SubmissionCandidate,
}

/// Checks every field of `candidate` and collects all failures.
///
/// Strings are trimmed before they are checked and the trimmed values are
/// what ends up in the returned `NewSubmission`. Within one field checking
/// stops at the first failing rule.
pub fn validate(candidate: &SubmissionCandidate) -> Result<NewSubmission, FieldErrors> {
    let mut errors = FieldErrors::new();

    let requester_name = required_text(
        &mut errors,
        REQUESTER_NAME,
        "requester name",
        candidate.requester_name.as_ref(),
        MSG_REQUESTER_NAME_REQUIRED,
    );
    let organization = required_text(
        &mut errors,
        ORGANIZATION,
        "organization",
        candidate.organization.as_ref(),
        MSG_ORGANIZATION_REQUIRED,
    );
    let deceased_names = deceased_names(&mut errors, candidate.deceased_names.as_ref());
    let already_contributed = strict_bool(
        &mut errors,
        ALREADY_CONTRIBUTED,
        "already contributed",
        candidate.already_contributed.as_ref(),
    );

    match (requester_name, organization, deceased_names, already_contributed) {
        (Some(requester_name), Some(organization), Some(deceased_names), Some(already_contributed)) => {
            Ok(NewSubmission {
                requester_name,
                organization,
                deceased_names,
                already_contributed,
            })
        }
        _ => Err(errors),
    }
}

fn required_text(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: Option<&Value>,
    required_message: &str,
) -> Option<String> {
    match value {
        None => {
            errors.add(field, required_message);
            None
        }
        Some(Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() {
                errors.add(field, required_message);
                None
            } else if text.chars().count() > MAX_TEXT_LENGTH {
                errors.add(field, too_long(label));
                None
            } else {
                Some(text.to_string())
            }
        }
        Some(Value::Array(items)) if items.is_empty() => {
            errors.add(field, required_message);
            None
        }
        Some(_) => {
            errors.add(field, format!("The {label} field must be a string."));
            None
        }
    }
}

fn deceased_names(errors: &mut FieldErrors, value: Option<&Value>) -> Option<Vec<String>> {
    let items = match value {
        None => {
            errors.add(DECEASED_NAMES, MSG_DECEASED_NAMES_REQUIRED);
            return None;
        }
        Some(Value::Array(items)) => items,
        Some(Value::String(text)) if text.trim().is_empty() => {
            errors.add(DECEASED_NAMES, MSG_DECEASED_NAMES_REQUIRED);
            return None;
        }
        Some(_) => {
            errors.add(DECEASED_NAMES, "The deceased names field must be an array.");
            return None;
        }
    };

    if items.is_empty() {
        errors.add(DECEASED_NAMES, MSG_DECEASED_NAMES_REQUIRED);
        return None;
    }

    let mut names = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let field = format!("{DECEASED_NAMES}.{index}");
        match item {
            Value::String(text) => {
                let text = text.trim();
                if text.is_empty() {
                    errors.add(&field, format!("The {field} field is required."));
                } else if text.chars().count() > MAX_TEXT_LENGTH {
                    errors.add(&field, too_long(&field));
                } else {
                    names.push(text.to_string());
                }
            }
            Value::Null => errors.add(&field, format!("The {field} field is required.")),
            _ => errors.add(&field, format!("The {field} field must be a string.")),
        }
    }

    (names.len() == items.len()).then_some(names)
}

fn strict_bool(
    errors: &mut FieldErrors,
    field: &str,
    label: &str,
    value: Option<&Value>,
) -> Option<bool> {
    match value {
        Some(Value::Bool(flag)) => Some(*flag),
        None => {
            errors.add(field, format!("The {label} field is required."));
            None
        }
        Some(_) => {
            errors.add(field, format!("The {label} field must be true or false."));
            None
        }
    }
}

fn too_long(label: &str) -> String {
    format!("The {label} field must not be greater than {MAX_TEXT_LENGTH} characters.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate(value: Value) -> SubmissionCandidate {
        serde_json::from_value(value).unwrap()
    }

    fn valid() -> Value {
        json!({
            "requesterName": "Ali",
            "organization": "PASTI Al Amin",
            "deceasedNames": ["Ahmad bin Salleh"],
            "alreadyContributed": true,
        })
    }

    fn with(field: &str, value: Value) -> SubmissionCandidate {
        let mut body = valid();
        body[field] = value;
        candidate(body)
    }

    fn without(field: &str) -> SubmissionCandidate {
        let mut body = valid();
        body.as_object_mut().unwrap().remove(field);
        candidate(body)
    }

    #[test]
    fn test_valid_candidate() {
        let submission = validate(&candidate(valid())).unwrap();
        assert_eq!(submission.requester_name, "Ali");
        assert_eq!(submission.organization, "PASTI Al Amin");
        assert_eq!(submission.deceased_names, vec!["Ahmad bin Salleh"]);
        assert!(submission.already_contributed);
    }

    #[test]
    fn test_strings_are_trimmed() {
        let submission = validate(&candidate(json!({
            "requesterName": "  Ali ",
            "organization": " PASTI Al Quds",
            "deceasedNames": [" Ahmad ", "Siti\t"],
            "alreadyContributed": false,
        })))
        .unwrap();

        assert_eq!(submission.requester_name, "Ali");
        assert_eq!(submission.organization, "PASTI Al Quds");
        assert_eq!(submission.deceased_names, vec!["Ahmad", "Siti"]);
        assert!(!submission.already_contributed);
    }

    #[test]
    fn test_missing_requester_name() {
        let errors = validate(&without(REQUESTER_NAME)).unwrap_err();
        assert_eq!(
            errors.get(REQUESTER_NAME),
            Some(&[MSG_REQUESTER_NAME_REQUIRED.to_string()][..])
        );
        assert_eq!(errors.fields().count(), 1);
    }

    #[test]
    fn test_blank_requester_name() {
        let errors = validate(&with(REQUESTER_NAME, json!("   "))).unwrap_err();
        assert_eq!(
            errors.get(REQUESTER_NAME),
            Some(&[MSG_REQUESTER_NAME_REQUIRED.to_string()][..])
        );
    }

    #[test]
    fn test_requester_name_length_bound() {
        assert!(validate(&with(REQUESTER_NAME, json!("a".repeat(255)))).is_ok());

        let errors = validate(&with(REQUESTER_NAME, json!("a".repeat(256)))).unwrap_err();
        assert_eq!(
            errors.get(REQUESTER_NAME),
            Some(&["The requester name field must not be greater than 255 characters.".to_string()][..])
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(validate(&with(REQUESTER_NAME, json!("é".repeat(255)))).is_ok());
    }

    #[test]
    fn test_requester_name_must_be_string() {
        let errors = validate(&with(REQUESTER_NAME, json!(12))).unwrap_err();
        assert_eq!(
            errors.get(REQUESTER_NAME),
            Some(&["The requester name field must be a string.".to_string()][..])
        );
    }

    #[test]
    fn test_missing_organization() {
        let errors = validate(&with(ORGANIZATION, Value::Null)).unwrap_err();
        assert_eq!(
            errors.get(ORGANIZATION),
            Some(&[MSG_ORGANIZATION_REQUIRED.to_string()][..])
        );
    }

    #[test]
    fn test_organization_length_bound() {
        assert!(validate(&with(ORGANIZATION, json!("x".repeat(255)))).is_ok());

        let errors = validate(&with(ORGANIZATION, json!("x".repeat(256)))).unwrap_err();
        assert_eq!(
            errors.get(ORGANIZATION),
            Some(&["The organization field must not be greater than 255 characters.".to_string()][..])
        );
        assert_eq!(errors.fields().count(), 1);
    }

    #[test]
    fn test_blank_organization() {
        for value in [json!(""), json!("  ")] {
            let errors = validate(&with(ORGANIZATION, value)).unwrap_err();
            assert_eq!(
                errors.get(ORGANIZATION),
                Some(&[MSG_ORGANIZATION_REQUIRED.to_string()][..])
            );
        }
    }

    #[test]
    fn test_organization_must_be_string() {
        let errors = validate(&with(ORGANIZATION, json!(3))).unwrap_err();
        assert_eq!(
            errors.get(ORGANIZATION),
            Some(&["The organization field must be a string.".to_string()][..])
        );
    }

    #[test]
    fn test_organization_outside_catalog_is_accepted() {
        let submission = validate(&with(ORGANIZATION, json!("PASTI Tidak Wujud"))).unwrap();
        assert_eq!(submission.organization, "PASTI Tidak Wujud");
    }

    #[test]
    fn test_deceased_names_missing_or_empty() {
        for candidate in [without(DECEASED_NAMES), with(DECEASED_NAMES, json!([]))] {
            let errors = validate(&candidate).unwrap_err();
            assert_eq!(
                errors.get(DECEASED_NAMES),
                Some(&[MSG_DECEASED_NAMES_REQUIRED.to_string()][..])
            );
        }
    }

    #[test]
    fn test_deceased_names_must_be_array() {
        let errors = validate(&with(DECEASED_NAMES, json!("Ahmad"))).unwrap_err();
        assert_eq!(
            errors.get(DECEASED_NAMES),
            Some(&["The deceased names field must be an array.".to_string()][..])
        );
    }

    #[test]
    fn test_deceased_name_elements() {
        let errors = validate(&with(
            DECEASED_NAMES,
            json!(["Ahmad", "", "x".repeat(256), 7, null]),
        ))
        .unwrap_err();

        assert!(errors.get("deceasedNames.0").is_none());
        assert_eq!(
            errors.get("deceasedNames.1"),
            Some(&["The deceasedNames.1 field is required.".to_string()][..])
        );
        assert_eq!(
            errors.get("deceasedNames.2"),
            Some(&["The deceasedNames.2 field must not be greater than 255 characters.".to_string()][..])
        );
        assert_eq!(
            errors.get("deceasedNames.3"),
            Some(&["The deceasedNames.3 field must be a string.".to_string()][..])
        );
        assert!(errors.get("deceasedNames.4").is_some());
        assert!(errors.mentions(DECEASED_NAMES));
    }

    #[test]
    fn test_already_contributed_must_be_strict_bool() {
        for value in [json!("yes"), json!("true"), json!(1), json!("1")] {
            let errors = validate(&with(ALREADY_CONTRIBUTED, value)).unwrap_err();
            assert_eq!(
                errors.get(ALREADY_CONTRIBUTED),
                Some(&["The already contributed field must be true or false.".to_string()][..])
            );
        }

        let errors = validate(&without(ALREADY_CONTRIBUTED)).unwrap_err();
        assert_eq!(
            errors.get(ALREADY_CONTRIBUTED),
            Some(&["The already contributed field is required.".to_string()][..])
        );
    }

    #[test]
    fn test_all_failures_are_collected() {
        let errors = validate(&candidate(json!({
            "requesterName": "",
            "organization": "PASTI Al Amin",
            "deceasedNames": [],
            "alreadyContributed": false,
        })))
        .unwrap_err();

        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec![DECEASED_NAMES, REQUESTER_NAME]);
    }

    #[test]
    fn test_empty_candidate_fails_every_field() {
        let errors = validate(&SubmissionCandidate::default()).unwrap_err();
        assert_eq!(errors.fields().count(), 4);
    }

    #[test]
    fn test_mentions_does_not_match_prefix_names() {
        let mut errors = FieldErrors::new();
        errors.add("deceasedNamesExtra", "x");
        assert!(!errors.mentions(DECEASED_NAMES));

        errors.add("deceasedNames.0", "x");
        assert!(errors.mentions(DECEASED_NAMES));
    }

    #[test]
    fn test_add_deduplicates_messages() {
        let mut errors = FieldErrors::new();
        errors.add(DECEASED_NAMES, MSG_DECEASED_NAMES_REQUIRED);
        errors.add(DECEASED_NAMES, MSG_DECEASED_NAMES_REQUIRED);
        assert_eq!(errors.get(DECEASED_NAMES).map(<[String]>::len), Some(1));
    }
}
