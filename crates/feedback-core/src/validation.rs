//! Feedback Form Validation
//!
//! Turns raw form input into a [`FeedbackData`] or a per-field map of
//! messages. Lengths are counted in UTF-16 code units, the same unit the
//! browser's `maxlength` uses.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::model::{Category, FeedbackData, Status};

pub const TITLE_MIN: usize = 10;
pub const TITLE_MAX: usize = 100;
pub const DESCRIPTION_MIN: usize = 10;
pub const DESCRIPTION_MAX: usize = 500;

/// Raw form input, as typed/selected by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackForm {
    pub title: String,
    pub category: String,
    pub status: Option<String>,
    pub description: String,
}

impl FeedbackForm {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        status: Option<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            status,
            description: description.into(),
        }
    }
}

/// Whether the status field must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRule {
    /// New feedback: status may be left out
    Optional,
    /// Editing: status must be picked
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Category,
    Status,
    Description,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::Category => "category",
            Field::Status => "status",
            Field::Description => "description",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) invalid", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }
}

fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn check_length(
    errors: &mut ValidationErrors,
    field: Field,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = text_len(value);
    if len < min {
        errors.add(field, format!("{label} must be at least {min} characters"));
    } else if len > max {
        errors.add(field, format!("{label} must be at most {max} characters"));
    }
}

pub fn validate(form: &FeedbackForm, rule: StatusRule) -> Result<FeedbackData, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    check_length(&mut errors, Field::Title, "Title", &form.title, TITLE_MIN, TITLE_MAX);

    let category = Category::from_label(&form.category);
    if category.is_none() {
        errors.add(Field::Category, "Category is required");
    }

    let status = match form.status.as_deref() {
        Some(label) => {
            let parsed = Status::from_label(label);
            if parsed.is_none() {
                errors.add(Field::Status, "Status is required");
            }
            parsed
        }
        None => {
            if rule == StatusRule::Required {
                errors.add(Field::Status, "Status is required");
            }
            None
        }
    };

    check_length(
        &mut errors,
        Field::Description,
        "Description",
        &form.description,
        DESCRIPTION_MIN,
        DESCRIPTION_MAX,
    );

    match category {
        Some(category) if errors.is_empty() => Ok(FeedbackData {
            title: form.title.clone(),
            category,
            status,
            description: form.description.clone(),
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, description: &str) -> FeedbackForm {
        FeedbackForm::new(title, "Feature", None, description)
    }

    #[test]
    fn test_title_bounds() {
        let desc = "A reasonable description";
        let err = validate(&form(&"x".repeat(9), desc), StatusRule::Optional).unwrap_err();
        assert_eq!(err.get(Field::Title), Some("Title must be at least 10 characters"));

        assert!(validate(&form(&"x".repeat(10), desc), StatusRule::Optional).is_ok());
        assert!(validate(&form(&"x".repeat(100), desc), StatusRule::Optional).is_ok());

        let err = validate(&form(&"x".repeat(101), desc), StatusRule::Optional).unwrap_err();
        assert_eq!(err.get(Field::Title), Some("Title must be at most 100 characters"));
    }

    #[test]
    fn test_description_bounds() {
        let title = "Add dark mode support";
        assert!(validate(&form(title, &"d".repeat(500)), StatusRule::Optional).is_ok());

        let err = validate(&form(title, &"d".repeat(501)), StatusRule::Optional).unwrap_err();
        assert_eq!(err.get(Field::Description), Some("Description must be at most 500 characters"));
        assert_eq!(err.len(), 1);

        let err = validate(&form(title, "short"), StatusRule::Optional).unwrap_err();
        assert_eq!(err.get(Field::Description), Some("Description must be at least 10 characters"));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // Each emoji is two UTF-16 units
        let title = "🚀".repeat(5);
        assert!(validate(&form(&title, "Ten chars!"), StatusRule::Optional).is_ok());
    }

    #[test]
    fn test_category_and_status_sets() {
        let mut input = form("Add dark mode support", "A reasonable description");
        input.category = "Docs".to_string();
        let err = validate(&input, StatusRule::Optional).unwrap_err();
        assert_eq!(err.get(Field::Category), Some("Category is required"));

        input.category = "Bug".to_string();
        input.status = Some("Archived".to_string());
        let err = validate(&input, StatusRule::Optional).unwrap_err();
        assert_eq!(err.get(Field::Status), Some("Status is required"));

        input.status = Some("In-Progress".to_string());
        let data = validate(&input, StatusRule::Required).unwrap();
        assert_eq!(data.category, Category::Bug);
        assert_eq!(data.status, Some(Status::InProgress));
    }

    #[test]
    fn test_labels_must_match_exactly() {
        let mut input = form("Add dark mode support", "A reasonable description");
        input.category = "bug".to_string();
        input.status = Some("in-progress".to_string());
        let err = validate(&input, StatusRule::Required).unwrap_err();
        assert_eq!(err.get(Field::Category), Some("Category is required"));
        assert_eq!(err.get(Field::Status), Some("Status is required"));
    }

    #[test]
    fn test_status_required_when_editing() {
        let input = form("Add dark mode support", "A reasonable description");
        assert_eq!(validate(&input, StatusRule::Optional).unwrap().status, None);

        let err = validate(&input, StatusRule::Required).unwrap_err();
        assert_eq!(err.get(Field::Status), Some("Status is required"));
    }

    #[test]
    fn test_reports_every_failing_field() {
        let input = FeedbackForm::default();
        let err = validate(&input, StatusRule::Required).unwrap_err();
        let fields: Vec<_> = err.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Title, Field::Category, Field::Status, Field::Description]);
    }
}
