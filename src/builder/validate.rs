//! Ordered schema validation for builder submissions.
//!
//! The submitted body arrives as raw JSON rather than through a serde
//! derive: the contract fixes which rule reports first when several fields
//! are wrong, and serde's own error ordering does not honor that.

use serde_json::Value;
use strum::VariantNames;

use crate::builder::field::{BuilderField, DisplayOrder};
use crate::error::ValidationError;

/// Maximum number of distinct values across `choices` and `default`.
pub const MAX_DISTINCT_CHOICES: usize = 5;

/// Validate a submitted JSON body into a [`BuilderField`].
///
/// Rules run in a fixed order; the first violated rule determines the
/// reported error. The returned record is structurally unchanged, with no
/// trimming applied yet.
pub fn validate(body: &Value) -> Result<BuilderField, ValidationError> {
    let choices = parse_choices(body)?;
    let default_choice = parse_default(body)?;
    let display_order = parse_display_order(body)?;
    let label = parse_label(body)?;
    let multiselect = parse_flag(body, "multiselect")?;
    let required = parse_flag(body, "required")?;

    check_choice_budget(&choices, &default_choice)?;

    Ok(BuilderField {
        choices,
        default_choice,
        display_order,
        label,
        multiselect,
        required,
    })
}

fn parse_choices(body: &Value) -> Result<Vec<String>, ValidationError> {
    let invalid = || {
        ValidationError::new("choices", "choices must be a non-empty array of strings")
    };

    let items = body
        .get("choices")
        .and_then(Value::as_array)
        .ok_or_else(invalid)?;
    if items.is_empty() {
        return Err(invalid());
    }

    items
        .iter()
        .map(|item| item.as_str().map(str::to_owned).ok_or_else(invalid))
        .collect()
}

fn parse_default(body: &Value) -> Result<String, ValidationError> {
    body.get("default")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| ValidationError::new("default", "default must be a string"))
}

fn parse_display_order(body: &Value) -> Result<DisplayOrder, ValidationError> {
    let invalid = || {
        ValidationError::new(
            "displayOrder",
            format!(
                "invalid display order; expected one of: {}",
                DisplayOrder::VARIANTS.join(", ")
            ),
        )
    };

    body.get("displayOrder")
        .and_then(Value::as_str)
        .ok_or_else(invalid)?
        .parse()
        .map_err(|_| invalid())
}

fn parse_label(body: &Value) -> Result<String, ValidationError> {
    body.get("label")
        .and_then(Value::as_str)
        .filter(|label| label.chars().count() >= 2)
        .map(str::to_owned)
        .ok_or_else(|| {
            ValidationError::new("label", "label must be a string of at least 2 characters")
        })
}

fn parse_flag(body: &Value, field: &'static str) -> Result<bool, ValidationError> {
    body.get(field)
        .and_then(Value::as_bool)
        .ok_or_else(|| ValidationError::new(field, format!("{field} must be a boolean")))
}

/// Cross-field invariant: `choices ∪ {default}`, compared by exact string
/// equality, may hold at most [`MAX_DISTINCT_CHOICES`] distinct values.
fn check_choice_budget(choices: &[String], default_choice: &str) -> Result<(), ValidationError> {
    let mut distinct: Vec<&str> = Vec::with_capacity(choices.len() + 1);
    for value in choices.iter().map(String::as_str).chain([default_choice]) {
        if !distinct.contains(&value) {
            distinct.push(value);
        }
    }

    if distinct.len() > MAX_DISTINCT_CHOICES {
        return Err(ValidationError::new(
            "choices",
            format!("choices and default together must not exceed {MAX_DISTINCT_CHOICES} distinct values"),
        ));
    }
    Ok(())
}
