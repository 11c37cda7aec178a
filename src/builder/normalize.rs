//! Post-validation normalization of builder fields.

use crate::builder::field::BuilderField;

/// Maximum length, in characters, of a normalized label or choice value.
pub const MAX_VALUE_LEN: usize = 40;

/// Normalize a validated [`BuilderField`] into its response form.
///
/// Pure and deterministic: `label` and `default` are trimmed and capped at
/// [`MAX_VALUE_LEN`] characters; `choices` becomes the submitted choices
/// followed by the default, each cleaned the same way, with empty strings
/// dropped and duplicates removed keeping the first occurrence. Running the
/// normalizer on its own output is a no-op.
pub fn normalize(field: BuilderField) -> BuilderField {
    let default_choice = clean(&field.default_choice);

    let mut choices: Vec<String> = Vec::with_capacity(field.choices.len() + 1);
    for raw in field.choices.iter().chain([&field.default_choice]) {
        let value = clean(raw);
        if value.is_empty() || choices.contains(&value) {
            continue;
        }
        choices.push(value);
    }

    BuilderField {
        choices,
        default_choice,
        label: clean(&field.label),
        display_order: field.display_order,
        multiselect: field.multiselect,
        required: field.required,
    }
}

/// Trim surrounding whitespace and cap at [`MAX_VALUE_LEN`] characters.
///
/// Counts Unicode scalar values, so a multi-byte character is kept or
/// dropped whole.
fn clean(raw: &str) -> String {
    raw.trim().chars().take(MAX_VALUE_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::field::DisplayOrder;
    use pretty_assertions::assert_eq;

    fn test_field(choices: &[&str], default_choice: &str, label: &str) -> BuilderField {
        BuilderField {
            choices: choices.iter().map(|c| c.to_string()).collect(),
            default_choice: default_choice.to_string(),
            display_order: DisplayOrder::Predefined,
            label: label.to_string(),
            multiselect: false,
            required: true,
        }
    }

    #[test]
    fn already_normalized_field_is_unchanged() {
        let field = test_field(&["Red", "Blue"], "Red", "Color");

        assert_eq!(normalize(field.clone()), field);
    }

    #[test]
    fn trims_label_and_default() {
        let field = normalize(test_field(&["Red"], "  Red ", "  Color  "));

        assert_eq!(field.label, "Color");
        assert_eq!(field.default_choice, "Red");
    }

    #[test]
    fn truncates_to_forty_characters() {
        let long = "x".repeat(50);
        let field = normalize(test_field(&[long.as_str()], long.as_str(), long.as_str()));

        assert_eq!(field.label.chars().count(), MAX_VALUE_LEN);
        assert_eq!(field.default_choice.chars().count(), MAX_VALUE_LEN);
        assert_eq!(field.choices, vec!["x".repeat(MAX_VALUE_LEN)]);
    }

    #[test]
    fn truncation_never_splits_a_character() {
        let long = "é".repeat(50);
        let field = normalize(test_field(&[long.as_str()], "a", "ab"));

        assert_eq!(field.choices[0], "é".repeat(MAX_VALUE_LEN));
    }

    #[test]
    fn appends_default_to_choices() {
        let field = normalize(test_field(&["Red", "Blue"], "Green", "Color"));

        assert_eq!(field.choices, vec!["Red", "Blue", "Green"]);
    }

    #[test]
    fn dedupes_keeping_first_occurrence() {
        let field = normalize(test_field(&["b", "a", "b"], "a", "Letters"));

        assert_eq!(field.choices, vec!["b", "a"]);
    }

    #[test]
    fn drops_choices_that_trim_to_empty() {
        let field = normalize(test_field(&["  ", "Red"], "Red", "Color"));

        assert_eq!(field.choices, vec!["Red"]);
    }

    #[test]
    fn dedupes_values_that_collide_after_cleaning() {
        let field = normalize(test_field(&["Red ", " Red"], "Red", "Color"));

        assert_eq!(field.choices, vec!["Red"]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize(test_field(&[" b ", "a", "b"], " a ", "  Letters  "));
        let twice = normalize(once.clone());

        assert_eq!(once, twice);
    }
}
