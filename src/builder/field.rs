//! Wire types for the builder field contract.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// Presentation order for a field's choices.
///
/// Purely a passthrough value: the service validates it but never sorts by it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DisplayOrder {
    /// Sort choices A→Z.
    AlphabeticallyAscending,
    /// Sort choices Z→A.
    AlphabeticallyDescending,
    /// Keep the submitted order.
    Predefined,
    /// Sort numerically, smallest first.
    NaturalNumberAscending,
    /// Sort numerically, largest first.
    NaturalNumberDescending,
}

/// A validated form-builder field definition.
///
/// Constructed fresh per request from the submitted JSON body; has no
/// identity beyond the request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderField {
    /// Selectable choices, in submission order.
    pub choices: Vec<String>,
    /// Default selected choice.
    #[serde(rename = "default")]
    pub default_choice: String,
    /// How choices should be presented.
    pub display_order: DisplayOrder,
    /// Human-readable field label.
    pub label: String,
    /// Whether multiple choices may be selected.
    pub multiselect: bool,
    /// Whether the field must be answered.
    pub required: bool,
}
