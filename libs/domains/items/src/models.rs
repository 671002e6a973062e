use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

/// Stored price of an item.
///
/// Items written by the service always carry a numeric amount, but the
/// document may be edited by hand, so anything else is kept verbatim and
/// ignored by numeric statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Other(Value),
}

impl Price {
    /// The numeric amount, if this price is a finite number.
    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Amount(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::Amount(value)
    }
}

/// Item entity, one element of the persisted collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Store-assigned identifier, unique within the collection
    pub id: i64,
    pub name: String,
    /// Absent only in hand-edited documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Price>,
}

impl Item {
    pub fn new(id: i64, input: ItemInput) -> Self {
        Self {
            id,
            name: input.name,
            category: Some(input.category),
            price: Some(Price::Amount(input.price)),
        }
    }

    /// Numeric price, `None` when missing or not a number.
    pub fn amount(&self) -> Option<f64> {
        self.price.as_ref().and_then(Price::amount)
    }

    /// Case-insensitive substring match on name or category.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(needle))
    }
}

/// Request body for create and update.
///
/// Fields are kept as raw JSON so that wrong types surface as per-field
/// validation errors instead of a body parse failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ItemPayload {
    #[serde(default)]
    #[schema(value_type = String, example = "Pen")]
    pub name: Option<Value>,
    #[serde(default)]
    #[schema(value_type = String, example = "Office")]
    pub category: Option<Value>,
    #[serde(default)]
    #[schema(value_type = f64, example = 1.5)]
    pub price: Option<Value>,
}

/// Validated, trimmed item fields
#[derive(Debug, Clone, PartialEq)]
pub struct ItemInput {
    pub name: String,
    pub category: String,
    pub price: f64,
}

const NAME_MESSAGE: &str = "Name is required and must be a non-empty string";
const CATEGORY_MESSAGE: &str = "Category is required and must be a non-empty string";
const PRICE_MESSAGE: &str = "Price is required and must be a non-negative number";

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn non_empty_string(value: &Option<Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim()),
        _ => None,
    }
}

fn non_negative_number(value: &Option<Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64().filter(|p| *p >= 0.0),
        _ => None,
    }
}

impl Validate for ItemPayload {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if non_empty_string(&self.name).is_none() {
            errors.add("name", field_error("required", NAME_MESSAGE));
        }
        if non_empty_string(&self.category).is_none() {
            errors.add("category", field_error("required", CATEGORY_MESSAGE));
        }
        if non_negative_number(&self.price).is_none() {
            errors.add("price", field_error("range", PRICE_MESSAGE));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl ItemPayload {
    /// Validate every field and produce trimmed input.
    pub fn into_input(self) -> Result<ItemInput, ValidationErrors> {
        self.validate()?;

        match (
            non_empty_string(&self.name),
            non_empty_string(&self.category),
            non_negative_number(&self.price),
        ) {
            (Some(name), Some(category), Some(price)) => Ok(ItemInput {
                name: name.to_string(),
                category: category.to_string(),
                price,
            }),
            // validate() above rejects every other combination
            _ => Err(ValidationErrors::new()),
        }
    }
}

/// Query parameters for listing items
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemQuery {
    /// Case-insensitive substring matched against name and category
    pub q: Option<String>,
    /// Maximum number of results; must be a non-negative integer
    pub limit: Option<String>,
}

/// `{success, count, data}` list envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Item>,
}

/// `{success, message?, data}` single-item envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Item,
}

impl ItemResponse {
    pub fn new(data: Item) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(data: Item, message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            data,
        }
    }
}
