// src/models/validation.rs
// DOCUMENTATION: Human-readable validation failures
// PURPOSE: Flatten `validator` results into "full messages" for API payloads

use serde::Serialize;
use validator::{ValidationError, ValidationErrorsKind};

/// Outcome of a validation-gated save: the persisted entity or the rule violations
pub type Validated<T> = Result<T, ValidationErrors>;

/// Flat list of messages such as "Content can't be blank"
/// DOCUMENTATION: Serialized as `{"errors": [...]}` and delivered as a normal
/// 200 payload by the resource handlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<String>,
}

/// Declared attribute order of a validated struct; messages follow it
pub trait AttributeOrder {
    const ATTRIBUTES: &'static [&'static str];
}

impl ValidationErrors {
    /// Full messages for `T`, attribute by attribute in declaration order.
    /// Attributes missing from `T::ATTRIBUTES` come last, sorted by name.
    pub fn of<T: AttributeOrder>(source: validator::ValidationErrors) -> Self {
        let fields = source.errors();
        let mut rest: Vec<&str> = fields
            .keys()
            .copied()
            .filter(|field| !T::ATTRIBUTES.contains(field))
            .collect();
        rest.sort_unstable();

        let mut errors = Vec::new();
        for field in T::ATTRIBUTES.iter().copied().chain(rest) {
            if let Some(ValidationErrorsKind::Field(field_errors)) = fields.get(field) {
                let attribute = humanize(field);
                for error in field_errors {
                    errors.push(format!("{} {}", attribute, describe(error)));
                }
            }
        }

        ValidationErrors { errors }
    }
}

/// "photo_url_string" -> "Photo url string", "photo_id" -> "Photo"
pub fn humanize(field: &str) -> String {
    let base = field.strip_suffix("_id").unwrap_or(field);
    let spaced = base.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    match &*error.code {
        "required" => "can't be blank".to_string(),
        "length" => describe_length(error),
        other => format!("is invalid ({})", other),
    }
}

fn describe_length(error: &ValidationError) -> String {
    let bound = |name: &str| error.params.get(name).and_then(|v| v.as_u64());
    let actual = error
        .params
        .get("value")
        .and_then(|v| v.as_str())
        .map(|s| s.chars().count() as u64);

    match (bound("min"), bound("max"), actual) {
        (Some(min), _, Some(len)) if len < min => {
            if min == 1 {
                "can't be blank".to_string()
            } else {
                format!("is too short (minimum is {} characters)", min)
            }
        }
        (_, Some(max), _) => format!("is too long (maximum is {} characters)", max),
        _ => "is the wrong length".to_string(),
    }
}
