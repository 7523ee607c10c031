//! Declarative request-body contracts.
//!
//! A route's body type implements [`Contract`], and the handler takes it
//! through the [`Valid`] extractor. The contract is checked against the raw
//! JSON before deserialization, so a request that violates it never reaches
//! the handler.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ApiError, FieldViolation};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .expect("email pattern compiles")
});

/// One constraint on a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present and a JSON string.
    RequiredString,
    /// Absent, or a JSON string.
    OptionalString,
    /// When present as a string, looks like an email address.
    Email,
    /// When present as a string, at least this many characters.
    MinLength(usize),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

/// Field name → rules for one route's body. Unlisted fields are rejected.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContract {
    pub fields: &'static [FieldRule],
}

impl ValidationContract {
    pub const fn new(fields: &'static [FieldRule]) -> Self {
        Self { fields }
    }

    /// Every violation in `body`, or `Ok` when there are none.
    pub fn check(&self, body: &Value) -> Result<(), Vec<FieldViolation>> {
        let Some(object) = body.as_object() else {
            return Err(vec![FieldViolation::new("body", "\"value\" must be of type object")]);
        };

        let mut violations = Vec::new();

        for field_rule in self.fields {
            check_field(field_rule, object, &mut violations);
        }

        for key in object.keys() {
            if !self.fields.iter().any(|f| f.field == key.as_str()) {
                violations.push(FieldViolation::new(key.as_str(), format!("\"{key}\" is not allowed")));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn check_field(rule: &FieldRule, object: &Map<String, Value>, out: &mut Vec<FieldViolation>) {
    let name = rule.field;
    let value = object.get(name);

    let text = match value {
        None => {
            if rule.rules.contains(&Rule::RequiredString) {
                out.push(FieldViolation::new(name, format!("\"{name}\" is required")));
            }
            return;
        }
        Some(Value::String(text)) if text.is_empty() => {
            out.push(FieldViolation::new(name, format!("\"{name}\" is not allowed to be empty")));
            return;
        }
        Some(Value::String(text)) => text,
        Some(_) => {
            out.push(FieldViolation::new(name, format!("\"{name}\" must be a string")));
            return;
        }
    };

    for r in rule.rules {
        match r {
            Rule::RequiredString | Rule::OptionalString => {}
            Rule::Email => {
                if !EMAIL_PATTERN.is_match(text) {
                    out.push(FieldViolation::new(name, format!("\"{name}\" must be a valid email")));
                }
            }
            Rule::MinLength(min) => {
                if text.chars().count() < *min {
                    out.push(FieldViolation::new(
                        name,
                        format!("\"{name}\" length must be at least {min} characters long"),
                    ));
                }
            }
        }
    }
}

/// A request body type with a declared shape contract.
pub trait Contract {
    const CONTRACT: ValidationContract;
}

/// JSON body extractor that enforces `T::CONTRACT` before deserializing.
#[derive(Debug)]
pub struct Valid<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: Contract + DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection, "unreadable request body");
            ApiError::bad_request("Invalid JSON body")
        })?;

        T::CONTRACT.check(&body).map_err(ApiError::validation)?;

        let parsed = serde_json::from_value(body).map_err(|e| {
            tracing::debug!(error = %e, "body passed its contract but did not deserialize");
            ApiError::bad_request("Invalid JSON body")
        })?;

        Ok(Valid(parsed))
    }
}
