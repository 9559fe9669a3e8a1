//! Request validation against per-field type rules.

use crate::error::{AppError, FieldError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// JSON number or numeric string; integers are widened.
    Number,
    /// JSON integer, whole-valued float or integer string that fits in i64.
    Integer,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldRule {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        FieldRule { name, kind }
    }
}

/// A request body type whose fields are all required and checked by `RequestValidator`.
pub trait InputSchema: DeserializeOwned {
    fn rules() -> &'static [FieldRule];
}

pub struct RequestValidator;

impl RequestValidator {
    /// Check body against the rules and coerce accepted values to their canonical JSON type.
    /// Every violation is reported, not just the first. Fields without a rule are kept as-is.
    pub fn validate(mut body: Map<String, Value>, rules: &[FieldRule]) -> Result<Map<String, Value>, AppError> {
        let mut details = Vec::new();
        for rule in rules {
            match coerce_field(rule, body.get(rule.name)) {
                Ok(v) => {
                    body.insert(rule.name.to_string(), v);
                }
                Err(e) => details.push(e),
            }
        }
        if details.is_empty() {
            Ok(body)
        } else {
            Err(AppError::Validation(details))
        }
    }

    /// Validate a whole JSON body and deserialize it into `T`.
    pub fn parse<T: InputSchema>(body: Value) -> Result<T, AppError> {
        let map = match body {
            Value::Object(m) => m,
            _ => {
                return Err(AppError::invalid(FieldError::new(
                    &["body"],
                    "value is not a valid dict",
                    "type_error.dict",
                )))
            }
        };
        let map = Self::validate(map, T::rules())?;
        serde_json::from_value(Value::Object(map))
            .map_err(|e| AppError::invalid(FieldError::new(&["body"], e.to_string(), "value_error")))
    }
}

fn coerce_field(rule: &FieldRule, value: Option<&Value>) -> Result<Value, FieldError> {
    let v = match value {
        None | Some(Value::Null) => {
            return Err(FieldError::body(rule.name, "field required", "value_error.missing"))
        }
        Some(v) => v,
    };
    let coerced = match rule.kind {
        FieldKind::Text => v.as_str().map(|_| v.clone()),
        FieldKind::Number => as_number(v).map(Value::Number),
        FieldKind::Integer => as_integer(v).map(Value::from),
    };
    coerced.ok_or_else(|| {
        let (msg, kind) = match rule.kind {
            FieldKind::Text => ("str type expected", "type_error.str"),
            FieldKind::Number => ("value is not a valid float", "type_error.float"),
            FieldKind::Integer => ("value is not a valid integer", "type_error.integer"),
        };
        FieldError::body(rule.name, msg, kind)
    })
}

fn as_number(v: &Value) -> Option<Number> {
    match v {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => s
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .and_then(Number::from_f64),
        _ => None,
    }
}

fn as_integer(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProdutoCreate;
    use serde_json::json;

    fn fields(err: AppError) -> Vec<String> {
        match err {
            AppError::Validation(details) => details.iter().map(|d| d.field().to_string()).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_complete_payload() {
        let p: ProdutoCreate =
            RequestValidator::parse(json!({"nome": "Caneta", "preco": 2.5, "estoque": 100})).unwrap();
        assert_eq!(p.nome, "Caneta");
        assert_eq!(p.preco, 2.5);
        assert_eq!(p.estoque, 100);
    }

    #[test]
    fn integer_price_is_widened() {
        let p: ProdutoCreate = RequestValidator::parse(json!({"nome": "Lápis", "preco": 3, "estoque": 1})).unwrap();
        assert_eq!(p.preco, 3.0);
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let p: ProdutoCreate =
            RequestValidator::parse(json!({"nome": "Caneta", "preco": "2.5", "estoque": "100"})).unwrap();
        assert_eq!(p.preco, 2.5);
        assert_eq!(p.estoque, 100);
    }

    #[test]
    fn whole_float_stock_is_accepted() {
        let p: ProdutoCreate =
            RequestValidator::parse(json!({"nome": "Caneta", "preco": 2.5, "estoque": 100.0})).unwrap();
        assert_eq!(p.estoque, 100);
    }

    #[test]
    fn fractional_stock_is_rejected() {
        let err = RequestValidator::parse::<ProdutoCreate>(json!({"nome": "Caneta", "preco": 2.5, "estoque": 1.5}))
            .unwrap_err();
        assert_eq!(fields(err), vec!["estoque"]);

        let err = RequestValidator::parse::<ProdutoCreate>(json!({"nome": "Caneta", "preco": 2.5, "estoque": "1.5"}))
            .unwrap_err();
        assert_eq!(fields(err), vec!["estoque"]);
    }

    #[test]
    fn non_numeric_strings_are_rejected() {
        let err =
            RequestValidator::parse::<ProdutoCreate>(json!({"nome": "Caneta", "preco": "caro", "estoque": "muitos"}))
                .unwrap_err();
        assert_eq!(fields(err), vec!["preco", "estoque"]);

        let err = RequestValidator::parse::<ProdutoCreate>(json!({"nome": "Caneta", "preco": "NaN", "estoque": 1}))
            .unwrap_err();
        assert_eq!(fields(err), vec!["preco"]);
    }

    #[test]
    fn ignores_unknown_fields_including_id() {
        let p: ProdutoCreate =
            RequestValidator::parse(json!({"id": 42, "nome": "Borracha", "preco": 1.0, "estoque": 5, "cor": "azul"}))
                .unwrap();
        assert_eq!(p.nome, "Borracha");
    }

    #[test]
    fn reports_every_missing_field() {
        let err = RequestValidator::parse::<ProdutoCreate>(json!({})).unwrap_err();
        assert_eq!(fields(err), vec!["nome", "preco", "estoque"]);
    }

    #[test]
    fn rejects_null_and_mistyped_values() {
        let err = RequestValidator::parse::<ProdutoCreate>(json!({"nome": null, "preco": [1], "estoque": true}))
            .unwrap_err();
        assert_eq!(fields(err), vec!["nome", "preco", "estoque"]);
    }

    #[test]
    fn rejects_non_object_body() {
        let err = RequestValidator::parse::<ProdutoCreate>(json!([1, 2, 3])).unwrap_err();
        assert_eq!(fields(err), vec!["body"]);
    }
}
