//! Parameter schemas: description and validation of tool input.
//!
//! A [`ParamSchema`] is a flat list of [`FieldSpec`]s. It renders to a JSON
//! schema for the agent and validates caller arguments before a tool runs.
//! Context-dependent shapes are built by composing a base schema with an
//! extension via [`ParamSchema::extend`].

use serde_json::{Map, Value, json};

use crate::error::{FieldIssue, ValidationError};

/// Type and constraints of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
    /// Integer with optional inclusive bounds.
    Integer { min: Option<i64>, max: Option<i64> },
    /// One of a fixed set of strings.
    Enum(&'static [&'static str]),
}

impl FieldKind {
    fn json_type(&self) -> &'static str {
        match self {
            Self::String | Self::Enum(_) => "string",
            Self::Boolean => "boolean",
            Self::Integer { .. } => "integer",
        }
    }
}

/// One named input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Required string field.
    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self::with_kind(name, description, FieldKind::String)
    }

    /// Required boolean field.
    pub fn boolean(name: &'static str, description: &'static str) -> Self {
        Self::with_kind(name, description, FieldKind::Boolean)
    }

    /// Required unbounded integer field; narrow with [`min`](Self::min)/[`max`](Self::max).
    pub fn integer(name: &'static str, description: &'static str) -> Self {
        Self::with_kind(
            name,
            description,
            FieldKind::Integer {
                min: None,
                max: None,
            },
        )
    }

    /// Required field restricted to `values`.
    pub fn one_of(
        name: &'static str,
        description: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        Self::with_kind(name, description, FieldKind::Enum(values))
    }

    fn with_kind(name: &'static str, description: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            description,
            required: true,
            kind,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Inclusive lower bound. Only meaningful for integer fields.
    pub fn min(mut self, bound: i64) -> Self {
        if let FieldKind::Integer { min, .. } = &mut self.kind {
            *min = Some(bound);
        }
        self
    }

    /// Inclusive upper bound. Only meaningful for integer fields.
    pub fn max(mut self, bound: i64) -> Self {
        if let FieldKind::Integer { max, .. } = &mut self.kind {
            *max = Some(bound);
        }
        self
    }

    fn to_json_schema(&self) -> Value {
        let mut prop = Map::new();
        prop.insert("type".into(), json!(self.kind.json_type()));
        prop.insert("description".into(), json!(self.description));
        match &self.kind {
            FieldKind::Integer { min, max } => {
                if let Some(min) = min {
                    prop.insert("minimum".into(), json!(min));
                }
                if let Some(max) = max {
                    prop.insert("maximum".into(), json!(max));
                }
            }
            FieldKind::Enum(values) => {
                prop.insert("enum".into(), json!(values));
            }
            FieldKind::String | FieldKind::Boolean => {}
        }
        Value::Object(prop)
    }

    /// Check one present value and return its normalized form.
    fn check(&self, value: &Value) -> Result<Value, String> {
        match &self.kind {
            FieldKind::String => value
                .as_str()
                .map(|s| json!(s))
                .ok_or_else(|| format!("expected string, got {}", json_type_name(value))),
            FieldKind::Boolean => value
                .as_bool()
                .map(|b| json!(b))
                .ok_or_else(|| format!("expected boolean, got {}", json_type_name(value))),
            FieldKind::Integer { min, max } => {
                let n = as_integer(value)?;
                if let Some(min) = min
                    && n < *min
                {
                    return Err(format!("must be at least {}", min));
                }
                if let Some(max) = max
                    && n > *max
                {
                    return Err(format!("must be at most {}", max));
                }
                Ok(json!(n))
            }
            FieldKind::Enum(values) => {
                let s = value
                    .as_str()
                    .ok_or_else(|| format!("expected string, got {}", json_type_name(value)))?;
                if values.contains(&s) {
                    Ok(json!(s))
                } else {
                    Err(format!("must be one of: {}", values.join(", ")))
                }
            }
        }
    }
}

fn as_integer(value: &Value) -> Result<i64, String> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    if value.as_u64().is_some() {
        return Err("integer is out of range".to_string());
    }
    match value.as_f64() {
        // 5.0 is an integer as far as JSON callers are concerned.
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        Some(_) => Err("expected integer, got a fractional number".to_string()),
        None => Err(format!("expected integer, got {}", json_type_name(value))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Describes and validates the arguments of one tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSchema {
    fields: Vec<FieldSpec>,
}

impl ParamSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        let mut schema = Self::default();
        for field in fields {
            schema.upsert(field);
        }
        schema
    }

    /// Add `extension`'s fields; a field with an existing name replaces it.
    pub fn extend(mut self, extension: ParamSchema) -> Self {
        for field in extension.fields {
            self.upsert(field);
        }
        self
    }

    fn upsert(&mut self, field: FieldSpec) {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// JSON schema for LLM function calling.
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.to_json_schema()))
            .collect();
        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false
        })
    }

    /// Validate caller input and return the normalized arguments.
    ///
    /// Unknown keys are dropped and `null` counts as absent. All issues are
    /// collected before failing.
    pub fn validate(&self, input: &Value) -> Result<Value, ValidationError> {
        let Some(obj) = input.as_object() else {
            return Err(ValidationError::new(vec![FieldIssue::new(
                "$",
                format!("expected an object, got {}", json_type_name(input)),
            )]));
        };

        let mut issues = Vec::new();
        let mut out = Map::new();

        for field in &self.fields {
            match obj.get(field.name).filter(|v| !v.is_null()) {
                None if field.required => issues.push(FieldIssue::new(field.name, "is required")),
                None => {}
                Some(value) => match field.check(value) {
                    Ok(normalized) => {
                        out.insert(field.name.to_string(), normalized);
                    }
                    Err(message) => issues.push(FieldIssue::new(field.name, message)),
                },
            }
        }

        for key in obj.keys().filter(|k| self.field(k).is_none()) {
            tracing::debug!(field = %key, "Dropping unknown tool argument");
        }

        if issues.is_empty() {
            Ok(Value::Object(out))
        } else {
            Err(ValidationError::new(issues))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SUPPLY_TYPES: &[&str] = &["finite", "infinite"];

    fn sample() -> ParamSchema {
        ParamSchema::new(vec![
            FieldSpec::string("tokenName", "The name of the token"),
            FieldSpec::integer("decimals", "Decimal places").min(0).max(18).optional(),
            FieldSpec::one_of("supplyType", "Supply type", SUPPLY_TYPES).optional(),
            FieldSpec::boolean("formal", "Formal style").optional(),
        ])
    }

    #[test]
    fn test_valid_input_is_normalized() {
        let out = sample()
            .validate(&json!({
                "tokenName": "Gold",
                "decimals": 2.0,
                "supplyType": "finite",
                "extra": "dropped"
            }))
            .unwrap();
        assert_eq!(
            out,
            json!({"tokenName": "Gold", "decimals": 2, "supplyType": "finite"})
        );
    }

    #[test]
    fn test_null_optional_is_absent() {
        let out = sample()
            .validate(&json!({"tokenName": "Gold", "decimals": null}))
            .unwrap();
        assert_eq!(out, json!({"tokenName": "Gold"}));
    }

    #[test]
    fn test_collects_all_issues() {
        let err = sample()
            .validate(&json!({
                "decimals": 19,
                "supplyType": "sometimes",
                "formal": "yes"
            }))
            .unwrap_err();
        assert_eq!(
            err.issues,
            vec![
                FieldIssue::new("tokenName", "is required"),
                FieldIssue::new("decimals", "must be at most 18"),
                FieldIssue::new("supplyType", "must be one of: finite, infinite"),
                FieldIssue::new("formal", "expected boolean, got string"),
            ]
        );
    }

    #[test]
    fn test_integer_bounds_are_inclusive() {
        let schema = sample();
        for ok in [0, 18] {
            assert!(
                schema
                    .validate(&json!({"tokenName": "a", "decimals": ok}))
                    .is_ok()
            );
        }
        let err = schema
            .validate(&json!({"tokenName": "a", "decimals": -1}))
            .unwrap_err();
        assert_eq!(err.issues[0].message, "must be at least 0");
    }

    #[test]
    fn test_rejects_fractional_and_huge_integers() {
        let schema = sample();
        let err = schema
            .validate(&json!({"tokenName": "a", "decimals": 1.5}))
            .unwrap_err();
        assert!(err.issues[0].message.contains("fractional"));

        let err = schema
            .validate(&json!({"tokenName": "a", "decimals": u64::MAX}))
            .unwrap_err();
        assert!(err.issues[0].message.contains("out of range"));
    }

    #[test]
    fn test_non_object_input() {
        let err = sample().validate(&json!(["Gold"])).unwrap_err();
        assert_eq!(err.issues, vec![FieldIssue::new("$", "expected an object, got array")]);
    }

    #[test]
    fn test_extend_adds_and_overrides() {
        let base = ParamSchema::new(vec![
            FieldSpec::string("a", "first"),
            FieldSpec::string("b", "second").optional(),
        ]);
        let extended = base.extend(ParamSchema::new(vec![
            FieldSpec::string("b", "second, now required"),
            FieldSpec::string("c", "third").optional(),
        ]));
        assert_eq!(extended.field_names(), vec!["a", "b", "c"]);
        assert!(extended.field("b").unwrap().required);
    }

    #[test]
    fn test_json_schema_shape() {
        let schema = sample().to_json_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["tokenName"]));
        assert_eq!(schema["additionalProperties"], json!(false));
        assert_eq!(schema["properties"]["decimals"]["minimum"], 0);
        assert_eq!(schema["properties"]["decimals"]["maximum"], 18);
        assert_eq!(
            schema["properties"]["supplyType"]["enum"],
            json!(["finite", "infinite"])
        );
        assert_eq!(schema["properties"]["supplyType"]["type"], "string");
    }
}
