//! Schema registry for API responses
//!
//! Each response shape's JSON Schema is generated from its `tldr-proto` type with
//! [`schemars::schema_for!`] and compiled once with `jsonschema`. Candidates are checked
//! against it before they are trusted, then decoded with serde (absent or `null`
//! fields become empty values).
//!
//! Unknown extra fields are accepted so older readers keep working against newer APIs.

use std::collections::HashMap;

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use tldr_proto::{GetNewsSummaryResponse, ListNewsSummariesResponse};

use crate::error::SchemaError;

/// The response shapes the reader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `GET /api/news`
    SummaryList,
    /// `GET /api/news/{date}`
    SummaryDetail,
}

impl Shape {
    pub const ALL: [Shape; 2] = [Shape::SummaryList, Shape::SummaryDetail];

    /// Protobuf message name within the package
    pub fn message_name(&self) -> &'static str {
        match self {
            Shape::SummaryList => "ListNewsSummariesResponse",
            Shape::SummaryDetail => "GetNewsSummaryResponse",
        }
    }

    /// Fully-qualified protobuf message name, e.g. `tldr.news.v1.GetNewsSummaryResponse`
    pub fn full_name(&self) -> String {
        format!("{}.{}", tldr_proto::PACKAGE, self.message_name())
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_name())
    }
}

/// A message type bound to its registered shape
pub trait ShapedMessage: DeserializeOwned + JsonSchema {
    const SHAPE: Shape;
}

impl ShapedMessage for ListNewsSummariesResponse {
    const SHAPE: Shape = Shape::SummaryList;
}

impl ShapedMessage for GetNewsSummaryResponse {
    const SHAPE: Shape = Shape::SummaryDetail;
}

/// Compiled validators for every response shape
pub struct SchemaRegistry {
    schemas: HashMap<Shape, serde_json::Value>,
    validators: HashMap<Shape, jsonschema::Validator>,
}

impl SchemaRegistry {
    /// Build and compile the schemas of all shapes.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Generation` if a generated schema does not compile.
    pub fn new() -> Result<Self, SchemaError> {
        let mut schemas = HashMap::new();
        schemas.insert(
            Shape::SummaryList,
            to_value(schema_for!(ListNewsSummariesResponse))?,
        );
        schemas.insert(
            Shape::SummaryDetail,
            to_value(schema_for!(GetNewsSummaryResponse))?,
        );

        let mut validators = HashMap::new();
        for (shape, schema) in &schemas {
            let validator = jsonschema::validator_for(schema)
                .map_err(|e| SchemaError::Generation(format!("{shape}: {e}")))?;
            validators.insert(*shape, validator);
        }

        Ok(Self {
            schemas,
            validators,
        })
    }

    /// The JSON Schema registered for a shape
    pub fn schema(&self, shape: Shape) -> Option<&serde_json::Value> {
        self.schemas.get(&shape)
    }

    /// Check a candidate against a shape.
    ///
    /// # Errors
    ///
    /// `SchemaError::Mismatch` carrying the first structural mismatch, e.g.
    /// `summaries.0.date: 5 is not of types "null", "string"`.
    pub fn validate(&self, shape: Shape, candidate: &serde_json::Value) -> Result<(), SchemaError> {
        let validator = self
            .validators
            .get(&shape)
            .ok_or_else(|| SchemaError::Generation(format!("{shape}: not registered")))?;

        match validator.iter_errors(candidate).next() {
            None => Ok(()),
            Some(error) => {
                let path = dotted_path(&error.instance_path.to_string());
                let description = if path.is_empty() {
                    error.to_string()
                } else {
                    format!("{path}: {error}")
                };
                Err(SchemaError::Mismatch(description))
            }
        }
    }

    /// Decode a candidate already known to be valid into its typed message.
    ///
    /// Absent optional fields take their defaults: empty string for scalars,
    /// empty sequence for repeated fields.
    pub fn decode<M: ShapedMessage>(&self, candidate: serde_json::Value) -> Result<M, SchemaError> {
        Ok(serde_json::from_value(candidate)?)
    }

    /// `validate` followed by `decode`
    pub fn validate_and_decode<M: ShapedMessage>(
        &self,
        candidate: serde_json::Value,
    ) -> Result<M, SchemaError> {
        self.validate(M::SHAPE, &candidate)?;
        self.decode(candidate)
    }
}

fn to_value(schema: schemars::Schema) -> Result<serde_json::Value, SchemaError> {
    serde_json::to_value(schema).map_err(|e| SchemaError::Generation(e.to_string()))
}

/// `/summaries/0/date` -> `summaries.0.date`
fn dotted_path(pointer: &str) -> String {
    pointer
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}
