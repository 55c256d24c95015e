//! Form definitions and the edited model.

use serde::{Deserialize, Serialize};

/// Stable identifier of a parameter.
pub type ParamId = u32;

/// Value type of a parameter. Only free-form strings are supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    String,
}

/// A named field definition exposed by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: ParamId,
    /// Display label
    pub name: String,
    #[serde(rename = "type", default)]
    pub param_type: ParamType,
}

impl Parameter {
    pub fn new(id: ParamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            param_type: ParamType::String,
        }
    }
}

/// One `{paramId, value}` entry of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamValue {
    pub param_id: ParamId,
    pub value: String,
}

impl ParamValue {
    pub fn new(param_id: ParamId, value: impl Into<String>) -> Self {
        Self {
            param_id,
            value: value.into(),
        }
    }
}

/// Named colors a model may carry. Never populated by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    Black,
    White,
}

/// Current values of a form plus an opaque color selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Model {
    pub param_values: Vec<ParamValue>,
    pub colors: Vec<Color>,
}
