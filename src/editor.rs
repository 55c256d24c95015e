//! Parameter editing state.
//!
//! [`ParameterEditor`] owns the id → value mapping for one form instance. It is
//! seeded once from the initial [`Model`], mutated one key at a time, and
//! flattened back into a [`Model`] on demand.

use std::collections::BTreeMap;

use tracing::{debug, trace, warn};

use crate::model::{Color, Model, ParamId, ParamValue, Parameter};

/// One rendered row: a parameter and the value currently shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub param: &'a Parameter,
    pub value: &'a str,
}

/// Editable form over a fixed list of parameters.
#[derive(Debug, Clone)]
pub struct ParameterEditor {
    params: Vec<Parameter>,
    values: BTreeMap<ParamId, String>,
    colors: Vec<Color>,
}

impl ParameterEditor {
    /// Build the editor from the parameter list and the initial model.
    ///
    /// Duplicate ids in `model.param_values` resolve last-write-wins. Ids that do
    /// not match any parameter are kept and show up again in [`Self::get_model`].
    pub fn new(params: Vec<Parameter>, model: Model) -> Self {
        let mut values = BTreeMap::new();
        for pv in model.param_values {
            values.insert(pv.param_id, pv.value);
        }

        let orphans = values
            .keys()
            .filter(|id| !params.iter().any(|p| p.id == **id))
            .count();
        debug!(
            params = params.len(),
            seeded = values.len(),
            orphans,
            "parameter editor seeded"
        );

        Self {
            params,
            values,
            colors: model.colors,
        }
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Value displayed for `id`; empty when nothing was seeded or typed.
    pub fn value(&self, id: ParamId) -> &str {
        self.values.get(&id).map(String::as_str).unwrap_or("")
    }

    /// Rows to render, one per parameter in definition order.
    pub fn fields(&self) -> impl Iterator<Item = Field<'_>> {
        self.params.iter().map(|param| Field {
            param,
            value: self.value(param.id),
        })
    }

    fn is_rendered(&self, id: ParamId) -> bool {
        self.params.iter().any(|p| p.id == id)
    }

    /// Replace the value of a rendered parameter.
    ///
    /// The value is stored verbatim. Returns `false` without touching state when
    /// `id` is not one of the editor's parameters.
    pub fn handle_change(&mut self, id: ParamId, value: impl Into<String>) -> bool {
        if !self.is_rendered(id) {
            warn!(param_id = id, "ignoring change for unknown parameter");
            return false;
        }

        let value = value.into();
        trace!(param_id = id, value = %value, "parameter changed");
        self.values.insert(id, value);
        true
    }

    /// Flatten the current state into a model, ordered by ascending id.
    ///
    /// Parameters that were neither seeded nor edited are omitted. Colors are
    /// passed through from the initial model.
    pub fn get_model(&self) -> Model {
        Model {
            param_values: self
                .values
                .iter()
                .map(|(id, value)| ParamValue::new(*id, value.clone()))
                .collect(),
            colors: self.colors.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> ParameterEditor {
        ParameterEditor::new(
            vec![Parameter::new(1, "Purpose"), Parameter::new(2, "Length")],
            Model {
                param_values: vec![ParamValue::new(1, "casual")],
                colors: Vec::new(),
            },
        )
    }

    #[test]
    fn fields_follow_param_order() {
        let editor = editor();
        let rows: Vec<_> = editor.fields().map(|f| (f.param.id, f.value)).collect();
        assert_eq!(rows, vec![(1, "casual"), (2, "")]);
    }

    #[test]
    fn unknown_id_is_refused() {
        let mut editor = editor();
        assert!(!editor.handle_change(9, "x"));
        assert_eq!(editor.get_model().param_values.len(), 1);
    }

    #[test]
    fn empty_string_is_stored() {
        let mut editor = editor();
        assert!(editor.handle_change(1, ""));
        assert_eq!(editor.get_model().param_values, vec![ParamValue::new(1, "")]);
    }
}
