//! Snapshot tests for exported models.
//!
//! Uses insta inline snapshots so the exact wire shape is visible next to the test.

use paramedit::config::FormConfig;
use paramedit::editor::ParameterEditor;
use paramedit::export::{OutputFormat, render_model};
use paramedit::model::Color;

fn edited_demo() -> ParameterEditor {
    let form = FormConfig::demo();
    let mut editor = ParameterEditor::new(form.params, form.model);
    editor.handle_change(2, "mini");
    editor
}

#[test]
fn snapshot_json_export() {
    let text = render_model(&edited_demo().get_model(), OutputFormat::Json).unwrap();
    insta::assert_snapshot!(text, @r#"
    {
      "paramValues": [
        {
          "paramId": 1,
          "value": "casual"
        },
        {
          "paramId": 2,
          "value": "mini"
        }
      ],
      "colors": []
    }
    "#);
}

#[test]
fn snapshot_yaml_export() {
    let text = render_model(&edited_demo().get_model(), OutputFormat::Yaml).unwrap();
    insta::assert_snapshot!(text, @r"
    paramValues:
    - paramId: 1
      value: casual
    - paramId: 2
      value: mini
    colors: []
    ");
}

#[test]
fn snapshot_yaml_with_colors() {
    let mut form = FormConfig::demo();
    form.model.colors = vec![Color::Yellow, Color::Black];
    let editor = ParameterEditor::new(form.params, form.model);

    let text = render_model(&editor.get_model(), OutputFormat::Yaml).unwrap();
    insta::assert_snapshot!(text, @r"
    paramValues:
    - paramId: 1
      value: casual
    - paramId: 2
      value: maxi
    colors:
    - yellow
    - black
    ");
}
