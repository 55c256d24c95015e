//! Performance benchmarks for the parameter editor.
//!
//! Measures the hot paths:
//! - Seeding from a large model
//! - Per-keystroke edits
//! - Flattening state back into a model

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use paramedit::editor::ParameterEditor;
use paramedit::model::{Model, ParamValue, Parameter};

const FIELDS: u32 = 1_000;

fn params() -> Vec<Parameter> {
    (0..FIELDS)
        .map(|id| Parameter::new(id, format!("param-{id}")))
        .collect()
}

fn model() -> Model {
    Model {
        param_values: (0..FIELDS)
            .map(|id| ParamValue::new(id, format!("value-{id}")))
            .collect(),
        colors: Vec::new(),
    }
}

/// Benchmark building the editor from 1000 seeded values.
fn bench_seed(c: &mut Criterion) {
    let params = params();
    let model = model();

    c.bench_function("seed_1000", |b| {
        b.iter(|| ParameterEditor::new(black_box(params.clone()), black_box(model.clone())))
    });
}

/// Benchmark a burst of keystrokes spread across fields.
fn bench_handle_change(c: &mut Criterion) {
    let mut editor = ParameterEditor::new(params(), model());

    c.bench_function("handle_change_1000", |b| {
        b.iter(|| {
            for id in 0..FIELDS {
                black_box(editor.handle_change(id, "typed"));
            }
        })
    });
}

/// Benchmark flattening 1000 entries.
fn bench_get_model(c: &mut Criterion) {
    let editor = ParameterEditor::new(params(), model());

    c.bench_function("get_model_1000", |b| b.iter(|| black_box(editor.get_model())));
}

criterion_group!(benches, bench_seed, bench_handle_change, bench_get_model);
criterion_main!(benches);
