//! Common test utilities for finetune-prep integration tests.

#![allow(dead_code)]

use finetune_prep::*;
use rand::prelude::*;
use std::fs;
use std::path::Path;

/// Category flags with `num_true` trues and `num_false` falses in a
/// shuffled but fixed order.
pub fn create_test_flags(num_true: usize, num_false: usize) -> Vec<bool> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut flags: Vec<bool> = (0..num_true + num_false).map(|i| i < num_true).collect();
    flags.shuffle(&mut rng);
    flags
}

/// Dataset with `id`, `prompt` and `flag` columns.
pub fn create_test_dataset(num_true: usize, num_false: usize) -> Dataset {
    let rows = create_test_flags(num_true, num_false)
        .into_iter()
        .enumerate()
        .map(|(i, flag)| {
            vec![
                Value::Int(i as i64),
                Value::Text(format!("prompt {}", i)),
                Value::Bool(flag),
            ]
        })
        .collect();

    Dataset::new(
        vec!["id".to_string(), "prompt".to_string(), "flag".to_string()],
        rows,
    )
    .unwrap()
}

/// Number of `true` category values in a dataset
pub fn count_true(dataset: &Dataset) -> usize {
    dataset.count_true("flag").unwrap()
}

/// Write a CSV file with the same shape as [`create_test_dataset`].
///
/// Flags are written as `True`/`False` to exercise category coercion.
pub fn create_test_csv<P: AsRef<Path>>(path: P, num_true: usize, num_false: usize) -> std::io::Result<()> {
    let mut content = String::from("id,prompt,flag\n");
    for (i, flag) in create_test_flags(num_true, num_false).into_iter().enumerate() {
        content.push_str(&format!(
            "{},prompt {},{}\n",
            i,
            i,
            if flag { "True" } else { "False" }
        ));
    }
    fs::write(path, content)
}

/// Write a JSON Lines file with the same shape as [`create_test_dataset`].
pub fn create_test_jsonl<P: AsRef<Path>>(path: P, num_true: usize, num_false: usize) -> std::io::Result<()> {
    let mut content = String::new();
    for (i, flag) in create_test_flags(num_true, num_false).into_iter().enumerate() {
        let line = serde_json::json!({ "id": i, "prompt": format!("prompt {}", i), "flag": flag });
        content.push_str(&line.to_string());
        content.push('\n');
    }
    fs::write(path, content)
}

/// A job listing in the shape returned by the jobs endpoint.
pub fn create_test_job_listing() -> String {
    serde_json::json!({
        "object": "list",
        "data": [
            {
                "id": "ftjob-done",
                "created_at": 1_700_000_000,
                "finished_at": 1_700_001_200,
                "status": "succeeded",
                "trained_tokens": 48_000,
                "training_file": "file-train-1",
                "fine_tuned_model": "ft:base:acme::done"
            },
            {
                "id": "ftjob-running",
                "created_at": 1_700_000_000,
                "finished_at": null,
                "status": "running",
                "trained_tokens": null,
                "training_file": "file-train-2",
                "fine_tuned_model": null
            }
        ],
        "has_more": false
    })
    .to_string()
}
