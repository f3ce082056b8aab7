// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use quien_app::Person;
use std::path::PathBuf;

/// Minimal record builder for filter/state tests.
pub fn person(name: &str, born: i32, died: i32, slug: &str) -> Person {
    Person {
        name: name.to_owned(),
        born,
        died,
        slug: slug.to_owned(),
        mother_name: None,
        father_name: None,
    }
}

pub fn person_with_parents(
    name: &str,
    born: i32,
    died: i32,
    slug: &str,
    mother_name: Option<&str>,
    father_name: Option<&str>,
) -> Person {
    Person {
        mother_name: mother_name.map(str::to_owned),
        father_name: father_name.map(str::to_owned),
        ..person(name, born, died, slug)
    }
}

/// A small, ordered roster exercising the shapes the widget cares about:
/// shared surnames, a parent reference, and one record without parents.
pub fn ancestry_fixture() -> Vec<Person> {
    vec![
        person("Carolus Haverbeke", 1832, 1905, "carolus-haverbeke-1832"),
        person("Emma de Milliano", 1876, 1956, "emma-de-milliano-1876"),
        person_with_parents(
            "Philibert Haverbeke",
            1907,
            1997,
            "philibert-haverbeke-1907",
            Some("Emma de Milliano"),
            Some("Emile Haverbeke"),
        ),
        person("Pieter Haverbeke", 1602, 1642, "pieter-haverbeke-1602"),
    ]
}

/// Writes the records as a camelCase JSON dataset file in a fresh temp
/// directory. Keep the returned TempDir alive for as long as the path is
/// in use.
pub fn write_dataset_json(people: &[Person]) -> Result<(tempfile::TempDir, PathBuf)> {
    let temp = tempfile::tempdir().context("create dataset temp dir")?;
    let path = temp.path().join("people.json");
    let raw = serde_json::to_string_pretty(people).context("encode dataset fixture")?;
    std::fs::write(&path, raw)
        .with_context(|| format!("write dataset fixture {}", path.display()))?;
    Ok((temp, path))
}
