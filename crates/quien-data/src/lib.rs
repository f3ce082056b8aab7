// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use quien_app::Person;
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

mod roster;

pub const APP_NAME: &str = "quien";

/// A read-only, ordered roster of person records. The widget never
/// mutates or reloads it; loading happens once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    people: Vec<Person>,
}

impl Dataset {
    /// Validation chokepoint for every construction path. Order of the
    /// input is preserved exactly; slugs must be unique, names and slugs
    /// non-empty. Parent name references are lookup-only and stay
    /// unvalidated.
    pub fn from_people(people: Vec<Person>) -> Result<Self> {
        {
            let mut seen = BTreeSet::new();
            for person in &people {
                if person.name.trim().is_empty() {
                    bail!("dataset record {:?} has an empty name", person.slug);
                }
                if person.slug.trim().is_empty() {
                    bail!("dataset record {:?} has an empty slug", person.name);
                }
                if !seen.insert(person.slug.as_str()) {
                    bail!("duplicate slug {:?} in dataset", person.slug);
                }
            }
        }
        Ok(Self { people })
    }

    /// Decodes a JSON array of person records (camelCase keys, matching
    /// the upstream data shape).
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let people: Vec<Person> = serde_json::from_str(raw).context("parse dataset JSON")?;
        Self::from_people(people)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read dataset file {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("decode dataset file {}", path.display()))
    }

    /// The compiled-in demo roster (Haverbeke ancestry).
    pub fn builtin() -> Self {
        Self {
            people: roster::builtin_people(),
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// Env-level dataset override; `None` means the built-in roster.
pub fn default_dataset_path() -> Option<PathBuf> {
    env::var_os("QUIEN_DATASET_PATH").map(PathBuf::from)
}

pub fn validate_dataset_path(path: &str) -> Result<()> {
    if path.is_empty() {
        bail!("dataset path must not be empty");
    }

    if let Some(index) = path.find("://")
        && index > 0
    {
        let scheme = &path[..index];
        if scheme.chars().all(char::is_alphabetic) {
            bail!(
                "dataset path {path:?} looks like a URI ({scheme}://); pass a filesystem path instead"
            );
        }
    }

    if path.starts_with("file:") {
        bail!("dataset path {path:?} uses file: URI syntax; pass a plain filesystem path");
    }

    Ok(())
}
