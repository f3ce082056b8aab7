// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

/// One roster entry. Immutable for the lifetime of the widget; `slug` is
/// the only field guaranteed unique, `name` is both the display label and
/// the filter key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    pub born: i32,
    /// 0 means still living; the title line prints the stored value as is.
    pub died: i32,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
}
