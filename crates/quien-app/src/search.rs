// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::Person;

/// Records whose `name` contains the applied query as a contiguous,
/// case-sensitive substring, in roster order. The empty query matches
/// everyone. No cap on the result count.
pub fn suggestions<'a>(people: &'a [Person], applied_query: &str) -> Vec<&'a Person> {
    people
        .iter()
        .filter(|person| matches_query(person, applied_query))
        .collect()
}

fn matches_query(person: &Person, applied_query: &str) -> bool {
    person.name.contains(applied_query)
}

/// Title line for a chosen name: the first roster record with that exact
/// name wins; a name no longer in the roster is echoed verbatim. Callers
/// render their own placeholder for the empty name.
pub fn chosen_title(people: &[Person], chosen_name: &str) -> String {
    match people.iter().find(|person| person.name == chosen_name) {
        Some(person) => format!("{} ({} - {})", person.name, person.born, person.died),
        None => chosen_name.to_owned(),
    }
}

/// Memoized suggestion scan keyed on the applied query. The filter is
/// pure, so this only avoids redundant work on draws that did not change
/// the applied query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestionCache {
    query_key: Option<String>,
    matches: Vec<usize>,
}

impl SuggestionCache {
    /// Rescans iff the applied query differs from the cached key.
    /// Returns whether a rescan happened.
    pub fn refresh(&mut self, people: &[Person], applied_query: &str) -> bool {
        if self.query_key.as_deref() == Some(applied_query) {
            return false;
        }
        self.matches = people
            .iter()
            .enumerate()
            .filter(|(_, person)| matches_query(person, applied_query))
            .map(|(index, _)| index)
            .collect();
        self.query_key = Some(applied_query.to_owned());
        true
    }

    pub fn indices(&self) -> &[usize] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn name_at<'a>(&self, people: &'a [Person], position: usize) -> Option<&'a str> {
        let index = *self.matches.get(position)?;
        people.get(index).map(|person| person.name.as_str())
    }
}
