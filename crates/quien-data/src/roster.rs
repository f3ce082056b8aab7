// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use quien_app::Person;

type RosterRow = (
    &'static str,
    i32,
    i32,
    &'static str,
    Option<&'static str>,
    Option<&'static str>,
);

// (name, born, died, slug, motherName, fatherName). Ordering is part of
// the contract: suggestions and duplicate-name tie-breaks follow it.
const ROSTER: [RosterRow; 15] = [
    (
        "Carolus Haverbeke",
        1832,
        1905,
        "carolus-haverbeke-1832",
        Some("Maria van Brussel"),
        Some("Carel Haverbeke"),
    ),
    (
        "Emma de Milliano",
        1876,
        1956,
        "emma-de-milliano-1876",
        Some("Sophia van Damme"),
        Some("Petrus de Milliano"),
    ),
    (
        "Maria de Rycke",
        1683,
        1724,
        "maria-de-rycke-1683",
        Some("Laurentia van Vlaenderen"),
        Some("Frederik de Rycke"),
    ),
    (
        "Emile Haverbeke",
        1877,
        1968,
        "emile-haverbeke-1877",
        Some("Maria Sturm"),
        Some("Carolus Haverbeke"),
    ),
    (
        "Philibert Haverbeke",
        1907,
        1997,
        "philibert-haverbeke-1907",
        Some("Emma de Milliano"),
        Some("Emile Haverbeke"),
    ),
    (
        "Jan van Brussel",
        1714,
        1748,
        "jan-van-brussel-1714",
        Some("Joanna van Rooijen"),
        Some("Jacobus van Brussel"),
    ),
    (
        "Pauwels van Haverbeke",
        1535,
        1582,
        "pauwels-van-haverbeke-1535",
        None,
        None,
    ),
    (
        "Clara Aernoudts",
        1918,
        2012,
        "clara-aernoudts-1918",
        None,
        None,
    ),
    (
        "Petronella de Decker",
        1798,
        1840,
        "petronella-de-decker-1798",
        None,
        None,
    ),
    (
        "Livina Haverbeke",
        1692,
        1743,
        "livina-haverbeke-1692",
        Some("Maria de Rycke"),
        Some("Pieter Haverbeke"),
    ),
    (
        "Pieter Haverbeke",
        1602,
        1642,
        "pieter-haverbeke-1602",
        None,
        Some("Lieven van Haverbeke"),
    ),
    (
        "Lieven van Haverbeke",
        1570,
        1636,
        "lieven-van-haverbeke-1570",
        Some("Lievijne Jans"),
        Some("Pauwels van Haverbeke"),
    ),
    (
        "Jan Frans van Brussel",
        1761,
        1826,
        "jan-frans-van-brussel-1761",
        None,
        Some("Jan van Brussel"),
    ),
    (
        "Maria van Brussel",
        1801,
        1834,
        "maria-van-brussel-1801",
        Some("Petronella de Decker"),
        Some("Jan Frans van Brussel"),
    ),
    (
        "Maria Haverbeke",
        1905,
        1997,
        "maria-haverbeke-1905",
        Some("Emma de Milliano"),
        Some("Emile Haverbeke"),
    ),
];

pub(crate) fn builtin_people() -> Vec<Person> {
    ROSTER
        .iter()
        .map(|(name, born, died, slug, mother, father)| Person {
            name: (*name).to_owned(),
            born: *born,
            died: *died,
            slug: (*slug).to_owned(),
            mother_name: mother.map(str::to_owned),
            father_name: father.map(str::to_owned),
        })
        .collect()
}
