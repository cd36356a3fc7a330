//! Literal demo dataset.
//!
//! Foreign keys are declared by name and resolved through the ids assigned
//! during insertion, so the data does not depend on any particular
//! autoincrement sequence. Seeding is not idempotent: running it twice
//! inserts every row twice.

use std::collections::HashMap;

use tracing::info;

use crate::error::StoreError;
use crate::store::Store;

const COUNTRIES: [&str; 3] = ["Japan", "China", "Korea"];

const CITIES: [(&str, f64, &str); 7] = [
    ("Tokyo", 2194.0, "China"),
    ("Nagasaki", 405.9, "Korea"),
    ("Hiroshima", 906.7, "Japan"),
    ("Pekin", 16411.0, "China"),
    ("Shanghai", 6340.0, "Korea"),
    ("Hong Kong", 2755.0, "Japan"),
    ("Seoul", 605.2, "China"),
];

const STUDENTS: [(&str, &str, &str); 15] = [
    ("Zhong", "Xina", "Tokyo"),
    ("Don", "Simon", "Nagasaki"),
    ("Alexandr", "Zubarev", "Tokyo"),
    ("Pavel", "The Container", "Nagasaki"),
    ("Sasha", "Shlyapik", "Hiroshima"),
    ("Niko", "Glai", "Pekin"),
    ("The", "Wock", "Hiroshima"),
    ("Fedor", "Ivanov", "Shanghai"),
    ("Michel", "Jackson", "Hong Kong"),
    ("Vanyka", "The silverhand", "Pekin"),
    ("Fredy", "Fasber", "Seoul"),
    ("Mr", "Beast", "Hong Kong"),
    ("Coral", "Grims", "Tokyo"),
    ("Waltuh", "Waltuh", "Hong Kong"),
    ("Rick", "Grims", "Tokyo"),
];

/// Ids assigned while seeding, keyed by title.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub countries: HashMap<String, i64>,
    pub cities: HashMap<String, i64>,
    pub students: usize,
}

/// Insert the demo rows, resolving every reference through the ids assigned
/// earlier in the same run. Fails on the first insert error.
pub fn seed_demo_data(store: &Store) -> Result<SeedReport, StoreError> {
    let mut report = SeedReport::default();

    for title in COUNTRIES {
        let id = store.insert_country(title)?;
        report.countries.insert(title.to_string(), id);
    }

    for (title, area, country) in CITIES {
        let country_id = report.countries.get(country).copied();
        let id = store.insert_city(title, area, country_id)?;
        report.cities.insert(title.to_string(), id);
    }

    for (first_name, last_name, city) in STUDENTS {
        let city_id = report.cities.get(city).copied();
        store.insert_student(first_name, last_name, city_id)?;
        report.students += 1;
    }

    info!(
        countries = report.countries.len(),
        cities = report.cities.len(),
        students = report.students,
        "seeded demo data"
    );
    Ok(report)
}
