//! Built-in suggestion pool
//!
//! A small fixed set of suggestions that is always available for its
//! category regardless of store contents. Seeds are merged into reads and
//! never persisted.

const SEEDS: &[(&str, &[&str])] = &[(
    "Fun",
    &["Take a dance class", "Go skydiving", "Start a travel blog"],
)];

/// Seeded suggestions for a category (empty for unseeded categories)
#[must_use]
pub fn suggestions(category: &str) -> &'static [&'static str] {
    SEEDS
        .iter()
        .find(|(seeded, _)| *seeded == category)
        .map_or(&[], |(_, entries)| *entries)
}

/// Categories that ship with seeded suggestions
pub fn categories() -> impl Iterator<Item = &'static str> {
    SEEDS.iter().map(|(category, _)| *category)
}
