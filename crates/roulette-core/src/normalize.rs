//! Text normalization for duplicate comparison
//!
//! Normalization produces the key two suggestions are compared under; it
//! never alters what is stored or displayed.

/// Trailing characters stripped during normalization.
///
/// Exactly this set; a suggestion ending in `?` or `;` keeps its trailing
/// character.
const TRAILING_STRIP: [char; 3] = ['!', '.', ','];

/// Produce the canonical comparison key for a suggestion.
///
/// Lowercases, trims surrounding whitespace, then strips trailing
/// characters from [`TRAILING_STRIP`] together with any whitespace they
/// shielded, so the result is a fixpoint: `normalize(normalize(x)) ==
/// normalize(x)`.
///
/// # Examples
///
/// ```
/// use roulette_core::normalize;
///
/// assert_eq!(normalize("Run 5k!!!"), "run 5k");
/// assert_eq!(normalize("  Take a dance class  "), "take a dance class");
/// assert_eq!(normalize("Learn Go?"), "learn go?");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .trim_start()
        .trim_end_matches(|c: char| c.is_whitespace() || TRAILING_STRIP.contains(&c))
        .to_string()
}
