//! Sort keys for the author index.
//!
//! Display names look like `"Last, First"`. A few leading particles are
//! stripped or folded before comparing so that `"van der Berg, John"` files
//! under B. The key is only ever compared, never printed.

use crate::utils::upcase_ascii;
use itertools::Itertools;

/// Ordered `(prefix, replacement)` rules; the first matching prefix wins, so
/// `"van der "` must stay ahead of `"van "`.
///
/// The remainder keeps its case: `"du Pont"` keys as `"DuPont"`, not
/// `"Dupont"`. Only the first character of the key is capitalized.
pub const PARTICLES: &[(&str, &str)] = &[
    ("de ", ""),
    ("van der ", ""),
    ("van ", ""),
    ("von ", ""),
    ("du ", "du"),
    ("Du ", "Du"),
];

/// Derive the comparison key for a `"Last, First"` display name.
pub fn sort_key(display: &str) -> String {
    let folded = PARTICLES
        .iter()
        .find_map(|(prefix, replacement)| {
            display
                .strip_prefix(prefix)
                .map(|rest| format!("{replacement}{rest}"))
        })
        .unwrap_or_else(|| display.to_string());
    upcase_ascii(&folded)
}

/// Order display names by sort key, breaking ties on the display name.
///
/// Comparison is plain byte order; no locale collation.
pub fn sort_authors<'a, I>(names: I) -> Vec<(String, &'a str)>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(|name| (sort_key(name), name))
        .sorted()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particles_are_stripped() {
        assert_eq!(sort_key("van der Berg, Jan"), "Berg, Jan");
        assert_eq!(sort_key("van Gogh, Vincent"), "Gogh, Vincent");
        assert_eq!(sort_key("von Neumann, John"), "Neumann, John");
        assert_eq!(sort_key("de Vries, Anna"), "Vries, Anna");
    }

    #[test]
    fn test_du_is_folded_into_the_name() {
        assert_eq!(sort_key("du Pont, Marie"), "DuPont, Marie");
        assert_eq!(sort_key("Du Bois, William"), "DuBois, William");
    }

    #[test]
    fn test_unmatched_names_are_unchanged() {
        assert_eq!(sort_key("Adams, Bob"), "Adams, Bob");
        // Particles only count as whole leading words.
        assert_eq!(sort_key("Vandermeer, Jeff"), "Vandermeer, Jeff");
        assert_eq!(sort_key("dell, Mike"), "Dell, Mike");
    }

    #[test]
    fn test_particle_case_matters() {
        // Only the listed spellings match; "Van " is an ordinary surname start.
        assert_eq!(sort_key("Van Halen, Eddie"), "Van Halen, Eddie");
        assert_eq!(sort_key("De Gaulle, Charles"), "De Gaulle, Charles");
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // "van der " is tried before "van ", so nothing of the particle leaks.
        assert_eq!(sort_key("van der Waals, Johannes"), "Waals, Johannes");
    }

    #[test]
    fn test_sort_authors_orders_by_key() {
        let sorted = sort_authors(["de Vries, Anna", "Adams, Bob", "van der Berg, John"]);
        let names: Vec<_> = sorted.iter().map(|(_, name)| *name).collect();
        assert_eq!(names, vec!["Adams, Bob", "van der Berg, John", "de Vries, Anna"]);
    }

    #[test]
    fn test_sort_authors_breaks_ties_on_display_name() {
        let sorted = sort_authors(["van Berg, Jan", "Berg, Jan", "de Berg, Jan"]);
        let names: Vec<_> = sorted.iter().map(|(_, name)| *name).collect();
        assert_eq!(names, vec!["Berg, Jan", "de Berg, Jan", "van Berg, Jan"]);
    }

    #[test]
    fn test_sort_is_bytewise() {
        let sorted = sort_authors(["Zed, A", "Ångström, B", "adams, C"]);
        let names: Vec<_> = sorted.iter().map(|(_, name)| *name).collect();
        // "adams" capitalizes to "Adams"; non-ASCII sorts after ASCII.
        assert_eq!(names, vec!["adams, C", "Zed, A", "Ångström, B"]);
    }
}
