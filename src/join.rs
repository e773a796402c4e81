//! Natural-language joining of author lists.

use itertools::Itertools;

/// Separators used before the last name of a list.
///
/// `and2` joins exactly two names; `and` precedes the last of three or more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjunctions {
    pub and: String,
    pub and2: String,
}

impl Default for Conjunctions {
    fn default() -> Self {
        Self {
            and: ", and ".to_string(),
            and2: " and ".to_string(),
        }
    }
}

/// Join names as prose: `A`, `A and B`, `A, B, and C`.
pub fn join_names<S: AsRef<str>>(names: &[S], conj: &Conjunctions) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{}{}{}", first.as_ref(), conj.and2, second.as_ref()),
        [init @ .., last] => {
            let head = init.iter().map(AsRef::<str>::as_ref).join(", ");
            format!("{head}{}{}", conj.and, last.as_ref())
        }
    }
}
