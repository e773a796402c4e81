//! String helpers shared by the sorter and renderers.
//!
//! - ASCII capitalization for sort keys
//! - LaTeX escaping for the opt-in `--escape` mode

/// Uppercase the first character if it is an ASCII letter.
///
/// Non-ASCII leading characters and the rest of the string are left alone.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(upcase_ascii("duPont"), "DuPont");
/// assert_eq!(upcase_ascii("ébert"), "ébert");
/// ```
pub fn upcase_ascii(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => {
            let mut out = String::with_capacity(s.len());
            out.push(f.to_ascii_uppercase());
            out.push_str(c.as_str());
            out
        }
    }
}

/// Escape characters that are significant to LaTeX.
///
/// Used on titles and names only; generated macros and page numbers are
/// never passed through here.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '{' | '}' | '$' | '&' | '#' | '_' | '%' => {
                out.push('\\');
                out.push(c);
            }
            '^' => out.push_str("\\textasciicircum{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            _ => out.push(c),
        }
    }
    out
}
