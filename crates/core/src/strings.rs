//! Small string helpers

use std::fmt;

/// Split `whole` on `separator`, dropping empty tokens.
///
/// Leading, trailing and repeated separators therefore produce nothing:
///
/// ```
/// use quantities_core::strings::split;
///
/// assert_eq!(split("::a:b:c::d::", ':'), ["a", "b", "c", "d"]);
/// ```
pub fn split(whole: &str, separator: char) -> Vec<String> {
    whole
        .split(separator)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Concatenate `parts` with `separator` between each adjacent pair.
pub fn join<S: AsRef<str>>(parts: &[S], separator: impl fmt::Display) -> String {
    let separator = separator.to_string();
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(&separator)
}
