use std::fmt::Display;

use itertools::Itertools;

/// Splits `text` on `delimiter`, passing each segment to `func` in order.
///
/// Interior empty segments (between consecutive delimiters) are reported;
/// a trailing empty segment after a final delimiter is not. An empty
/// delimiter yields the whole text once.
///
/// # Example
///
/// ```
/// use braid_text::split;
///
/// let mut parts = Vec::new();
/// split("a::b::c", "::", |part| parts.push(part.to_string()));
///
/// assert_eq!(parts, vec!["a", "b", "c"]);
/// ```
pub fn split<F>(text: &str, delimiter: &str, mut func: F)
where
    F: FnMut(&str),
{
    if delimiter.is_empty() {
        if !text.is_empty() {
            func(text);
        }
        return;
    }

    let mut rest = text;

    while let Some(i) = rest.find(delimiter) {
        func(&rest[..i]);
        rest = &rest[i + delimiter.len()..];
    }

    if !rest.is_empty() {
        func(rest);
    }
}

/// Trims trailing whitespace in place.
pub fn rtrim(text: &mut String) {
    let kept = text.trim_end().len();
    text.truncate(kept);
}

/// Joins the `Display` forms of `items` with `delimiter`.
///
/// # Example
///
/// ```
/// use braid_text::join;
///
/// assert_eq!(join([1, 2, 3], ", "), "1, 2, 3");
/// ```
pub fn join<I>(items: I, delimiter: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items.into_iter().join(delimiter)
}

/// Whether `text` contains `needle` as a substring.
pub fn contains(text: &str, needle: &str) -> bool {
    text.contains(needle)
}

/// Replaces the first occurrence of `from` with `to`, in place.
///
/// Later occurrences are untouched; if `from` is absent this is a no-op.
pub fn replace_first(text: &mut String, from: &str, to: &str) {
    if let Some(i) = text.find(from) {
        text.replace_range(i..i + from.len(), to);
    }
}
