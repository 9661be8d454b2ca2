use std::any;

/// The full, human-readable name of `T`, module paths included.
pub fn type_name<T: ?Sized>() -> &'static str {
    any::type_name::<T>()
}

/// The name of `T` with module paths stripped everywhere, including inside
/// generic arguments.
///
/// # Example
///
/// ```
/// use braid_text::short_type_name;
///
/// assert_eq!(short_type_name::<Vec<String>>(), "Vec<String>");
/// ```
pub fn short_type_name<T: ?Sized>() -> String {
    let full = any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut token = String::new();

    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            token.push(ch);
        } else {
            flush_token(&mut out, &mut token);
            out.push(ch);
        }
    }

    flush_token(&mut out, &mut token);
    out
}

// Appends only the last `::` path segment of the buffered token.
fn flush_token(out: &mut String, token: &mut String) {
    if token.is_empty() {
        return;
    }

    let last = token.rsplit("::").next().unwrap_or("");
    out.push_str(last);
    token.clear();
}
