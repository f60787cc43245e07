//! CSS class attribute joining.

/// Joins class tokens into a single attribute value, dropping repeats.
///
/// The first occurrence of a token wins its position; later duplicates are
/// skipped. Tokens are compared exactly: no trimming, no case folding, and the
/// empty string is a token like any other.
///
/// # Example
///
/// ```rust
/// use widget_render::class_names;
///
/// assert_eq!(class_names(&["gopher", "hat", "gopher"]), "gopher hat");
/// assert_eq!(class_names::<&str>(&[]), "");
/// ```
pub fn class_names<S: AsRef<str>>(classes: &[S]) -> String {
    let mut seen: Vec<&str> = Vec::with_capacity(classes.len());
    for class in classes {
        let class = class.as_ref();
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}
