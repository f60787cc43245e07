//! String helpers exposed to templates as `concat` and `title`.

/// Concatenates tokens with no separator.
pub fn concat<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens.iter().map(AsRef::as_ref).collect()
}

/// Uppercases the first character of every whitespace-delimited word.
///
/// The rest of each word is left untouched.
///
/// ```rust
/// use widget_render::title;
///
/// assert_eq!(title("new york city"), "New York City");
/// assert_eq!(title("mIxed  case"), "MIxed  Case");
/// ```
pub fn title(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && !c.is_whitespace() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}
