/// Lazily compile a regex from a string literal, once per call site.
///
/// The pattern is a compile-time constant, so the `unwrap` can only fire on a
/// bad literal caught by the first test run.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
