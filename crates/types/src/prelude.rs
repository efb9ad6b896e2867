// Path: crates/types/src/prelude.rs

//! A curated set of commonly used traits and types.

/// An extension trait for `Option` that turns a missing value into a typed error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, E>`, building the error only when
    /// the option is `None`.
    fn required_with<E, F: FnOnce() -> E>(self, err: F) -> Result<T, E>;
}

impl<T> OptionExt<T> for Option<T> {
    fn required_with<E, F: FnOnce() -> E>(self, err: F) -> Result<T, E> {
        self.ok_or_else(err)
    }
}
