//! The shared `Result` alias.
//!
//! Crates keep their own error enums (`StorageError`, `ValidationError`,
//! `ApiError`) and return them inside a rootcause `Report`, so a layer can
//! wrap a lower failure with `.context()` while views still match on the
//! typed context at the top.

use rootcause::Report;

/// `Result` carrying a `Report` whose current context is `C`.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Lower {
        Missing,
    }

    impl fmt::Display for Lower {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("missing")
        }
    }

    impl std::error::Error for Lower {}

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Upper {
        Failed,
    }

    impl fmt::Display for Upper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("failed")
        }
    }

    impl std::error::Error for Upper {}

    fn lower() -> Result<u32, Lower> {
        Err(Lower::Missing.into())
    }

    fn upper() -> Result<u32, Upper> {
        lower().map_err(|report| report.context(Upper::Failed))
    }

    #[test]
    fn context_replaces_current_error() {
        let report = upper().unwrap_err();
        assert_eq!(report.current_context(), &Upper::Failed);
    }
}
