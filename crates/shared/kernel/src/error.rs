use std::borrow::Cow;

pub type Result<T> = std::result::Result<T, FlagError>;

/// Errors raised around the registry. Flag accessors themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum FlagError {
    /// Building or deserializing the layered configuration failed.
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: ::config::ConfigError, context: Option<Cow<'static, str>> },

    /// A key lookup did not match any known flag.
    #[error("Unknown flag key '{key}'{}", format_context(.context))]
    UnknownFlag { key: String, context: Option<Cow<'static, str>> },
}

/// Adds `.context(..)` to results that convert into [`FlagError`].
pub trait FlagErrorExt<T> {
    /// Attaches a human-readable context to the error, if any.
    ///
    /// # Errors
    /// Returns the original error with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> FlagErrorExt<T> for Result<T> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                FlagError::Config { context: c, .. } | FlagError::UnknownFlag { context: c, .. } => {
                    *c = Some(context.into());
                },
            }
            e
        })
    }
}

impl<T> FlagErrorExt<T> for std::result::Result<T, ::config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| FlagError::Config { source, context: Some(context.into()) })
    }
}

impl From<::config::ConfigError> for FlagError {
    #[inline]
    fn from(source: ::config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err: Result<()> = Err(FlagError::UnknownFlag { key: "x".to_owned(), context: None });
        let err = err.context("resolving rollout key").expect_err("still an error");
        assert_eq!(err.to_string(), "Unknown flag key 'x' (resolving rollout key)");
    }

    #[test]
    fn display_without_context() {
        let err = FlagError::UnknownFlag { key: "x".to_owned(), context: None };
        assert_eq!(err.to_string(), "Unknown flag key 'x'");
    }

    #[test]
    fn config_errors_convert() {
        let raw: std::result::Result<(), ::config::ConfigError> =
            Err(::config::ConfigError::Message("boom".to_owned()));
        let err = raw.context("Failed to build config").expect_err("still an error");
        assert!(matches!(err, FlagError::Config { context: Some(_), .. }));
        assert!(err.to_string().starts_with("Config error (Failed to build config)"));
    }
}
