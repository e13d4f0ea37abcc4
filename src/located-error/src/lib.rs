use std::{fmt::Display, panic::Location};

use anyhow::{Context, Result};

pub mod prelude {
    extern crate anyhow;
    pub use anyhow::{anyhow, bail, Context, Result};

    extern crate thiserror;
    pub use thiserror::Error;

    pub use super::LocatedError;
}

/// Format a caller location as `[file:line:col]`
fn format_location(caller: &Location) -> String {
    format!("[{}:{}:{}]", caller.file(), caller.line(), caller.column())
}

pub trait LocatedError<T, E> {
    /// Wrap the error value with additional context + the location at which it was called.
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static;

    /// Same as `loc()`, but the context is only evaluated once an error does occur.
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> LocatedError<T, E> for Result<T, E>
where
    E: Display + Send + Sync + 'static,
    Result<T, E>: Context<T, E>,
{
    #[track_caller]
    fn loc<C>(self, context: C) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static
    {
        let caller = Location::caller();
        self.with_context(|| format!("{} {context}", format_location(caller)))
    }

    #[track_caller]
    fn with_loc<C, F>(self, f: F) -> Result<T, anyhow::Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C
    {
        let caller = Location::caller();
        self.with_context(|| format!("{} {}", format_location(caller), f()))
    }
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[derive(Error, Debug)]
    enum RoleError {
        #[error("Missing sample id for role '{0}'")]
        MissingSampleId(&'static str),
    }

    fn lookup(ids: &[(&'static str, &'static str)], role: &'static str) -> Result<&'static str, RoleError> {
        ids.iter()
            .find(|(r, _)| *r == role)
            .map(|(_, id)| *id)
            .ok_or(RoleError::MissingSampleId(role))
    }

    fn lookup_father(ids: &[(&'static str, &'static str)]) -> Result<&'static str> {
        lookup(ids, "father").loc("While searching for the father")
    }

    fn read_pedigree(path: &str) -> Result<String> {
        std::fs::read_to_string(path).with_loc(|| format!("Failed to read pedigree '{path}'"))
    }

    #[test]
    fn ok_passes_through() -> Result<()> {
        assert_eq!(lookup_father(&[("mother", "M1"), ("father", "F1")])?, "F1");
        Ok(())
    }

    #[test]
    fn error_carries_location() {
        let err = lookup_father(&[("mother", "M1")]).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.starts_with(&format!("[{}:", file!())));
        assert!(msg.ends_with("While searching for the father"));
        assert!(matches!(err.downcast_ref::<RoleError>(), Some(RoleError::MissingSampleId("father"))));
    }

    #[test]
    fn result_error_chain_is_preserved() {
        let err = read_pedigree("/this/pedigree/does-not-exist.yaml").unwrap_err();
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        assert_eq!(chain.len(), 2);
        assert!(chain[0].contains("Failed to read pedigree"));
        assert!(chain[0].contains(file!()));
    }
}
