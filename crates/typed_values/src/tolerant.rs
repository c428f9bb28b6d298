//! Tolerant construction
//!
//! The tolerant path is a match over the strict path's `Result`. It never
//! re-validates, and the only error it can absorb is [`ValidationError`].

use tracing::debug;

use crate::errors::ValidationError;
use crate::kind::Kind;
use crate::maybe::Maybe;
use crate::mixed::Mixed;
use crate::typed_value::TypedValue;
use crate::undefined::Undefined;

/// Result of a tolerant constructor with a caller-supplied default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallback<T, D> {
    /// The strict constructor succeeded
    Constructed(T),
    /// The strict constructor failed; this is the caller's default
    Default(D),
}

impl<T, D> Fallback<T, D> {
    /// Check whether construction succeeded
    pub const fn is_constructed(&self) -> bool {
        matches!(self, Self::Constructed(_))
    }

    /// The constructed value, if any
    pub fn constructed(self) -> Option<T> {
        match self {
            Self::Constructed(value) => Some(value),
            Self::Default(_) => None,
        }
    }

    /// The default, if construction failed
    pub fn into_default(self) -> Option<D> {
        match self {
            Self::Constructed(_) => None,
            Self::Default(default) => Some(default),
        }
    }

    /// Collapse both arms into one type
    pub fn unify<U>(self) -> U
    where
        T: Into<U>,
        D: Into<U>,
    {
        match self {
            Self::Constructed(value) => value.into(),
            Self::Default(default) => default.into(),
        }
    }
}

pub(crate) fn recover<T, D>(
    kind: &'static str,
    result: Result<T, ValidationError>,
    default: D,
) -> Fallback<T, D> {
    match result {
        Ok(value) => Fallback::Constructed(value),
        Err(error) => {
            debug!(kind, %error, "tolerant construction fell back to default");
            Fallback::Default(default)
        },
    }
}

/// Types with tolerant constructors
///
/// Implemented by every [`TypedValue`] and by [`Undefined`] itself, so
/// generic tolerant code does not need to special-case the sentinel.
pub trait TolerantFactory {
    /// What tolerant construction produces
    type Output;

    /// Tolerant construction from text
    fn tolerant_from_str(text: &str) -> Self::Output;

    /// Tolerant construction from dynamic input
    fn tolerant_from_mixed(input: &Mixed) -> Self::Output;
}

impl<K: Kind> TolerantFactory for TypedValue<K> {
    type Output = Maybe<K>;

    fn tolerant_from_str(text: &str) -> Self::Output {
        Self::try_from_str(text)
    }

    fn tolerant_from_mixed(input: &Mixed) -> Self::Output {
        Self::try_from_mixed(input)
    }
}

impl TolerantFactory for Undefined {
    type Output = Self;

    fn tolerant_from_str(text: &str) -> Self::Output {
        Self::try_from_str(text)
    }

    fn tolerant_from_mixed(input: &Mixed) -> Self::Output {
        Self::try_from_mixed(input)
    }
}

/// Tolerantly construct one output per input, in order
pub fn tolerant_all<F, I>(inputs: I) -> Vec<F::Output>
where
    F: TolerantFactory,
    I: IntoIterator,
    I::Item: Into<Mixed>,
{
    inputs
        .into_iter()
        .map(|input| F::tolerant_from_mixed(&input.into()))
        .collect()
}
