//! Non-fatal numeric advisories.

use std::fmt;

/// Warning attached to a result that was computed by a numerically
/// unstable path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StabilityWarning {
    /// `A x = v` was solved by forming `inverse(A)` explicitly, without
    /// pivoting or factorization.
    ExplicitInverseSolve,
}

impl fmt::Display for StabilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitInverseSolve => {
                write!(f, "inverse-based solve is not numerically stable")
            }
        }
    }
}

/// A computed value together with the advisory raised while computing it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Advisory<T> {
    pub value: T,
    pub warning: StabilityWarning,
}

impl<T> Advisory<T> {
    /// Wraps `value`, emitting `warning` as a `warn`-level tracing event.
    pub fn new(value: T, warning: StabilityWarning) -> Self {
        tracing::warn!(%warning, "numeric stability advisory");
        Self { value, warning }
    }

    /// Discards the advisory.
    pub fn into_inner(self) -> T {
        self.value
    }
}
