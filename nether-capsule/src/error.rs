//! Capsule generation error types

/// Errors that can occur when generating a capsule
///
/// Raw [`CapsuleParams`](crate::CapsuleParams) are clamped rather than
/// rejected, so these only surface when already-normalized parameters are
/// built by hand or when a name fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapsuleError {
    /// A parameter is outside the range the generator can work with
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name (e.g., "longitudes")
        name: &'static str,
        /// Human readable description of the violated bound
        reason: String,
    },

    /// An enum value given by name was not recognized
    #[error("unknown {kind} `{value}` (expected one of: {expected})")]
    UnknownVariant {
        /// What was being parsed (e.g., "uv profile")
        kind: &'static str,
        /// The rejected input
        value: String,
        /// Comma separated list of accepted names
        expected: &'static str,
    },
}

impl CapsuleError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
