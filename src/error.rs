/// Reasons a query-style parameter falls back to its default value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    /// Value was absent, empty, or only whitespace
    Blank,
    /// Value is not a base-10 integer
    InvalidInteger,
    /// Parsed integer lies outside the inclusive range
    OutOfRange,
}

impl core::fmt::Display for ParamError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::Blank => "Blank parameter value",
            Self::InvalidInteger => "Invalid integer",
            Self::OutOfRange => "Integer out of range",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParamError {}

/// Result type for strict parameter parsing
pub type Result<T> = core::result::Result<T, ParamError>;
