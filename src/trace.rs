/// Emit a `tracing` event at TRACE level when the `tracing` feature is enabled.
/// Expands to nothing otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_fallback {
    ($($arg:tt)+) => {
        tracing::trace!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_fallback {
    ($($arg:tt)+) => {
        ()
    };
}
