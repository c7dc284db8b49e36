// Logging shims: every call site compiles away unless `feature = "tracing"` is on.

macro_rules! vtrace {
    ($($tt:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!(target: $crate::LOG_TARGET, $($tt)*);
    }};
}

macro_rules! vdebug {
    ($($tt:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::debug!(target: $crate::LOG_TARGET, $($tt)*);
    }};
}

macro_rules! vwarn {
    ($($tt:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::warn!(target: $crate::LOG_TARGET, $($tt)*);
    }};
}
