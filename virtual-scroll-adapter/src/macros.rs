macro_rules! vdebug {
    ($($tt:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "virtual_scroll_adapter", $($tt)*);
    }};
}
