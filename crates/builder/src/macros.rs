/// trace_node!(format, args...)
///
/// Compiled away unless the `debug` feature is on.
macro_rules! trace_node {
    ($($args:tt)*) => {{
        if cfg!(feature = "debug") {
            tracing::trace!($($args)*);
        }
    }};
}
