//! Internal logging shim.
//!
//! Mutators report through `graph_event!` so that builds without the `tracing`
//! feature carry no logging code at all.

/// Emits a `tracing` event at the given level under the `ordgraph` target.
///
/// Usage mirrors the `tracing` macros: `graph_event!(debug, count, "message")`.
macro_rules! graph_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::$level!(target: "ordgraph", $($arg)+);
    }};
}
