// Feed events are logged under the `launchfeed` target, level first:
// `flog!(debug, page = 1, "issuing page request")`.

#[cfg(feature = "tracing")]
macro_rules! flog {
    (trace, $($arg:tt)+) => {
        ::tracing::trace!(target: "launchfeed", $($arg)+)
    };
    (debug, $($arg:tt)+) => {
        ::tracing::debug!(target: "launchfeed", $($arg)+)
    };
    (warn, $($arg:tt)+) => {
        ::tracing::warn!(target: "launchfeed", $($arg)+)
    };
}

// Without `tracing` the arguments are dropped unevaluated.
#[cfg(not(feature = "tracing"))]
macro_rules! flog {
    ($level:ident, $($arg:tt)+) => {};
}
