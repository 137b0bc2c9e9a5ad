// Every logging call site compiles to nothing unless the `tracing` feature is enabled.

#[cfg(feature = "tracing")]
macro_rules! rlog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "recycler", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rlog {
    ($level:ident, $($tt:tt)*) => {};
}

/// Per-pass and per-row events (layout passes, binds, pool traffic).
macro_rules! rtrace {
    ($($tt:tt)*) => {
        rlog!(trace, $($tt)*)
    };
}

/// Surface lifecycle: attach, clicks, scroll-state transitions, span invalidation.
macro_rules! rdebug {
    ($($tt:tt)*) => {
        rlog!(debug, $($tt)*)
    };
}

/// Notification protocol violations and stale clicks.
macro_rules! rwarn {
    ($($tt:tt)*) => {
        rlog!(warn, $($tt)*)
    };
}
