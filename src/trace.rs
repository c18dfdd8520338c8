//! Logging hooks.
//!
//! Every macro compiles to nothing unless the `tracing` feature is enabled.

macro_rules! graph_debug {
    ( $( $t:tt )* ) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($t)*);
    }
}

macro_rules! graph_trace {
    ( $( $t:tt )* ) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($t)*);
    }
}
