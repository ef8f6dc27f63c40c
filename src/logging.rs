// This is a part of Chrono.
// See README.md and LICENSE.txt for details.

//! Internal diagnostics, forwarded to the `log` crate when the `logging` feature is enabled.
//!
//! Without the feature every macro expands to nothing, so the arguments are not evaluated.

// Not every feature combination uses every macro.
#![allow(unused_macros)]

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! error {
    ($($tt:tt)*) => { log!(log::error!($($tt)*)) }
}

macro_rules! warn {
    ($($tt:tt)*) => { log!(log::warn!($($tt)*)) }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!($($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!($($tt)*)) }
}
