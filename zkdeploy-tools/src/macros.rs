// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Logs a formatted message at `$level`, painted with one of the [`crate::utils::color::Color`]
/// helpers.
macro_rules! log_colored {
    ($level:ident, $color:ident, $($msg:expr),*) => {{
        use crate::utils::color::Color;
        log::$level!("{}", format!($($msg),*).$color())
    }};
}

macro_rules! debug {
    (@$color:ident, $($msg:expr),*) => {
        log_colored!(debug, $color, $($msg),*)
    };
}

macro_rules! info {
    (@$color:ident, $($msg:expr),*) => {
        log_colored!(info, $color, $($msg),*)
    };
}

macro_rules! warn {
    (@$color:ident, $($msg:expr),*) => {
        log_colored!(warn, $color, $($msg),*)
    };
}
