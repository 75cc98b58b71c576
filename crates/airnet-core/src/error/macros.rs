//! Error macros for airnet

/// Macro for creating invalid config errors
#[macro_export]
macro_rules! bail_config {
    ($reason:expr) => {
        return Err($crate::error::AirnetError::invalid_config($reason))
    };
}
