//! Logging shims
//!
//! Forward to `defmt` when the `defmt` feature is enabled. Without it the
//! arguments are only borrowed, so call sites compile unchanged on the host.
//!
//! Exported for the driver crate. A crate that calls these must itself
//! depend on `defmt` whenever `votekiosk-core/defmt` is on.

#[cfg(feature = "defmt")]
#[doc(hidden)]
#[macro_export]
macro_rules! __kiosk_log {
    ($level:ident, $s:literal $(, $x:expr)*) => {
        {
            ::defmt::$level!($s $(, $x)*);
        }
    };
}

#[cfg(not(feature = "defmt"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __kiosk_log {
    ($level:ident, $s:literal $(, $x:expr)*) => {
        {
            let _ = ($( &$x, )*);
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__kiosk_log!(debug, $s $(, $x)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__kiosk_log!(info, $s $(, $x)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__kiosk_log!(warn, $s $(, $x)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__kiosk_log!(error, $s $(, $x)*)
    };
}
