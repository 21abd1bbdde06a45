/// Macros for console logging from components.
///
/// In the browser these go to the devtools console through gloo_console,
/// prefixed with a millisecond timestamp. Off wasm they are forwarded to
/// `tracing` so unit tests and native builds never touch JS imports.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_emit {
    ($gloo:ident, $tracing:ident, $msg:expr) => {{
        let message: String = $msg;
        #[cfg(target_arch = "wasm32")]
        {
            gloo_console::$gloo!(format!("[{}] {}", js_sys::Date::now(), message));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::$tracing!("{}", message);
        }
    }};
}

#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::__console_emit!(info, info, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(info, info, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::__console_emit!(warn, warn, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(warn, warn, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        $crate::__console_emit!(error, error, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(error, error, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        $crate::__console_emit!(debug, debug, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(debug, debug, format!($fmt, $($arg)*))
    };
}
