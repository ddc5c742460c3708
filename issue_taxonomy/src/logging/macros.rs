//! Logging macros
//!
//! Context pairs are written `"key" => value` with any `Display` value. They
//! are formatted only when the level is enabled on the installed service.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($level:expr, $code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        if $crate::logging::enabled($level) {
            $crate::logging::emit(
                $level,
                $code,
                $message,
                vec![$(($key, ($value).to_string())),*],
            )
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::__log_at!($crate::logging::LogLevel::Error, $code, $message $(, $key => $value)*)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::__log_at!($crate::logging::LogLevel::Warning, $code, $message $(, $key => $value)*)
    };
}

/// Info event with a success code
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::__log_at!($crate::logging::LogLevel::Info, $code, $message $(, $key => $value)*)
    };
}

/// Uncoded info event
#[macro_export]
macro_rules! log_info {
    ($message:expr $(, $key:expr => $value:expr)*) => {
        $crate::__log_at!(
            $crate::logging::LogLevel::Info,
            $crate::logging::codes::uncoded::INFO,
            $message
            $(, $key => $value)*
        )
    };
}

#[macro_export]
macro_rules! log_debug {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::__log_at!($crate::logging::LogLevel::Debug, $code, $message $(, $key => $value)*)
    };
}
