// Logging macros
//
// The formatted message is passed through `scrub` before it reaches tracing.
// Structured fields are written as-is, so never put a secret in a field.

#[macro_export]
macro_rules! redacted_error {
    ($($field:ident = $value:expr),* ; $($arg:tt)+) => {
        tracing::error!($($field = $value,)* "{}", $crate::scrub(&format!($($arg)+)))
    };
    ($($arg:tt)+) => {
        tracing::error!("{}", $crate::scrub(&format!($($arg)+)))
    };
}
