//! Diagnostic trace output.
//!
//! Lines go to the serial console through `esp-println` when the
//! `esp32-log` feature is enabled. Without it the arguments are only
//! type-checked and nothing is emitted.

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        ::esp_println::println!($($arg)*);
        #[cfg(not(feature = "esp32-log"))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

pub(crate) use trace;
