// Start of file: /src/utils/mod.rs

/*
    * Shared helpers: the error type handlers return and
    * the hostname lookup behind the ping payload.
*/

pub mod error_handler;
pub mod hostname;

// End of file: /src/utils/mod.rs
