//! Error types raised by the scanner.
//!
//! - Error structures with source position information
//! - Specific error variants for each way a scan can fail
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
