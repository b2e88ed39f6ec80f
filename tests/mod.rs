//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.

mod decomposition;
mod regression;

/// Install a logger for the test binary, so that `RUST_LOG` shows what the algorithms do.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
