//! Utility modules for browser access.
//!
//! Provides:
//! - [`dom`] - window, localStorage and URL hash access
//! - [`log`] - console logging (no-op off the browser)
//! - [`storage`] - localStorage backend for the shared-file list
//! - [`time`] - `Date`-based timestamps

pub mod dom;
pub mod log;
pub mod storage;
pub mod time;

#[cfg(all(test, target_arch = "wasm32"))]
pub mod testing;
