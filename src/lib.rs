//! Bindings for the private `IOAVService` I2C functions of macOS IOKit.
//!
//! The [`bridge`] module forwards to the framework untouched and, on macOS,
//! exports the calls as `mkf_IOAVServiceCreate`, `mkf_IOAVServiceCreateWithService`,
//! `mkf_IOAVServiceWriteI2C` and `mkf_IOAVServiceReadI2C` for C callers
//! (see `include/ioav_bridge.h`). [`AVService`] is the owning Rust wrapper.

pub mod bridge;
mod error;
mod framework;
mod handle;
#[cfg(test)]
mod mock;
mod service;
pub mod sys;

pub use error::IOAVError;
#[cfg(target_os = "macos")]
pub use framework::IOKit;
pub use framework::AVFramework;
pub use handle::ServiceHandle;
pub use service::AVService;
pub use sys::{io_service_t, CFAllocatorRef, IOReturn};

pub type Result<T> = core::result::Result<T, IOAVError>;
