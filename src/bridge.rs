//! Pass-through calls into the `IOAVService` functions.
//!
//! Nothing here validates, retries, logs or translates: arguments go to the
//! framework as given and results come back as returned. The `mkf_*` symbols
//! are the same calls with a C ABI, for callers that cannot see IOKit's
//! private declarations.

use libc::c_void;

use crate::{
    sys::{io_service_t, CFAllocatorRef, IOReturn},
    AVFramework, ServiceHandle,
};

/// Creates a service with `allocator`. A null handle is the framework's
/// failure indication.
///
/// # Safety
///
/// `allocator` must be null or a valid `CFAllocatorRef`.
#[inline]
pub unsafe fn create<F>(framework: &F, allocator: CFAllocatorRef) -> ServiceHandle
where
    F: AVFramework + ?Sized,
{
    framework.create(allocator)
}

/// Creates a service bound to the kernel service object `service`.
///
/// # Safety
///
/// `allocator` must be null or a valid `CFAllocatorRef`. `service` is not
/// retained; the caller keeps it alive.
#[inline]
pub unsafe fn create_with_service<F>(
    framework: &F,
    allocator: CFAllocatorRef,
    service: io_service_t,
) -> ServiceHandle
where
    F: AVFramework + ?Sized,
{
    framework.create_with_service(allocator, service)
}

/// Writes `data_length` bytes from `data` at `chip_address`/`data_address`.
///
/// # Safety
///
/// `service` must be a live handle and `data` must be readable for
/// `data_length` bytes. Neither is checked.
#[inline]
pub unsafe fn write_i2c<F>(
    framework: &F,
    service: ServiceHandle,
    chip_address: u32,
    data_address: u32,
    data: *mut c_void,
    data_length: u32,
) -> IOReturn
where
    F: AVFramework + ?Sized,
{
    framework.write_i2c(service, chip_address, data_address, data, data_length)
}

/// Reads up to `data_length` bytes into `data` from `chip_address`/`data_address`.
///
/// # Safety
///
/// `service` must be a live handle and `data` must be writable for
/// `data_length` bytes. Neither is checked.
#[inline]
pub unsafe fn read_i2c<F>(
    framework: &F,
    service: ServiceHandle,
    chip_address: u32,
    data_address: u32,
    data: *mut c_void,
    data_length: u32,
) -> IOReturn
where
    F: AVFramework + ?Sized,
{
    framework.read_i2c(service, chip_address, data_address, data, data_length)
}

#[cfg(target_os = "macos")]
pub use self::exports::*;

#[cfg(target_os = "macos")]
#[allow(non_snake_case)]
mod exports {
    use libc::c_void;

    use crate::{
        sys::{io_service_t, CFAllocatorRef, IOReturn},
        IOKit, ServiceHandle,
    };

    #[no_mangle]
    pub unsafe extern "C" fn mkf_IOAVServiceCreate(allocator: CFAllocatorRef) -> ServiceHandle {
        super::create(&IOKit, allocator)
    }

    #[no_mangle]
    pub unsafe extern "C" fn mkf_IOAVServiceCreateWithService(
        allocator: CFAllocatorRef,
        service: io_service_t,
    ) -> ServiceHandle {
        super::create_with_service(&IOKit, allocator, service)
    }

    #[no_mangle]
    pub unsafe extern "C" fn mkf_IOAVServiceWriteI2C(
        service: ServiceHandle,
        chip_address: u32,
        data_address: u32,
        data: *mut c_void,
        data_length: u32,
    ) -> IOReturn {
        super::write_i2c(&IOKit, service, chip_address, data_address, data, data_length)
    }

    #[no_mangle]
    pub unsafe extern "C" fn mkf_IOAVServiceReadI2C(
        service: ServiceHandle,
        chip_address: u32,
        data_address: u32,
        data: *mut c_void,
        data_length: u32,
    ) -> IOReturn {
        super::read_i2c(&IOKit, service, chip_address, data_address, data, data_length)
    }
}
