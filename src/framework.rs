use libc::c_void;

use crate::{
    sys::{io_service_t, CFAllocatorRef, IOReturn},
    ServiceHandle,
};

/// The entry points of the framework that owns `IOAVService` objects.
///
/// [`IOKit`] is the real one. Everything else in this crate is written
/// against this trait and never looks behind a [`ServiceHandle`].
///
/// # Safety
///
/// Every method is an unchecked call into foreign code. Callers uphold the
/// framework's contracts: handles come from `create`/`create_with_service`
/// and are still alive, `data` points to at least `data_length` bytes.
pub trait AVFramework {
    unsafe fn create(&self, allocator: CFAllocatorRef) -> ServiceHandle;

    unsafe fn create_with_service(
        &self,
        allocator: CFAllocatorRef,
        service: io_service_t,
    ) -> ServiceHandle;

    unsafe fn write_i2c(
        &self,
        service: ServiceHandle,
        chip_address: u32,
        data_address: u32,
        data: *mut c_void,
        data_length: u32,
    ) -> IOReturn;

    unsafe fn read_i2c(
        &self,
        service: ServiceHandle,
        chip_address: u32,
        data_address: u32,
        data: *mut c_void,
        data_length: u32,
    ) -> IOReturn;

    /// Drops one reference to `service`.
    unsafe fn release(&self, service: ServiceHandle);
}

impl<'a, F: AVFramework + ?Sized> AVFramework for &'a F {
    #[inline]
    unsafe fn create(&self, allocator: CFAllocatorRef) -> ServiceHandle {
        (**self).create(allocator)
    }

    #[inline]
    unsafe fn create_with_service(
        &self,
        allocator: CFAllocatorRef,
        service: io_service_t,
    ) -> ServiceHandle {
        (**self).create_with_service(allocator, service)
    }

    #[inline]
    unsafe fn write_i2c(
        &self,
        service: ServiceHandle,
        chip_address: u32,
        data_address: u32,
        data: *mut c_void,
        data_length: u32,
    ) -> IOReturn {
        (**self).write_i2c(service, chip_address, data_address, data, data_length)
    }

    #[inline]
    unsafe fn read_i2c(
        &self,
        service: ServiceHandle,
        chip_address: u32,
        data_address: u32,
        data: *mut c_void,
        data_length: u32,
    ) -> IOReturn {
        (**self).read_i2c(service, chip_address, data_address, data, data_length)
    }

    #[inline]
    unsafe fn release(&self, service: ServiceHandle) {
        (**self).release(service)
    }
}

/// The private `IOAVService*` functions exported by IOKit.framework.
#[cfg(target_os = "macos")]
#[derive(Default, Debug, Copy, Clone)]
pub struct IOKit;

#[cfg(target_os = "macos")]
impl AVFramework for IOKit {
    #[inline]
    unsafe fn create(&self, allocator: CFAllocatorRef) -> ServiceHandle {
        ServiceHandle::from_ptr(crate::sys::IOAVServiceCreate(allocator) as *mut c_void)
    }

    #[inline]
    unsafe fn create_with_service(
        &self,
        allocator: CFAllocatorRef,
        service: io_service_t,
    ) -> ServiceHandle {
        ServiceHandle::from_ptr(
            crate::sys::IOAVServiceCreateWithService(allocator, service) as *mut c_void
        )
    }

    #[inline]
    unsafe fn write_i2c(
        &self,
        service: ServiceHandle,
        chip_address: u32,
        data_address: u32,
        data: *mut c_void,
        data_length: u32,
    ) -> IOReturn {
        crate::sys::IOAVServiceWriteI2C(
            service.as_ptr() as crate::sys::IOAVServiceRef,
            chip_address,
            data_address,
            data,
            data_length,
        )
    }

    #[inline]
    unsafe fn read_i2c(
        &self,
        service: ServiceHandle,
        chip_address: u32,
        data_address: u32,
        data: *mut c_void,
        data_length: u32,
    ) -> IOReturn {
        crate::sys::IOAVServiceReadI2C(
            service.as_ptr() as crate::sys::IOAVServiceRef,
            chip_address,
            data_address,
            data,
            data_length,
        )
    }

    #[inline]
    unsafe fn release(&self, service: ServiceHandle) {
        crate::sys::CFRelease(service.as_ptr() as crate::sys::CFTypeRef)
    }
}
