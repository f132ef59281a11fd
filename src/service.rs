use core::{convert::TryFrom, mem, ptr};

use libc::c_void;

use crate::{
    bridge,
    sys::{io_service_t, kIOReturnSuccess, IOReturn},
    AVFramework, IOAVError, Result, ServiceHandle,
};

/// An owned `IOAVService`, released when dropped.
pub struct AVService<F: AVFramework> {
    framework: F,
    handle: ServiceHandle,
}

#[cfg(target_os = "macos")]
impl AVService<crate::IOKit> {
    /// Default AV service, as picked by IOKit.
    pub fn new() -> Result<Self> {
        Self::with_framework(crate::IOKit)
    }

    /// AV service backed by `service`, e.g. a `DCPAVServiceProxy` entry
    /// from the IORegistry. The service object is not retained.
    pub fn with_service(service: io_service_t) -> Result<Self> {
        Self::with_framework_and_service(crate::IOKit, service)
    }
}

impl<F: AVFramework> AVService<F> {
    pub fn with_framework(framework: F) -> Result<Self> {
        let handle = unsafe { bridge::create(&framework, ptr::null()) };
        Self::adopt(framework, handle)
    }

    pub fn with_framework_and_service(framework: F, service: io_service_t) -> Result<Self> {
        let handle = unsafe { bridge::create_with_service(&framework, ptr::null(), service) };
        Self::adopt(framework, handle)
    }

    /// Takes ownership of `handle`.
    ///
    /// # Safety
    ///
    /// `handle` must be a live service created by `framework`, and nothing
    /// else may release it.
    pub unsafe fn from_raw(framework: F, handle: ServiceHandle) -> Result<Self> {
        Self::adopt(framework, handle)
    }

    fn adopt(framework: F, handle: ServiceHandle) -> Result<Self> {
        if handle.is_null() {
            log::debug!("IOAVService constructor returned null");
            return Err(IOAVError::ServiceUnavailable);
        }
        Ok(Self { framework, handle })
    }

    #[inline]
    pub fn handle(&self) -> ServiceHandle {
        self.handle
    }

    /// Gives up ownership without releasing the service.
    pub fn into_raw(self) -> ServiceHandle {
        let mut this = mem::ManuallyDrop::new(self);
        unsafe { ptr::drop_in_place(&mut this.framework) };
        this.handle
    }

    pub fn write_i2c(&self, chip_address: u32, data_address: u32, data: &[u8]) -> Result<()> {
        let len = transfer_len(data.len())?;
        let result = unsafe {
            bridge::write_i2c(
                &self.framework,
                self.handle,
                chip_address,
                data_address,
                data.as_ptr() as *mut c_void,
                len,
            )
        };
        check("write", chip_address, data_address, result)
    }

    pub fn read_i2c(&self, chip_address: u32, data_address: u32, data: &mut [u8]) -> Result<()> {
        let len = transfer_len(data.len())?;
        let result = unsafe {
            bridge::read_i2c(
                &self.framework,
                self.handle,
                chip_address,
                data_address,
                data.as_mut_ptr() as *mut c_void,
                len,
            )
        };
        check("read", chip_address, data_address, result)
    }
}

impl<F: AVFramework> Drop for AVService<F> {
    fn drop(&mut self) {
        unsafe { self.framework.release(self.handle) };
    }
}

impl<F: AVFramework> core::fmt::Debug for AVService<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("AVService")
            .field("handle", &self.handle)
            .finish()
    }
}

#[inline]
fn transfer_len(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| IOAVError::BufferTooLarge(len))
}

fn check(op: &str, chip_address: u32, data_address: u32, result: IOReturn) -> Result<()> {
    if result == kIOReturnSuccess {
        Ok(())
    } else {
        log::trace!(
            "I2C {} at {:#04x}/{:#04x} failed: {:#010x}",
            op,
            chip_address,
            data_address,
            result
        );
        Err(IOAVError::IOKit(result))
    }
}
