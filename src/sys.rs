#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]
#![allow(non_snake_case)]
#![allow(dead_code)]

use libc::{c_int, c_uint, c_void};

#[repr(C)]
pub struct __CFAllocator(c_void);

pub type CFAllocatorRef = *const __CFAllocator;
pub type CFTypeRef = *const c_void;

pub type kern_return_t = c_int;
pub type IOReturn = kern_return_t;
pub type mach_port_t = c_uint;
pub type io_object_t = mach_port_t;
pub type io_service_t = io_object_t;

pub type IOAVServiceRef = CFTypeRef;

// iokit_common_err(x) = sys_iokit | sub_iokit_common | x
const fn iokit_common_err(code: u32) -> IOReturn {
    (0xE000_0000 | code) as IOReturn
}

pub const kIOReturnSuccess: IOReturn = 0;
pub const kIOReturnError: IOReturn = iokit_common_err(0x2bc);
pub const kIOReturnNoMemory: IOReturn = iokit_common_err(0x2bd);
pub const kIOReturnNoResources: IOReturn = iokit_common_err(0x2be);
pub const kIOReturnIPCError: IOReturn = iokit_common_err(0x2bf);
pub const kIOReturnNoDevice: IOReturn = iokit_common_err(0x2c0);
pub const kIOReturnNotPrivileged: IOReturn = iokit_common_err(0x2c1);
pub const kIOReturnBadArgument: IOReturn = iokit_common_err(0x2c2);
pub const kIOReturnExclusiveAccess: IOReturn = iokit_common_err(0x2c5);
pub const kIOReturnUnsupported: IOReturn = iokit_common_err(0x2c7);
pub const kIOReturnInternalError: IOReturn = iokit_common_err(0x2c9);
pub const kIOReturnIOError: IOReturn = iokit_common_err(0x2ca);
pub const kIOReturnNotOpen: IOReturn = iokit_common_err(0x2cd);
pub const kIOReturnBusy: IOReturn = iokit_common_err(0x2d5);
pub const kIOReturnTimeout: IOReturn = iokit_common_err(0x2d6);
pub const kIOReturnOffline: IOReturn = iokit_common_err(0x2d7);
pub const kIOReturnNotReady: IOReturn = iokit_common_err(0x2d8);
pub const kIOReturnNotResponding: IOReturn = iokit_common_err(0x2ed);

#[cfg(target_os = "macos")]
#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    pub fn CFRelease(cf: CFTypeRef);
}

// Private symbols, not declared in any public IOKit header.
#[cfg(target_os = "macos")]
#[link(name = "IOKit", kind = "framework")]
extern "C" {
    pub fn IOAVServiceCreate(allocator: CFAllocatorRef) -> IOAVServiceRef;
    pub fn IOAVServiceCreateWithService(
        allocator: CFAllocatorRef,
        service: io_service_t,
    ) -> IOAVServiceRef;
    pub fn IOAVServiceWriteI2C(
        service: IOAVServiceRef,
        chipAddress: u32,
        dataAddress: u32,
        data: *mut c_void,
        dataLength: u32,
    ) -> IOReturn;
    pub fn IOAVServiceReadI2C(
        service: IOAVServiceRef,
        chipAddress: u32,
        dataAddress: u32,
        data: *mut c_void,
        dataLength: u32,
    ) -> IOReturn;
}
