use core::{fmt, ptr};

use libc::c_void;

/// Opaque reference to an `IOAVService` object owned by IOKit.
///
/// The handle is only an address: it can be compared, printed and handed back
/// to the framework, never dereferenced. It has the same ABI as `void *`.
///
/// It is neither `Send` nor `Sync`. Whether a service may be shared between
/// threads is up to IOKit.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ServiceHandle(*mut c_void);

impl ServiceHandle {
    #[inline]
    pub const fn null() -> Self {
        Self(ptr::null_mut())
    }

    #[inline]
    pub const fn from_ptr(ptr: *mut c_void) -> Self {
        Self(ptr)
    }

    #[inline]
    pub const fn as_ptr(self) -> *mut c_void {
        self.0
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

impl Default for ServiceHandle {
    #[inline]
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ServiceHandle({:p})", self.0)
    }
}

impl fmt::Pointer for ServiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Pointer::fmt(&self.0, f)
    }
}
