use core::fmt;

use crate::sys::{
    kIOReturnBadArgument, kIOReturnBusy, kIOReturnError, kIOReturnExclusiveAccess,
    kIOReturnIOError, kIOReturnIPCError, kIOReturnInternalError, kIOReturnNoDevice,
    kIOReturnNoMemory, kIOReturnNoResources, kIOReturnNotOpen, kIOReturnNotPrivileged,
    kIOReturnNotReady, kIOReturnNotResponding, kIOReturnOffline, kIOReturnTimeout,
    kIOReturnUnsupported, IOReturn,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IOAVError {
    ServiceUnavailable,
    BufferTooLarge(usize),
    IOKit(IOReturn),
}

impl IOAVError {
    pub fn io_result(&self) -> Option<IOReturn> {
        match self {
            IOAVError::IOKit(res) => Some(*res),
            _ => None,
        }
    }

    pub fn buffer_len(&self) -> Option<usize> {
        match self {
            IOAVError::BufferTooLarge(len) => Some(*len),
            _ => None,
        }
    }
}

fn io_return_name(res: IOReturn) -> Option<&'static str> {
    Some(match res {
        kIOReturnError => "kIOReturnError",
        kIOReturnNoMemory => "kIOReturnNoMemory",
        kIOReturnNoResources => "kIOReturnNoResources",
        kIOReturnIPCError => "kIOReturnIPCError",
        kIOReturnNoDevice => "kIOReturnNoDevice",
        kIOReturnNotPrivileged => "kIOReturnNotPrivileged",
        kIOReturnBadArgument => "kIOReturnBadArgument",
        kIOReturnExclusiveAccess => "kIOReturnExclusiveAccess",
        kIOReturnUnsupported => "kIOReturnUnsupported",
        kIOReturnInternalError => "kIOReturnInternalError",
        kIOReturnIOError => "kIOReturnIOError",
        kIOReturnNotOpen => "kIOReturnNotOpen",
        kIOReturnBusy => "kIOReturnBusy",
        kIOReturnTimeout => "kIOReturnTimeout",
        kIOReturnOffline => "kIOReturnOffline",
        kIOReturnNotReady => "kIOReturnNotReady",
        kIOReturnNotResponding => "kIOReturnNotResponding",
        _ => return None,
    })
}

impl fmt::Display for IOAVError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IOAVError::ServiceUnavailable => write!(f, "IOAVService could not be created."),
            IOAVError::BufferTooLarge(len) => write!(
                f,
                "Buffer of {} bytes does not fit a 32-bit I2C transfer length.",
                len
            ),
            IOAVError::IOKit(res) => match io_return_name(*res) {
                Some(name) => write!(f, "IOKit exited with code {:#010x} ({}).", res, name),
                None => write!(f, "IOKit exited with code {:#010x}.", res),
            },
        }
    }
}

impl std::error::Error for IOAVError {}
