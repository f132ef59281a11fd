use std::{cell::Cell, cell::RefCell, vec::Vec};

use libc::c_void;

use crate::{
    sys::{io_service_t, kIOReturnSuccess, CFAllocatorRef, IOReturn},
    AVFramework, ServiceHandle,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create {
        allocator: usize,
    },
    CreateWithService {
        allocator: usize,
        service: io_service_t,
    },
    WriteI2C {
        service: ServiceHandle,
        chip_address: u32,
        data_address: u32,
        data: usize,
        data_length: u32,
        bytes: Vec<u8>,
    },
    ReadI2C {
        service: ServiceHandle,
        chip_address: u32,
        data_address: u32,
        data: usize,
        data_length: u32,
    },
    Release {
        service: ServiceHandle,
    },
}

/// Records every call and answers with canned values.
pub struct MockFramework {
    pub calls: RefCell<Vec<Call>>,
    /// Constructors return null when set.
    pub fail_create: Cell<bool>,
    pub write_status: Cell<IOReturn>,
    pub read_status: Cell<IOReturn>,
    /// Bytes copied into the caller's buffer by `read_i2c`.
    pub read_reply: RefCell<Vec<u8>>,
    next_handle: Cell<usize>,
}

impl MockFramework {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_create: Cell::new(false),
            write_status: Cell::new(kIOReturnSuccess),
            read_status: Cell::new(kIOReturnSuccess),
            read_reply: RefCell::new(Vec::new()),
            next_handle: Cell::new(0x1000),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn new_handle(&self) -> ServiceHandle {
        if self.fail_create.get() {
            return ServiceHandle::null();
        }
        let addr = self.next_handle.get();
        self.next_handle.set(addr + 0x10);
        ServiceHandle::from_ptr(addr as *mut c_void)
    }
}

impl AVFramework for MockFramework {
    unsafe fn create(&self, allocator: CFAllocatorRef) -> ServiceHandle {
        self.calls.borrow_mut().push(Call::Create {
            allocator: allocator as usize,
        });
        self.new_handle()
    }

    unsafe fn create_with_service(
        &self,
        allocator: CFAllocatorRef,
        service: io_service_t,
    ) -> ServiceHandle {
        self.calls.borrow_mut().push(Call::CreateWithService {
            allocator: allocator as usize,
            service,
        });
        self.new_handle()
    }

    unsafe fn write_i2c(
        &self,
        service: ServiceHandle,
        chip_address: u32,
        data_address: u32,
        data: *mut c_void,
        data_length: u32,
    ) -> IOReturn {
        let bytes = if data.is_null() || data_length == 0 {
            Vec::new()
        } else {
            core::slice::from_raw_parts(data as *const u8, data_length as usize).to_vec()
        };
        self.calls.borrow_mut().push(Call::WriteI2C {
            service,
            chip_address,
            data_address,
            data: data as usize,
            data_length,
            bytes,
        });
        self.write_status.get()
    }

    unsafe fn read_i2c(
        &self,
        service: ServiceHandle,
        chip_address: u32,
        data_address: u32,
        data: *mut c_void,
        data_length: u32,
    ) -> IOReturn {
        self.calls.borrow_mut().push(Call::ReadI2C {
            service,
            chip_address,
            data_address,
            data: data as usize,
            data_length,
        });
        if !data.is_null() {
            let reply = self.read_reply.borrow();
            let n = reply.len().min(data_length as usize);
            core::ptr::copy_nonoverlapping(reply.as_ptr(), data as *mut u8, n);
        }
        self.read_status.get()
    }

    unsafe fn release(&self, service: ServiceHandle) {
        self.calls.borrow_mut().push(Call::Release { service });
    }
}
