// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{os::fd::RawFd, time::Duration};

use miette::Diagnostic;
use rusb::{Context, DeviceHandle, UsbContext};

use super::{PollRead, Transport, TransportError};
use crate::DeviceProfile;

/// Failures while taking hold of the device. Each one aborts `read_mouse` before the
/// poll loop starts, there is no retry.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum StartupError {
    #[error("{fd} is not a valid file descriptor")]
    #[diagnostic(
        code(usb_mouse::startup::invalid_fd),
        help("The file descriptor must be a non-negative integer")
    )]
    InvalidFileDescriptor { fd: RawFd },

    #[error("Could not turn off libusb device discovery")]
    #[diagnostic(code(usb_mouse::startup::discovery))]
    DisableDiscovery(#[source] rusb::Error),

    #[error("libusb_init failed")]
    #[diagnostic(code(usb_mouse::startup::context_init))]
    ContextInit(#[source] rusb::Error),

    #[error("Could not wrap file descriptor {fd} as a USB device")]
    #[diagnostic(
        code(usb_mouse::startup::wrap_device),
        help("Pass the number of an already open usbfs device file descriptor")
    )]
    WrapDevice {
        fd: RawFd,
        #[source]
        source: rusb::Error,
    },

    #[error("Could not detach the kernel driver from interface {interface_number}")]
    #[diagnostic(code(usb_mouse::startup::detach_kernel_driver))]
    DetachKernelDriver {
        interface_number: u8,
        #[source]
        source: rusb::Error,
    },

    #[error("Could not claim interface {interface_number}")]
    #[diagnostic(
        code(usb_mouse::startup::claim_interface),
        help("Another process (or driver) may be holding the interface")
    )]
    ClaimInterface {
        interface_number: u8,
        #[source]
        source: rusb::Error,
    },
}

/// The mouse, reached through libusb.
///
/// Acquisition happens in stages in [`UsbMouseTransport::open_from_fd`]:
/// 1. wrap the file descriptor in a device handle,
/// 2. detach the kernel driver, if one is bound to the interface,
/// 3. claim the interface.
///
/// Each completed stage is recorded, and [`Drop`] undoes them in reverse order: the
/// interface is released, the kernel driver re-attached, and the handle closed (when
/// the `handle` field drops). A stage that fails to undo is logged and the remaining
/// stages still run. This holds for a half finished [`open_from_fd`] too.
///
/// [`open_from_fd`]: UsbMouseTransport::open_from_fd
#[allow(missing_debug_implementations)]
pub struct UsbMouseTransport {
    handle: DeviceHandle<Context>,
    device_profile: DeviceProfile,
    is_kernel_driver_detached: bool,
    is_interface_claimed: bool,
}

impl UsbMouseTransport {
    /// Take over the already open device behind `fd`.
    ///
    /// # Errors
    ///
    /// Returns a [`StartupError`] naming the stage that failed.
    pub fn open_from_fd(fd: RawFd, device_profile: DeviceProfile) -> Result<Self, StartupError> {
        if fd < 0 {
            return Err(StartupError::InvalidFileDescriptor { fd });
        }

        // The device is already open, there is nothing to enumerate.
        rusb::disable_device_discovery().map_err(StartupError::DisableDiscovery)?;
        let context = Context::new().map_err(StartupError::ContextInit)?;

        // SAFETY: `fd` must stay open for the lifetime of the handle. It is owned by
        // the parent process that launched us and is never closed by this process.
        let handle = unsafe { context.open_device_with_fd(fd) }
            .map_err(|source| StartupError::WrapDevice { fd, source })?;
        tracing::debug!(message = "Wrapped device", fd = fd);

        let mut it = Self {
            handle,
            device_profile,
            is_kernel_driver_detached: false,
            is_interface_claimed: false,
        };

        let interface_number = device_profile.interface_number;
        if let Ok(true) = it.handle.kernel_driver_active(interface_number) {
            it.handle
                .detach_kernel_driver(interface_number)
                .map_err(|source| StartupError::DetachKernelDriver {
                    interface_number,
                    source,
                })?;
            it.is_kernel_driver_detached = true;
            tracing::debug!(message = "Detached kernel driver", interface_number);
        }

        it.handle
            .claim_interface(interface_number)
            .map_err(|source| StartupError::ClaimInterface {
                interface_number,
                source,
            })?;
        it.is_interface_claimed = true;
        tracing::debug!(message = "Claimed interface", interface_number);

        Ok(it)
    }
}

impl Transport for UsbMouseTransport {
    fn read_report(
        &mut self,
        buffer: &mut [u8],
        timeout: Duration,
    ) -> Result<PollRead, TransportError> {
        let endpoint = self.device_profile.endpoint_address;
        match self.handle.read_interrupt(endpoint, buffer, timeout) {
            Ok(len) => Ok(PollRead::Data(len)),
            Err(rusb::Error::Timeout) => Ok(PollRead::Timeout),
            Err(source) => Err(TransportError { endpoint, source }),
        }
    }
}

impl Drop for UsbMouseTransport {
    fn drop(&mut self) {
        let interface_number = self.device_profile.interface_number;

        if self.is_interface_claimed {
            match self.handle.release_interface(interface_number) {
                Ok(()) => tracing::debug!(message = "Released interface", interface_number),
                Err(error) => tracing::warn!(
                    message = "Could not release interface",
                    interface_number,
                    error = %error
                ),
            }
        }

        if self.is_kernel_driver_detached {
            match self.handle.attach_kernel_driver(interface_number) {
                Ok(()) => {
                    tracing::debug!(message = "Re-attached kernel driver", interface_number);
                }
                Err(error) => tracing::warn!(
                    message = "Could not re-attach kernel driver",
                    interface_number,
                    error = %error
                ),
            }
        }

        // The handle is closed, and the context exited, when the fields drop.
        tracing::debug!(message = "Closing device handle");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_fd_is_rejected_before_touching_libusb() {
        let result = UsbMouseTransport::open_from_fd(-1, DeviceProfile::default());
        assert!(matches!(
            result,
            Err(StartupError::InvalidFileDescriptor { fd: -1 })
        ));
    }
}
