// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Plain data configuration for a run of `read_mouse`. The defaults describe the one
//! mouse model whose report layout [`crate::decode`] understands.

use std::time::Duration;

use crate::GridSize;

pub const DEFAULT_REFRESH_RATE_HZ: u32 = 30;
pub const DEFAULT_INTERFACE_NUMBER: u8 = 1;
pub const DEFAULT_ENDPOINT_ADDRESS: u8 = 0x82;

/// Size of the buffer handed to each interrupt read.
pub const REPORT_BUFFER_SIZE: usize = 8;

/// How often the endpoint is polled.
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub struct PollConfig {
    pub refresh_rate_hz: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            refresh_rate_hz: DEFAULT_REFRESH_RATE_HZ,
        }
    }
}

impl PollConfig {
    /// Per read timeout, one refresh period rounded up to whole milliseconds
    /// (34ms at 30Hz). A rate of `0` is treated as `1`.
    #[must_use]
    pub fn read_timeout(&self) -> Duration {
        let hz = u64::from(self.refresh_rate_hz.max(1));
        Duration::from_millis(1_000_u64.div_ceil(hz))
    }
}

/// Which interface to claim and which interrupt IN endpoint to read.
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
pub struct DeviceProfile {
    pub interface_number: u8,
    pub endpoint_address: u8,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            interface_number: DEFAULT_INTERFACE_NUMBER,
            endpoint_address: DEFAULT_ENDPOINT_ADDRESS,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Copy, Default)]
pub struct MouseViewConfig {
    pub grid_size: GridSize,
    pub poll_config: PollConfig,
    pub device_profile: DeviceProfile,
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(30,   34   ; "default rate")]
    #[test_case(1,    1000 ; "one hertz")]
    #[test_case(0,    1000 ; "zero is clamped")]
    #[test_case(60,   17   ; "rounds up")]
    #[test_case(1000, 1    ; "one millisecond")]
    #[test_case(5000, 1    ; "never zero")]
    fn test_read_timeout(refresh_rate_hz: u32, expected_ms: u64) {
        let it = PollConfig { refresh_rate_hz };
        assert_eq2!(it.read_timeout(), Duration::from_millis(expected_ms));
    }

    #[test]
    fn test_defaults_match_the_supported_device() {
        let it = MouseViewConfig::default();
        assert_eq2!(it.grid_size, GridSize::new(40, 20));
        assert_eq2!(it.poll_config.refresh_rate_hz, 30);
        assert_eq2!(it.device_profile.interface_number, 1);
        assert_eq2!(it.device_profile.endpoint_address, 0x82);
    }
}
