// SPDX-FileCopyrightText: 2026 Camille019
// SPDX-License-Identifier: MPL-2.0

use std::path::PathBuf;
use std::time::Duration;

use crate::sysfs::SYSFS_MOUNT;

/// Substring looked for in the hwmon `name` descriptors.
pub const LEGION_DRIVER: &str = "legion";

/// Fixed settings of a monitoring session.
#[derive(Clone, Debug)]
pub struct Config {
    /// Where sysfs is mounted.
    pub sysfs_mount: PathBuf,
    /// Driver name matched, case-insensitively, against `hwmon*/name`.
    pub driver: String,
    /// Delay between two frames.
    pub interval: Duration,
    /// Pause after the startup banner, before the first frame.
    pub startup_delay: Duration,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            sysfs_mount: PathBuf::from(SYSFS_MOUNT),
            driver: String::from(LEGION_DRIVER),
            interval: Duration::from_secs(1),
            startup_delay: Duration::from_secs(2),
        }
    }
}
