// SPDX-FileCopyrightText: 2026 Camille019
// SPDX-License-Identifier: MPL-2.0

use crate::error::Result;
use crate::locator::SensorRoot;
use crate::sysfs;

/// Fan reading returned when the attribute cannot be read.
pub const FAN_UNAVAILABLE: i64 = -1;
/// Temperature reading returned when the attribute cannot be read.
pub const TEMP_UNAVAILABLE: f64 = -1.0;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SensorKind {
    Fan,
    Temperature,
}

impl SensorKind {
    /// Name of the `_input` attribute for the given sensor number.
    pub fn input_attr(self, number: u32) -> String {
        match self {
            SensorKind::Fan => format!("fan{}_input", number),
            SensorKind::Temperature => format!("temp{}_input", number),
        }
    }

    /// Divisor from the raw sysfs value to the displayed unit.
    fn scale(self) -> f64 {
        const SCALE_MILLI: f64 = 1000.0;

        match self {
            SensorKind::Fan => 1.0,
            SensorKind::Temperature => SCALE_MILLI,
        }
    }
}

fn read_raw(root: &SensorRoot, kind: SensorKind, number: u32) -> Result<i64> {
    sysfs::sysfs_read_value(root.path(), &kind.input_attr(number))
}

pub fn try_read_fan_rpm(root: &SensorRoot, fan: u32) -> Result<i64> {
    read_raw(root, SensorKind::Fan, fan)
}

pub fn try_read_temp_celsius(root: &SensorRoot, sensor: u32) -> Result<f64> {
    let kind = SensorKind::Temperature;
    Ok(read_raw(root, kind, sensor)? as f64 / kind.scale())
}

/// Current speed of fan `fan` in RPM, or [`FAN_UNAVAILABLE`] on any failure.
pub fn read_fan_rpm(root: &SensorRoot, fan: u32) -> i64 {
    try_read_fan_rpm(root, fan).unwrap_or_else(|e| {
        log::debug!("fan{}: {}", fan, e);
        FAN_UNAVAILABLE
    })
}

/// Current temperature of sensor `sensor` in degrees Celsius, or
/// [`TEMP_UNAVAILABLE`] on any failure.
pub fn read_temp_celsius(root: &SensorRoot, sensor: u32) -> f64 {
    try_read_temp_celsius(root, sensor).unwrap_or_else(|e| {
        log::debug!("temp{}: {}", sensor, e);
        TEMP_UNAVAILABLE
    })
}

/// Readings taken during one refresh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub cpu_fan: i64,
    pub gpu_fan: i64,
    pub cpu_temp: f64,
    pub gpu_temp: f64,
}

impl Sample {
    pub fn read(root: &SensorRoot) -> Sample {
        Sample {
            cpu_fan: read_fan_rpm(root, 1),
            gpu_fan: read_fan_rpm(root, 2),
            cpu_temp: read_temp_celsius(root, 1),
            gpu_temp: read_temp_celsius(root, 2),
        }
    }
}
