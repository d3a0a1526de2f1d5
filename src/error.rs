// SPDX-FileCopyrightText: 2026 Camille019
// SPDX-License-Identifier: MPL-2.0

use std::io;
use std::num;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No hwmon device exposes a `name` matching the driver.
    #[error("no hwmon device found for driver '{driver}'")]
    NotFound { driver: String },
    #[error("invalid hwmon pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("ParseInt error: {0}")]
    ParseInt(#[from] num::ParseIntError),
}

pub type Result<T> = std::result::Result<T, Error>;
