// SPDX-FileCopyrightText: 2026 Camille019
// SPDX-License-Identifier: MPL-2.0

use std::fs::OpenOptions;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const SYSFS_MOUNT: &str = "/sys";

/// Read a sysfs file, without its trailing whitespace.
pub fn sysfs_read_file(path: &Path) -> Result<String> {
    let mut file = OpenOptions::new().read(true).write(false).open(path)?;
    let mut buf: String = String::new();
    file.read_to_string(&mut buf)?;
    let len = buf.trim_end().len();
    buf.truncate(len);

    Ok(buf)
}

pub fn sysfs_read_attr(path: &Path, attr: &str) -> Result<String> {
    let mut path = path.to_owned();
    path.push(attr);

    sysfs_read_file(path.as_ref())
}

/// Read an attribute and parse it as a number.
pub fn sysfs_read_value<T>(path: &Path, attr: &str) -> Result<T>
where
    T: FromStr,
    Error: From<T::Err>,
{
    let text = sysfs_read_attr(path, attr)?;
    Ok(text.trim().parse::<T>()?)
}
