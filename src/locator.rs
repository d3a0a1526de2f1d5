// SPDX-FileCopyrightText: 2026 Camille019
// SPDX-License-Identifier: MPL-2.0

use std::fmt;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use glob::Pattern;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::sysfs;

/// The hwmon directory holding the attribute files of the located driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SensorRoot {
    path: PathBuf,
}

impl SensorRoot {
    pub fn new<P: Into<PathBuf>>(path: P) -> SensorRoot {
        SensorRoot { path: path.into() }
    }

    /// Return the sysfs directory path of the device.
    pub fn path(&self) -> &Path {
        self.path.as_ref()
    }

    /// Directory path with a trailing separator, ready to have an
    /// attribute name appended.
    pub fn prefix(&self) -> String {
        let mut prefix = self.path.to_string_lossy().into_owned();
        if !prefix.ends_with(MAIN_SEPARATOR) {
            prefix.push(MAIN_SEPARATOR);
        }
        prefix
    }
}

impl fmt::Display for SensorRoot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.prefix())
    }
}

/// Find the first hwmon device whose `name` contains `config.driver`,
/// ignoring case.
///
/// Devices whose descriptor cannot be read are skipped.
pub fn locate(config: &Config) -> Result<SensorRoot> {
    let mount = config.sysfs_mount.to_string_lossy();
    let pattern = format!("{}/class/hwmon/hwmon*/name", Pattern::escape(&mount));
    let driver = config.driver.to_lowercase();

    for entry in glob::glob(&pattern)? {
        let name_path = match entry {
            Ok(path) => path,
            Err(e) => {
                log::debug!("Skip unreadable hwmon entry: {}", e);
                continue;
            }
        };

        let name = match sysfs::sysfs_read_file(&name_path) {
            Ok(name) => name,
            Err(e) => {
                log::debug!("Skip {:?}: {}", name_path, e);
                continue;
            }
        };

        if name.to_lowercase().contains(&driver) {
            if let Some(dir) = name_path.parent() {
                log::info!("Found '{}' at {:?}", name, dir);
                return Ok(SensorRoot::new(dir));
            }
        } else {
            log::debug!("Skip chip '{}' at {:?}", name, name_path);
        }
    }

    Err(Error::NotFound {
        driver: config.driver.clone(),
    })
}
