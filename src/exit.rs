// SPDX-FileCopyrightText: 2026 Camille019
// SPDX-License-Identifier: MPL-2.0

use crate::error::{Error, Result};

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Exit status and the lines to print on stderr for the result of a run.
///
/// A clean stop has already said goodbye on screen, so it has nothing left
/// to report.
pub fn report(result: &Result<()>) -> (i32, Vec<String>) {
    match result {
        Ok(()) => (EXIT_OK, Vec::new()),
        Err(Error::NotFound { .. }) => (
            EXIT_FAILURE,
            vec![
                String::from("Error: Legion hwmon device not found"),
                String::from("Make sure the legion_laptop module is loaded"),
            ],
        ),
        Err(e) => (EXIT_FAILURE, vec![format!("Error: {}", e)]),
    }
}
