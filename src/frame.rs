// SPDX-FileCopyrightText: 2026 Camille019
// SPDX-License-Identifier: MPL-2.0

//! Text rendering of one dashboard refresh.
//!
//! Every panel row is exactly [`PANEL_INNER_WIDTH`] characters between its
//! borders. Bars longer than the room left on their row are clamped.

use chrono::Local;

use crate::sensor::Sample;

pub const TITLE: &str = "LENOVO LEGION - FAN MONITOR";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const EXIT_HINT: &str = "Press Ctrl+C to exit...";

/// Characters between the two vertical borders of a panel.
pub const PANEL_INNER_WIDTH: usize = 88;
const BANNER_WIDTH: usize = PANEL_INNER_WIDTH + 2;
const BAR_CHAR: char = '█';

/// Bar length for a fan speed, one block per 100 RPM.
pub fn fan_bar_len(rpm: i64) -> usize {
    if rpm < 0 {
        0
    } else {
        (rpm / 100) as usize
    }
}

/// Bar length for a temperature, one block per 2 °C.
pub fn temp_bar_len(celsius: f64) -> usize {
    if celsius < 0.0 {
        0
    } else {
        (celsius / 2.0).floor() as usize
    }
}

fn row_label(label: &str) -> String {
    format!("  {:<10}", format!("{}:", label))
}

fn bar(len: usize, room: usize) -> String {
    std::iter::repeat(BAR_CHAR).take(len.min(room)).collect()
}

fn panel_row(content: &str) -> String {
    format!("│{:<width$}│", content, width = PANEL_INNER_WIDTH)
}

fn panel_top(title: &str) -> String {
    let head = format!("─── {} ", title);
    let fill = PANEL_INNER_WIDTH.saturating_sub(head.chars().count());
    format!("┌{}{}┐", head, "─".repeat(fill))
}

fn panel_bottom() -> String {
    format!("└{}┘", "─".repeat(PANEL_INNER_WIDTH))
}

fn with_bar(mut line: String, len: usize) -> String {
    let room = PANEL_INNER_WIDTH.saturating_sub(line.chars().count());
    line.push_str(&bar(len, room));
    line
}

/// Panel row for one fan. A negative reading renders the error placeholder.
pub fn fan_row(label: &str, rpm: i64) -> String {
    let mut line = row_label(label);
    if rpm >= 0 {
        line.push_str(&format!("{:4} RPM  ", rpm));
        line = with_bar(line, fan_bar_len(rpm));
    } else {
        line.push_str("---- RPM  [Error]");
    }
    panel_row(&line)
}

/// Panel row for one temperature. A negative reading renders the error
/// placeholder.
pub fn temp_row(label: &str, celsius: f64) -> String {
    let mut line = row_label(label);
    if celsius >= 0.0 {
        line.push_str(&format!("{:5.1}°C  ", celsius));
        line = with_bar(line, temp_bar_len(celsius));
    } else {
        line.push_str("-----°C  [Error]");
    }
    panel_row(&line)
}

pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Render the whole dashboard for `sample`.
pub fn render(sample: &Sample, timestamp: &str) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let blank = panel_row("");

    let lines = [
        banner.clone(),
        format!("{:^width$}", TITLE, width = BANNER_WIDTH),
        banner,
        String::new(),
        panel_top("FAN SPEEDS"),
        blank.clone(),
        fan_row("Fan CPU", sample.cpu_fan),
        blank.clone(),
        fan_row("Fan GPU", sample.gpu_fan),
        blank.clone(),
        panel_bottom(),
        String::new(),
        panel_top("TEMPERATURES"),
        blank.clone(),
        temp_row("CPU", sample.cpu_temp),
        blank.clone(),
        temp_row("GPU", sample.gpu_temp),
        blank,
        panel_bottom(),
        String::new(),
        format!("Last update: {}", timestamp),
        String::new(),
        EXIT_HINT.to_string(),
    ];

    let mut frame = lines.join("\n");
    frame.push('\n');
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::{FAN_UNAVAILABLE, TEMP_UNAVAILABLE};

    fn count_bar(s: &str) -> usize {
        s.chars().filter(|c| *c == BAR_CHAR).count()
    }

    #[test]
    fn test_fan_bar_one_block_per_hundred_rpm() {
        assert_eq!(fan_bar_len(2150), 21);
        assert_eq!(fan_bar_len(99), 0);
        assert_eq!(count_bar(&fan_row("Fan CPU", 2150)), 21);
    }

    #[test]
    fn test_fan_row_error_placeholder() {
        let row = fan_row("Fan GPU", FAN_UNAVAILABLE);
        assert!(row.contains("[Error]"));
        assert!(row.contains("---- RPM"));
        assert_eq!(count_bar(&row), 0);
    }

    #[test]
    fn test_temp_bar_one_block_per_two_degrees() {
        assert_eq!(temp_bar_len(63.4), 31);
        let row = temp_row("CPU", 63.4);
        assert!(row.contains(" 63.4°C"));
        assert_eq!(count_bar(&row), 31);
    }

    #[test]
    fn test_temp_row_error_placeholder() {
        let row = temp_row("GPU", TEMP_UNAVAILABLE);
        assert!(row.contains("-----°C  [Error]"));
    }

    #[test]
    fn test_rows_fit_panel() {
        let rows = [
            fan_row("Fan CPU", 0),
            fan_row("Fan CPU", 2150),
            fan_row("Fan CPU", 60_000),
            fan_row("Fan GPU", FAN_UNAVAILABLE),
            temp_row("CPU", 45.5),
            temp_row("CPU", 400.0),
            temp_row("GPU", TEMP_UNAVAILABLE),
            panel_top("TEMPERATURES"),
            panel_bottom(),
        ];
        for row in rows.iter() {
            assert_eq!(row.chars().count(), PANEL_INNER_WIDTH + 2, "{:?}", row);
        }
    }

    #[test]
    fn test_high_fan_speed_keeps_full_bar() {
        assert_eq!(count_bar(&fan_row("Fan CPU", 6000)), 60);
        assert_eq!(count_bar(&fan_row("Fan GPU", 6600)), 66);
        assert_eq!(count_bar(&temp_row("CPU", 105.0)), 52);
    }

    #[test]
    fn test_oversized_bar_is_clamped() {
        let row = fan_row("Fan CPU", 60_000);
        assert!(count_bar(&row) < fan_bar_len(60_000));
        assert!(row.ends_with("█│"));
    }

    #[test]
    fn test_render_frame() {
        let sample = Sample {
            cpu_fan: 2100,
            gpu_fan: FAN_UNAVAILABLE,
            cpu_temp: 55.0,
            gpu_temp: 61.0,
        };
        let frame = render(&sample, "2026-10-18 12:34:56");

        assert!(frame.contains(TITLE));
        assert!(frame.contains("2100 RPM"));
        assert!(frame.contains("[Error]"));
        assert!(frame.contains("55.0°C"));
        assert!(frame.contains("61.0°C"));
        assert!(frame.contains("Last update: 2026-10-18 12:34:56"));
        assert!(frame.trim_end().ends_with(EXIT_HINT));
    }
}
