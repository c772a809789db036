//! Terminal renderer for encoded signals.
//!
//! Draws the post-step function on a character grid with one row per level
//! and one label row above each level row:
//!
//! ```text
//! Digital Signal: Manchester Encoding
//!    │ 1
//! +1 ┤──┐   ┌──
//!    │  │  0│
//!  0 ┤  └───┘
//!    │
//! -1 ┤
//!    └┬───┬───┬
//!     0   1   2
//! ```
//!
//! Each half-bit is `half_width` columns wide. Level changes are drawn in
//! the first column of the new step, which is always a multiple of
//! `half_width`; labels go one column left of the bit center, so the two
//! never collide.

use line_coding_core::signal::{LABEL_OFFSET, Y_TICKS};
use line_coding_core::{Signal, SignalLevel};

use crate::config::{MAX_HALF_WIDTH, MIN_HALF_WIDTH};

/// Label row, level row, for +1, 0 and -1 (top to bottom).
const ROWS: usize = 2 * Y_TICKS.len();

fn row_prefixes() -> Vec<String> {
    Y_TICKS
        .iter()
        .rev()
        .flat_map(|&tick| {
            let name = SignalLevel::from_value(tick)
                .map(|level| level.to_string())
                .unwrap_or_default();
            ["   │".to_string(), format!("{:>2} ┤", name)]
        })
        .collect()
}

fn level_row(level: SignalLevel) -> usize {
    (3 - 2 * i32::from(level.value())) as usize
}

/// Render a signal as a multi-line string.
pub fn render(signal: &Signal, half_width: usize) -> String {
    let w = half_width.clamp(MIN_HALF_WIDTH, MAX_HALF_WIDTH);
    let steps = signal.steps();
    // One extra column for the terminal vertex
    let width = steps.len() * w + 1;
    let mut grid = vec![vec![' '; width]; ROWS];

    let mut previous: Option<SignalLevel> = None;
    for (k, step) in steps.iter().enumerate() {
        let start = k * w;
        let row = level_row(step.level);
        for cell in &mut grid[row][start..start + w] {
            *cell = '─';
        }

        if let Some(prev) = previous.filter(|&p| p != step.level) {
            let from = level_row(prev);
            let falling = from < row;
            let (top, bottom) = (from.min(row), from.max(row));

            grid[top][start] = if falling { '┐' } else { '┌' };
            grid[bottom][start] = if falling { '└' } else { '┘' };
            for line in &mut grid[top + 1..bottom] {
                line[start] = '│';
            }
        }
        previous = Some(step.level);
    }
    if let Some(last) = previous {
        grid[level_row(last)][width - 1] = '─';
    }

    for label in signal.annotations() {
        let anchor = (label.y - LABEL_OFFSET).round() as i8;
        let level = SignalLevel::from_value(anchor).unwrap_or(SignalLevel::Zero);
        let center = (label.x * 2.0 * w as f64).round() as usize;
        grid[level_row(level) - 1][center.saturating_sub(1)] = label.bit.as_char();
    }

    let mut out = String::new();
    out.push_str(&signal.title());
    out.push('\n');

    for (prefix, line) in row_prefixes().iter().zip(&grid) {
        let body: String = line.iter().collect();
        out.push_str(format!("{}{}", prefix, body).trim_end());
        out.push('\n');
    }

    // x axis with a tick at every bit boundary
    let bit_width = 2 * w;
    out.push_str("   └");
    out.extend((0..width).map(|col| if col % bit_width == 0 { '┬' } else { '─' }));
    out.push('\n');

    let mut ticks = vec![' '; width + 2];
    for tick in signal.x_ticks() {
        for (i, ch) in tick.to_string().chars().enumerate() {
            if let Some(cell) = ticks.get_mut(tick * bit_width + i) {
                *cell = ch;
            }
        }
    }
    let ticks: String = ticks.into_iter().collect();
    out.push_str(format!("    {}", ticks).trim_end());
    out.push('\n');

    out
}
