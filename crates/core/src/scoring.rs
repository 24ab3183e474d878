//! Scoring module - line-clear points, level and gravity speed
//!
//! Rules:
//! - A batch of N rows earns `LINE_SCORES[N]` base points.
//! - At level 1 the base points are awarded as is; above level 1 they are
//!   scaled by `1 + level / 10`.
//! - Level is `cleared_rows / 10 + 1`.
//! - Gravity follows `SPEED_TABLE_MS`, floored at `MIN_SPEED_MS`.

use crate::types::{CLEARS_PER_LEVEL, LINE_SCORES, MIN_SPEED_MS, SPEED_TABLE_MS};

/// Base points for clearing `rows` rows at once.
pub fn base_points(rows: usize) -> u32 {
    LINE_SCORES[rows.min(LINE_SCORES.len() - 1)]
}

/// Points for a clear batch at `level`.
///
/// Integer arithmetic: `base * (10 + level) / 10` above level 1.
pub fn calculate_line_score(rows: usize, level: u32) -> u32 {
    let base = base_points(rows);
    if level <= 1 {
        base
    } else {
        base.saturating_mul(10 + level) / 10
    }
}

/// Level for a lifetime cleared-row count (1-based)
pub fn calculate_level(cleared_rows: u32) -> u32 {
    cleared_rows / CLEARS_PER_LEVEL + 1
}

/// Gravity interval in milliseconds for `level`
pub fn get_speed_ms(level: u32) -> u32 {
    let idx = level.saturating_sub(1) as usize;
    SPEED_TABLE_MS
        .get(idx)
        .copied()
        .unwrap_or(MIN_SPEED_MS)
        .max(MIN_SPEED_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_points() {
        assert_eq!(base_points(0), 0);
        assert_eq!(base_points(1), 10);
        assert_eq!(base_points(2), 30);
        assert_eq!(base_points(3), 50);
        assert_eq!(base_points(4), 100);
        assert_eq!(base_points(6), 100);
    }

    #[test]
    fn test_line_score_level_scaling() {
        assert_eq!(calculate_line_score(3, 1), 50);
        assert_eq!(calculate_line_score(3, 5), 75);
        assert_eq!(calculate_line_score(3, 10), 100);
        assert_eq!(calculate_line_score(3, 12), 110);
        assert_eq!(calculate_line_score(1, 2), 12);
        assert_eq!(calculate_line_score(0, 7), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(calculate_level(0), 1);
        assert_eq!(calculate_level(9), 1);
        assert_eq!(calculate_level(10), 2);
        assert_eq!(calculate_level(19), 2);
        assert_eq!(calculate_level(101), 11);
    }

    #[test]
    fn test_speed_table() {
        assert_eq!(get_speed_ms(1), 600);
        assert_eq!(get_speed_ms(2), 550);
        assert_eq!(get_speed_ms(9), 200);
        assert_eq!(get_speed_ms(10), 150);
        assert_eq!(get_speed_ms(11), 150);
        assert_eq!(get_speed_ms(40), 150);
    }

    #[test]
    fn test_speed_for_level_zero_uses_first_entry() {
        assert_eq!(get_speed_ms(0), 600);
    }
}
