/// Points per squared level step of the threshold curve.
pub const POINTS_PER_LEVEL_STEP: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("level {0} is too large to compute thresholds for")]
    Overflow(i64),
}

/// Points at which `level` begins: `(level - 1)^2 * 100`.
pub fn previous_level_threshold(level: i64) -> Result<i64, LevelError> {
    ensure_level(level)?;
    squared_threshold(level - 1, level)
}

/// Points at which the level after `level` begins: `level^2 * 100`.
pub fn next_level_threshold(level: i64) -> Result<i64, LevelError> {
    ensure_level(level)?;
    squared_threshold(level, level)
}

/// Fraction of the way from `level`'s lower threshold to its upper one.
///
/// Always within `[0, 1]`, even when `total_points` lies outside the band of
/// `level`. A stale level (points already awarded past the upper threshold)
/// saturates at `1.0` instead of rolling over.
pub fn progress_fraction(level: i64, total_points: i64) -> Result<f64, LevelError> {
    ensure_points(total_points)?;
    let low = previous_level_threshold(level)?;
    let high = next_level_threshold(level)?;

    let span = (high - low) as f64;
    let into_level = (total_points - low) as f64;

    Ok((into_level / span).clamp(0.0, 1.0))
}

/// Level whose band `[previous, next)` contains `total_points`.
pub fn level_for_points(total_points: i64) -> Result<i64, LevelError> {
    ensure_points(total_points)?;
    let steps = (total_points / POINTS_PER_LEVEL_STEP).unsigned_abs();
    let completed = i64::try_from(steps.isqrt())
        .map_err(|_| LevelError::Overflow(i64::MAX))?;

    Ok(completed + 1)
}

/// Everything a progress bar needs for one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    pub level: i64,
    pub total_points: i64,
    pub level_start: i64,
    pub level_end: i64,
    pub fraction: f64,
}

impl LevelProgress {
    pub fn compute(level: i64, total_points: i64) -> Result<Self, LevelError> {
        Ok(Self {
            level,
            total_points,
            level_start: previous_level_threshold(level)?,
            level_end: next_level_threshold(level)?,
            fraction: progress_fraction(level, total_points)?,
        })
    }

    /// Progress against the level the points actually belong to.
    pub fn for_points(total_points: i64) -> Result<Self, LevelError> {
        Self::compute(level_for_points(total_points)?, total_points)
    }

    /// Points earned inside this level's band, clamped to the band.
    pub fn points_into_level(&self) -> i64 {
        self.total_points
            .clamp(self.level_start, self.level_end)
            .saturating_sub(self.level_start)
    }

    pub fn points_to_next(&self) -> i64 {
        self.level_end.saturating_sub(self.total_points).max(0)
    }

    /// Whole-number percentage, rounded down so 100 only shows when saturated.
    pub fn percent(&self) -> u8 {
        (self.fraction * 100.0).floor().clamp(0.0, 100.0) as u8
    }
}

fn ensure_level(level: i64) -> Result<(), LevelError> {
    if level < 1 {
        return Err(LevelError::InvalidArgument(format!(
            "level must be at least 1, got {level}"
        )));
    }
    Ok(())
}

fn ensure_points(total_points: i64) -> Result<(), LevelError> {
    if total_points < 0 {
        return Err(LevelError::InvalidArgument(format!(
            "total points must not be negative, got {total_points}"
        )));
    }
    Ok(())
}

fn squared_threshold(step: i64, level: i64) -> Result<i64, LevelError> {
    step.checked_mul(step)
        .and_then(|squared| squared.checked_mul(POINTS_PER_LEVEL_STEP))
        .ok_or(LevelError::Overflow(level))
}
