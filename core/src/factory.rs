use log::{debug, warn};

use crate::error::{Result, WorkoutError};
use crate::models::{Running, SportsWalking, Swimming, Workout, WorkoutKind};

/// Build a workout record from a sensor package.
///
/// The tag is resolved first, then the field count is checked against the
/// variant's arity, then each field is validated. Fields are positional:
/// `action_count, duration_hours, weight_kg, [height_cm | pool_length_m, pool_laps]`.
pub fn read_package(tag: &str, data: &[f64]) -> Result<Workout> {
    let res = build(tag, data);
    match &res {
        Ok(w) => debug!("package {} -> {:?}", tag, w.kind()),
        Err(e) => warn!("package {} rejected: {}", tag, e),
    }
    res
}

fn build(tag: &str, data: &[f64]) -> Result<Workout> {
    let kind = WorkoutKind::from_tag(tag)
        .ok_or_else(|| WorkoutError::UnknownWorkoutType(tag.to_string()))?;

    if data.len() != kind.arity() {
        return Err(WorkoutError::ArityMismatch {
            tag: tag.to_string(),
            expected: kind.arity(),
            got: data.len(),
        });
    }

    let action_count = count("action_count", data[0])?;
    let duration_hours = positive("duration_hours", data[1])?;
    let weight_kg = non_negative("weight_kg", data[2])?;

    let workout = match kind {
        WorkoutKind::Running => Workout::Running(Running {
            action_count,
            duration_hours,
            weight_kg,
        }),
        WorkoutKind::SportsWalking => Workout::SportsWalking(SportsWalking {
            action_count,
            duration_hours,
            weight_kg,
            height_cm: positive("height_cm", data[3])?,
        }),
        WorkoutKind::Swimming => Workout::Swimming(Swimming {
            action_count,
            duration_hours,
            weight_kg,
            pool_length_m: non_negative("pool_length_m", data[3])?,
            pool_laps: count("pool_laps", data[4])?,
        }),
    };
    Ok(workout)
}

// ──────────────────────────────────────────────────────────────────────────────
// Field validation
// ──────────────────────────────────────────────────────────────────────────────

fn finite(field: &'static str, x: f64) -> Result<f64> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(WorkoutError::invalid(field, format!("must be finite, got {x}")))
    }
}

/// Divisors (duration, height) must be strictly positive.
fn positive(field: &'static str, x: f64) -> Result<f64> {
    let x = finite(field, x)?;
    if x > 0.0 {
        Ok(x)
    } else {
        Err(WorkoutError::invalid(field, format!("must be > 0, got {x}")))
    }
}

fn non_negative(field: &'static str, x: f64) -> Result<f64> {
    let x = finite(field, x)?;
    if x >= 0.0 {
        Ok(x)
    } else {
        Err(WorkoutError::invalid(field, format!("must be >= 0, got {x}")))
    }
}

/// Whole, non-negative counts (steps, strokes, laps).
fn count(field: &'static str, x: f64) -> Result<u64> {
    let x = non_negative(field, x)?;
    if x.fract() != 0.0 {
        return Err(WorkoutError::invalid(field, format!("must be a whole number, got {x}")));
    }
    if x > u64::MAX as f64 {
        return Err(WorkoutError::invalid(field, format!("out of range: {x}")));
    }
    Ok(x as u64)
}
