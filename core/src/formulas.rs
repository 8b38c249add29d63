// core/src/formulas.rs
use crate::models::{Running, SportsWalking, Summary, Swimming, Workout};

pub const M_IN_KM: f64 = 1000.0; // m per km
pub const MIN_IN_H: f64 = 60.0;  // min per h

// Rounds the numbers written into the JSON batch report (see `Summary::rounded`).
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Floor division with Python `//` semantics: the floor is taken from
/// `(a - a % b) / b`, not from the rounded quotient `a / b`.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let m = a % b;
    let mut div = (a - m) / b;
    if m != 0.0 && (b < 0.0) != (m < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let mut f = div.floor();
    if div - f > 0.5 {
        f += 1.0;
    }
    f
}

/// Shared computation for all workout variants.
///
/// `distance_km` and `mean_speed_kmh` have default bodies built on
/// `STEP_LEN_M`; a variant overrides them when its speed comes from
/// something other than step count (see `Swimming`).
pub trait Activity {
    /// Distance covered per unit of `action_count` (m).
    const STEP_LEN_M: f64;

    fn action_count(&self) -> u64;
    fn duration_hours(&self) -> f64;

    fn distance_km(&self) -> f64 {
        self.action_count() as f64 * Self::STEP_LEN_M / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    fn spent_calories(&self) -> f64;
}

impl Running {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 20.0;
}

impl Activity for Running {
    const STEP_LEN_M: f64 = 0.65;

    fn action_count(&self) -> u64 { self.action_count }
    fn duration_hours(&self) -> f64 { self.duration_hours }

    fn spent_calories(&self) -> f64 {
        (Self::SPEED_MULTIPLIER * self.mean_speed_kmh() - Self::SPEED_SHIFT)
            * self.weight_kg
            / M_IN_KM
            * self.duration_hours
            * MIN_IN_H
    }
}

impl SportsWalking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

impl Activity for SportsWalking {
    const STEP_LEN_M: f64 = 0.65;

    fn action_count(&self) -> u64 { self.action_count }
    fn duration_hours(&self) -> f64 { self.duration_hours }

    fn spent_calories(&self) -> f64 {
        // speed² / height is floor-divided, not rounded
        let speed = self.mean_speed_kmh();
        let speed_height = floor_div(speed.powi(2), self.height_cm);
        (Self::WEIGHT_MULTIPLIER * self.weight_kg
            + speed_height * Self::SPEED_HEIGHT_MULTIPLIER * self.weight_kg)
            * self.duration_hours
            * MIN_IN_H
    }
}

impl Swimming {
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

impl Activity for Swimming {
    const STEP_LEN_M: f64 = 1.38;

    fn action_count(&self) -> u64 { self.action_count }
    fn duration_hours(&self) -> f64 { self.duration_hours }

    /// Pool geometry, not stroke count.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_laps as f64 / M_IN_KM / self.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::SPEED_SHIFT) * Self::WEIGHT_MULTIPLIER * self.weight_kg
    }
}

fn summarize<A: Activity>(a: &A, label: &str) -> Summary {
    Summary {
        activity_label: label.to_string(),
        duration_hours: a.duration_hours(),
        distance_km: a.distance_km(),
        mean_speed_kmh: a.mean_speed_kmh(),
        calories: a.spent_calories(),
    }
}

impl Workout {
    pub fn duration_hours(&self) -> f64 {
        match self {
            Workout::Running(w) => w.duration_hours(),
            Workout::SportsWalking(w) => w.duration_hours(),
            Workout::Swimming(w) => w.duration_hours(),
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance_km(),
            Workout::SportsWalking(w) => w.distance_km(),
            Workout::Swimming(w) => w.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::SportsWalking(w) => w.mean_speed_kmh(),
            Workout::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    pub fn calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }

    /// Consume-once view of the record: label, duration, distance, speed, calories.
    pub fn summary(&self) -> Summary {
        let label = self.kind().label();
        match self {
            Workout::Running(w) => summarize(w, label),
            Workout::SportsWalking(w) => summarize(w, label),
            Workout::Swimming(w) => summarize(w, label),
        }
    }
}

impl Summary {
    /// Copy with every numeric field rounded to `dp` decimals.
    pub fn rounded(&self, dp: u32) -> Summary {
        Summary {
            activity_label: self.activity_label.clone(),
            duration_hours: self.duration_hours.round_to(dp),
            distance_km: self.distance_km.round_to(dp),
            mean_speed_kmh: self.mean_speed_kmh.round_to(dp),
            calories: self.calories.round_to(dp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_three_decimals() {
        assert_eq!(0.9936_f64.round_to(3), 0.994);
        assert_eq!(2.5_f64.round_to(0), 3.0);
    }

    #[test]
    fn floor_div_matches_python() {
        assert_eq!(floor_div(1.0, 0.1), 9.0); // 1.0 / 0.1 rounds to 10.0
        assert_eq!(floor_div(7.0, 2.0), 3.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
    }

    #[test]
    fn walking_floor_division_drops_fraction() {
        // 5.85² / 180 = 0.19 → 0, only the weight term is left
        let w = SportsWalking { action_count: 9000, duration_hours: 1.0, weight_kg: 75.0, height_cm: 180.0 };
        assert!((w.spent_calories() - 157.5).abs() < 1e-9);

        // ~18 km/h: 18² / 100 = 3.24 → 3
        let fast = SportsWalking { action_count: 27_692, duration_hours: 1.0, weight_kg: 100.0, height_cm: 100.0 };
        let speed = fast.mean_speed_kmh();
        let expected = (0.035 * 100.0 + 3.0 * 0.029 * 100.0) * 60.0;
        assert_eq!(floor_div(speed * speed, 100.0), 3.0);
        assert!((fast.spent_calories() - expected).abs() < 1e-9);
    }
}
