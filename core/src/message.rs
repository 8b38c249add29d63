use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WorkoutError;
use crate::models::Summary;

/// Language of the summary line. Field order and precision are the same in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl FromStr for Locale {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(WorkoutError::invalid("locale", format!("expected en or ru, got {other}"))),
        }
    }
}

impl Summary {
    /// Render the fixed-template summary line.
    pub fn message(&self, locale: Locale) -> String {
        match locale {
            Locale::En => format!(
                "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; \
                 Mean speed: {:.3} km/h; Calories spent: {:.3}.",
                self.activity_label,
                self.duration_hours,
                self.distance_km,
                self.mean_speed_kmh,
                self.calories
            ),
            Locale::Ru => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
                 Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.activity_label,
                self.duration_hours,
                self.distance_km,
                self.mean_speed_kmh,
                self.calories
            ),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(Locale::En))
    }
}
