use serde::{Deserialize, Serialize};

/// Temperature display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitPreference {
    #[default]
    Celsius,
    Fahrenheit,
}

impl UnitPreference {
    /// Display suffix for temperatures in this unit.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// The other unit.
    pub fn toggled(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }
}

/// Convert a Celsius reading into a rounded display value in `unit`.
///
/// Rounding happens after conversion: 20.5 °C is 68.9 °F and displays
/// as 69, not as 70 via a pre-rounded 21 °C. Half ties round toward
/// positive infinity, so -0.5 °C displays as 0.
pub fn to_display_temperature(celsius: f64, unit: UnitPreference) -> i32 {
    let value = match unit {
        UnitPreference::Celsius => celsius,
        UnitPreference::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
    };
    (value + 0.5).floor() as i32
}
