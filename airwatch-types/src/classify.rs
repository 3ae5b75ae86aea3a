//! Threshold classification of IAQ and PM2.5 values.

/// Semantic display hint attached to a classification.
///
/// The presentation layer maps tones to concrete colors; this crate never
/// names a literal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Tone {
    Excellent,
    Good,
    Caution,
    Warning,
    Danger,
    Severe,
}

/// Indoor air quality band, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AirQualityBand {
    /// IAQ 0-50.
    Excellent,
    /// IAQ 51-100.
    Good,
    /// IAQ 101-150.
    LightlyPolluted,
    /// IAQ 151-200.
    ModeratelyPolluted,
    /// IAQ 201-250.
    HeavilyPolluted,
    /// IAQ above 250.
    SeverelyPolluted,
}

impl AirQualityBand {
    /// All bands in ascending severity.
    pub const ALL: [AirQualityBand; 6] = [
        AirQualityBand::Excellent,
        AirQualityBand::Good,
        AirQualityBand::LightlyPolluted,
        AirQualityBand::ModeratelyPolluted,
        AirQualityBand::HeavilyPolluted,
        AirQualityBand::SeverelyPolluted,
    ];

    /// Inclusive upper IAQ bound, `None` for the open top band.
    pub const fn upper_bound(&self) -> Option<f64> {
        match self {
            AirQualityBand::Excellent => Some(50.0),
            AirQualityBand::Good => Some(100.0),
            AirQualityBand::LightlyPolluted => Some(150.0),
            AirQualityBand::ModeratelyPolluted => Some(200.0),
            AirQualityBand::HeavilyPolluted => Some(250.0),
            AirQualityBand::SeverelyPolluted => None,
        }
    }

    /// Returns the display label.
    pub const fn label(&self) -> &'static str {
        match self {
            AirQualityBand::Excellent => "Excellent",
            AirQualityBand::Good => "Good",
            AirQualityBand::LightlyPolluted => "Lightly Polluted",
            AirQualityBand::ModeratelyPolluted => "Moderately Polluted",
            AirQualityBand::HeavilyPolluted => "Heavily Polluted",
            AirQualityBand::SeverelyPolluted => "Severely Polluted",
        }
    }

    /// Returns the display tone.
    pub const fn tone(&self) -> Tone {
        match self {
            AirQualityBand::Excellent => Tone::Excellent,
            AirQualityBand::Good => Tone::Good,
            AirQualityBand::LightlyPolluted => Tone::Caution,
            AirQualityBand::ModeratelyPolluted => Tone::Warning,
            AirQualityBand::HeavilyPolluted => Tone::Danger,
            AirQualityBand::SeverelyPolluted => Tone::Severe,
        }
    }
}

/// Classify an IAQ index into its band.
///
/// Boundaries belong to the lower band, so exactly 50 is `Excellent`.
/// Values that satisfy no bound (including NaN) land in `SeverelyPolluted`.
pub fn classify_air_quality(iaq_index: f64) -> AirQualityBand {
    AirQualityBand::ALL
        .into_iter()
        .find(|band| band.upper_bound().is_some_and(|max| iaq_index <= max))
        .unwrap_or(AirQualityBand::SeverelyPolluted)
}

/// PM2.5 level used on the particulate card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParticulateLevel {
    Good,
    Moderate,
    Unhealthy,
}

/// Upper PM2.5 bound (µg/m³) of the `Good` level. Also the gauge budget.
pub const PM25_GOOD_MAX: f64 = 12.0;

/// Upper PM2.5 bound (µg/m³) of the `Moderate` level.
pub const PM25_MODERATE_MAX: f64 = 35.0;

impl ParticulateLevel {
    /// Returns the display label.
    pub const fn label(&self) -> &'static str {
        match self {
            ParticulateLevel::Good => "Good",
            ParticulateLevel::Moderate => "Moderate",
            ParticulateLevel::Unhealthy => "Unhealthy",
        }
    }

    /// Returns the display tone.
    pub const fn tone(&self) -> Tone {
        match self {
            ParticulateLevel::Good => Tone::Good,
            ParticulateLevel::Moderate => Tone::Caution,
            ParticulateLevel::Unhealthy => Tone::Danger,
        }
    }
}

/// Classify a PM2.5 concentration.
///
/// Comparisons are strict, so 12 is still `Good` and 35 is still `Moderate`.
pub fn classify_particulate(pm25: f64) -> ParticulateLevel {
    if pm25 > PM25_MODERATE_MAX {
        ParticulateLevel::Unhealthy
    } else if pm25 > PM25_GOOD_MAX {
        ParticulateLevel::Moderate
    } else {
        ParticulateLevel::Good
    }
}
