use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Kind of a measurement, keyed to the keyword that starts a journal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasurementKind {
    /// Air temperature plus relative humidity
    #[default]
    Temperature,
    /// Atmospheric pressure
    Pressure,
}

impl MeasurementKind {
    /// The on-disk keyword for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Pressure => "pressure",
        }
    }
}

impl FromStr for MeasurementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temperature" => Ok(Self::Temperature),
            "pressure" => Ok(Self::Pressure),
            _ => Err(format!(
                "Unknown measurement kind '{}'. Valid kinds: temperature, pressure",
                s
            )),
        }
    }
}

/// The variant-specific part of a measurement.
///
/// A tagged sum type rather than a base-class hierarchy: serialization and
/// display dispatch by pattern match.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    /// Temperature in °C with relative humidity in percent
    Temperature { temperature: f64, humidity: f64 },
    /// Pressure in mm Hg
    Pressure { pressure: f64 },
}

impl Reading {
    pub fn kind(&self) -> MeasurementKind {
        match self {
            Self::Temperature { .. } => MeasurementKind::Temperature,
            Self::Pressure { .. } => MeasurementKind::Pressure,
        }
    }
}

/// One logged observation: a reading taken on a date at a place.
///
/// Records have no identity beyond their position in the journal;
/// insertion order is file order is display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub date: NaiveDate,
    /// Place name with the surrounding quote characters already stripped.
    pub place: String,
    pub reading: Reading,
}

impl Measurement {
    pub fn kind(&self) -> MeasurementKind {
        self.reading.kind()
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Дата: {}, Место: {}", self.date, self.place)?;
        match &self.reading {
            Reading::Temperature {
                temperature,
                humidity,
            } => write!(
                f,
                ", Температура: {temperature:.2}°C, Влажность: {humidity:.2}%"
            ),
            Reading::Pressure { pressure } => {
                write!(f, ", Давление: {pressure:.2} мм рт. ст.")
            }
        }
    }
}
