//! Turning grid-line coordinates into text.

use std::str::FromStr;

/// Axis a grid line runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Hemisphere letter for a degree component, blank at zero.
    fn hemisphere(&self, degrees: f64) -> &'static str {
        if degrees == 0. {
            ""
        } else {
            match (self, degrees > 0.) {
                (Self::Latitude, true) => "N",
                (Self::Latitude, false) => "S",
                (Self::Longitude, true) => "E",
                (Self::Longitude, false) => "W",
            }
        }
    }
}

/// How grid-line coordinates are rendered into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub enum LabelFormat {
    /// Decimal degrees, e.g. `51.10`. Precision grows as the magnitude
    /// shrinks.
    Decimal,

    /// Degrees and decimal minutes, e.g. `51° 6'N`.
    #[default]
    DegreesDecimalMinutes,

    /// Degrees, minutes and seconds, e.g. `51N5'53"`.
    DegreesMinutesSeconds,
}

impl LabelFormat {
    /// Text for the line at `value` degrees on `axis`.
    pub fn format(&self, value: f64, axis: Axis) -> String {
        match self {
            Self::Decimal => {
                let digits = if value >= 10. {
                    2
                } else if value >= 1. {
                    3
                } else {
                    4
                };
                format!("{value:.digits$}")
            }
            Self::DegreesDecimalMinutes => {
                let (degrees, minutes, _) = degrees_minutes_seconds(value);
                format!("{degrees}° {minutes:.0}'{}", axis.hemisphere(degrees))
            }
            Self::DegreesMinutesSeconds => {
                let (degrees, minutes, seconds) = degrees_minutes_seconds(value);
                format!(
                    "{}{}{}'{}\"",
                    degrees.abs(),
                    axis.hemisphere(degrees),
                    minutes.floor(),
                    seconds.floor()
                )
            }
        }
    }
}

/// Decompose a coordinate into floored degrees, minutes and seconds, so that
/// `degrees + minutes / 60 + seconds / 3600` gives the coordinate back.
fn degrees_minutes_seconds(value: f64) -> (f64, f64, f64) {
    let degrees = value.floor();
    let minutes = (value - degrees) * 60.;
    let seconds = (minutes - minutes.floor()) * 60.;
    (degrees, minutes, seconds)
}

/// Error returned when a label format name is not recognized.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown label format `{0}`")]
pub struct UnknownLabelFormat(String);

impl FromStr for LabelFormat {
    type Err = UnknownLabelFormat;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "decimal" => Ok(Self::Decimal),
            "MinDec" => Ok(Self::DegreesDecimalMinutes),
            "DMS" => Ok(Self::DegreesMinutesSeconds),
            _ => Err(UnknownLabelFormat(name.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn decimal_precision_grows_as_magnitude_shrinks() {
        let format = LabelFormat::Decimal;
        assert_eq!(format.format(48.5, Axis::Latitude), "48.50");
        assert_eq!(format.format(5.25, Axis::Latitude), "5.250");
        assert_eq!(format.format(0.125, Axis::Longitude), "0.1250");
        assert_eq!(format.format(-120., Axis::Longitude), "-120.0000");
    }

    #[test]
    fn degrees_and_decimal_minutes() {
        let format = LabelFormat::DegreesDecimalMinutes;
        assert_eq!(format.format(51.1, Axis::Latitude), "51° 6'N");
        assert_eq!(format.format(-33.5, Axis::Latitude), "-34° 30'S");
        assert_eq!(format.format(17.25, Axis::Longitude), "17° 15'E");
    }

    #[test]
    fn degrees_minutes_seconds() {
        let format = LabelFormat::DegreesMinutesSeconds;
        assert_eq!(format.format(51.25, Axis::Latitude), "51N15'0\"");
        assert_eq!(format.format(-17.5, Axis::Longitude), "18W30'0\"");
        assert_eq!(format.format(10.7548, Axis::Latitude), "10N45'17\"");
    }

    #[test]
    fn hemisphere_is_blank_for_a_zero_degree_component() {
        let format = LabelFormat::DegreesDecimalMinutes;
        assert_eq!(format.format(0., Axis::Latitude), "0° 0'");
        assert_eq!(format.format(0., Axis::Longitude), "0° 0'");

        // Fractions of the first degree still have a zero degree component.
        assert_eq!(format.format(0.5, Axis::Latitude), "0° 30'");
    }

    #[test]
    fn decomposition_round_trips() {
        for value in [51.1, 0.5, -0.5, -33.7625, 179.983, 0.] {
            let (degrees, minutes, seconds) = super::degrees_minutes_seconds(value);
            assert_relative_eq!(
                degrees + minutes.floor() / 60. + seconds / 3600.,
                value,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn parsing_label_format_names() {
        assert_eq!("decimal".parse(), Ok(LabelFormat::Decimal));
        assert_eq!("MinDec".parse(), Ok(LabelFormat::DegreesDecimalMinutes));
        assert_eq!("DMS".parse(), Ok(LabelFormat::DegreesMinutesSeconds));
        assert_eq!(
            "UTM".parse::<LabelFormat>(),
            Err(UnknownLabelFormat("UTM".to_owned()))
        );
    }
}
