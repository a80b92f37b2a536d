use crate::utils::error::{ExifMapError, Result};
use serde::Serialize;
use std::fmt;

pub const LATITUDE_MIN: f64 = -90.0;
pub const LATITUDE_MAX: f64 = 90.0;
pub const LONGITUDE_MIN: f64 = -180.0;
pub const LONGITUDE_MAX: f64 = 180.0;

/// A validated geographic coordinate in decimal degrees.
///
/// Fields are private so a value outside the valid ranges can never exist;
/// construction goes through [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting out-of-range (or non-finite) values.
    /// Bounds are inclusive: the poles and the antimeridian are valid.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(LATITUDE_MIN..=LATITUDE_MAX).contains(&latitude) {
            return Err(ExifMapError::OutOfRange {
                axis: "latitude",
                value: latitude,
                min: LATITUDE_MIN,
                max: LATITUDE_MAX,
            });
        }
        if !(LONGITUDE_MIN..=LONGITUDE_MAX).contains(&longitude) {
            return Err(ExifMapError::OutOfRange {
                axis: "longitude",
                value: longitude,
                min: LONGITUDE_MIN,
                max: LONGITUDE_MAX,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// An EXIF rational as stored on disk: numerator over denominator.
///
/// Kept explicit instead of eagerly dividing so that a zero denominator is a
/// reportable error rather than a silent infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpsRational {
    pub num: u32,
    pub denom: u32,
}

impl GpsRational {
    pub fn new(num: u32, denom: u32) -> Self {
        Self { num, denom }
    }

    /// Rational-to-real division; zero denominators are malformed input.
    pub fn value(self) -> Result<f64> {
        if self.denom == 0 {
            return Err(ExifMapError::MalformedGps {
                reason: format!("zero denominator in rational {}/0", self.num),
            });
        }
        Ok(f64::from(self.num) / f64::from(self.denom))
    }
}

impl From<exif::Rational> for GpsRational {
    fn from(r: exif::Rational) -> Self {
        Self {
            num: r.num,
            denom: r.denom,
        }
    }
}

/// Hemisphere reference letter from the GPSLatitudeRef/GPSLongitudeRef tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parse a latitude reference; only N and S are meaningful here.
    pub fn latitude_ref(s: &str) -> Result<Self> {
        match s.trim() {
            "N" | "n" => Ok(Self::North),
            "S" | "s" => Ok(Self::South),
            other => Err(ExifMapError::MalformedGps {
                reason: format!("invalid latitude reference '{}'", other),
            }),
        }
    }

    /// Parse a longitude reference; only E and W are meaningful here.
    pub fn longitude_ref(s: &str) -> Result<Self> {
        match s.trim() {
            "E" | "e" => Ok(Self::East),
            "W" | "w" => Ok(Self::West),
            other => Err(ExifMapError::MalformedGps {
                reason: format!("invalid longitude reference '{}'", other),
            }),
        }
    }

    /// Sign applied to the decimal value: south and west are negative.
    pub fn sign(self) -> f64 {
        match self {
            Self::North | Self::East => 1.0,
            Self::South | Self::West => -1.0,
        }
    }
}

/// The four GPS tags read from an image, before conversion.
///
/// Exists only transiently during extraction; constructed only when all four
/// tags are present, so a partial tag set can never reach the conversion.
#[derive(Debug, Clone)]
pub struct RawGpsTags {
    pub latitude: [GpsRational; 3],
    pub latitude_ref: Hemisphere,
    pub longitude: [GpsRational; 3],
    pub longitude_ref: Hemisphere,
}

impl RawGpsTags {
    /// Convert both sexagesimal triples to a signed decimal coordinate.
    pub fn into_coordinate(self) -> Result<Coordinate> {
        let lat = decimal_degrees(&self.latitude)? * self.latitude_ref.sign();
        let lon = decimal_degrees(&self.longitude)? * self.longitude_ref.sign();
        Coordinate::new(lat, lon)
    }
}

/// `degrees + minutes/60 + seconds/3600`, each component a rational.
fn decimal_degrees(dms: &[GpsRational; 3]) -> Result<f64> {
    let degrees = dms[0].value()?;
    let minutes = dms[1].value()?;
    let seconds = dms[2].value()?;
    Ok(degrees + minutes / 60.0 + seconds / 3600.0)
}

/// One geotagged photo as it appears in the generated `geodata.js`.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoLocation {
    pub filename: String,
    pub path: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taken: Option<String>,
}

impl PhotoLocation {
    pub fn new(
        filename: String,
        path: String,
        coordinate: Coordinate,
        taken: Option<String>,
    ) -> Self {
        Self {
            filename,
            path,
            lat: coordinate.latitude(),
            lng: coordinate.longitude(),
            taken,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        // lat/lng came out of a validated Coordinate, so this cannot fail.
        Coordinate {
            latitude: self.lat,
            longitude: self.lng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whole(deg: u32) -> [GpsRational; 3] {
        [
            GpsRational::new(deg, 1),
            GpsRational::new(0, 1),
            GpsRational::new(0, 1),
        ]
    }

    #[test]
    fn coordinate_accepts_inclusive_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn coordinate_rejects_out_of_range() {
        assert!(matches!(
            Coordinate::new(91.0, 0.0),
            Err(ExifMapError::OutOfRange {
                axis: "latitude",
                ..
            })
        ));
        assert!(matches!(
            Coordinate::new(0.0, 181.0),
            Err(ExifMapError::OutOfRange {
                axis: "longitude",
                ..
            })
        ));
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn north_east_triples_convert_positive() {
        let raw = RawGpsTags {
            latitude: whole(35),
            latitude_ref: Hemisphere::North,
            longitude: whole(139),
            longitude_ref: Hemisphere::East,
        };
        let coord = raw.into_coordinate().unwrap();
        assert_eq!(coord.latitude(), 35.0);
        assert_eq!(coord.longitude(), 139.0);
    }

    #[test]
    fn south_west_triples_convert_negative() {
        let raw = RawGpsTags {
            latitude: whole(35),
            latitude_ref: Hemisphere::South,
            longitude: whole(139),
            longitude_ref: Hemisphere::West,
        };
        let coord = raw.into_coordinate().unwrap();
        assert_eq!(coord.latitude(), -35.0);
        assert_eq!(coord.longitude(), -139.0);
    }

    #[test]
    fn minutes_and_seconds_contribute() {
        let dms = [
            GpsRational::new(51, 1),
            GpsRational::new(30, 1),
            GpsRational::new(36, 1),
        ];
        let value = decimal_degrees(&dms).unwrap();
        assert!((value - 51.51).abs() < 1e-9);
    }

    #[test]
    fn increasing_seconds_increases_magnitude() {
        let mut previous = 0.0;
        for sec in [0, 1, 15, 30, 59] {
            let dms = [
                GpsRational::new(35, 1),
                GpsRational::new(10, 1),
                GpsRational::new(sec, 1),
            ];
            let value = decimal_degrees(&dms).unwrap();
            assert!(value > previous);
            previous = value;
        }
    }

    #[test]
    fn zero_denominator_is_malformed() {
        let err = GpsRational::new(35, 0).value().unwrap_err();
        assert!(matches!(err, ExifMapError::MalformedGps { .. }));

        let raw = RawGpsTags {
            latitude: [
                GpsRational::new(35, 1),
                GpsRational::new(0, 1),
                GpsRational::new(1, 0),
            ],
            latitude_ref: Hemisphere::North,
            longitude: whole(139),
            longitude_ref: Hemisphere::East,
        };
        assert!(matches!(
            raw.into_coordinate(),
            Err(ExifMapError::MalformedGps { .. })
        ));
    }

    #[test]
    fn hemisphere_refs_reject_wrong_axis() {
        assert!(Hemisphere::latitude_ref("N").is_ok());
        assert!(Hemisphere::latitude_ref("E").is_err());
        assert!(Hemisphere::longitude_ref("W").is_ok());
        assert!(Hemisphere::longitude_ref("S").is_err());
    }

    #[test]
    fn fractional_rationals_divide() {
        // 45/2 = 22.5 degrees
        assert_eq!(GpsRational::new(45, 2).value().unwrap(), 22.5);
    }
}
