//! EXIF metadata access: a typed wrapper over the parsed tag container and
//! the GPS coordinate extraction boundary.

use crate::domain::model::{Coordinate, GpsRational, Hemisphere, RawGpsTags};
use crate::utils::error::{ExifMapError, Result};
use chrono::NaiveDateTime;
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A parsed EXIF tag container with typed accessors for the fields this
/// crate cares about, plus enumeration of everything else for diagnostics.
pub struct TagSet {
    exif: exif::Exif,
}

/// One tag rendered for diagnostic display.
#[derive(Debug, Clone)]
pub struct TagEntry {
    pub name: String,
    pub value: String,
}

impl TagSet {
    /// Open `path` and parse its EXIF container. The file handle lives only
    /// for the duration of this call.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let exif = Reader::new().read_from_container(&mut reader)?;
        Ok(Self { exif })
    }

    /// The four GPS tags, if all of them are present.
    ///
    /// Missing tags are a normal outcome (`Ok(None)`); tags that are present
    /// but have the wrong shape are malformed data and fail loudly.
    pub fn gps(&self) -> Result<Option<RawGpsTags>> {
        let fields = (
            self.exif.get_field(Tag::GPSLatitude, In::PRIMARY),
            self.exif.get_field(Tag::GPSLatitudeRef, In::PRIMARY),
            self.exif.get_field(Tag::GPSLongitude, In::PRIMARY),
            self.exif.get_field(Tag::GPSLongitudeRef, In::PRIMARY),
        );
        let (Some(lat), Some(lat_ref), Some(lon), Some(lon_ref)) = fields else {
            return Ok(None);
        };

        Ok(Some(RawGpsTags {
            latitude: rational_triple(lat)?,
            latitude_ref: Hemisphere::latitude_ref(&ascii_value(lat_ref)?)?,
            longitude: rational_triple(lon)?,
            longitude_ref: Hemisphere::longitude_ref(&ascii_value(lon_ref)?)?,
        }))
    }

    /// Capture time, preferring `DateTimeOriginal` over `DateTime`.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        [Tag::DateTimeOriginal, Tag::DateTime]
            .into_iter()
            .filter_map(|tag| self.exif.get_field(tag, In::PRIMARY))
            .filter_map(|field| ascii_value(field).ok())
            .find_map(|s| NaiveDateTime::parse_from_str(&s, "%Y:%m:%d %H:%M:%S").ok())
    }

    /// Every parsed tag, rendered for display.
    pub fn fields(&self) -> impl Iterator<Item = TagEntry> + '_ {
        self.exif.fields().map(|field| TagEntry {
            name: field.tag.to_string(),
            value: field.display_value().to_string(),
        })
    }
}

/// Parse an image's tag container, treating unreadable files and unparseable
/// containers as "no metadata" rather than a fatal error: callers iterate
/// over arbitrary, possibly-corrupt files. Failures are logged.
pub fn read_tag_set(path: &Path) -> Option<TagSet> {
    match TagSet::from_path(path) {
        Ok(tags) => Some(tags),
        Err(err) => {
            tracing::warn!("cannot read metadata from {}: {}", path.display(), err);
            None
        }
    }
}

/// Read an image's embedded GPS position as a decimal coordinate.
///
/// Returns `Ok(None)` when the image carries no complete GPS tag set or when
/// the file cannot be read at all. Present-but-malformed GPS data is an
/// error; guessing a wrong position would be worse than reporting none.
pub fn extract_coordinate<P: AsRef<Path>>(path: P) -> Result<Option<Coordinate>> {
    let Some(tags) = read_tag_set(path.as_ref()) else {
        return Ok(None);
    };

    match tags.gps()? {
        Some(raw) => raw.into_coordinate().map(Some),
        None => Ok(None),
    }
}

fn rational_triple(field: &exif::Field) -> Result<[GpsRational; 3]> {
    match &field.value {
        Value::Rational(v) if v.len() >= 3 => {
            Ok([v[0].into(), v[1].into(), v[2].into()])
        }
        _ => Err(ExifMapError::MalformedGps {
            reason: format!("{} is not a rational triple", field.tag),
        }),
    }
}

fn ascii_value(field: &exif::Field) -> Result<String> {
    match &field.value {
        Value::Ascii(v) if !v.is_empty() => {
            let s = String::from_utf8_lossy(&v[0]);
            Ok(s.trim_end_matches('\0').trim().to_string())
        }
        _ => Err(ExifMapError::MalformedGps {
            reason: format!("{} is not an ASCII value", field.tag),
        }),
    }
}
