//! Shared fixture builder: minimal little-endian TIFF files carrying a GPS
//! IFD, so tests need no binary assets checked in.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

const TAG_GPS_LATITUDE_REF: u16 = 0x0001;
const TAG_GPS_LATITUDE: u16 = 0x0002;
const TAG_GPS_LONGITUDE_REF: u16 = 0x0003;
const TAG_GPS_LONGITUDE: u16 = 0x0004;
const TAG_DATETIME: u16 = 0x0132;
const TAG_GPS_IFD_POINTER: u16 = 0x8825;

/// What to embed in the fixture; `None` omits the tag entirely.
#[derive(Debug, Clone, Default)]
pub struct GpsFixture {
    pub latitude: Option<[(u32, u32); 3]>,
    pub latitude_ref: Option<&'static str>,
    pub longitude: Option<[(u32, u32); 3]>,
    pub longitude_ref: Option<&'static str>,
    pub datetime: Option<&'static str>,
}

impl GpsFixture {
    /// Complete tag set with whole-degree triples.
    pub fn complete(lat: (u32, u32, u32), lat_ref: &'static str, lon: (u32, u32, u32), lon_ref: &'static str) -> Self {
        Self {
            latitude: Some([(lat.0, 1), (lat.1, 1), (lat.2, 1)]),
            latitude_ref: Some(lat_ref),
            longitude: Some([(lon.0, 1), (lon.1, 1), (lon.2, 1)]),
            longitude_ref: Some(lon_ref),
            datetime: None,
        }
    }

    pub fn with_datetime(mut self, datetime: &'static str) -> Self {
        self.datetime = Some(datetime);
        self
    }
}

enum Payload {
    Inline([u8; 4]),
    External(Vec<u8>),
}

struct Entry {
    tag: u16,
    typ: u16,
    count: u32,
    payload: Payload,
}

fn ascii_entry(tag: u16, value: &str) -> Entry {
    let mut bytes = value.as_bytes().to_vec();
    bytes.push(0);
    let count = bytes.len() as u32;
    let payload = if bytes.len() <= 4 {
        let mut inline = [0u8; 4];
        inline[..bytes.len()].copy_from_slice(&bytes);
        Payload::Inline(inline)
    } else {
        Payload::External(bytes)
    };
    Entry {
        tag,
        typ: TYPE_ASCII,
        count,
        payload,
    }
}

fn rational_entry(tag: u16, triple: &[(u32, u32); 3]) -> Entry {
    let mut bytes = Vec::with_capacity(24);
    for (num, denom) in triple {
        bytes.extend_from_slice(&num.to_le_bytes());
        bytes.extend_from_slice(&denom.to_le_bytes());
    }
    Entry {
        tag,
        typ: TYPE_RATIONAL,
        count: 3,
        payload: Payload::External(bytes),
    }
}

fn pointer_entry(tag: u16, offset: u32) -> Entry {
    Entry {
        tag,
        typ: TYPE_LONG,
        count: 1,
        payload: Payload::Inline(offset.to_le_bytes()),
    }
}

/// Serialize one IFD; external payloads land in a data block assumed to
/// start at `data_start`.
fn render_ifd(entries: &[Entry], data_start: u32) -> (Vec<u8>, Vec<u8>) {
    let mut ifd = Vec::new();
    let mut data = Vec::new();

    ifd.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for entry in entries {
        ifd.extend_from_slice(&entry.tag.to_le_bytes());
        ifd.extend_from_slice(&entry.typ.to_le_bytes());
        ifd.extend_from_slice(&entry.count.to_le_bytes());
        match &entry.payload {
            Payload::Inline(bytes) => ifd.extend_from_slice(bytes),
            Payload::External(bytes) => {
                ifd.extend_from_slice(&(data_start + data.len() as u32).to_le_bytes());
                data.extend_from_slice(bytes);
            }
        }
    }
    // offset of the next IFD: none
    ifd.extend_from_slice(&0u32.to_le_bytes());

    (ifd, data)
}

fn external_len(entries: &[Entry]) -> u32 {
    entries
        .iter()
        .map(|e| match &e.payload {
            Payload::Inline(_) => 0,
            Payload::External(bytes) => bytes.len() as u32,
        })
        .sum()
}

fn ifd_byte_len(entry_count: usize) -> u32 {
    2 + entry_count as u32 * 12 + 4
}

/// Build the TIFF bytes for a fixture (header, IFD0, optional GPS IFD).
pub fn tiff_bytes(fixture: &GpsFixture) -> Vec<u8> {
    let mut gps_entries = Vec::new();
    if let Some(r) = fixture.latitude_ref {
        gps_entries.push(ascii_entry(TAG_GPS_LATITUDE_REF, r));
    }
    if let Some(t) = &fixture.latitude {
        gps_entries.push(rational_entry(TAG_GPS_LATITUDE, t));
    }
    if let Some(r) = fixture.longitude_ref {
        gps_entries.push(ascii_entry(TAG_GPS_LONGITUDE_REF, r));
    }
    if let Some(t) = &fixture.longitude {
        gps_entries.push(rational_entry(TAG_GPS_LONGITUDE, t));
    }
    gps_entries.sort_by_key(|e| e.tag);

    let mut ifd0_entries = Vec::new();
    if let Some(dt) = fixture.datetime {
        ifd0_entries.push(ascii_entry(TAG_DATETIME, dt));
    }

    let has_gps = !gps_entries.is_empty();
    let ifd0_count = ifd0_entries.len() + usize::from(has_gps);
    let ifd0_data_start = 8 + ifd_byte_len(ifd0_count);
    let gps_ifd_offset = ifd0_data_start + external_len(&ifd0_entries);

    if has_gps {
        ifd0_entries.push(pointer_entry(TAG_GPS_IFD_POINTER, gps_ifd_offset));
        ifd0_entries.sort_by_key(|e| e.tag);
    }

    let (ifd0, ifd0_data) = render_ifd(&ifd0_entries, ifd0_data_start);

    let mut buf = Vec::new();
    buf.extend_from_slice(b"II");
    buf.extend_from_slice(&42u16.to_le_bytes());
    buf.extend_from_slice(&8u32.to_le_bytes());
    buf.extend_from_slice(&ifd0);
    buf.extend_from_slice(&ifd0_data);

    if has_gps {
        let gps_data_start = gps_ifd_offset + ifd_byte_len(gps_entries.len());
        let (gps_ifd, gps_data) = render_ifd(&gps_entries, gps_data_start);
        debug_assert_eq!(buf.len() as u32, gps_ifd_offset);
        buf.extend_from_slice(&gps_ifd);
        buf.extend_from_slice(&gps_data);
    }

    buf
}

/// Write a fixture TIFF under `dir` and return its path.
pub fn write_fixture(dir: &Path, name: &str, fixture: &GpsFixture) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, tiff_bytes(fixture)).unwrap();
    path
}
