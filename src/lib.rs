//! Extract GPS coordinates from image EXIF metadata and render the photo's
//! location as a static Leaflet map.

pub mod config;
pub mod core;
pub mod domain;
pub mod metadata;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, TomlConfig};

pub use core::{engine::MapEngine, pipeline::ScanPipeline};
pub use domain::model::{Coordinate, GpsRational, Hemisphere, PhotoLocation, RawGpsTags};
pub use domain::ports::{ConfigProvider, Pipeline, Storage};
pub use metadata::{extract_coordinate, TagSet};
pub use render::{MapRenderer, MapTemplate};
pub use utils::error::{ExifMapError, Result};
