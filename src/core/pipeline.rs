use crate::core::{ConfigProvider, Pipeline, Storage, TransformResult};
use crate::domain::model::PhotoLocation;
use crate::metadata;
use crate::render::MapRenderer;
use crate::utils::error::{ExifMapError, Result};
use std::path::Path;
use walkdir::WalkDir;

pub const MAP_HTML_FILE: &str = "map.html";
pub const GEODATA_FILE: &str = "geodata.js";
pub const PHOTO_PAGES_DIR: &str = "maps";

/// Formats kamadak-exif can pull a container out of.
const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "tif", "tiff", "webp", "heic", "heif", "avif",
];

/// Walks a photo tree, extracts per-image GPS positions, and writes the
/// viewer page, its `geodata.js`, and one single-marker page per photo.
pub struct ScanPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    renderer: MapRenderer,
}

impl<S: Storage, C: ConfigProvider> ScanPipeline<S, C> {
    pub fn new(storage: S, config: C, renderer: MapRenderer) -> Self {
        Self {
            storage,
            config,
            renderer,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ScanPipeline<S, C> {
    fn extract(&self) -> Result<Vec<PhotoLocation>> {
        let source_dir = self.config.source_dir().to_string();
        let mut walker = WalkDir::new(&source_dir).follow_links(self.config.follow_links());
        if let Some(depth) = self.config.max_depth() {
            walker = walker.max_depth(depth);
        }

        let mut records = Vec::new();
        let mut without_gps = 0_usize;
        let mut skipped = 0_usize;

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // A failure on the root itself means the source tree cannot
                // be scanned at all; deeper failures only lose single entries.
                Err(err) if err.depth() == 0 => {
                    return Err(ExifMapError::Io(err.into()));
                }
                Err(err) => {
                    tracing::warn!("cannot access entry while scanning: {}", err);
                    skipped += 1;
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if !is_supported(path) {
                continue;
            }

            let Some(tags) = metadata::read_tag_set(path) else {
                skipped += 1;
                continue;
            };

            let coordinate = tags
                .gps()
                .and_then(|gps| gps.map(|raw| raw.into_coordinate()).transpose());
            match coordinate {
                Ok(Some(coordinate)) => {
                    let taken = tags
                        .timestamp()
                        .map(|t| t.format("%Y-%m-%d %H:%M").to_string());
                    records.push(PhotoLocation::new(
                        file_name(path),
                        relative_path(path, &source_dir),
                        coordinate,
                        taken,
                    ));
                }
                Ok(None) => {
                    tracing::debug!("no GPS data in {}", path.display());
                    without_gps += 1;
                }
                Err(err) => {
                    // One corrupt file must not abort the whole scan.
                    tracing::error!("skipping {}: {}", path.display(), err);
                    skipped += 1;
                }
            }
        }

        tracing::info!(
            "Scan finished: {} geotagged, {} without GPS, {} skipped",
            records.len(),
            without_gps,
            skipped
        );
        Ok(records)
    }

    fn transform(&self, mut records: Vec<PhotoLocation>) -> Result<TransformResult> {
        // Sorted by path so repeated runs produce identical output.
        records.sort_by(|a, b| a.path.cmp(&b.path));

        let json = serde_json::to_string_pretty(&records)?;
        let geodata_js = format!("var photoData = {};\n", json);

        Ok(TransformResult {
            locations: records,
            geodata_js,
        })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        self.storage
            .write_file(GEODATA_FILE, result.geodata_js.as_bytes())?;

        for location in &result.locations {
            let page = page_path(&location.path);
            let html = self.renderer.template().render(&location.coordinate());
            self.storage.write_file(&page, html.as_bytes())?;
        }

        let viewer = self.renderer.template().viewer_page();
        let map_path = self.storage.write_file(MAP_HTML_FILE, viewer.as_bytes())?;
        Ok(map_path.to_string_lossy().into_owned())
    }
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn relative_path(path: &Path, source_dir: &str) -> String {
    path.strip_prefix(source_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// Page location mirroring the photo's directory structure under `maps/`.
/// Distinct photos get distinct pages, and normalizing out `.`/`..` segments
/// keeps every page inside the output root.
fn page_path(relative: &str) -> String {
    let components: Vec<&str> = relative
        .split(['/', '\\'])
        .filter(|c| !c.is_empty() && *c != "." && *c != "..")
        .collect();
    format!("{}/{}.html", PHOTO_PAGES_DIR, components.join("/"))
}
