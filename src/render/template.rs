use crate::domain::model::Coordinate;
use crate::utils::error::{ExifMapError, Result};

pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const DEFAULT_ZOOM: u8 = 16;

/// Single-marker page: a Leaflet map centered on one coordinate with a popup
/// echoing the decimal values. Latitude and longitude are substituted for the
/// view center, the marker position, and the popup text.
const MARKER_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Photo location</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
    <style>
        body { margin: 0; padding: 0; }
        #map { height: 100vh; width: 100vw; }
    </style>
</head>
<body>

    <div id="map"></div>

    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <script>
        const map = L.map('map').setView([{{LAT}}, {{LON}}], {{ZOOM}});

        L.tileLayer('{{TILE_URL}}', {
            maxZoom: 19,
            attribution: '{{ATTRIBUTION}}'
        }).addTo(map);

        L.marker([{{LAT}}, {{LON}}])
            .addTo(map)
            .bindPopup('{{LAT}}, {{LON}}')
            .openPopup();
    </script>

</body>
</html>
"#;

/// Multi-marker viewer page: loads `geodata.js` as a script to sidestep
/// file:// CORS restrictions and places one marker per photo.
const VIEWER_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Photo map</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
    <style>
        body { margin: 0; padding: 0; }
        #map { height: 100vh; width: 100vw; }
        .popup-taken { font-size: 0.9em; color: #666; }
    </style>
</head>
<body>

    <div id="map"></div>

    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <script src="geodata.js"></script>
    <script>
        const map = L.map('map').setView([0, 0], 2);

        L.tileLayer('{{TILE_URL}}', {
            maxZoom: 19,
            attribution: '{{ATTRIBUTION}}'
        }).addTo(map);

        if (typeof photoData !== 'undefined' && photoData.length > 0) {
            const bounds = L.latLngBounds();

            photoData.forEach(function(photo) {
                const marker = L.marker([photo.lat, photo.lng]).addTo(map);
                let popup = '<strong>' + photo.filename + '</strong>';
                if (photo.taken) {
                    popup += '<br><span class="popup-taken">' + photo.taken + '</span>';
                }
                popup += '<br>' + photo.lat + ', ' + photo.lng;
                marker.bindPopup(popup);
                bounds.extend([photo.lat, photo.lng]);
            });

            map.fitBounds(bounds);
        } else {
            L.popup()
                .setLatLng(map.getCenter())
                .setContent('No photos with GPS data were found.')
                .openOn(map);
        }
    </script>

</body>
</html>
"#;

/// The renderer's page skeleton and map parameters as one explicit value.
///
/// Substituting an alternate skeleton or tile provider never touches the
/// renderer logic.
#[derive(Debug, Clone)]
pub struct MapTemplate {
    html: String,
    tile_url: String,
    attribution: String,
    zoom: u8,
}

impl Default for MapTemplate {
    fn default() -> Self {
        Self {
            html: MARKER_PAGE.to_string(),
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapTemplate {
    /// Use a caller-supplied page skeleton. It must carry at least the
    /// coordinate placeholders, otherwise the rendered page could not show
    /// the location at all.
    pub fn from_html(html: impl Into<String>) -> Result<Self> {
        let html = html.into();
        for placeholder in ["{{LAT}}", "{{LON}}"] {
            if !html.contains(placeholder) {
                return Err(ExifMapError::Template {
                    message: format!("template is missing the {} placeholder", placeholder),
                });
            }
        }
        Ok(Self {
            html,
            ..Self::default()
        })
    }

    pub fn with_tile_url(mut self, tile_url: impl Into<String>) -> Self {
        self.tile_url = tile_url.into();
        self
    }

    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = attribution.into();
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn tile_url(&self) -> &str {
        &self.tile_url
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Render the single-marker page for one coordinate. Pure substitution:
    /// the same inputs always produce the same bytes.
    pub fn render(&self, coordinate: &Coordinate) -> String {
        self.html
            .replace("{{LAT}}", &coordinate.latitude().to_string())
            .replace("{{LON}}", &coordinate.longitude().to_string())
            .replace("{{ZOOM}}", &self.zoom.to_string())
            .replace("{{TILE_URL}}", &self.tile_url)
            .replace("{{ATTRIBUTION}}", &self.attribution)
    }

    /// Render the multi-marker viewer page (expects `geodata.js` alongside).
    pub fn viewer_page(&self) -> String {
        VIEWER_PAGE
            .replace("{{TILE_URL}}", &self.tile_url)
            .replace("{{ATTRIBUTION}}", &self.attribution)
    }
}
