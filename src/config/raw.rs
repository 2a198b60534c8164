use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("quickgig.default.toml");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub log: Option<Log>,
    pub map: Option<Map>,
    pub deep_link: Option<DeepLink>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Log {
    pub level: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Config::default().log.expect("Log configuration")
    }
}

impl Log {
    pub fn or_default(self) -> Self {
        let Self { level } = self;
        Self {
            level: level.or_else(|| Self::default().level),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub fallback_center: Option<MapPoint>,
    pub zoom: Option<u8>,
    pub min_zoom: Option<u8>,
    /// Milliseconds
    pub poll_interval: Option<u64>,
    pub marker_label: Option<MarkerLabel>,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}

impl Map {
    pub fn or_default(self) -> Self {
        let Self {
            fallback_center,
            zoom,
            min_zoom,
            poll_interval,
            marker_label,
        } = self;
        let default = Self::default();
        Self {
            fallback_center: fallback_center.or(default.fallback_center),
            zoom: zoom.or(default.zoom),
            min_zoom: min_zoom.or(default.min_zoom),
            poll_interval: poll_interval.or(default.poll_interval),
            marker_label: marker_label.or(default.marker_label),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerLabel {
    FullPrice,
    Abbreviated,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DeepLink {
    pub key: Option<String>,
}

impl Default for DeepLink {
    fn default() -> Self {
        Config::default().deep_link.expect("Deep link configuration")
    }
}

impl DeepLink {
    pub fn or_default(self) -> Self {
        let Self { key } = self;
        Self {
            key: key.or_else(|| Self::default().key),
        }
    }
}
