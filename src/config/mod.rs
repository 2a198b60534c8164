use std::time::Duration;

use thiserror::Error;

use quickgig_core::map::{MapSettings, MarkerLabel};
use quickgig_entities::geo::MapPoint;

mod raw;

const CONFIG_FILE: &str = include_str!("../../quickgig.toml");

const MAX_POLL_INTERVAL_MS: u64 = 1_000;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error("Missing configuration value '{0}'")]
    Missing(&'static str),
    #[error("Invalid log level '{0}'")]
    LogLevel(String),
    #[error("Invalid fallback center {0}")]
    FallbackCenter(MapPoint),
    #[error("Zoom level {zoom} is below the minimum zoom level {min_zoom}")]
    Zoom { zoom: u8, min_zoom: u8 },
    #[error("Poll interval of {0} ms is not within 1..={MAX_POLL_INTERVAL_MS} ms")]
    PollInterval(u64),
    #[error("Empty deep link key")]
    DeepLinkKey,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log: Log,
    pub map: Map,
    pub deep_link: DeepLink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Log {
    pub level: log::Level,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    pub settings: MapSettings,
    /// Interval for checking if the map widget API has been loaded.
    pub poll_interval: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    /// Query parameter with the id of the listing to open.
    pub key: String,
}

impl Config {
    /// The configuration that is embedded into the application.
    pub fn try_load() -> Result<Self, Error> {
        Self::try_from_toml(CONFIG_FILE)
    }

    pub fn try_from_toml(toml: &str) -> Result<Self, Error> {
        let raw_config: raw::Config = toml::from_str(toml)?;
        Self::try_from(raw_config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::try_from(raw::Config::default()).expect("Default configuration")
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = Error;
    fn try_from(from: raw::Config) -> Result<Self, Self::Error> {
        let raw::Config {
            log,
            map,
            deep_link,
        } = from;

        let raw::Log { level } = log.map_or_else(raw::Log::default, raw::Log::or_default);
        let level = level.ok_or(Error::Missing("log.level"))?;
        let level = level.parse().map_err(|_| Error::LogLevel(level))?;
        let log = Log { level };

        let raw::Map {
            fallback_center,
            zoom,
            min_zoom,
            poll_interval,
            marker_label,
        } = map.map_or_else(raw::Map::default, raw::Map::or_default);

        let raw::MapPoint { lat, lng } =
            fallback_center.ok_or(Error::Missing("map.fallback-center"))?;
        let fallback_center = MapPoint::from_lat_lng_deg(lat, lng);
        if !fallback_center.is_valid() {
            return Err(Error::FallbackCenter(fallback_center));
        }
        let zoom = zoom.ok_or(Error::Missing("map.zoom"))?;
        let min_zoom = min_zoom.ok_or(Error::Missing("map.min-zoom"))?;
        if zoom < min_zoom {
            return Err(Error::Zoom { zoom, min_zoom });
        }
        let poll_interval = poll_interval.ok_or(Error::Missing("map.poll-interval"))?;
        if !(1..=MAX_POLL_INTERVAL_MS).contains(&poll_interval) {
            return Err(Error::PollInterval(poll_interval));
        }
        let marker_label = match marker_label.ok_or(Error::Missing("map.marker-label"))? {
            raw::MarkerLabel::FullPrice => MarkerLabel::FullPrice,
            raw::MarkerLabel::Abbreviated => MarkerLabel::Abbreviated,
        };
        let map = Map {
            settings: MapSettings {
                fallback_center,
                zoom,
                min_zoom,
                marker_label,
            },
            poll_interval: Duration::from_millis(poll_interval),
        };

        let raw::DeepLink { key } =
            deep_link.map_or_else(raw::DeepLink::default, raw::DeepLink::or_default);
        let key = key.ok_or(Error::Missing("deep-link.key"))?;
        let key = key.trim().to_owned();
        if key.is_empty() {
            return Err(Error::DeepLinkKey);
        }
        let deep_link = DeepLink { key };

        Ok(Self {
            log,
            map,
            deep_link,
        })
    }
}

#[cfg(test)]
mod tests {
    use quickgig_core::{map::*, shell::DEFAULT_DEEP_LINK_KEY};

    use super::*;

    #[test]
    fn default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.log.level, log::Level::Debug);
        assert_eq!(cfg.map.settings, MapSettings::default());
        assert_eq!(cfg.map.poll_interval, DEFAULT_POLL_INTERVAL);
        assert_eq!(cfg.deep_link.key, DEFAULT_DEEP_LINK_KEY);
    }

    #[test]
    fn load_embedded_config() {
        let cfg = Config::try_load().unwrap();
        assert_eq!(cfg.log.level, log::Level::Info);
        assert_eq!(cfg.map.settings.marker_label, MarkerLabel::FullPrice);
        assert_eq!(cfg.deep_link.key, DEFAULT_DEEP_LINK_KEY);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        assert_eq!(Config::try_from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn override_single_values() {
        let cfg = Config::try_from_toml(
            r#"
            [map]
            zoom = 12
            marker-label = "abbreviated"
            fallback-center = { lat = 35.1796, lng = 129.0756 }

            [deep-link]
            key = "id"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.map.settings.zoom, 12);
        assert_eq!(cfg.map.settings.min_zoom, DEFAULT_MIN_ZOOM);
        assert_eq!(cfg.map.settings.marker_label, MarkerLabel::Abbreviated);
        assert_eq!(
            cfg.map.settings.fallback_center,
            MapPoint::from_lat_lng_deg(35.1796, 129.0756)
        );
        assert_eq!(cfg.deep_link.key, "id");
    }

    #[test]
    fn poll_interval_range() {
        let parse = |ms: u64| Config::try_from_toml(&format!("[map]\npoll-interval = {ms}"));
        assert!(matches!(parse(0), Err(Error::PollInterval(0))));
        assert!(matches!(parse(1_001), Err(Error::PollInterval(1_001))));
        assert_eq!(
            parse(1_000).unwrap().map.poll_interval,
            Duration::from_secs(1)
        );
        assert_eq!(parse(1).unwrap().map.poll_interval, Duration::from_millis(1));
    }

    #[test]
    fn reject_invalid_values() {
        assert!(matches!(
            Config::try_from_toml("[log]\nlevel = \"verbose\""),
            Err(Error::LogLevel(_))
        ));
        assert!(matches!(
            Config::try_from_toml("[map]\nzoom = 5"),
            Err(Error::Zoom {
                zoom: 5,
                min_zoom: 10
            })
        ));
        assert!(matches!(
            Config::try_from_toml("[map]\nfallback-center = { lat = 95.0, lng = 0.0 }"),
            Err(Error::FallbackCenter(_))
        ));
        assert!(matches!(
            Config::try_from_toml("[deep-link]\nkey = \" \""),
            Err(Error::DeepLinkKey)
        ));
        assert!(matches!(
            Config::try_from_toml("[map]\nzoom = \"near\""),
            Err(Error::Toml(_))
        ));
    }
}
