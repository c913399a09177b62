//! Host-facing capability surface.
//!
//! The host application owns HTTP routing, authorization and response
//! encoding; this module defines the capabilities it can invoke and
//! the payloads they produce. The core has no dependency on any host
//! type hierarchy -- the host wires [`WrappedHost`] to its routes:
//!
//! - `GET /<year>.svg` -> [`RenderSummary::render_summary`], serving
//!   the [`SvgDocument`] on `Some` and a not-found response on `None`
//! - `GET` (list) -> [`ListYears::list_years`], serialized to
//!   `{"years": [...]}`

use serde::Serialize;

use crate::assets::Assets;
use crate::card;
use crate::config::Config;
use crate::stats::StatsArchive;

/// MIME type of the rendered card.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// A rendered SVG card, ready for the host to serve.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    pub content_type: &'static str,
    pub body: String,
}

/// Body of the year-listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct YearsResponse {
    pub years: Vec<i32>,
}

/// Capability: render the card for a year, or signal its absence.
pub trait RenderSummary {
    /// `None` covers both a missing year and a record the archive
    /// could not use; the distinction is logged, not exposed.
    fn render_summary(&self, year: i32) -> Option<SvgDocument>;
}

/// Capability: enumerate the years with recorded statistics.
pub trait ListYears {
    fn list_years(&self) -> YearsResponse;
}

/// The plugin core the host drives.
pub struct WrappedHost {
    archive: StatsArchive,
    assets: Assets,
}

impl WrappedHost {
    /// Assemble from an archive and preloaded assets.
    pub fn new(archive: StatsArchive, assets: Assets) -> Self {
        Self { archive, assets }
    }

    /// Build from configuration, loading assets once.
    pub fn from_config(config: &Config) -> Self {
        Self::new(StatsArchive::from_config(config), Assets::load(config))
    }
}

impl RenderSummary for WrappedHost {
    fn render_summary(&self, year: i32) -> Option<SvgDocument> {
        let summary = self.archive.resolve(year)?;
        let body = card::render_card(&summary, self.assets.font_open_sans_bold.as_deref());
        Some(SvgDocument {
            content_type: SVG_CONTENT_TYPE,
            body,
        })
    }
}

impl ListYears for WrappedHost {
    fn list_years(&self) -> YearsResponse {
        YearsResponse {
            years: self.archive.available_years(),
        }
    }
}

/// Static metadata consumed by the host's software-update check.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateDescriptor {
    pub display_name: &'static str,
    pub display_version: &'static str,
    #[serde(rename = "type")]
    pub check_type: &'static str,
    pub user: &'static str,
    pub repo: &'static str,
    pub current: &'static str,
    /// Release archive URL template the host installs from
    pub archive: &'static str,
}

impl UpdateDescriptor {
    /// Descriptor for the running build.
    pub fn current() -> Self {
        Self {
            display_name: "printwrapped",
            display_version: env!("CARGO_PKG_VERSION"),
            check_type: "github_release",
            user: "printwrapped",
            repo: "printwrapped",
            current: env!("CARGO_PKG_VERSION"),
            archive: "https://github.com/printwrapped/printwrapped/archive/{target_version}.zip",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn host_with(files: &[(&str, &str)]) -> (TempDir, WrappedHost) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let host = WrappedHost::new(StatsArchive::new(dir.path()), Assets::default());
        (dir, host)
    }

    #[test]
    fn test_render_summary_found() {
        let (_dir, host) = host_with(&[(
            "2023.json",
            r#"{"prints_finished": 9, "prints_started_per_weekday": {"6": 2}}"#,
        )]);

        let doc = host.render_summary(2023).unwrap();
        assert_eq!(doc.content_type, "image/svg+xml");
        assert!(doc.body.contains("Sunday"));
    }

    #[test]
    fn test_render_summary_missing_year() {
        let (_dir, host) = host_with(&[]);
        assert!(host.render_summary(2023).is_none());
    }

    #[test]
    fn test_render_summary_corrupt_record() {
        let (_dir, host) = host_with(&[("2023.json", "{{nope")]);
        assert!(host.render_summary(2023).is_none());
    }

    #[test]
    fn test_years_response_shape() {
        let (_dir, host) = host_with(&[("2022.json", "{}"), ("2024.json", "{}")]);

        let mut response = host.list_years();
        response.years.sort_unstable();
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"years":[2022,2024]}"#);
    }

    #[test]
    fn test_update_descriptor() {
        let descriptor = UpdateDescriptor::current();
        assert_eq!(descriptor.display_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(descriptor.check_type, "github_release");

        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["type"], "github_release");
    }
}
