//! # printwrapped-core
//!
//! Core library for printwrapped - "year in review" cards for a 3D
//! printer's usage history.
//!
//! The host application aggregates print history into one JSON record
//! per calendar year. This library reads those records, derives a
//! display summary (total print time, longest print, busiest weekday,
//! ...) and renders it into an SVG card the host serves over HTTP.
//!
//! ## Architecture
//!
//! Data flows through three small stages, all stateless:
//! - **Archive:** locate and parse `<year>.json` ([`StatsArchive`])
//! - **Summary:** pure projection into display strings ([`YearSummary`])
//! - **Card:** SVG rendering with an optionally embedded font
//!   ([`card`], [`Assets`])
//!
//! The host integration boundary is the pair of capability traits in
//! [`host`]; nothing in this crate depends on the host's types.
//!
//! ## Example
//!
//! ```rust,no_run
//! use printwrapped_core::{Config, StatsArchive};
//!
//! let config = Config::load().expect("failed to load config");
//! let archive = StatsArchive::from_config(&config);
//! if let Some(summary) = archive.resolve(2024) {
//!     println!("{} prints in {}", summary.prints_completed, summary.year);
//! }
//! ```

// Re-export commonly used items at the crate root
pub use assets::Assets;
pub use config::Config;
pub use error::{Error, Result};
pub use host::{
    ListYears, RenderSummary, SvgDocument, UpdateDescriptor, WrappedHost, YearsResponse,
};
pub use stats::{StatsArchive, YearRecord};
pub use summary::YearSummary;

// Public modules
pub mod assets;
pub mod card;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod stats;
pub mod summary;
