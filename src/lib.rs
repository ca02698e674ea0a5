// OCR Dashboard - Core Library
// Static vendor dataset + pure view projections + selection state

pub mod catalog;
pub mod projection;
pub mod shell;

// Only compile the terminal UI when the TUI feature is enabled
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use catalog::{
    CatalogError, Highlight, IntegrityError, VendorCatalog, VendorDetail, VendorRecord,
};
pub use projection::{chart_series, detail_payload, highlight_cards, ChartPoint, DetailPayload};
pub use shell::Shell;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
