//! ClickStyler
//!
//! A headless harness for the classic click-to-restyle exercise: load an HTML
//! page, bind a styler to one element, then dispatch activation events that
//! randomize the element's corner rounding and repaint its background.
//!
//! # Features
//!
//! - **Headless Page Host**: pages are parsed with `scraper`; no browser, no
//!   network fetches
//! - **Injected Capabilities**: the styler mutates a narrow [`StyleTarget`]
//!   and samples a swappable [`UnitSource`] instead of reaching into ambient
//!   global state
//! - **Serial Dispatch**: clicks run their handlers synchronously on the
//!   calling thread, one at a time
//!
//! # Example
//!
//! ```
//! use clickstyler::{ClickStyler, Page};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut page = Page::load_html(
//!     r#"<html><head><title>Demo</title></head>
//!        <body><button id="btn-essai">Try me</button></body></html>"#,
//! )?;
//!
//! let binding = ClickStyler::new().initialize(&mut page);
//! assert!(binding.is_bound());
//!
//! page.click("btn-essai");
//! let styled = page.element_by_id("btn-essai").unwrap();
//! assert_eq!(styled.background_color.as_deref(), Some("blue"));
//! assert!(styled.border_radius.as_deref().unwrap().ends_with("px"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

// Headless page host: parse, look up, dispatch
pub mod page;

// Unit-interval sample sources (default, seeded, deterministic)
pub mod random;

// The styler component itself
pub mod styler;

// Re-export the working set at the crate root for ergonomic use
pub use page::{Element, Page};
pub use random::{FixedUnit, SeededUnit, SequenceUnit, ThreadUnit, UnitSource};
pub use styler::{draw_radius, Binding, ClickStyler, RADIUS_MAX, RADIUS_MIN};

/// Identifier of the element the styler binds to by default
pub const DEFAULT_TARGET_ID: &str = "btn-essai";

/// Background fill written on every activation
pub const DEFAULT_FILL_COLOR: &str = "blue";

/// Configuration for a [`ClickStyler`]
///
/// The defaults match the classic exercise page: bind `#btn-essai` and
/// repaint it `blue` on each click.
///
/// # Examples
///
/// ```
/// let cfg = clickstyler::StylerConfig::default();
/// assert_eq!(cfg.target_id, "btn-essai");
/// ```
#[derive(Debug, Clone)]
pub struct StylerConfig {
    /// Identifier of the element to look up at initialization
    pub target_id: String,
    /// Color written to the background-fill property on each activation
    pub fill_color: String,
}

impl Default for StylerConfig {
    fn default() -> Self {
        Self {
            target_id: DEFAULT_TARGET_ID.to_string(),
            fill_color: DEFAULT_FILL_COLOR.to_string(),
        }
    }
}

/// Narrow style capability over exactly the two properties the styler writes.
///
/// Handlers receive the bound element through this trait rather than through
/// the page, so tests can substitute recording targets.
pub trait StyleTarget {
    /// Current corner-rounding value (`border-radius`), if set
    fn border_radius(&self) -> Option<&str>;

    /// Overwrite the corner-rounding value
    fn set_border_radius(&mut self, value: &str);

    /// Current background-fill value (`background-color`), if set
    fn background_color(&self) -> Option<&str>;

    /// Overwrite the background-fill value
    fn set_background_color(&mut self, value: &str);
}

/// Event descriptor passed to click handlers
///
/// Opaque to the styler beyond logging; handlers may ignore it entirely.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    /// Identifier of the element the event was dispatched to
    pub target_id: String,
    /// 1-based dispatch ordinal within the owning page
    pub sequence: u64,
}

/// A textual snapshot of a loaded page
///
/// Returned by [`Page::text_snapshot`] and suitable for textual tests and
/// quick inspection.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    /// Page title
    pub title: String,
    /// Extracted body text
    pub text: String,
}
