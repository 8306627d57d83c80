//! The click styler: binds to one element at setup and restyles it on every
//! activation.
//!
//! Style writes go through the [`StyleTarget`] trait and randomness through
//! [`UnitSource`], so the behavior can be exercised against a bare recording
//! target with scripted samples as easily as against a loaded page.

use crate::random::{ThreadUnit, UnitSource};
use crate::{ClickEvent, Page, StyleTarget, StylerConfig};

/// Smallest corner radius the styler will apply, in pixels
pub const RADIUS_MIN: u32 = 10;
/// Largest corner radius the styler will apply, in pixels
pub const RADIUS_MAX: u32 = 50;

const RADIUS_SPAN: u32 = RADIUS_MAX - RADIUS_MIN + 1;

/// Outcome of [`ClickStyler::initialize`]
///
/// `Unbound` is not an error: a page without the target element stays inert
/// and every later click on that id is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// The target element was found and a click handler is registered
    Bound,
    /// No element matched the configured id; nothing was registered
    Unbound,
}

impl Binding {
    pub fn is_bound(&self) -> bool {
        matches!(self, Binding::Bound)
    }
}

/// Draw a pixel radius in `[RADIUS_MIN, RADIUS_MAX]` from one unit sample.
///
/// Uses the floor construction `floor(u * 41) + 10`, which makes both
/// endpoints reachable: 0.0 maps to 10 and any sample at or above 40/41
/// maps to 50. Samples outside `[0, 1)` are clamped back into the range.
pub fn draw_radius(unit: &mut dyn UnitSource) -> u32 {
    let sample = unit.next_unit();
    // Clamp the step count before the integer cast; NaN survives the clamp
    // and casts to 0, landing at RADIUS_MIN.
    let steps = (sample * f64::from(RADIUS_SPAN))
        .floor()
        .clamp(0.0, f64::from(RADIUS_SPAN - 1));
    RADIUS_MIN + steps as u32
}

/// Click-driven restyler for a single element
///
/// Built with a [`StylerConfig`] naming the target id and fill color, plus a
/// [`UnitSource`] for radius draws. [`ClickStyler::initialize`] performs the
/// one-time lookup and hands the styler to the page as a click handler.
pub struct ClickStyler {
    config: StylerConfig,
    unit: Box<dyn UnitSource>,
}

impl ClickStyler {
    /// Styler with the default configuration and thread-local randomness
    pub fn new() -> Self {
        Self::with_config(StylerConfig::default())
    }

    /// Styler with the given configuration and thread-local randomness
    pub fn with_config(config: StylerConfig) -> Self {
        Self {
            config,
            unit: Box::new(ThreadUnit),
        }
    }

    /// Styler with an explicit unit source, for deterministic runs
    pub fn with_unit_source(config: StylerConfig, unit: Box<dyn UnitSource>) -> Self {
        Self { config, unit }
    }

    pub fn config(&self) -> &StylerConfig {
        &self.config
    }

    /// Look the target up once and, when present, register for its clicks.
    ///
    /// The lookup outcome is logged either way. On a miss nothing is
    /// registered and the page is left untouched.
    pub fn initialize(mut self, page: &mut Page) -> Binding {
        let id = self.config.target_id.clone();
        let found = page.element_by_id(&id).map(|el| el.tag.clone());
        match found {
            Some(tag) => {
                log::info!("target {:?} found (<{}>), click styling armed", id, tag);
                page.on_click(&id, move |event, target| self.on_activate(event, target));
                Binding::Bound
            }
            None => {
                log::info!("target {:?} not found, nothing bound", id);
                Binding::Unbound
            }
        }
    }

    /// Apply one activation: draw a radius and write both style properties.
    ///
    /// Each call draws a fresh sample and performs exactly one write per
    /// property. The radius carries a `px` suffix; the fill color is written
    /// verbatim from the configuration.
    pub fn on_activate(&mut self, event: &ClickEvent, target: &mut dyn StyleTarget) {
        let radius = draw_radius(self.unit.as_mut());
        let radius_px = format!("{}px", radius);
        target.set_border_radius(&radius_px);
        target.set_background_color(&self.config.fill_color);
        log::debug!(
            "click #{} on {:?}: border-radius {}, background-color {}",
            event.sequence,
            event.target_id,
            radius_px,
            self.config.fill_color
        );
    }
}

impl Default for ClickStyler {
    fn default() -> Self {
        Self::new()
    }
}
