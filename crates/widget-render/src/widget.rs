//! The weather widget page.
//!
//! [`render_widget`] loads the built-in sources from [`crate::assets`] and
//! renders the whole page for a [`WeatherReport`]:
//!
//! ```rust
//! use widget_render::{render_widget, HelperRegistry, WeatherReport};
//!
//! let report = WeatherReport::new("berlin", "Light rain", 12);
//! let html = render_widget(&report, HelperRegistry::defaults()).unwrap();
//!
//! assert!(html.contains("<h1 class=\"location\">Berlin</h1>"));
//! assert!(html.contains("<div class=\"clothing umbrella\"></div>"));
//! ```

use serde::{Deserialize, Serialize};

use crate::assets::widget_composer;
use crate::clothing::WeatherInput;
use crate::error::RenderError;
use crate::helpers::HelperRegistry;

/// Data rendered by the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub description: String,
    pub celsius: i64,
}

impl WeatherReport {
    pub fn new(location: impl Into<String>, description: impl Into<String>, celsius: i64) -> Self {
        Self {
            location: location.into(),
            description: description.into(),
            celsius,
        }
    }

    /// The conditions part of the report.
    pub fn conditions(&self) -> WeatherInput {
        WeatherInput::new(self.description.clone(), self.celsius)
    }
}

/// Renders the full widget page for `report`.
pub fn render_widget(report: &WeatherReport, helpers: &HelperRegistry) -> Result<String, RenderError> {
    widget_composer(helpers)?.render("layout", report)
}
