//! Widget configuration.
//!
//! Both structs deserialize with `#[serde(default)]`, so a partial JSON
//! object overrides only the keys it names and the `controls` object merges
//! with the control defaults independently of the top level.

use std::time::Duration;

use hscroll_dom::Element;
use serde::{Deserialize, Deserializer};

use crate::error::ScrollError;

/// Configuration fixed at construction time.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
    /// Class of the clipping wrapper appended to the container.
    pub outer_class: String,
    /// Class of the translated strip holding the items.
    pub inner_class: String,
    /// Class shared by both controls.
    pub control_class: String,
    pub left_control_class: String,
    pub right_control_class: String,
    /// Class that turns on the strip's transition.
    pub animated_class: String,
    /// Class that hides a control.
    pub hidden_class: String,
    /// Wheel `delta_y` is divided by this to get pixels.
    pub delta_divider: f32,
    /// Minimum spacing between accepted wheel moves, in milliseconds.
    #[serde(deserialize_with = "millis")]
    pub wheel_interval: Duration,
    pub controls: ControlsConfig,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            outer_class: "s-outer".into(),
            inner_class: "s-inner".into(),
            control_class: "s-control".into(),
            left_control_class: "s-control-left".into(),
            right_control_class: "s-control-right".into(),
            animated_class: "s-animated".into(),
            hidden_class: "none".into(),
            delta_divider: 0.5,
            wheel_interval: Duration::from_millis(20),
            controls: ControlsConfig::default(),
        }
    }
}

impl ScrollConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by whatever keys `json` sets.
    pub fn from_json(json: &str) -> Result<Self, ScrollError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn outer_class(mut self, class: impl Into<String>) -> Self {
        self.outer_class = class.into();
        self
    }

    pub fn inner_class(mut self, class: impl Into<String>) -> Self {
        self.inner_class = class.into();
        self
    }

    pub fn control_class(mut self, class: impl Into<String>) -> Self {
        self.control_class = class.into();
        self
    }

    pub fn left_control_class(mut self, class: impl Into<String>) -> Self {
        self.left_control_class = class.into();
        self
    }

    pub fn right_control_class(mut self, class: impl Into<String>) -> Self {
        self.right_control_class = class.into();
        self
    }

    pub fn animated_class(mut self, class: impl Into<String>) -> Self {
        self.animated_class = class.into();
        self
    }

    pub fn hidden_class(mut self, class: impl Into<String>) -> Self {
        self.hidden_class = class.into();
        self
    }

    pub fn delta_divider(mut self, divider: f32) -> Self {
        self.delta_divider = divider;
        self
    }

    pub fn wheel_interval(mut self, interval: Duration) -> Self {
        self.wheel_interval = interval;
        self
    }

    pub fn controls(mut self, controls: ControlsConfig) -> Self {
        self.controls = controls;
        self
    }
}

/// Left/right control buttons.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub enabled: bool,
    /// Pixels moved per control click.
    pub pace: f32,
    /// Element that scrolls toward the start. Moved into the widget on mount.
    #[serde(skip)]
    pub left: Option<Element>,
    /// Element that scrolls toward the end. Moved into the widget on mount.
    #[serde(skip)]
    pub right: Option<Element>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            pace: 100.0,
            left: None,
            right: None,
        }
    }
}

impl ControlsConfig {
    /// Enabled controls using the given elements.
    pub fn new(left: Element, right: Element) -> Self {
        Self {
            enabled: true,
            left: Some(left),
            right: Some(right),
            ..Default::default()
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn pace(mut self, pace: f32) -> Self {
        self.pace = pace;
        self
    }

    pub fn left(mut self, element: Element) -> Self {
        self.left = Some(element);
        self
    }

    pub fn right(mut self, element: Element) -> Self {
        self.right = Some(element);
        self
    }
}

fn millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_millis)
}
