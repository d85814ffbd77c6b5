//! Default presentation rules for the widget's classes.

use std::time::Duration;

use hscroll_dom::{ClassRule, Easing, Stylesheet};

use crate::config::ScrollConfig;

/// Length of the strip's slide when the animated class is present.
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

/// Stylesheet giving the configured hidden class `display: none` and the
/// animated class a translate transition.
pub fn stylesheet(config: &ScrollConfig) -> Stylesheet {
    Stylesheet::new()
        .rule(
            config.animated_class.as_str(),
            ClassRule::new().transition(SLIDE_DURATION, Easing::EaseOut),
        )
        .rule(config.hidden_class.as_str(), ClassRule::new().hidden())
}
