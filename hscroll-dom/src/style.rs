use std::time::Duration;

use crate::element::Element;
use crate::transitions::{Easing, TransitionConfig};
use crate::types::Display;

/// Presentation rules attached to a class name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassRule {
    pub display: Option<Display>,
    /// Transition applied to `translate_x` changes while the class is present.
    pub transition: Option<TransitionConfig>,
}

impl ClassRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn hidden(self) -> Self {
        self.display(Display::None)
    }

    pub fn transition(mut self, duration: Duration, easing: Easing) -> Self {
        self.transition = Some(TransitionConfig::new(duration, easing));
        self
    }
}

/// Class-keyed rules resolved against an element's class list.
///
/// Rules are applied in insertion order; a later matching rule overrides
/// whatever an earlier one set.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    rules: Vec<(String, ClassRule)>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, class: impl Into<String>, rule: ClassRule) -> Self {
        self.insert(class, rule);
        self
    }

    pub fn insert(&mut self, class: impl Into<String>, rule: ClassRule) {
        self.rules.push((class.into(), rule));
    }

    fn matching<'a>(&'a self, element: &'a Element) -> impl Iterator<Item = (&'a str, &'a ClassRule)> {
        self.rules
            .iter()
            .filter(|(class, _)| element.classes.contains(class))
            .map(|(class, rule)| (class.as_str(), rule))
    }

    /// Effective display of an element.
    pub fn display(&self, element: &Element) -> Display {
        self.matching(element)
            .filter_map(|(_, rule)| rule.display)
            .last()
            .unwrap_or_default()
    }

    /// Effective translate transition of an element, together with the
    /// revision of the class that supplied it.
    pub fn translate_transition(&self, element: &Element) -> Option<(TransitionConfig, u64)> {
        self.matching(element)
            .filter_map(|(class, rule)| {
                let config = rule.transition?;
                let revision = element.classes.revision(class)?;
                Some((config, revision))
            })
            .last()
    }
}
