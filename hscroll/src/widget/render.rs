//! Presentation sync: the only code that writes the strip's position.

use hscroll_dom::Document;

use super::HorizontalScroll;
use crate::offset::Move;

impl HorizontalScroll {
    /// Reflect an accepted move on the document.
    ///
    /// The animated class is always dropped first and re-added only for
    /// animated moves, so each animated move restarts the transition and a
    /// drag never inherits one.
    pub(super) fn sync(&self, document: &mut Document, mv: Move) {
        let animated = self.config.animated_class.as_str();

        document.update(&self.inner_id, |inner| {
            inner.classes.remove(animated);
            if mv.animate {
                inner.classes.add(animated);
            }
            inner.translate_x = -mv.offset;
        });

        self.update_controls(document);
    }

    /// Hide the left control at the start and the right control at the end.
    pub(super) fn update_controls(&self, document: &mut Document) {
        let Some(controls) = &self.controls else {
            return;
        };
        let hidden = self.config.hidden_class.as_str();
        let at_start = self.engine.at_start();
        let at_end = self.engine.at_end();

        document.update(&controls.left, |left| left.classes.toggle(hidden, at_start));
        document.update(&controls.right, |right| right.classes.toggle(hidden, at_end));
    }
}
