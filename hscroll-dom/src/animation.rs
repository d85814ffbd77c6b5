use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::element::{Content, Element};
use crate::style::Stylesheet;
use crate::transitions::TransitionConfig;

/// Snapshot of an element's transitionable state.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ElementSnapshot {
    translate_x: f32,
    /// Revision of the class supplying the translate transition, if any.
    revision: Option<u64>,
}

/// A running slide from `from` to `to`.
#[derive(Debug, Clone, Copy)]
struct ActiveTransition {
    from: f32,
    to: f32,
    start: Instant,
    config: TransitionConfig,
}

impl ActiveTransition {
    fn value_at(&self, now: Instant) -> f32 {
        let progress = self.config.progress(now.saturating_duration_since(self.start));
        self.from + (self.to - self.from) * progress
    }

    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.config.duration
    }
}

/// Interpolates `translate_x` between frames for elements whose classes
/// carry a transition.
///
/// A transition starts when the translation changes, and restarts from the
/// currently painted position whenever the transition class is re-added
/// (its revision changes) even if the target value is unchanged. Elements
/// without a transition class jump straight to their new position.
#[derive(Debug, Default)]
pub struct AnimationState {
    /// Previous frame's values per element.
    snapshots: HashMap<String, ElementSnapshot>,
    /// Currently active transitions by element id.
    active: HashMap<String, ActiveTransition>,
    /// Reduced motion flag - when true, transitions complete instantly.
    reduced_motion: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    /// When enabled, all transitions complete instantly.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Returns true if any transition is currently active.
    pub fn has_active_transitions(&self) -> bool {
        !self.active.is_empty()
    }

    /// Update animation state based on the current element tree.
    /// Detects translation and class changes, starts new transitions and
    /// prunes completed ones.
    pub fn update(&mut self, root: &Element, styles: &Stylesheet, now: Instant) {
        self.update_element(root, styles, now);
        self.active.retain(|_, transition| !transition.is_finished(now));
    }

    fn update_element(&mut self, element: &Element, styles: &Stylesheet, now: Instant) {
        let id = &element.id;
        let transition = styles.translate_transition(element);
        let current = ElementSnapshot {
            translate_x: element.translate_x,
            revision: transition.map(|(_, revision)| revision),
        };

        if let Some(prev) = self.snapshots.get(id).copied() {
            if prev != current {
                self.start_transition(id, prev, current, transition.map(|(config, _)| config), now);
            }
        }

        self.snapshots.insert(id.clone(), current);

        if let Content::Children(children) = &element.content {
            for child in children {
                self.update_element(child, styles, now);
            }
        }
    }

    fn start_transition(
        &mut self,
        id: &str,
        prev: ElementSnapshot,
        current: ElementSnapshot,
        config: Option<TransitionConfig>,
        now: Instant,
    ) {
        let moved = prev.translate_x != current.translate_x;
        let restarted = current.revision.is_some() && prev.revision != current.revision;

        let Some(config) = config.filter(|_| !self.reduced_motion) else {
            // No transition class: jump
            self.active.remove(id);
            return;
        };

        if !moved && !restarted {
            return;
        }

        // Continue from whatever is painted right now
        let from = match self.active.get(id) {
            Some(existing) => existing.value_at(now),
            None => prev.translate_x,
        };

        log::trace!(
            "[animation] {id}: translate {from} -> {} over {:?}",
            current.translate_x,
            config.duration
        );

        self.active.insert(
            id.to_string(),
            ActiveTransition {
                from,
                to: current.translate_x,
                start: now,
                config,
            },
        );
    }

    /// Translation to paint for an element at `now`: the interpolated value
    /// while a transition runs, the last seen value otherwise.
    pub fn painted_translate(&self, element_id: &str, now: Instant) -> Option<f32> {
        if let Some(transition) = self.active.get(element_id) {
            return Some(transition.value_at(now));
        }
        self.snapshots.get(element_id).map(|s| s.translate_x)
    }

    /// Remove transitions and snapshots for elements no longer in tree.
    pub fn cleanup(&mut self, current_ids: &HashSet<String>) {
        self.snapshots.retain(|id, _| current_ids.contains(id));
        self.active.retain(|id, _| current_ids.contains(id));
    }
}

/// Collect all element IDs from the tree.
pub fn collect_element_ids(element: &Element) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids_recursive(element, &mut ids);
    ids
}

fn collect_ids_recursive(element: &Element, ids: &mut HashSet<String>) {
    ids.insert(element.id.clone());
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_ids_recursive(child, ids);
        }
    }
}
