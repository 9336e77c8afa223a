//! Single-shot counter start per element
//!
//! The host's visibility observer reports elements as they scroll into view.
//! Each element animates at most once; removing an element cancels its
//! animation so no frames are scheduled for a detached node.

use std::collections::HashMap;
use std::fmt;

use super::animation::CounterAnimation;
use super::cancel::CancelToken;
use super::target::{CounterAttributes, CounterSpec};
use super::timing::FrameClock;
use crate::config::CounterConfig;

/// Opaque handle for a counter element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tracks which counters have started
///
/// One entry is kept per distinct element id for the registry's lifetime,
/// finished or not, so memory grows with the number of ids seen.
#[derive(Debug, Default)]
pub struct CounterRegistry {
    config: CounterConfig,
    started: HashMap<ElementId, CancelToken>,
}

impl CounterRegistry {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            config,
            started: HashMap::new(),
        }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Intersection observer callback
    ///
    /// Starts the counter once at least `visibility_threshold` of the element
    /// is visible.
    pub fn on_intersection<C: FrameClock>(
        &mut self,
        id: ElementId,
        ratio: f64,
        attrs: CounterAttributes<'_>,
        clock: C,
    ) -> Option<CounterAnimation<C>> {
        if !(ratio >= self.config.visibility_threshold) {
            return None;
        }
        self.on_visible(id, attrs, clock)
    }

    /// Element entered the viewport
    ///
    /// Returns the animation the first time an element is seen and `None`
    /// on every later notification.
    pub fn on_visible<C: FrameClock>(
        &mut self,
        id: ElementId,
        attrs: CounterAttributes<'_>,
        clock: C,
    ) -> Option<CounterAnimation<C>> {
        if self.started.contains_key(&id) {
            tracing::debug!(element = %id, "Counter already started, ignoring");
            return None;
        }

        let spec = CounterSpec::from_attributes(attrs);
        let token = CancelToken::new();
        let animation = CounterAnimation::new(spec, self.config.budget_ms(), clock)
            .with_easing(self.config.easing)
            .with_cancel_token(token.clone());

        tracing::info!(
            element = %id,
            target_value = spec.target_value,
            format = %spec.display_format,
            "Starting counter"
        );
        self.started.insert(id, token);
        Some(animation)
    }

    /// Element left the document; cancels its animation if one is running
    ///
    /// The element stays marked as started, so a re-inserted node with the
    /// same id does not replay.
    pub fn on_removed(&mut self, id: &ElementId) -> bool {
        match self.started.get(id) {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    pub fn has_started(&self, id: &ElementId) -> bool {
        self.started.contains_key(id)
    }

    /// Cancel every running counter, e.g. when the page unloads
    pub fn cancel_all(&mut self) {
        for token in self.started.values() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::timing::ManualClock;

    fn registry() -> CounterRegistry {
        CounterRegistry::new(CounterConfig::default())
    }

    #[test]
    fn test_starts_once_per_element() {
        let mut reg = registry();
        let id = ElementId::from("tests-per-year");
        let attrs = CounterAttributes::with_target("500000+");

        let anim = reg.on_visible(id.clone(), attrs, ManualClock::new(16.0));
        assert!(anim.is_some());
        assert!(reg.has_started(&id));

        assert!(reg.on_visible(id.clone(), attrs, ManualClock::new(16.0)).is_none());

        let last = anim.unwrap().last().unwrap();
        assert_eq!(last.text, "500,000+");
    }

    #[test]
    fn test_threshold_gates_start() {
        let mut reg = registry();
        let id = ElementId::from("accuracy");
        let attrs = CounterAttributes::with_target("998%");

        assert!(reg
            .on_intersection(id.clone(), 0.2, attrs, ManualClock::new(16.0))
            .is_none());
        assert!(!reg.has_started(&id));

        assert!(reg
            .on_intersection(id.clone(), f64::NAN, attrs, ManualClock::new(16.0))
            .is_none());

        let anim = reg.on_intersection(id.clone(), 0.5, attrs, ManualClock::new(16.0));
        assert_eq!(anim.unwrap().last().unwrap().text, "99.8%");
    }

    #[test]
    fn test_removal_cancels_animation() {
        let mut reg = registry();
        let id = ElementId::from("established");
        let mut anim = reg
            .on_visible(id.clone(), CounterAttributes::with_target("1985"), ManualClock::new(16.0))
            .unwrap();

        assert!(anim.next().is_some());
        assert!(reg.on_removed(&id));
        assert!(anim.next().is_none());

        // Unknown ids are ignored, known ids never replay
        assert!(!reg.on_removed(&ElementId::from("missing")));
        assert!(reg
            .on_visible(id, CounterAttributes::with_target("1985"), ManualClock::new(16.0))
            .is_none());
    }

    #[test]
    fn test_uses_configured_budget() {
        let mut reg = CounterRegistry::new(CounterConfig {
            duration_ms: 160,
            ..Default::default()
        });
        let frames = reg
            .on_visible(
                ElementId::from("short"),
                CounterAttributes::with_target("10"),
                ManualClock::new(16.0),
            )
            .unwrap()
            .count();
        assert_eq!(frames, 10);
    }

    #[test]
    fn test_cancel_all() {
        let mut reg = registry();
        let mut a = reg
            .on_visible(ElementId::from("a"), CounterAttributes::with_target("5"), ManualClock::new(16.0))
            .unwrap();
        let mut b = reg
            .on_visible(ElementId::from("b"), CounterAttributes::with_target("6"), ManualClock::new(16.0))
            .unwrap();
        reg.cancel_all();
        assert!(a.next().is_none());
        assert!(b.next().is_none());
    }
}
