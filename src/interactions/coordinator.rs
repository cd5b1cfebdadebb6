use std::collections::HashMap;

use log::warn;

use crate::interactions::registry::{ActivationGroup, ActivationRegistry, Target};

pub type RenderFn<H> = Box<dyn Fn(&H, bool)>;

/// Single owner of every group's activation state.
///
/// Slider clicks, tab clicks, auto-advance and visibility observers all go
/// through [`ActivationCoordinator::request`], so whichever request arrives
/// last decides the active member.
pub struct ActivationCoordinator<H> {
    registry: ActivationRegistry<H>,
    renderers: HashMap<String, RenderFn<H>>,
}

impl<H> Default for ActivationCoordinator<H> {
    fn default() -> Self {
        ActivationCoordinator {
            registry: ActivationRegistry::new(),
            renderers: HashMap::new(),
        }
    }
}

impl<H> ActivationCoordinator<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, group: ActivationGroup<H>, render: F)
    where
        F: Fn(&H, bool) + 'static,
    {
        if self.registry.contains(group.id()) {
            warn!("Activation group {} registered twice; replacing it", group.id());
        }
        self.renderers
            .insert(group.id().to_string(), Box::new(render));
        self.registry.insert(group);
    }

    /// Activates `target` in `group`.
    ///
    /// Unknown groups, out-of-range targets and already-active members are
    /// ignored. Returns whether anything changed.
    pub fn request<'a>(&mut self, group: &str, target: impl Into<Target<'a>>) -> bool {
        let Some(entry) = self.registry.get_mut(group) else {
            return false;
        };
        let Some(index) = entry.position(target.into()) else {
            return false;
        };
        let Some(change) = entry.activate(index) else {
            return false;
        };

        if let Some(render) = self.renderers.get(group) {
            if let Some(previous) = change.deactivated.and_then(|i| entry.member(i)) {
                render(&previous.handle, false);
            }
            if let Some(next) = entry.member(change.activated) {
                render(&next.handle, true);
            }
        }
        true
    }

    /// Moves an exclusive group to `(active + 1) % len`.
    pub fn advance(&mut self, group: &str) -> bool {
        let next = match self.registry.get(group) {
            Some(entry) => match entry.active_index() {
                Some(active) => (active + 1) % entry.len(),
                None => return false,
            },
            None => return false,
        };
        self.request(group, next)
    }

    pub fn active_index(&self, group: &str) -> Option<usize> {
        self.registry.get(group)?.active_index()
    }

    pub fn is_active(&self, group: &str, index: usize) -> bool {
        self.registry
            .get(group)
            .map_or(false, |entry| entry.is_active(index))
    }

    pub fn group(&self, group: &str) -> Option<&ActivationGroup<H>> {
        self.registry.get(group)
    }
}
