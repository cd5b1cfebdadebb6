use std::collections::HashMap;

use crate::interactions::error::InteractionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Exactly one member is active at any time.
    Exclusive,
    /// Every member carries its own active flag.
    Independent,
}

/// Addresses a member of a group, by position or by its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    Index(usize),
    Id(&'a str),
}

impl From<usize> for Target<'_> {
    fn from(index: usize) -> Self {
        Target::Index(index)
    }
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(id: &'a str) -> Self {
        Target::Id(id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member<H> {
    pub id: String,
    pub handle: H,
}

impl<H> Member<H> {
    pub fn new(id: impl Into<String>, handle: H) -> Self {
        Member {
            id: id.into(),
            handle,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum GroupState {
    Exclusive { active: usize },
    Independent { active: Vec<bool> },
}

/// What a successful activation changed, by member index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub deactivated: Option<usize>,
    pub activated: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivationGroup<H> {
    id: String,
    members: Vec<Member<H>>,
    state: GroupState,
}

impl<H> ActivationGroup<H> {
    pub fn exclusive(
        id: impl Into<String>,
        members: Vec<Member<H>>,
        initial: usize,
    ) -> Result<Self, InteractionError> {
        let id = id.into();
        if members.is_empty() {
            return Err(InteractionError::MissingElements {
                component: "activation group",
            });
        }
        if initial >= members.len() {
            return Err(InteractionError::InitialOutOfRange {
                group: id,
                initial,
                len: members.len(),
            });
        }
        Ok(ActivationGroup {
            id,
            members,
            state: GroupState::Exclusive { active: initial },
        })
    }

    pub fn independent(
        id: impl Into<String>,
        members: Vec<Member<H>>,
    ) -> Result<Self, InteractionError> {
        if members.is_empty() {
            return Err(InteractionError::MissingElements {
                component: "activation group",
            });
        }
        let active = vec![false; members.len()];
        Ok(ActivationGroup {
            id: id.into(),
            members,
            state: GroupState::Independent { active },
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn policy(&self) -> Policy {
        match self.state {
            GroupState::Exclusive { .. } => Policy::Exclusive,
            GroupState::Independent { .. } => Policy::Independent,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn member(&self, index: usize) -> Option<&Member<H>> {
        self.members.get(index)
    }

    /// The active member of an exclusive group. Always `None` for independent groups.
    pub fn active_index(&self) -> Option<usize> {
        match self.state {
            GroupState::Exclusive { active } => Some(active),
            GroupState::Independent { .. } => None,
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        match &self.state {
            GroupState::Exclusive { active } => *active == index,
            GroupState::Independent { active } => active.get(index).copied().unwrap_or(false),
        }
    }

    pub fn position(&self, target: Target<'_>) -> Option<usize> {
        match target {
            Target::Index(index) if index < self.members.len() => Some(index),
            Target::Index(_) => None,
            Target::Id(id) => self.members.iter().position(|member| member.id == id),
        }
    }

    /// Marks `index` active. Returns `None` when nothing changed.
    pub(crate) fn activate(&mut self, index: usize) -> Option<Change> {
        if index >= self.members.len() {
            return None;
        }
        match &mut self.state {
            GroupState::Exclusive { active } => {
                if *active == index {
                    return None;
                }
                let previous = std::mem::replace(active, index);
                Some(Change {
                    deactivated: Some(previous),
                    activated: index,
                })
            }
            GroupState::Independent { active } => {
                if active[index] {
                    return None;
                }
                active[index] = true;
                Some(Change {
                    deactivated: None,
                    activated: index,
                })
            }
        }
    }
}

#[derive(Debug)]
pub struct ActivationRegistry<H> {
    groups: HashMap<String, ActivationGroup<H>>,
}

impl<H> Default for ActivationRegistry<H> {
    fn default() -> Self {
        ActivationRegistry {
            groups: HashMap::new(),
        }
    }
}

impl<H> ActivationRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group, replacing any group registered under the same id.
    pub fn insert(&mut self, group: ActivationGroup<H>) {
        self.groups.insert(group.id.clone(), group);
    }

    pub fn get(&self, id: &str) -> Option<&ActivationGroup<H>> {
        self.groups.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ActivationGroup<H>> {
        self.groups.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.groups.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(ids: &[&str]) -> Vec<Member<u8>> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| Member::new(*id, i as u8))
            .collect()
    }

    #[test]
    fn exclusive_group_rejects_empty_members() {
        let err = ActivationGroup::<u8>::exclusive("slider", Vec::new(), 0).unwrap_err();
        assert!(matches!(err, InteractionError::MissingElements { .. }));
    }

    #[test]
    fn exclusive_group_rejects_out_of_range_initial() {
        let err = ActivationGroup::exclusive("slider", members(&["a", "b"]), 2).unwrap_err();
        assert_eq!(
            err,
            InteractionError::InitialOutOfRange {
                group: "slider".to_string(),
                initial: 2,
                len: 2,
            }
        );
    }

    #[test]
    fn exclusive_activation_swaps_active_member() {
        let mut group = ActivationGroup::exclusive("tabs", members(&["a", "b", "c"]), 0).unwrap();
        assert_eq!(group.policy(), Policy::Exclusive);

        let change = group.activate(2).unwrap();
        assert_eq!(change.deactivated, Some(0));
        assert_eq!(change.activated, 2);
        assert_eq!(group.active_index(), Some(2));
        assert!(group.is_active(2));
        assert!(!group.is_active(0));

        assert_eq!(group.activate(2), None);
        assert_eq!(group.activate(7), None);
    }

    #[test]
    fn independent_flags_are_one_way() {
        let mut group = ActivationGroup::independent("reveal", members(&["a", "b"])).unwrap();
        assert_eq!(group.active_index(), None);

        assert!(group.activate(1).is_some());
        assert!(group.activate(1).is_none());
        assert!(group.is_active(1));
        assert!(!group.is_active(0));
    }

    #[test]
    fn position_resolves_ids_and_bounds() {
        let group = ActivationGroup::exclusive("tabs", members(&["design", "build"]), 0).unwrap();
        assert_eq!(group.position(Target::Id("build")), Some(1));
        assert_eq!(group.position(Target::Id("paint")), None);
        assert_eq!(group.position(Target::Index(1)), Some(1));
        assert_eq!(group.position(Target::Index(2)), None);
    }

    #[test]
    fn registry_replaces_group_with_same_id() {
        let mut registry = ActivationRegistry::new();
        registry.insert(ActivationGroup::exclusive("slider", members(&["a"]), 0).unwrap());
        registry.insert(ActivationGroup::exclusive("slider", members(&["a", "b"]), 1).unwrap());

        assert!(registry.contains("slider"));
        assert_eq!(registry.get("slider").map(ActivationGroup::len), Some(2));
        assert!(registry.get("tabs").is_none());
    }
}
