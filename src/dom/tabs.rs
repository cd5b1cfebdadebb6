use web_sys::{Document, Element};

use crate::dom::discovery::query_all;
use crate::dom::events::listen;
use crate::dom::render::{toggle_members, ACTIVE_CLASS};
use crate::interactions::error::InteractionError;
use crate::interactions::registry::{ActivationGroup, Member};
use crate::interactions::teardown::Teardown;
use crate::interactions::triggers::SharedCoordinator;

pub const TABS_GROUP: &str = "service-tabs";
const COMPONENT: &str = "Service tab";

/// A tab is keyed by its `data-tab` value, or by its position when it has none.
pub fn tab_ids(data_tabs: Vec<Option<String>>) -> Vec<String> {
    data_tabs
        .into_iter()
        .enumerate()
        .map(|(index, id)| id.unwrap_or_else(|| index.to_string()))
        .collect()
}

/// The first tab the markup marks active, else the first tab.
pub fn initial_tab(marked_active: impl IntoIterator<Item = bool>) -> usize {
    marked_active
        .into_iter()
        .position(|active| active)
        .unwrap_or(0)
}

pub fn mount(
    document: &Document,
    coordinator: &SharedCoordinator<Vec<Element>>,
    teardown: &mut Teardown,
) -> Result<(), InteractionError> {
    let buttons = query_all(document, ".tab-btn", COMPONENT)?;
    let panes = query_all(document, ".tab-pane", COMPONENT)?;
    if buttons.is_empty() || panes.is_empty() {
        return Err(InteractionError::MissingElements {
            component: COMPONENT,
        });
    }

    let ids = tab_ids(
        buttons
            .iter()
            .map(|button| button.get_attribute("data-tab"))
            .collect(),
    );
    let members = buttons
        .iter()
        .zip(&ids)
        .map(|(button, id)| {
            let mut handle = vec![button.clone()];
            handle.extend(document.get_element_by_id(id));
            Member::new(id.clone(), handle)
        })
        .collect();
    let initial = initial_tab(
        buttons
            .iter()
            .map(|button| button.class_list().contains(ACTIVE_CLASS)),
    );

    let group = ActivationGroup::exclusive(TABS_GROUP, members, initial)?;
    coordinator
        .borrow_mut()
        .register(group, toggle_members(ACTIVE_CLASS));

    for (button, id) in buttons.iter().zip(ids) {
        let coordinator = coordinator.clone();
        teardown.add(listen(button, "click", COMPONENT, move |_| {
            coordinator.borrow_mut().request(TABS_GROUP, id.as_str());
            Ok(())
        })?);
    }
    Ok(())
}
