use log::error;
use web_sys::Element;

pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
pub const FADE_IN_CLASS: &str = "fade-in";
pub const INVALID_CLASS: &str = "is-invalid";
pub const SHOW_CLASS: &str = "show";

pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        error!("Failed to update class {}: {:?}", class, e);
    }
}

/// Render callback that toggles `class` on every element of a member.
pub fn toggle_members(class: &'static str) -> impl Fn(&Vec<Element>, bool) {
    move |elements: &Vec<Element>, active: bool| {
        for element in elements {
            set_class(element, class, active);
        }
    }
}

pub fn show_count(element: &Element, value: u32) {
    element.set_text_content(Some(&value.to_string()));
}
