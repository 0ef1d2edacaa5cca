//! Header bar collaborator

use std::cell::Cell;
use std::rc::Rc;

use crate::visibility::{Subscription, VisibilityBroadcaster};

/// Owns the "add employee" toggle. Mirrors the shared flag so the button
/// label can follow it.
pub struct HeaderBar {
    visibility: VisibilityBroadcaster,
    add_form_visible: Rc<Cell<bool>>,
    _visibility_subscription: Subscription,
}

impl HeaderBar {
    pub fn new(visibility: VisibilityBroadcaster) -> Self {
        let add_form_visible = Rc::new(Cell::new(false));
        let mirror = add_form_visible.clone();
        let subscription = visibility.subscribe(move |visible| mirror.set(visible));

        Self {
            visibility,
            add_form_visible,
            _visibility_subscription: subscription,
        }
    }

    pub fn toggle_add_form(&self) {
        self.visibility.toggle();
    }

    pub fn is_add_form_visible(&self) -> bool {
        self.add_form_visible.get()
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_add_form_visible() {
            "Close Form"
        } else {
            "Add Employee"
        }
    }
}
