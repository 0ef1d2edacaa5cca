//! List view coordination: create/edit form state and store mutations

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use super::confirm::{delete_prompt, Confirm};
use crate::models::{Employee, EmployeeDraft, EmployeeId, FormField};
use crate::store::EmployeeStore;
use crate::visibility::{Subscription, VisibilityBroadcaster};

/// Which form, if any, the list view is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Creating,
    Editing(EmployeeId),
}

#[derive(Default)]
struct Form {
    state: FormState,
    draft: EmployeeDraft,
}

impl Form {
    fn close(&mut self) {
        self.state = FormState::Idle;
        self.draft.clear();
    }

    fn on_visibility(&mut self, visible: bool) {
        match (self.state, visible) {
            (FormState::Creating, true) => {}
            (_, true) => {
                // opening the create form discards any edit in progress
                self.state = FormState::Creating;
                self.draft.clear();
            }
            (FormState::Creating, false) => self.close(),
            (_, false) => {}
        }
    }
}

pub struct EmployeeList {
    store: EmployeeStore,
    form: Rc<RefCell<Form>>,
    visibility: VisibilityBroadcaster,
    confirm: Box<dyn Confirm>,
    _visibility_subscription: Subscription,
}

impl EmployeeList {
    pub fn new(
        store: EmployeeStore,
        visibility: VisibilityBroadcaster,
        confirm: impl Confirm + 'static,
    ) -> Self {
        let form = Rc::new(RefCell::new(Form::default()));
        let weak_form = Rc::downgrade(&form);
        let subscription = visibility.subscribe(move |visible| {
            if let Some(form) = weak_form.upgrade() {
                form.borrow_mut().on_visibility(visible);
            }
        });

        Self {
            store,
            form,
            visibility,
            confirm: Box::new(confirm),
            _visibility_subscription: subscription,
        }
    }

    pub fn employees(&self) -> &[Employee] {
        self.store.list()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn form(&self) -> FormState {
        self.form.borrow().state
    }

    pub fn draft(&self) -> EmployeeDraft {
        self.form.borrow().draft.clone()
    }

    /// Update one scratch field. Ignored when no form is open.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let mut form = self.form.borrow_mut();
        if form.state == FormState::Idle {
            debug!(?field, "set_field ignored: no open form");
            return;
        }
        form.draft.set(field, value);
    }

    pub fn toggle_add_form(&self) {
        self.visibility.toggle();
    }

    /// Commit the create form. On success the form closes and the shared
    /// flag is reset; invalid input keeps the form open.
    pub fn add_employee(&mut self) -> Option<Employee> {
        let fields = {
            let form = self.form.borrow();
            if form.state != FormState::Creating {
                debug!(state = ?form.state, "add ignored: create form not open");
                return None;
            }
            let parsed = form.draft.parse();
            match parsed {
                Ok(fields) => fields,
                Err(err) => {
                    debug!(%err, "add rejected");
                    return None;
                }
            }
        };

        let employee = self.store.add(fields)?;
        self.visibility.reset();
        self.form.borrow_mut().close();
        Some(employee)
    }

    /// Open an edit session for `id` with scratch fields copied from the record
    pub fn start_edit(&mut self, id: EmployeeId) -> bool {
        let Some(draft) = self.store.get(id).map(EmployeeDraft::from) else {
            debug!(%id, "start_edit skipped: unknown id");
            return false;
        };

        if self.visibility.get() {
            // closes the create form through the visibility subscription
            self.visibility.reset();
        }

        let mut form = self.form.borrow_mut();
        form.state = FormState::Editing(id);
        form.draft = draft;
        true
    }

    /// Write the scratch fields back to the record being edited. Invalid
    /// input leaves the session open for another try.
    pub fn save_edit(&mut self) -> bool {
        let (id, parsed) = {
            let form = self.form.borrow();
            let FormState::Editing(id) = form.state else {
                debug!(state = ?form.state, "save ignored: no edit session");
                return false;
            };
            (id, form.draft.parse())
        };

        let fields = match parsed {
            Ok(fields) => fields,
            Err(err) => {
                debug!(%id, %err, "save rejected");
                return false;
            }
        };

        if !self.store.update(id, fields) {
            return false;
        }
        self.form.borrow_mut().close();
        true
    }

    pub fn cancel_edit(&mut self) -> bool {
        let mut form = self.form.borrow_mut();
        if !matches!(form.state, FormState::Editing(_)) {
            return false;
        }
        form.close();
        true
    }

    /// Delete `id` after the user confirms. Works from any form state; only
    /// an edit session for the deleted record is closed.
    pub fn delete_employee(&mut self, id: EmployeeId) -> bool {
        let Some(employee) = self.store.get(id) else {
            debug!(%id, "delete skipped: unknown id");
            return false;
        };

        if !self.confirm.confirm(&delete_prompt(employee)) {
            debug!(%id, "delete cancelled by user");
            return false;
        }

        let removed = self.store.remove(id);
        let mut form = self.form.borrow_mut();
        if removed && form.state == FormState::Editing(id) {
            form.close();
        }
        removed
    }
}

#[cfg(test)]
#[path = "tests/employee_list_tests.rs"]
mod tests;
