//! User intent handling for the roster window
//!
//! Each handler forwards to the controllers, then refreshes the form inputs
//! if the form state moved.

use gpui::{ClickEvent, Context, Window};
use tracing::debug;

use crate::app::App;
use crate::controller::FormState;
use crate::models::EmployeeId;

impl App {
    pub fn handle_toggle_click(
        &mut self,
        _event: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.header.toggle_add_form();
        self.refresh_form(window, cx);
    }

    pub fn handle_submit_click(
        &mut self,
        _event: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.submit_form(window, cx);
    }

    pub fn handle_cancel_click(
        &mut self,
        _event: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match self.roster.form() {
            FormState::Creating => self.roster.toggle_add_form(),
            FormState::Editing(_) => {
                self.roster.cancel_edit();
            }
            FormState::Idle => {}
        }
        self.refresh_form(window, cx);
    }

    /// Add or save depending on which form is open
    pub fn submit_form(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.capture_inputs(cx);
        let committed = match self.roster.form() {
            FormState::Creating => self.roster.add_employee().is_some(),
            FormState::Editing(_) => self.roster.save_edit(),
            FormState::Idle => false,
        };
        if !committed {
            debug!(form = ?self.roster.form(), "submit left form open");
        }
        self.refresh_form(window, cx);
    }

    pub fn start_edit(&mut self, id: EmployeeId, window: &mut Window, cx: &mut Context<Self>) {
        self.roster.start_edit(id);
        self.refresh_form(window, cx);
    }

    pub fn delete_employee(&mut self, id: EmployeeId, window: &mut Window, cx: &mut Context<Self>) {
        self.roster.delete_employee(id);
        self.refresh_form(window, cx);
    }

    /// Copy what the user typed into the scratch fields
    fn capture_inputs(&mut self, cx: &mut Context<Self>) {
        for (field, input) in &self.inputs {
            let value = input.read(cx).value().to_string();
            self.roster.set_field(*field, value);
        }
    }

    /// Reload the inputs from the scratch fields when the form changed
    fn refresh_form(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let form = self.roster.form();
        if form != self.synced_form {
            let draft = self.roster.draft();
            for (field, input) in &self.inputs {
                let value = draft.get(*field).to_string();
                input.update(cx, |state, cx| {
                    state.set_value(value, window, cx);
                });
            }
            self.synced_form = form;
        }
        cx.notify();
    }
}
