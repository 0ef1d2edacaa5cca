//! Employee rows for the roster window

use gpui::{
    div, prelude::FluentBuilder, AnyElement, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, SharedString, StatefulInteractiveElement, Styled,
};

use crate::app::App;
use crate::controller::FormState;
use crate::models::Employee;

impl App {
    pub fn render_employee_list(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let form = self.roster.form();
        let employees = self.roster.employees();

        let rows: Vec<AnyElement> = employees
            .iter()
            .map(|employee| {
                if form == FormState::Editing(employee.id) {
                    self.render_employee_form("Edit employee", "Save", cx)
                        .into_any_element()
                } else {
                    self.render_employee_row(employee, cx).into_any_element()
                }
            })
            .collect();

        div()
            .id("employee-list")
            .flex_1()
            .overflow_y_scroll()
            .p_4()
            .flex()
            .flex_col()
            .gap_2()
            .when(form == FormState::Creating, |el| {
                el.child(self.render_employee_form("New employee", "Add", cx))
            })
            .when(self.roster.is_empty(), |el| {
                el.child(
                    div()
                        .py_8()
                        .text_sm()
                        .text_color(theme.foreground_muted)
                        .child("No employees yet. Use \"Add Employee\" to create one."),
                )
            })
            .children(rows)
    }

    fn render_employee_row(&self, employee: &Employee, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let id = employee.id;

        div()
            .w_full()
            .px_3()
            .py_2()
            .rounded_lg()
            .bg(theme.background_secondary)
            .border_1()
            .border_color(theme.border)
            .flex()
            .items_center()
            .gap_3()
            .child(
                div()
                    .w_8()
                    .text_xs()
                    .text_color(theme.foreground_muted)
                    .child(format!("#{}", id)),
            )
            .child(
                div()
                    .flex_1()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(theme.foreground)
                            .child(SharedString::from(employee.name.clone())),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.foreground_dim)
                            .child(format!("{} • {}", employee.role, employee.department)),
                    ),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(theme.caution)
                    .child(employee.salary_label()),
            )
            .child(
                self.form_button(
                    format!("edit-{}", id),
                    "Edit",
                    theme.background_elevated,
                    theme.foreground,
                )
                .on_click(cx.listener(move |this, _event, window, cx| {
                    this.start_edit(id, window, cx);
                })),
            )
            .child(
                self.form_button(format!("delete-{}", id), "Delete", theme.danger, theme.background)
                    .on_click(cx.listener(move |this, _event, window, cx| {
                        this.delete_employee(id, window, cx);
                    })),
            )
    }
}
