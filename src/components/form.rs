//! Create/edit form for the roster window

use gpui::{
    div, Context, FontWeight, Hsla, InteractiveElement, IntoElement, ParentElement,
    SharedString, StatefulInteractiveElement, Styled,
};
use gpui_component::input::Input;

use crate::app::App;
use crate::models::FormField;

impl App {
    /// Render the four inputs with submit and cancel buttons.
    ///
    /// The same inputs back both forms since only one can be open.
    pub fn render_employee_form(
        &self,
        heading: &'static str,
        submit_label: &'static str,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w_full()
            .p_3()
            .rounded_lg()
            .bg(theme.background_elevated)
            .border_1()
            .border_color(theme.border)
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.foreground)
                    .child(heading),
            )
            .child(
                div()
                    .flex()
                    .gap_2()
                    .children(FormField::ALL.into_iter().filter_map(|field| {
                        self.input(field).map(|input_state| {
                            div()
                                .flex_1()
                                .px_2()
                                .rounded_md()
                                .bg(theme.background)
                                .child(Input::new(input_state).appearance(false))
                        })
                    })),
            )
            .child(
                div()
                    .flex()
                    .justify_end()
                    .gap_2()
                    .child(
                        self.form_button("form-cancel", "Cancel", theme.background_highlight, theme.foreground)
                            .on_click(cx.listener(Self::handle_cancel_click)),
                    )
                    .child(
                        self.form_button("form-submit", submit_label, theme.confirm, theme.background)
                            .on_click(cx.listener(Self::handle_submit_click)),
                    ),
            )
    }

    pub fn form_button(
        &self,
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        background: Hsla,
        foreground: Hsla,
    ) -> gpui::Stateful<gpui::Div> {
        div()
            .id(id.into())
            .cursor_pointer()
            .px_3()
            .py_1()
            .rounded_md()
            .bg(background)
            .text_xs()
            .font_weight(FontWeight::MEDIUM)
            .text_color(foreground)
            .hover(move |style| style.bg(background.opacity(0.8)))
            .child(label.into())
    }
}
