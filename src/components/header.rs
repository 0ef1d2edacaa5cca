//! Header bar for the roster window

use gpui::{
    div, Context, FontWeight, InteractiveElement, IntoElement, ParentElement,
    StatefulInteractiveElement, Styled,
};

use crate::app::App;

impl App {
    pub fn render_header(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let form_open = self.header.is_add_form_visible();
        let count = self.roster.len();
        let button_bg = if form_open { theme.background_elevated } else { theme.primary };

        div()
            .w_full()
            .px_4()
            .py_3()
            .bg(theme.background_secondary)
            .border_b_1()
            .border_color(theme.border)
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.primary)
                            .child(self.title.clone()),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.foreground_muted)
                            .child(match count {
                                1 => "1 employee".to_string(),
                                n => format!("{} employees", n),
                            }),
                    ),
            )
            .child(
                div()
                    .id("toggle-add-form")
                    .cursor_pointer()
                    .px_4()
                    .py_2()
                    .rounded_lg()
                    .bg(button_bg)
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(if form_open { theme.foreground } else { theme.background })
                    .hover(move |style| style.bg(button_bg.opacity(0.8)))
                    .on_click(cx.listener(Self::handle_toggle_click))
                    .child(self.header.toggle_label()),
            )
    }
}
