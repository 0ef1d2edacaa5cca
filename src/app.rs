//! Core App state and initialization for the roster window

use gpui::{div, AppContext as _, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};
use gpui_component::input::{InputEvent, InputState as GpuiInputState};

use crate::config::AppConfig;
use crate::controller::{DialogConfirm, EmployeeList, FormState, HeaderBar};
use crate::models::FormField;
use crate::store::EmployeeStore;
use crate::theme::RosterTheme;
use crate::visibility::VisibilityBroadcaster;

/// Main application state
pub struct App {
    pub theme: RosterTheme,
    pub title: String,

    // Collaborators sharing one visibility flag
    pub header: HeaderBar,
    pub roster: EmployeeList,

    // One input per form field, in `FormField::ALL` order
    pub inputs: Vec<(FormField, Entity<GpuiInputState>)>,
    // Form state the inputs were last filled for
    pub synced_form: FormState,
}

impl App {
    pub fn new(config: &AppConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let visibility = VisibilityBroadcaster::default();
        let header = HeaderBar::new(visibility.clone());
        let roster = EmployeeList::new(
            EmployeeStore::seeded(),
            visibility,
            DialogConfirm::new(config.title.clone()),
        );

        let mut inputs = Vec::with_capacity(FormField::ALL.len());
        for field in FormField::ALL {
            let input_state =
                cx.new(|cx| GpuiInputState::new(window, cx).placeholder(field.placeholder()));

            // Enter in any field submits the open form
            cx.subscribe_in(&input_state, window, |this, _input_state: &Entity<GpuiInputState>, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { .. } = event {
                    this.submit_form(window, cx);
                }
            })
            .detach();

            inputs.push((field, input_state));
        }

        Self {
            theme: RosterTheme::default(),
            title: config.title.clone(),
            header,
            roster,
            inputs,
            synced_form: FormState::Idle,
        }
    }

    pub fn input(&self, field: FormField) -> Option<&Entity<GpuiInputState>> {
        self.inputs
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, input)| input)
    }
}

impl Render for App {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .size_full()
            .bg(theme.background)
            .text_color(theme.foreground)
            .flex()
            .flex_col()
            .child(self.render_header(cx))
            .child(self.render_employee_list(cx))
    }
}
