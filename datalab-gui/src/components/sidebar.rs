use iced::{
    Element, Length,
    widget::{button, column, container, pick_list, rule, space, text},
};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::config::Theme;

/// Top level sections of the dashboard. Only print campaigns exist so far.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum NavItem {
    Dashboard,
    #[default]
    Print,
    #[strum(to_string = "Social Media")]
    SocialMedia,
    Email,
    Reports,
}

#[derive(Debug, Clone)]
pub enum Message {
    NavSelected(NavItem),
    ThemeSelected(Theme),
}

pub enum Action {
    Navigate(NavItem),
    ThemeSelected(Theme),
}

#[derive(Debug, Default)]
pub struct Sidebar {
    active: NavItem,
}

impl Sidebar {
    pub fn active(&self) -> NavItem {
        self.active
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::NavSelected(item) => {
                self.active = item;
                Action::Navigate(item)
            }
            Message::ThemeSelected(theme) => Action::ThemeSelected(theme),
        }
    }

    pub fn view(&self, theme: Theme) -> Element<'_, Message> {
        let themes: Vec<Theme> = Theme::iter().collect();

        let nav = column(NavItem::iter().map(|item| {
            button(text(item.to_string()))
                .width(Length::Fill)
                .style(if item == self.active {
                    button::primary
                } else {
                    button::subtle
                })
                .on_press(Message::NavSelected(item))
                .into()
        }))
        .spacing(4);

        container(
            column![
                text("DataLab").size(22),
                rule::horizontal(1),
                nav,
                space::vertical(),
                text("SETTINGS").size(12),
                pick_list(themes, Some(theme), Message::ThemeSelected).width(Length::Fill),
            ]
            .spacing(12),
        )
        .width(220)
        .height(Length::Fill)
        .padding(16)
        .style(container::bordered_box)
        .into()
    }
}
