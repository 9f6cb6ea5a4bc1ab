use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Themes selectable from the sidebar, persisted by name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Dracula,
    Nord,
    #[strum(to_string = "Solarized Light")]
    SolarizedLight,
    #[strum(to_string = "Solarized Dark")]
    SolarizedDark,
    #[strum(to_string = "Gruvbox Light")]
    GruvboxLight,
    #[strum(to_string = "Gruvbox Dark")]
    GruvboxDark,
}

impl From<&Theme> for iced::Theme {
    fn from(theme: &Theme) -> Self {
        match theme {
            Theme::Light => iced::Theme::Light,
            Theme::Dark => iced::Theme::Dark,
            Theme::Dracula => iced::Theme::Dracula,
            Theme::Nord => iced::Theme::Nord,
            Theme::SolarizedLight => iced::Theme::SolarizedLight,
            Theme::SolarizedDark => iced::Theme::SolarizedDark,
            Theme::GruvboxLight => iced::Theme::GruvboxLight,
            Theme::GruvboxDark => iced::Theme::GruvboxDark,
        }
    }
}
