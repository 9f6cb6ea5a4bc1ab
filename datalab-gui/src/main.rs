use std::sync::Arc;

use datalab_lib::{CoreConfig, Route, Session, workflow::Outcome};
use iced::{
    Color, Element, Event,
    Length::{self, Fill},
    Subscription, Task, Theme, application, event,
    keyboard::{self, key::Named},
    widget::{button, center, column, container, mouse_area, opaque, row, scrollable, stack, text},
};
use parking_lot::RwLock;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    components::{
        campaign_detail,
        campaign_list::{self, CampaignList},
        new_campaign_dialog,
        sidebar::{self, NavItem, Sidebar},
    },
    config::{Cfg, GuiConfig},
};

pub mod components;
pub mod config;
pub mod icons;

fn main() -> iced::Result {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    // Logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {e}");
    }

    application(App::new, App::update, App::view)
        .theme(App::theme)
        .title(App::title)
        .subscription(App::subscription)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    Sidebar(sidebar::Message),
    CampaignList(campaign_list::Message),
    NewCampaignDialog(new_campaign_dialog::Message),
    CampaignDetail(campaign_detail::Message),
    EscapePressed,
    ConfigSaved(Result<(), String>),
}

struct App {
    title: String,
    theme: Theme,
    cfg: Cfg,
    session: Session,
    // Components
    sidebar: Sidebar,
    campaign_list: CampaignList,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let core = CoreConfig::load().unwrap_or_else(|e| {
            warn!("Using default configuration: {e}");
            CoreConfig::default()
        });
        let cfg = Arc::new(RwLock::new(GuiConfig::load()));
        let theme = cfg.read().theme();

        (
            Self {
                title: "DataLab".into(),
                theme,
                cfg: cfg.clone(),
                session: Session::new(core.shared()),
                sidebar: Sidebar::default(),
                campaign_list: CampaignList::new(cfg),
            },
            Task::none(),
        )
    }

    // Update application state based on messages passed by view()
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Sidebar(msg) => match self.sidebar.update(msg) {
                sidebar::Action::Navigate(item) => {
                    debug!("Switched to {item}");
                    // Every section starts from its root page
                    while self.session.back() {}
                    Task::none()
                }
                sidebar::Action::ThemeSelected(theme) => {
                    self.cfg.write().theme = theme;
                    self.theme = self.cfg.read().theme();
                    config::persist(&self.cfg).map(Message::ConfigSaved)
                }
            },
            Message::CampaignList(msg) => match self.campaign_list.update(msg) {
                campaign_list::Action::None => Task::none(),
                campaign_list::Action::Run(task) => task.map(Message::CampaignList),
                campaign_list::Action::OpenNewCampaign => {
                    self.session.open_new_campaign();
                    Task::none()
                }
                campaign_list::Action::Open(name) => {
                    self.session.open_campaign(&name);
                    Task::none()
                }
                campaign_list::Action::Delete(name) => {
                    info!("Delete requested for {name}");
                    self.session.remove_campaign(&name);
                    Task::none()
                }
            },
            Message::NewCampaignDialog(msg) => {
                if let Outcome::Rejected(errors) = new_campaign_dialog::update(&mut self.session, msg)
                {
                    debug!("New campaign rejected: {errors}");
                }
                Task::none()
            }
            Message::CampaignDetail(msg) => {
                campaign_detail::update(&mut self.session, msg);
                Task::none()
            }
            Message::EscapePressed => {
                self.session.close_new_campaign();
                Task::none()
            }
            Message::ConfigSaved(result) => {
                if let Err(e) = result {
                    error!("Failed to save GUI configuration: {e}");
                }
                Task::none()
            }
        }
    }

    // Render the application and pass along messages from components to update()
    pub fn view(&self) -> Element<'_, Message> {
        let content = row![
            self.sidebar
                .view(self.cfg.read().theme)
                .map(Message::Sidebar),
            self.page(),
        ]
        .height(Fill);

        // The overlay is only present while the scroll lock is held. It swallows wheel events,
        // so the page keeps its offset underneath.
        let dialog = self.session.is_scroll_locked().then(|| {
            new_campaign_dialog::view(self.session.workflow()).map(Message::NewCampaignDialog)
        });

        modal(
            content,
            dialog,
            Some(Message::NewCampaignDialog(
                new_campaign_dialog::Message::ClosePressed,
            )),
        )
    }

    fn page(&self) -> Element<'_, Message> {
        let item = self.sidebar.active();
        if item != NavItem::Print {
            return center(text(format!("{item} coming soon..."))).into();
        }

        match self.session.route() {
            Route::Campaigns => scrolling(
                self.campaign_list
                    .view(&self.session)
                    .map(Message::CampaignList),
            ),
            Route::CampaignDetail(_) => match self.session.detail() {
                Some(detail) => scrolling(
                    campaign_detail::view(detail, self.session.current_year())
                        .map(Message::CampaignDetail),
                ),
                None => center(text("Loading...")).into(),
            },
            Route::NotFound(path) => center(
                column![
                    text(format!("No page at {path}")),
                    button("Back").on_press(Message::CampaignDetail(
                        campaign_detail::Message::BackPressed
                    )),
                ]
                .spacing(12),
            )
            .into(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.session.workflow().is_open() {
            event::listen_with(|event, _status, _window| match event {
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(Named::Escape),
                    ..
                }) => Some(Message::EscapePressed),
                _ => None,
            })
        } else {
            Subscription::none()
        }
    }

    pub fn title(&self) -> String {
        self.title.clone()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

fn scrolling<'a>(page: Element<'a, Message>) -> Element<'a, Message> {
    scrollable(page).height(Fill).into()
}

/// Layer `content` over `base`. The base is always the first child of the stack, so its widget
/// state (scroll offsets included) survives the overlay appearing and disappearing.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: Option<Element<'a, Message>>,
    on_click_outside: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let layer = content.map(|content| overlay(content, on_click_outside));

    stack![base.into(), layer]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn overlay<'a, Message>(
    content: Element<'a, Message>,
    on_click_outside: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let mouse_area = mouse_area(center(opaque(content)).style(|_theme| {
        container::Style {
            background: Some(
                Color {
                    a: 0.6,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        }
    }));

    opaque(if let Some(msg) = on_click_outside {
        mouse_area.on_press(msg)
    } else {
        mouse_area
    })
}
