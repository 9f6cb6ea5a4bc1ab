use datalab_lib::{
    Campaign, Session,
    campaign::{Summary, Tone},
};
use iced::{
    Color, Element, Length, Task, border,
    widget::{button, column, container, mouse_area, row, space, table, text, text_input},
};
use tracing::error;

use crate::{
    components::campaign_list::state::{SortColumn, SortState},
    config::{self, Cfg},
    icons::icon,
};

pub mod state;

const POSITIVE: Color = Color::from_rgb8(0x12, 0xB7, 0x6A);
const WARNING: Color = Color::from_rgb8(0xF7, 0x90, 0x09);
const CRITICAL: Color = Color::from_rgb8(0xD9, 0x2D, 0x20);
const NEUTRAL: Color = Color::from_rgb8(0x66, 0x70, 0x85);

#[derive(Debug, Clone)]
pub enum Message {
    NewCampaignPressed,
    SearchInput(String),
    SortChanged(SortColumn),
    RowSelected(String),
    DeletePressed(String),
    ConfigSaved(Result<(), String>),
}

pub enum Action {
    None,
    Run(Task<Message>),
    OpenNewCampaign,
    Open(String),
    Delete(String),
}

/// A table row, detached from the session so the table can own it.
#[derive(Debug, Clone)]
struct Row {
    name: String,
    stage: String,
    tone: Tone,
    last_modified: String,
    modified_by: String,
}

impl Row {
    fn new(session: &Session, campaign: &Campaign) -> Self {
        Self {
            name: campaign.name().clone(),
            stage: campaign.stage().to_string(),
            tone: campaign.stage().tone().unwrap_or(Tone::Neutral),
            last_modified: session.format_date(campaign),
            modified_by: campaign.modified_by().clone(),
        }
    }
}

/// The "Print Campaigns" page.
pub struct CampaignList {
    cfg: Cfg,
    search: String,
    sort: Option<SortState>,
}

impl CampaignList {
    pub fn new(cfg: Cfg) -> Self {
        let sort = cfg.read().campaign_list.sort_state;

        Self {
            cfg,
            search: String::new(),
            sort,
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::NewCampaignPressed => Action::OpenNewCampaign,
            Message::SearchInput(query) => {
                self.search = query;
                Action::None
            }
            Message::SortChanged(column) => {
                let sort = match self.sort {
                    Some(sort) => sort.toggle(column),
                    None => SortState {
                        column,
                        ..Default::default()
                    },
                };
                self.sort = Some(sort);
                self.cfg.write().campaign_list.sort_state = Some(sort);

                Action::Run(config::persist(&self.cfg).map(Message::ConfigSaved))
            }
            Message::RowSelected(name) => Action::Open(name),
            Message::DeletePressed(name) => Action::Delete(name),
            Message::ConfigSaved(result) => {
                if let Err(e) = result {
                    error!("Failed to save GUI configuration: {e}");
                }
                Action::None
            }
        }
    }

    pub fn view<'a>(&'a self, session: &'a Session) -> Element<'a, Message> {
        let campaigns = session.campaigns();

        let mut matches: Vec<&Campaign> = campaigns.search(&self.search).collect();
        if let Some(sort) = &self.sort {
            sort.sort(&mut matches);
        }
        let rows: Vec<Row> = matches.iter().map(|c| Row::new(session, c)).collect();

        let header = row![
            text("Print Campaigns").size(24),
            space::horizontal(),
            button(row![icon("plus"), text("New Campaign")].spacing(6))
                .style(button::success)
                .on_press(Message::NewCampaignPressed),
        ]
        .align_y(iced::Center);

        let columns = [
            table::column(
                self.column_header("Name", SortColumn::Name),
                |row: Row| {
                    let name = row.name.clone();
                    mouse_area(text(row.name)).on_press(Message::RowSelected(name))
                },
            ),
            table::column(
                self.column_header("Stage", SortColumn::Stage),
                |row: Row| stage_badge(row.stage, row.tone),
            ),
            table::column(
                self.column_header("Last Modified", SortColumn::LastModified),
                |row: Row| text(row.last_modified),
            ),
            table::column(
                self.column_header("Modified By", SortColumn::ModifiedBy),
                |row: Row| text(row.modified_by),
            ),
            table::column(text("Actions"), |row: Row| {
                button(icon("trash"))
                    .style(button::text)
                    .on_press(Message::DeletePressed(row.name))
            }),
        ];

        column![
            header,
            stat_strip(campaigns.summary()),
            container(
                column![
                    row![
                        text(format!("Campaigns List ({})", campaigns.len())).size(18),
                        space::horizontal(),
                        text_input("Search campaigns", &self.search)
                            .on_input(Message::SearchInput)
                            .width(240),
                    ]
                    .align_y(iced::Center),
                    table(columns, rows).width(Length::Fill),
                ]
                .spacing(12)
            )
            .padding(16)
            .style(container::bordered_box),
        ]
        .spacing(20)
        .padding(24)
        .into()
    }

    fn column_header<'a>(&self, name: &'a str, column: SortColumn) -> Element<'a, Message> {
        button(row![text(name), self.sort.and_then(|s| s.icon(column))].spacing(4))
            .style(button::subtle)
            .on_press(Message::SortChanged(column))
            .into()
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => NEUTRAL,
        Tone::Positive => POSITIVE,
        Tone::Warning => WARNING,
        Tone::Critical => CRITICAL,
    }
}

fn stage_badge<'a>(stage: String, tone: Tone) -> Element<'a, Message> {
    let color = tone_color(tone);

    container(text(stage).size(12).color(color))
        .padding([2, 10])
        .style(move |_theme| container::Style {
            background: Some(color.scale_alpha(0.12).into()),
            border: border::rounded(12),
            ..container::Style::default()
        })
        .into()
}

fn stat<'a>(label: String, count: usize, tone: Tone) -> Element<'a, Message> {
    container(
        column![
            text(label).size(12),
            text(count.to_string()).size(22).color(tone_color(tone)),
        ]
        .spacing(4),
    )
    .padding(12)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

fn stat_strip<'a>(summary: Summary) -> Element<'a, Message> {
    let stages = summary
        .stages
        .into_iter()
        .map(|s| stat(s.stage.to_string(), s.count, s.tone));

    row(std::iter::once(stat("Total".into(), summary.total, Tone::Neutral)).chain(stages))
        .spacing(12)
        .into()
}
