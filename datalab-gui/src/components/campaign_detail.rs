use datalab_lib::{
    Session,
    detail::{CampaignDetail, DetailField, DetailTab, FieldKind, TabPanel},
};
use iced::{
    Element, Length,
    widget::{button, column, container, pick_list, row, rule, space, text, text_input},
};
use strum::IntoEnumIterator;

use crate::icons::icon;

const FIELDS_PER_ROW: usize = 2;

#[derive(Debug, Clone)]
pub enum Message {
    BackPressed,
    TabSelected(DetailTab),
    FieldChanged(DetailField, String),
    CancelPressed,
    SavePressed,
    SubmitPressed,
}

pub fn update(session: &mut Session, message: Message) {
    match message {
        Message::BackPressed | Message::CancelPressed => {
            session.cancel_detail();
        }
        Message::TabSelected(tab) => session.select_tab(tab),
        Message::FieldChanged(field, value) => session.set_detail_field(field, value),
        Message::SavePressed => session.save_detail(),
        Message::SubmitPressed => session.submit_detail(),
    }
}

pub fn view(detail: &CampaignDetail, current_year: i32) -> Element<'_, Message> {
    let header = row![
        button(icon("arrow_left"))
            .style(button::text)
            .on_press(Message::BackPressed),
        text(detail.id()).size(24),
        space::horizontal(),
        button(icon("bookmark")).style(button::text),
        button(icon("more")).style(button::text),
    ]
    .spacing(8)
    .align_y(iced::Center);

    let tabs = row(DetailTab::iter().map(|tab| {
        button(text(tab.label()))
            .style(if tab == detail.active_tab() {
                button::primary
            } else {
                button::subtle
            })
            .on_press(Message::TabSelected(tab))
            .into()
    }))
    .spacing(4);

    let panel: Element<'_, Message> = match detail.active_tab().panel() {
        TabPanel::Metadata => metadata(detail, current_year),
        TabPanel::Placeholder(message) => container(text(message))
            .padding(40)
            .center_x(Length::Fill)
            .into(),
    };

    let footer = row![
        space::horizontal(),
        button("Cancel")
            .style(button::secondary)
            .on_press(Message::CancelPressed),
        button("Save")
            .style(button::secondary)
            .on_press(Message::SavePressed),
        button("Submit")
            .style(button::primary)
            .on_press(Message::SubmitPressed),
    ]
    .spacing(8);

    column![
        header,
        tabs,
        rule::horizontal(1),
        container(panel)
            .padding(16)
            .width(Length::Fill)
            .style(container::bordered_box),
        footer,
    ]
    .spacing(16)
    .padding(24)
    .into()
}

fn metadata(detail: &CampaignDetail, current_year: i32) -> Element<'_, Message> {
    let fields: Vec<DetailField> = DetailField::iter().collect();

    column(fields.chunks(FIELDS_PER_ROW).map(|pair| {
        row(pair
            .iter()
            .map(|&field| field_view(detail, field, current_year)))
        .spacing(16)
        .into()
    }))
    .spacing(12)
    .into()
}

fn field_view(detail: &CampaignDetail, field: DetailField, current_year: i32) -> Element<'_, Message> {
    let value = detail.form().get(field);

    let input: Element<'_, Message> = match field.kind() {
        FieldKind::Select => pick_list(
            field.options(current_year),
            Some(value.to_string()),
            move |choice| Message::FieldChanged(field, choice),
        )
        .width(Length::Fill)
        .into(),
        FieldKind::Date => text_input("mm/dd/yyyy", value)
            .on_input(move |content| Message::FieldChanged(field, content))
            .into(),
        FieldKind::LongText => text_input("Add a description", value)
            .on_input(move |content| Message::FieldChanged(field, content))
            .into(),
    };

    column![text(field.label()).size(13), input]
        .spacing(4)
        .width(Length::Fill)
        .into()
}
