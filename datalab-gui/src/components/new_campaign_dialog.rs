use datalab_lib::{
    Prefix, Session,
    workflow::{FormField, NewCampaignWorkflow, Outcome},
};
use iced::{
    Element, Length,
    widget::{button, column, container, pick_list, row, rule, space, text, text_input},
};
use strum::IntoEnumIterator;

use crate::icons::icon;

#[derive(Debug, Clone)]
pub enum Message {
    PrefixSelected(Option<Prefix>),
    PlanNameInput(String),
    SaveDraftPressed,
    SubmitPressed,
    ClosePressed,
}

/// Forward a dialog event to the session's new campaign workflow.
pub fn update(session: &mut Session, message: Message) -> Outcome {
    match message {
        Message::PrefixSelected(prefix) => session.select_prefix(prefix),
        Message::PlanNameInput(content) => session.edit_plan_name(content),
        Message::SaveDraftPressed => session.save_draft(),
        Message::SubmitPressed => session.submit_new_campaign(),
        Message::ClosePressed => session.close_new_campaign(),
    }
}

pub fn view(workflow: &NewCampaignWorkflow) -> Element<'_, Message> {
    let errors = workflow.errors();
    let prefixes: Vec<Prefix> = Prefix::iter().collect();

    let prefix = column![
        text("Plan Name Prefix*"),
        row![
            pick_list(prefixes, workflow.prefix(), |p| {
                Message::PrefixSelected(Some(p))
            })
            .placeholder("Select")
            .width(Length::Fill),
            button(icon("close"))
                .style(button::text)
                .on_press_maybe(workflow.prefix().map(|_| Message::PrefixSelected(None))),
        ]
        .spacing(4),
        errors
            .message(FormField::Prefix)
            .map(|e| text(e).size(12).style(text::danger)),
    ]
    .spacing(6);

    let plan_name = column![
        text("Plan Name*"),
        text_input("Select a prefix first", workflow.plan_name())
            .on_input_maybe(
                workflow
                    .plan_name_enabled()
                    .then_some(Message::PlanNameInput)
            ),
        errors
            .message(FormField::PlanName)
            .map(|e| text(e).size(12).style(text::danger)),
    ]
    .spacing(6);

    container(
        column![
            row![
                text("New Print Campaign").size(20),
                space::horizontal(),
                button(icon("close"))
                    .style(button::text)
                    .on_press(Message::ClosePressed),
            ],
            rule::horizontal(1),
            prefix,
            plan_name,
            space::vertical(),
            row![
                button("Cancel")
                    .style(button::text)
                    .on_press(Message::ClosePressed),
                space::horizontal(),
                button("Save as Draft")
                    .style(button::secondary)
                    .on_press(Message::SaveDraftPressed),
                button("Next")
                    .style(button::primary)
                    .on_press(Message::SubmitPressed),
            ]
            .spacing(8),
        ]
        .spacing(16),
    )
    .width(480)
    .height(360)
    .padding(20)
    .style(container::rounded_box)
    .into()
}

#[cfg(test)]
mod tests {
    use datalab_lib::{CoreConfig, Route};

    use super::*;

    fn session() -> Session {
        Session::new(CoreConfig::default().shared())
    }

    #[test]
    fn test_close_releases_scroll_lock() {
        let mut session = session();
        session.open_new_campaign();
        update(&mut session, Message::PrefixSelected(Some(Prefix::Mt)));
        assert!(session.is_scroll_locked());

        assert_eq!(update(&mut session, Message::ClosePressed), Outcome::Closed);

        assert!(!session.is_scroll_locked());
        assert!(!session.workflow().is_open());
        assert_eq!(session.campaigns().len(), 5);
    }

    #[test]
    fn test_submit_without_prefix_keeps_dialog_open() {
        let mut session = session();
        session.open_new_campaign();

        let outcome = update(&mut session, Message::SubmitPressed);

        assert!(matches!(outcome, Outcome::Rejected(_)));
        assert!(session.is_scroll_locked());
        assert_eq!(
            session.workflow().errors().message(FormField::Prefix).as_deref(),
            Some("Please select a prefix")
        );
    }

    #[test]
    fn test_submit_opens_new_campaign() {
        let mut session = session();
        session.open_new_campaign();
        update(&mut session, Message::PrefixSelected(Some(Prefix::Lte)));
        update(&mut session, Message::PlanNameInput("LTE0001".into()));

        assert!(matches!(
            update(&mut session, Message::SubmitPressed),
            Outcome::Submitted(_)
        ));
        assert!(!session.is_scroll_locked());
        assert_eq!(session.route(), &Route::detail("LTE0001"));
    }

    #[test]
    fn test_save_draft_releases_scroll_lock() {
        let mut session = session();
        session.open_new_campaign();

        assert!(matches!(
            update(&mut session, Message::SaveDraftPressed),
            Outcome::Drafted(_)
        ));
        assert!(!session.is_scroll_locked());
        assert_eq!(session.drafts().len(), 1);
    }
}
