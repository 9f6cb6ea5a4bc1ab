use clap::Subcommand;
use colored::Colorize;
use datalab_lib::{
    Cfg, Route, Session,
    detail::{DetailField, DetailTab, FieldKind, TabPanel},
};
use strum::IntoEnumIterator;
use sysexits::ExitCode;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show a campaign's detail form
    Show {
        /// Campaign name. Without one the fallback campaign is shown
        name: Option<String>,
        /// Tab to show, e.g. metadata or lolupd1p
        #[arg(short, long, default_value = "metadata")]
        tab: DetailTab,
        /// Change a field before showing the form, e.g. --set entity=UK
        #[arg(long = "set", value_parser = parse_assignment)]
        assignments: Vec<(DetailField, String)>,
        /// Log the edited form as a submission instead of a save
        #[arg(long, requires = "assignments")]
        submit: bool,
    },
}

pub fn handle(cfg: Cfg, cmd: &Command) -> ExitCode {
    match cmd {
        Command::Show {
            name,
            tab,
            assignments,
            submit,
        } => {
            let mut session = Session::new(cfg);
            let route = match name {
                Some(name) => Route::detail(name.as_str()),
                None => Route::parse("/campaign"),
            };
            session.navigate(route.clone());
            session.select_tab(*tab);
            for (field, value) in assignments {
                session.set_detail_field(*field, value.as_str());
            }

            if !assignments.is_empty() {
                if *submit {
                    session.submit_detail();
                } else {
                    session.save_detail();
                }
            }

            let Some(detail) = session.detail() else {
                eprintln!("{} no campaign at {route}", "error:".red().bold());
                return ExitCode::DataErr;
            };

            println!("{}", detail.id().bold());
            let tabs: Vec<String> = DetailTab::iter()
                .map(|t| {
                    if t == detail.active_tab() {
                        format!("[{}]", t.label()).cyan().to_string()
                    } else {
                        t.label().to_string()
                    }
                })
                .collect();
            println!("{}", tabs.join("  "));
            println!();

            match detail.active_tab().panel() {
                TabPanel::Metadata => {
                    for (field, value) in detail.form().iter() {
                        let value = match (field.kind(), value.is_empty()) {
                            (FieldKind::Date, true) => "mm/dd/yyyy".dimmed().to_string(),
                            (_, true) => "-".dimmed().to_string(),
                            (_, false) => value.to_string(),
                        };
                        println!("{:<20}{value}", field.label());
                    }
                }
                TabPanel::Placeholder(message) => println!("{}", message.dimmed()),
            }

            ExitCode::Ok
        }
    }
}

fn parse_assignment(s: &str) -> Result<(DetailField, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{s}'"))?;
    let field = key.parse::<DetailField>().map_err(|e| e.to_string())?;

    Ok((field, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("entity=UK").unwrap(),
            (DetailField::Entity, "UK".to_string())
        );
        assert_eq!(
            parse_assignment("description=a=b").unwrap(),
            (DetailField::Description, "a=b".to_string())
        );
        assert!(parse_assignment("entity").is_err());
        assert!(parse_assignment("colour=red").is_err());
    }
}
