use clap::Subcommand;
use colored::{ColoredString, Colorize};
use datalab_lib::{
    Campaign, CampaignList, Cfg, Prefix, Session,
    campaign::Tone,
    clock::LocalClock,
    workflow::{Outcome, SeededSuffix},
};
use sysexits::ExitCode;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List campaigns
    List {
        /// Only show campaigns whose name contains this, ignoring case
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show campaign totals per stage
    Stats,
    /// Create a campaign the same way the "New Campaign" dialog does
    New {
        /// Plan name prefix (BOG, MT, M or LTE)
        #[arg(short, long)]
        prefix: Option<Prefix>,
        /// Replace the generated plan name
        #[arg(short = 'n', long)]
        plan_name: Option<String>,
        /// Save as a draft instead of submitting
        #[arg(long)]
        draft: bool,
        /// Seed for the generated plan name suffix
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Remove a campaign
    Remove { name: String },
}

pub fn handle(cfg: Cfg, cmd: &Command) -> ExitCode {
    match cmd {
        Command::List { search } => {
            let session = Session::new(cfg);
            print_campaigns(&session, search.as_deref().unwrap_or_default());
            ExitCode::Ok
        }
        Command::Stats => {
            let session = Session::new(cfg);
            let summary = session.campaigns().summary();

            println!("{}{}", format!("{:<14}", "Total").bold(), summary.total);
            for stage in summary.stages {
                println!(
                    "{}{}",
                    paint(format!("{:<14}", stage.stage), stage.tone),
                    stage.count
                );
            }
            ExitCode::Ok
        }
        Command::New {
            prefix,
            plan_name,
            draft,
            seed,
        } => {
            let mut session = match seed {
                Some(seed) => Session::with_sources(
                    cfg,
                    CampaignList::seeded(),
                    Box::new(SeededSuffix::new(*seed)),
                    Box::new(LocalClock),
                ),
                None => Session::new(cfg),
            };

            session.open_new_campaign();
            session.select_prefix(*prefix);
            if let Some(plan_name) = plan_name {
                session.edit_plan_name(plan_name.as_str());
            }

            let outcome = if *draft {
                session.save_draft()
            } else {
                session.submit_new_campaign()
            };

            match outcome {
                Outcome::Submitted(new) => {
                    println!("{} {}", "Created".green().bold(), new.plan_name);
                    println!("Opened {}", session.route());
                    println!();
                    print_campaigns(&session, "");
                    ExitCode::Ok
                }
                Outcome::Drafted(draft) => {
                    let prefix = draft.prefix.map(|p| p.to_string()).unwrap_or_default();
                    println!(
                        "{} prefix: {:?}, plan name: {:?}",
                        "Saved draft".yellow().bold(),
                        prefix,
                        draft.plan_name
                    );
                    ExitCode::Ok
                }
                Outcome::Rejected(errors) => {
                    for (field, error) in errors.iter() {
                        eprintln!("{} {field}: {error}", "error:".red().bold());
                    }
                    ExitCode::DataErr
                }
                Outcome::Ignored | Outcome::Opened | Outcome::Updated | Outcome::Closed => {
                    ExitCode::Software
                }
            }
        }
        Command::Remove { name } => {
            let mut session = Session::new(cfg);

            match session.remove_campaign(name) {
                Some(removed) => println!("{} {}", "Removed".green().bold(), removed.name()),
                None => println!("No campaign named {name}"),
            }
            println!();
            print_campaigns(&session, "");
            ExitCode::Ok
        }
    }
}

fn print_campaigns(session: &Session, search: &str) {
    let campaigns = session.campaigns();
    let matches: Vec<&Campaign> = campaigns.search(search).collect();

    println!(
        "{}",
        format!("Campaigns List ({})", campaigns.len()).bold()
    );
    println!(
        "{}",
        format!(
            "{:<12}{:<16}{:<16}{}",
            "Name", "Stage", "Last Modified", "Modified By"
        )
        .dimmed()
    );

    for campaign in matches {
        let tone = campaign.stage().tone().unwrap_or(Tone::Neutral);
        println!(
            "{:<12}{}{:<16}{}",
            campaign.name(),
            paint(format!("{:<16}", campaign.stage()), tone),
            session.format_date(campaign),
            campaign.modified_by()
        );
    }
}

fn paint(label: String, tone: Tone) -> ColoredString {
    match tone {
        Tone::Neutral => label.normal(),
        Tone::Positive => label.green(),
        Tone::Warning => label.yellow(),
        Tone::Critical => label.red(),
    }
}
