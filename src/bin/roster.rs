//! Roster CLI
//!
//! Command-line presentation layer: one-shot subcommands and an
//! interactive shell over the roster engine.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use roster::config::{IdStrategy, LoadPolicy};
use roster::directory::DirectoryClient;
use roster::intent::{parse_intent, Intent, Outcome};
use roster::roster::{Direction, SortKey, StatusFilter};
use roster::view::{render_directory, render_member, render_members, render_validation, TableView};
use roster::{Config, Engine, MemberDraft, MemberId, MemberPatch, RosterError};
use tracing_subscriber::{fmt, EnvFilter};

/// Roster CLI
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Manage a membership roster stored in a local JSON slot")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./roster_data")]
    data_dir: String,

    /// Storage slot name
    #[arg(long, default_value = "users")]
    slot: String,

    /// Maximum accepted age
    #[arg(long, default_value = "120", conflicts_with = "no_age_cap")]
    max_age: u32,

    /// Accept any positive age
    #[arg(long)]
    no_age_cap: bool,

    /// Fail instead of starting empty when the slot is malformed
    #[arg(long)]
    strict_load: bool,

    /// How new member ids are generated
    #[arg(long, value_enum, default_value = "sequential")]
    id_strategy: IdStrategyArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IdStrategyArg {
    Sequential,
    Uuid,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List members
    List {
        /// Only members with this status (all, Active, Inactive)
        #[arg(long, default_value = "all")]
        status: String,

        /// Sort by name, email, age or status
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Show one member
    Show {
        /// Member id
        id: String,
    },

    /// Add a member
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit a member
    Edit {
        /// Member id
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a member
    Delete {
        /// Member id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Fetch and show the public member directory
    Github {
        /// Listing endpoint
        #[arg(long)]
        url: Option<String>,
    },

    /// Interactive shell
    Shell,

    /// Remove every member
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(ClapArgs, Debug, Default)]
struct FieldArgs {
    /// Full name
    #[arg(long)]
    name: Option<String>,

    /// Email address
    #[arg(long)]
    email: Option<String>,

    /// Age in years
    #[arg(long)]
    age: Option<String>,

    /// Active or Inactive
    #[arg(long)]
    status: Option<String>,
}

impl FieldArgs {
    fn into_draft(self) -> MemberDraft {
        MemberDraft {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
        }
    }

    fn into_patch(self) -> MemberPatch {
        MemberPatch {
            name: self.name,
            email: self.email,
            age: self.age,
            status: self.status,
        }
    }
}

const SHELL_HELP: &str = "\
commands:
  list
  show <id>
  add name=<v> email=<v> age=<v> status=<Active|Inactive>
  edit <id> [name=<v>] [email=<v>] [age=<v>] [status=<v>]
  delete <id>
  sort <name|email|age|status>     (repeat to flip direction)
  filter <all|Active|Inactive>
  help
  quit
values with spaces go in double quotes: name=\"Ani Putri\"
";

fn main() -> ExitCode {
    // Logs go to stderr so tables on stdout stay clean
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,roster=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> roster::Result<()> {
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .slot(&args.slot)
        .max_age(if args.no_age_cap { None } else { Some(args.max_age) })
        .load_policy(if args.strict_load {
            LoadPolicy::Strict
        } else {
            LoadPolicy::FallbackEmpty
        })
        .id_strategy(match args.id_strategy {
            IdStrategyArg::Sequential => IdStrategy::Sequential,
            IdStrategyArg::Uuid => IdStrategy::Uuid,
        })
        .build();

    // The directory never needs the roster slot
    if let Commands::Github { url } = &args.command {
        let mut config = config;
        if let Some(url) = url {
            config.directory_url = url.clone();
        }
        config.validate()?;
        let client = DirectoryClient::new(&config)?;
        print!("{}", render_directory(&client.fetch()?));
        return Ok(());
    }

    let mut engine = Engine::open(config)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    match args.command {
        Commands::List { status, sort, desc } => {
            let filter: StatusFilter = status.parse()?;
            let mut members = engine.on_filter(filter);
            if let Some(key) = sort {
                let key: SortKey = key.parse()?;
                let direction = if desc {
                    Direction::Descending
                } else {
                    Direction::Ascending
                };
                members = roster::roster::sort_by_key(&members, key, direction);
            }
            print!("{}", render_members(&members));
        }
        Commands::Show { id } => {
            let id = parse_member_id(&id);
            print!("{}", render_member(engine.on_edit(&id)?));
        }
        Commands::Add { fields } => {
            let member = engine.on_submit(&fields.into_draft())?;
            println!("Member added (id {})", member.id);
        }
        Commands::Edit { id, fields } => {
            let patch = fields.into_patch();
            if patch.is_empty() {
                return Err(RosterError::Intent(
                    "edit: nothing to change (give at least one of --name, --email, --age, --status)"
                        .to_string(),
                ));
            }
            let member = engine.on_update(&parse_member_id(&id), &patch)?;
            println!("Member updated (id {})", member.id);
        }
        Commands::Delete { id, yes } => {
            let id = parse_member_id(&id);
            let member = engine.on_edit(&id)?;
            let prompt = format!("Delete {} <{}>? [y/N] ", member.name, member.email);
            if yes || confirm(&mut input, &prompt)? {
                engine.on_delete(&id)?;
                println!("Member deleted (id {})", id);
            } else {
                println!("Cancelled");
            }
        }
        Commands::Reset { yes } => {
            if yes || confirm(&mut input, "Remove every member? [y/N] ")? {
                engine.reset()?;
                println!("Roster cleared");
            } else {
                println!("Cancelled");
            }
        }
        Commands::Shell => shell(&mut engine, &mut input)?,
        Commands::Github { .. } => unreachable!("handled before opening the engine"),
    }

    Ok(())
}

/// Read-eval-print loop over intents
///
/// Recoverable errors are reported and the loop goes on; storage and
/// decoding failures end the session.
fn shell(engine: &mut Engine, input: &mut impl BufRead) -> roster::Result<()> {
    engine.subscribe(Box::new(TableView::new(io::stdout())));

    print!("{}", render_members(engine.members()));
    println!("type 'help' for commands");

    loop {
        print!("roster> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        let intent = match parse_intent(&line) {
            Ok(intent) => intent,
            Err(e) => {
                report_error(&e);
                continue;
            }
        };

        match intent {
            Intent::Quit => return Ok(()),
            Intent::Help => {
                print!("{}", SHELL_HELP);
                continue;
            }
            Intent::Delete { ref id } => {
                let prompt = match engine.on_edit(id) {
                    Ok(member) => format!("Delete {} <{}>? [y/N] ", member.name, member.email),
                    Err(e) => {
                        report_error(&e);
                        continue;
                    }
                };
                if !confirm(input, &prompt)? {
                    println!("Cancelled");
                    continue;
                }
            }
            _ => {}
        }

        match engine.execute(intent) {
            Ok(outcome) => print_outcome(outcome),
            Err(e) if e.is_recoverable() => report_error(&e),
            Err(e) => return Err(e),
        }
    }
}

fn print_outcome(outcome: Outcome) {
    match outcome {
        Outcome::Listing(members) => print!("{}", render_members(&members)),
        Outcome::Member(member) => print!("{}", render_member(&member)),
        Outcome::Added(member) => println!("Member added (id {})", member.id),
        Outcome::Updated(member) => println!("Member updated (id {})", member.id),
        Outcome::Deleted(member) => println!("Member deleted (id {})", member.id),
        Outcome::Sorted {
            key,
            direction,
            members,
        } => {
            println!("sorted by {} ({})", key, direction);
            print!("{}", render_members(&members));
        }
        Outcome::Nothing => {}
    }
}

fn confirm(input: &mut impl BufRead, prompt: &str) -> roster::Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn parse_member_id(raw: &str) -> MemberId {
    raw.parse().unwrap_or_else(|never| match never {})
}

fn report_error(e: &RosterError) {
    match e {
        RosterError::Validation(errors) => {
            eprintln!("Invalid member:");
            eprint!("{}", render_validation(errors));
        }
        RosterError::NotFound(id) => eprintln!("No member with id {}", id),
        other => eprintln!("Error: {}", other),
    }
}
