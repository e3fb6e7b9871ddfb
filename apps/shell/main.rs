use std::cell::Cell;
use std::io::{self, BufRead, Write};
use clap::{ArgMatches, Command, Parser};
use reedline::{Reedline, Signal};
use log::LevelFilter;

mod prompt;
use prompt::ShellPrompt;

mod cmds {
    pub(crate) mod contact_cmd;
}
use cmds::contact_cmd;

use contacts::{
    configuration as cfg,
    logger,
    ApiClient,
    PageController,
};

use contacts::contacts::{
    Confirmer,
    ConfirmPrompt,
    Field,
    Mode,
    Notification,
    PageListener,
    PageState,
    SubmitOutcome,
};

#[derive(Parser, Debug)]
#[command(name = "Contacts")]
#[command(version = "1.0")]
#[command(about = "Contacts management shell", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Backend base url, overrides the configuration file
    #[arg(short, long, value_name = "URL")]
    base_url: Option<String>,

    /// Static api key sent as X-API-Key
    #[arg(short = 'k', long, value_name = "KEY")]
    api_key: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

struct ConsoleListener {
    mode: Cell<Mode>,
}

impl PageListener for ConsoleListener {
    fn on_state_changed(&self, state: &PageState) {
        if self.mode.replace(state.mode()) == state.mode() {
            return;
        }
        match state.mode() {
            Mode::Loading => println!("Loading contacts..."),
            Mode::Saving => println!("Saving contact..."),
            Mode::Idle => {}
        }
    }

    fn on_notification(&self, notification: &Notification) {
        match notification.detail() {
            Some(detail) => println!("[{}] {}: {}", notification.severity(), notification.summary(), detail),
            None => println!("[{}] {}", notification.severity(), notification.summary()),
        }
    }
}

struct StdinConfirmer;
impl Confirmer for StdinConfirmer {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        print!("{} {} [{}: y / {}: N] ", prompt.header, prompt.message, prompt.accept_label, prompt.reject_label);
        _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

type Page = PageController<ApiClient>;

fn build_cli() -> Command {
    Command::new("contacts")
        .about("Interactive contacts shell application")
        .no_binary_name(true)
        .subcommand_required(true)
        .subcommand(contact_cmd::list_cli())
        .subcommand(contact_cmd::search_cli())
        .subcommand(contact_cmd::create_cli())
        .subcommand(contact_cmd::edit_cli())
        .subcommand(contact_cmd::form_cli())
        .subcommand(contact_cmd::submit_cli())
        .subcommand(contact_cmd::cancel_cli())
        .subcommand(contact_cmd::delete_cli())
        .subcommand(contact_cmd::seed_cli())
        .subcommand(contact_cmd::reload_cli())
        .help_template("{subcommands}")
}

// Splits a command line on whitespace, keeping double-quoted runs together.
fn split_args(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for c in input.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            },
            c if c.is_whitespace() && !quoted => {
                if pending {
                    args.push(std::mem::take(&mut current));
                    pending = false;
                }
            },
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        args.push(current);
    }
    args
}

fn print_contacts(page: &Page) {
    let state = page.state();
    let rows = state.filtered_contacts();
    if rows.is_empty() {
        println!("No contacts found.");
        return;
    }

    println!("{:<8} {:<28} {:<28} {:<20} {}", "ID", "NAME", "EMAIL", "PHONE", "COMPANY");
    for c in rows.iter() {
        println!("{:<8} {:<28} {:<28} {:<20} {}",
            c.id(),
            c.full_name(),
            c.email().unwrap_or("-"),
            c.phone().unwrap_or("-"),
            c.company().unwrap_or("-"),
        );
    }
    if !state.search_text().is_empty() {
        println!("{} of {} contacts match '{}'", rows.len(), state.contacts().len(), state.search_text());
    }
}

fn print_form_errors(page: &Page) {
    for (field, violations) in page.form().visible_errors().iter() {
        for v in violations {
            println!("  {}: {} ({})", field.label(), v, v.tag());
        }
    }
}

async fn submit(page: &mut Page) {
    match page.submit().await {
        SubmitOutcome::Blocked => {
            println!("Form has errors:");
            print_form_errors(page);
        },
        SubmitOutcome::Failed => {
            println!("Dialog is still open, use 'form' to fix fields and 'submit' to retry.");
        },
        SubmitOutcome::Created | SubmitOutcome::Updated => print_contacts(page),
    }
}

async fn execute_command(matches: ArgMatches, page: &mut Page) {
    match matches.subcommand() {
        Some(("list", _)) => print_contacts(page),
        Some(("search", m)) => {
            let text = m.get_many::<String>("TEXT")
                .map(|v| v.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            page.set_search_text(&text);
            print_contacts(page);
        },
        Some(("create", m)) => {
            page.open_create();
            contact_cmd::apply_fields(m, page.form_mut());
            submit(page).await;
        },
        Some(("edit", m)) => {
            let id = m.get_one::<String>("ID").map(|v| v.as_str()).unwrap_or_default();
            let Some(contact) = page.state().contact(id).cloned() else {
                println!("Error: contact not found: {}", id);
                return;
            };
            if !page.open_edit(&contact) {
                return;
            }
            contact_cmd::apply_fields(m, page.form_mut());
            submit(page).await;
        },
        Some(("form", m)) => {
            if !page.state().is_dialog_open() {
                println!("Error: no dialog is open, use 'create' or 'edit' first.");
                return;
            }
            contact_cmd::apply_fields(m, page.form_mut());
            for field in Field::ALL {
                println!("  {:<12} {}", field.label(), page.form().value(field));
            }
            print_form_errors(page);
        },
        Some(("submit", _)) => {
            if !page.state().is_dialog_open() {
                println!("Error: no dialog is open, use 'create' or 'edit' first.");
                return;
            }
            submit(page).await;
        },
        Some(("cancel", _)) => page.close_dialog(),
        Some(("delete", m)) => {
            let id = m.get_one::<String>("ID").map(|v| v.as_str()).unwrap_or_default();
            let Some(contact) = page.state().contact(id).cloned() else {
                println!("Error: contact not found: {}", id);
                return;
            };
            if page.confirm_delete(&contact).await {
                print_contacts(page);
            }
        },
        Some(("seed", _)) => {
            page.seed().await;
            print_contacts(page);
        },
        Some(("reload", _)) => {
            page.load().await;
            print_contacts(page);
        },
        _ => {}
    }
}

#[tokio::main]
async fn main() {
    let opts = Options::parse();

    let mut builder = cfg::Builder::new();
    if let Some(path) = opts.config.as_ref() {
        if let Err(e) = builder.load(path) {
            eprintln!("{e}");
            return;
        }
    }
    if let Some(url) = opts.base_url.as_ref() {
        builder.with_base_url(url);
    }
    if let Some(key) = opts.api_key.as_ref() {
        builder.with_api_key(key);
    }
    if opts.verbose {
        builder.with_logger(LevelFilter::Debug, None);
    }

    let cfg = match builder.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Loading configuration error: {e}");
            return;
        }
    };

    #[cfg(feature = "inspect")] {
        cfg.dump();
    }

    if let Err(e) = logger::setup(cfg.log_level(), cfg.log_file()) {
        eprintln!("{e}");
        return;
    }

    let client = match ApiClient::from_config(&*cfg) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Creating api client error: {e}");
            return;
        }
    };

    let mut page = PageController::new(client, Box::new(StdinConfirmer));
    page.add_listener(Box::new(ConsoleListener { mode: Cell::new(Mode::Idle) }));

    let mut cli = build_cli();
    let mut rl = Reedline::create();

    println!("Welcome to interactive contacts shell. Type 'exit' to quit.\n");
    page.start().await;
    print_contacts(&page);

    loop {
        let prompt = ShellPrompt {
            dialog: page.state().is_dialog_open().then(|| page.state().dialog_title()),
        };
        let Ok(sig) = rl.read_line(&prompt) else {
            println!("\n Fatal error occurred.");
            continue;
        };

        match sig {
            Signal::Success(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                match input {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    },
                    "help" => {
                        _ = cli.print_long_help();
                        continue;
                    }
                    _ => {}
                }

                let args = split_args(input);
                if args[0] == "help" && args.len() > 1 {
                    _ = match cli.find_subcommand_mut(args[1].as_str()) {
                        Some(cmd) => cmd.print_long_help(),
                        None => cli.print_long_help(),
                    };
                    continue;
                }

                match cli.clone().try_get_matches_from(args) {
                    Ok(matches) => execute_command(matches, &mut page).await,
                    Err(e) => {
                        println!("Error: {}", e.render());
                    }
                }
            }
            Signal::CtrlC | Signal::CtrlD => {
                println!("\nGoodbye!");
                break;
            }
        }
    }
}
