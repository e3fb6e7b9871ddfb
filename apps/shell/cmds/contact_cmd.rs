use clap::{Arg, ArgMatches, Command};
use contacts::contacts::{ContactForm, Field};

const FIELD_ARGS: [(&str, Field); 5] = [
    ("first",   Field::FirstName),
    ("last",    Field::LastName),
    ("email",   Field::Email),
    ("phone",   Field::Phone),
    ("company", Field::Company),
];

fn with_field_args(cmd: Command) -> Command {
    let cmd = FIELD_ARGS.iter().fold(cmd, |cmd, (name, field)| {
        cmd.arg(
            Arg::new(*name)
                .long(*name)
                .value_name("VALUE")
                .help(field.label()),
        )
    });
    cmd.arg(
        Arg::new("image")
            .long("image")
            .value_name("URL")
            .help("Image url"),
    )
}

pub(crate) fn list_cli() -> Command {
    Command::new("list")
        .about("List contacts matching the current search")
}

pub(crate) fn search_cli() -> Command {
    Command::new("search")
        .about("Filter the list, no text clears the filter")
        .arg(
            Arg::new("TEXT")
                .num_args(0..)
                .help("Text to search for"),
        )
}

pub(crate) fn create_cli() -> Command {
    with_field_args(Command::new("create")
        .about("Open the create dialog and submit it"))
}

pub(crate) fn edit_cli() -> Command {
    with_field_args(Command::new("edit")
        .about("Open the edit dialog on a contact and submit it")
        .arg(
            Arg::new("ID")
                .required(true)
                .help("Contact ID"),
        ))
}

pub(crate) fn form_cli() -> Command {
    with_field_args(Command::new("form")
        .about("Change fields of the open dialog"))
}

pub(crate) fn submit_cli() -> Command {
    Command::new("submit")
        .about("Submit the open dialog")
}

pub(crate) fn cancel_cli() -> Command {
    Command::new("cancel")
        .about("Close the open dialog")
}

pub(crate) fn delete_cli() -> Command {
    Command::new("delete")
        .about("Delete a contact")
        .arg(
            Arg::new("ID")
                .required(true)
                .help("Contact ID"),
        )
}

pub(crate) fn seed_cli() -> Command {
    Command::new("seed")
        .about("Reset the backend to its fixture data")
}

pub(crate) fn reload_cli() -> Command {
    Command::new("reload")
        .about("Fetch the list again")
}

/// Copies the field flags present in `matches` into the form.
pub(crate) fn apply_fields(matches: &ArgMatches, form: &mut ContactForm) {
    for (name, field) in FIELD_ARGS.iter() {
        if let Some(v) = matches.get_one::<String>(name) {
            form.set_value(*field, v);
        }
    }
    if let Some(v) = matches.get_one::<String>("image") {
        form.set_image(Some(v));
    }
}
