//! # Interactive Order Form
//!
//! Line-oriented form over any reader/writer pair (stdin/stdout in the
//! binary, byte buffers in tests).
//!
//! ```text
//! > client Awa Ndiaye
//! Total de la commande : 0 FCFA
//! > select 1 CI1
//! Total de la commande : 1100 FCFA
//! > qty 1 2
//! Total de la commande : 2200 FCFA
//! > submit
//! Facture enregistrée : /home/awa/Downloads/facture.pdf
//! ```

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::Local;
use facture_core::Catalog;
use tracing::debug;

use crate::commands::catalog::list_catalog;
use crate::commands::invoice::submit_invoice;
use crate::commands::order::{
    add_line, get_order, remove_line, select_item, set_client_name, update_quantity,
};
use crate::error::ApiError;
use crate::state::{ConfigState, OrderSession};
use crate::view;

const PROMPT: &str = "> ";

const HELP: &str = "\
Commandes :
  client <nom>          nom du client
  add                   ajouter une ligne
  select <n> <code>     choisir le manuel de la ligne n
  qty <n> <quantité>    quantité de la ligne n
  remove <n>            supprimer la ligne n
  show                  afficher la commande
  catalog               liste des manuels
  submit                générer facture.pdf
  help                  cette aide
  quit                  quitter";

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Client(String),
    Add,
    Select { line: usize, item_id: String },
    Quantity { line: usize, quantity: u32 },
    Remove { line: usize },
    Show,
    Catalog,
    Submit,
    Help,
    Quit,
}

fn parse_number<T: FromStr>(arg: Option<&str>, what: &str) -> Result<T, ApiError> {
    let raw = arg.ok_or_else(|| ApiError::invalid_input(format!("Missing {what}")))?;
    raw.parse()
        .map_err(|_| ApiError::invalid_input(format!("Invalid {what}: {raw}")))
}

impl FromStr for SessionCommand {
    type Err = ApiError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (keyword, rest) = input
            .split_once(char::is_whitespace)
            .map(|(k, r)| (k, r.trim()))
            .unwrap_or((input, ""));
        let mut args = rest.split_whitespace();

        let command = match keyword.to_lowercase().as_str() {
            "client" => SessionCommand::Client(rest.to_string()),
            "add" => SessionCommand::Add,
            "select" => SessionCommand::Select {
                line: parse_number(args.next(), "line number")?,
                item_id: args
                    .next()
                    .ok_or_else(|| ApiError::invalid_input("Missing textbook code"))?
                    .to_uppercase(),
            },
            "qty" => SessionCommand::Quantity {
                line: parse_number(args.next(), "line number")?,
                quantity: parse_number(args.next(), "quantity")?,
            },
            "remove" => SessionCommand::Remove {
                line: parse_number(args.next(), "line number")?,
            },
            "show" => SessionCommand::Show,
            "catalog" => SessionCommand::Catalog,
            "submit" => SessionCommand::Submit,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            other => {
                return Err(ApiError::invalid_input(format!("Unknown command: {other}")));
            }
        };
        Ok(command)
    }
}

/// Runs the form until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    session: &mut OrderSession,
    catalog: &Catalog,
    config: &ConfigState,
) -> io::Result<()> {
    writeln!(out, "{HELP}")?;
    view::write_order(out, &get_order(session, catalog))?;

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(err) => {
                view::write_error(out, &err)?;
                continue;
            }
        };
        debug!(?command, "session input");

        if command == SessionCommand::Quit {
            break;
        }
        execute(command, out, session, catalog, config)?;
    }

    Ok(())
}

fn execute<W: Write>(
    command: SessionCommand,
    out: &mut W,
    session: &mut OrderSession,
    catalog: &Catalog,
    config: &ConfigState,
) -> io::Result<()> {
    let edited = match command {
        SessionCommand::Client(name) => Ok(set_client_name(session, catalog, &name)),
        SessionCommand::Add => {
            let order = add_line(session, catalog);
            return view::write_order(out, &order);
        }
        SessionCommand::Select { line, item_id } => select_item(session, catalog, line, &item_id),
        SessionCommand::Quantity { line, quantity } => {
            update_quantity(session, catalog, line, quantity)
        }
        SessionCommand::Remove { line } => {
            let result = remove_line(session, catalog, line);
            if let Ok(order) = &result {
                return view::write_order(out, order);
            }
            result
        }
        SessionCommand::Show => return view::write_order(out, &get_order(session, catalog)),
        SessionCommand::Catalog => return view::write_catalog(out, &list_catalog(catalog)),
        SessionCommand::Help => return writeln!(out, "{HELP}"),
        SessionCommand::Submit => {
            return match submit_invoice(session, catalog, config, &Local::now()) {
                Ok(invoice) => writeln!(out, "Facture enregistrée : {}", invoice.path.display()),
                Err(err) => view::write_error(out, &err),
            };
        }
        SessionCommand::Quit => return Ok(()),
    };

    match edited {
        Ok(order) => view::write_total(out, &order),
        Err(err) => view::write_error(out, &err),
    }
}
