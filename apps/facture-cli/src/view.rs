//! Plain-text rendering of command responses for the terminal.

use std::io::{self, Write};

use crate::commands::catalog::CatalogOption;
use crate::commands::order::{format_total, OrderResponse};
use crate::error::ApiError;

pub fn write_catalog(out: &mut impl Write, options: &[CatalogOption]) -> io::Result<()> {
    for option in options {
        writeln!(out, "{:<5} {}", option.id, option.label)?;
    }
    Ok(())
}

/// The whole form followed by the live total.
pub fn write_order(out: &mut impl Write, order: &OrderResponse) -> io::Result<()> {
    let client = if order.client_name.is_empty() {
        "(non renseigné)"
    } else {
        order.client_name.as_str()
    };
    writeln!(out, "Client : {client}")?;

    if order.lines.is_empty() {
        writeln!(out, "  (aucune ligne)")?;
    }
    for line in &order.lines {
        match (&line.title, line.line_total) {
            (Some(title), Some(total)) => writeln!(
                out,
                "  {}. [{}] {} x {} = {}",
                line.number, line.item_id, title, line.quantity, total
            )?,
            _ => writeln!(
                out,
                "  {}. (aucun manuel) x {}",
                line.number, line.quantity
            )?,
        }
    }

    write_total(out, order)
}

pub fn write_total(out: &mut impl Write, order: &OrderResponse) -> io::Result<()> {
    writeln!(out, "{}", format_total(order.total))
}

/// Error message, then one line per offending field.
pub fn write_error(out: &mut impl Write, error: &ApiError) -> io::Result<()> {
    writeln!(out, "Erreur : {}", error.message)?;
    for detail in &error.details {
        writeln!(out, "  {} : {}", detail.field, detail.message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::order::{get_order, select_item};
    use crate::state::OrderSession;
    use facture_core::{validate_order, Catalog, Order};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_order_view() {
        let catalog = Catalog::textbooks();
        let mut session = OrderSession::new();
        session.add_line();
        select_item(&mut session, catalog, 1, "CI3").unwrap();

        let text = render(|out| write_order(out, &get_order(&session, catalog)));
        assert_eq!(
            text,
            "Client : (non renseigné)\n\
             \x20 1. [CI3] CI: Cahier d'activités d'écriture x 1 = 1100 FCFA\n\
             \x20 2. (aucun manuel) x 1\n\
             Total de la commande : 1100 FCFA\n"
        );
    }

    #[test]
    fn test_error_view_lists_fields() {
        let errors = validate_order(&Order::empty(), Catalog::textbooks()).unwrap_err();
        let text = render(|out| write_error(out, &ApiError::from(errors)));

        assert!(text.starts_with("Erreur : Le formulaire contient des erreurs\n"));
        assert!(text.contains("  clientName : Le nom du client est requis\n"));
        assert!(text.contains("  lines : Ajoutez au moins un manuel\n"));
    }
}
