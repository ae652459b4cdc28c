//! # Catalog Commands
//!
//! The selectable textbooks, as the order form shows them.

use facture_core::Catalog;
use serde::Serialize;
use tracing::debug;

/// One entry of the textbook picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOption {
    pub id: String,
    /// `"{title} - {price} FCFA"`
    pub label: String,
}

/// Lists every catalog item in catalog order.
pub fn list_catalog(catalog: &Catalog) -> Vec<CatalogOption> {
    debug!(items = catalog.len(), "list_catalog command");
    catalog
        .items()
        .iter()
        .map(|item| CatalogOption {
            id: item.id.clone(),
            label: item.option_label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_all_textbooks_in_order() {
        let options = list_catalog(Catalog::textbooks());
        assert_eq!(options.len(), 11);
        assert_eq!(options[0].id, "CI1");
        assert_eq!(
            options[0].label,
            "CI: Cahier d'activités de transition arabe - 1100 FCFA"
        );
        assert_eq!(options[10].id, "CM1");
        assert!(options[10].label.ends_with("- 2000 FCFA"));
    }
}
