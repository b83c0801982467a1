use once_cell::sync::Lazy;

use crate::models::catalog::{Catalog, CatalogError, CatalogKind};

static ACCOUNTS: Lazy<Result<Catalog, CatalogError>> =
    Lazy::new(|| Catalog::from_json(include_str!("../data/accounts.json")));

static TOOLS: Lazy<Result<Catalog, CatalogError>> =
    Lazy::new(|| Catalog::from_json(include_str!("../data/tools.json")));

/// Returns the table for `kind`, parsing it on first use.
pub fn catalog(kind: CatalogKind) -> Result<&'static Catalog, &'static CatalogError> {
    match kind {
        CatalogKind::Accounts => (*ACCOUNTS).as_ref(),
        CatalogKind::Tools => (*TOOLS).as_ref(),
    }
}

/// Same as [`catalog`], but a broken table degrades to an empty one so the
/// page shows its loading placeholder instead of failing.
pub fn catalog_or_empty(kind: CatalogKind) -> &'static Catalog {
    static EMPTY: Lazy<Catalog> = Lazy::new(Catalog::default);

    match catalog(kind) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to load {} catalog: {}", kind.title(), e);
            &*EMPTY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables_load() {
        for kind in [CatalogKind::Accounts, CatalogKind::Tools] {
            let catalog = catalog(kind).unwrap();
            assert!(!catalog.is_empty(), "{} table should not be empty", kind.title());
            for entry in catalog.entries() {
                assert!(!entry.detailed_info.features.is_empty(), "{} has no features", entry.id);
                assert!(entry.link.starts_with("https://"), "{} link is not https", entry.id);
            }
        }
    }

    #[test]
    fn test_tables_are_distinct() {
        let accounts = catalog_or_empty(CatalogKind::Accounts);
        let tools = catalog_or_empty(CatalogKind::Tools);
        assert!(accounts.entries().iter().all(|entry| tools.find(&entry.id).is_none()));
    }

    #[test]
    fn test_embedded_image_urls_are_style_safe() {
        for kind in [CatalogKind::Accounts, CatalogKind::Tools] {
            for entry in catalog(kind).unwrap().entries() {
                assert!(crate::markup::css_url(&entry.image_url).is_some(), "{}", entry.id);
            }
        }
    }
}
