use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate entry id '{0}'")]
    DuplicateId(String),

    #[error("entry at position {0} has an empty id")]
    EmptyId(usize),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailedInfo {
    pub features: Vec<String>,
    pub validity: String,
    pub last_updated: String,
    pub region: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub link: String,
    pub image_url: String,
    pub detailed_info: DetailedInfo,
}

/// Which of the two static tables a page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Accounts,
    Tools,
}

impl CatalogKind {
    pub fn title(self) -> &'static str {
        match self {
            CatalogKind::Accounts => "Premium Accounts",
            CatalogKind::Tools => "Tools",
        }
    }

    /// Label of the button that follows an entry's external link.
    pub fn action_label(self) -> &'static str {
        match self {
            CatalogKind::Accounts => "Access",
            CatalogKind::Tools => "Download",
        }
    }
}

/// Ordered, read-only list of entries. Order is the display and rotation order.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if by_id.insert(entry.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries, by_id })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(raw)?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&CatalogEntry> {
        self.by_id.get(id).and_then(|&index| self.entries.get(index))
    }

    /// Distinct `type` labels in the order they first appear.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = Vec::new();
        for entry in self.entries() {
            if !kinds.contains(&entry.kind.as_str()) {
                kinds.push(&entry.kind);
            }
        }
        kinds
    }

    pub fn filter_by_kind<'a>(&'a self, kind: Option<&'a str>) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| kind.map_or(true, |kind| entry.kind == kind))
    }
}

/// Shows ISO dates as "March 04, 2024" and anything else as written.
pub fn format_last_updated(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%B %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
pub(crate) fn test_entry(id: &str, kind: &str) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        name: format!("Entry {}", id),
        description: format!("Description of {}", id),
        kind: kind.to_string(),
        link: format!("https://example.com/{}", id),
        image_url: format!("https://example.com/{}.png", id),
        detailed_info: DetailedInfo {
            features: vec!["Feature one".to_string(), "Feature two".to_string()],
            validity: "Lifetime".to_string(),
            last_updated: "2024-03-04".to_string(),
            region: "Global".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            test_entry("a", "Streaming"),
            test_entry("b", "Music"),
            test_entry("a", "Music"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_rejects_empty_id() {
        let result = Catalog::new(vec![test_entry("a", "Streaming"), test_entry("  ", "Music")]);
        assert!(matches!(result, Err(CatalogError::EmptyId(1))));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.kinds().is_empty());
    }

    #[test]
    fn test_find_and_order() {
        let catalog = Catalog::new(vec![
            test_entry("netflix", "Streaming"),
            test_entry("spotify", "Music"),
            test_entry("hulu", "Streaming"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(1).map(|e| e.id.as_str()), Some("spotify"));
        assert_eq!(catalog.find("hulu").map(|e| e.kind.as_str()), Some("Streaming"));
        assert!(catalog.find("missing").is_none());
        assert_eq!(catalog.kinds(), vec!["Streaming", "Music"]);
    }

    #[test]
    fn test_filter_by_kind_keeps_order() {
        let catalog = Catalog::new(vec![
            test_entry("netflix", "Streaming"),
            test_entry("spotify", "Music"),
            test_entry("hulu", "Streaming"),
        ])
        .unwrap();

        let streaming: Vec<&str> = catalog
            .filter_by_kind(Some("Streaming"))
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(streaming, vec!["netflix", "hulu"]);
        assert_eq!(catalog.filter_by_kind(None).count(), 3);
        assert_eq!(catalog.filter_by_kind(Some("Games")).count(), 0);
    }

    #[test]
    fn test_from_json_uses_camel_case_fields() {
        let raw = r#"[{
            "id": "canva",
            "name": "Canva Pro",
            "description": "Design anything",
            "type": "Design",
            "link": "https://example.com/canva",
            "imageUrl": "https://example.com/canva.png",
            "detailedInfo": {
                "features": ["Brand kit", "Background remover"],
                "validity": "6 months",
                "lastUpdated": "2024-05-01",
                "region": "Worldwide"
            }
        }]"#;
        let catalog = Catalog::from_json(raw).unwrap();
        let entry = catalog.find("canva").unwrap();
        assert_eq!(entry.kind, "Design");
        assert_eq!(entry.image_url, "https://example.com/canva.png");
        assert_eq!(entry.detailed_info.features.len(), 2);
        assert_eq!(entry.detailed_info.validity, "6 months");
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(Catalog::from_json("[{\"id\": 1}]"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_format_last_updated() {
        assert_eq!(format_last_updated("2024-03-04"), "March 04, 2024");
        assert_eq!(format_last_updated("Last week"), "Last week");
    }
}
