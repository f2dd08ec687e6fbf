/// Loosely-typed item fields as submitted by a client
///
/// Every field is optional here; the validator decides which ones a given
/// operation requires.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub name: Option<String>,
    pub category: Option<String>,
    pub thickness: Option<String>,
    pub side: Option<String>,
    pub lamination: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image_urls: Option<Vec<String>>,
}

/// A complete, validated item ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub thickness: String,
    pub side: String,
    pub lamination: String,
    pub size: String,
    pub price: f64,
    pub description: String,
    pub image_urls: Vec<String>,
}

/// A validated partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub thickness: Option<String>,
    pub side: Option<String>,
    pub lamination: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image_urls: Option<Vec<String>>,
}

