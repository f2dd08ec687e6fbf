use sea_orm::Order;

use crate::query::fields::{OptionField, TextField};
use crate::query::predicate::Predicate;
use crate::types::db::item;

/// Option filter value meaning "no restriction"
pub const MATCH_ALL: &str = "all";

/// Largest limit the storage layer can bind as a signed 64-bit integer
pub const MAX_LIMIT: u64 = i64::MAX as u64;

/// Raw listing parameters, exactly as received on the query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemQueryParams {
    pub search_term: Option<String>,
    pub category: Option<String>,
    pub thickness: Option<String>,
    pub side: Option<String>,
    pub lamination: Option<String>,
    pub size: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
}

impl ItemQueryParams {
    pub fn option(&self, field: OptionField) -> Option<&str> {
        match field {
            OptionField::Category => self.category.as_deref(),
            OptionField::Thickness => self.thickness.as_deref(),
            OptionField::Side => self.side.as_deref(),
            OptionField::Lamination => self.lamination.as_deref(),
            OptionField::Size => self.size.as_deref(),
        }
    }
}

/// Field an item listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    Price,
    HumanId,
    Text(TextField),
    /// Unknown sort keys compare equal on every record, leaving insertion order
    Insertion,
}

impl SortField {
    pub fn parse(name: &str) -> Self {
        match name {
            "createdAt" => SortField::CreatedAt,
            "updatedAt" => SortField::UpdatedAt,
            "price" => SortField::Price,
            "humanId" => SortField::HumanId,
            "name" => SortField::Text(TextField::Name),
            "description" => SortField::Text(TextField::Description),
            "category" => SortField::Text(TextField::Category),
            "thickness" => SortField::Text(TextField::Thickness),
            "side" => SortField::Text(TextField::Side),
            "lamination" => SortField::Text(TextField::Lamination),
            "size" => SortField::Text(TextField::Size),
            _ => SortField::Insertion,
        }
    }

    /// Column to order by, `None` when only insertion order applies
    pub fn column(self) -> Option<item::Column> {
        match self {
            SortField::CreatedAt => Some(item::Column::CreatedAt),
            SortField::UpdatedAt => Some(item::Column::UpdatedAt),
            SortField::Price => Some(item::Column::Price),
            SortField::HumanId => Some(item::Column::HumanId),
            SortField::Text(field) => Some(field.column()),
            SortField::Insertion => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn to_order(self) -> Order {
        match self {
            SortDirection::Ascending => Order::Asc,
            SortDirection::Descending => Order::Desc,
        }
    }
}

/// Fully normalized listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    pub predicate: Predicate,
    pub sort: SortField,
    pub direction: SortDirection,
    /// Maximum number of rows; `0` means unbounded
    pub limit: u64,
}

impl ItemQuery {
    pub fn effective_limit(&self) -> Option<u64> {
        (self.limit > 0).then_some(self.limit)
    }
}

impl Default for ItemQuery {
    fn default() -> Self {
        build_query(&ItemQueryParams::default())
    }
}

/// Normalize raw listing parameters into a predicate plus sort and limit
///
/// Never fails: absent, blank, or malformed values fall back to their
/// defaults (no restriction, `createdAt`, descending, unbounded).
pub fn build_query(params: &ItemQueryParams) -> ItemQuery {
    let mut clauses = Vec::new();

    if let Some(term) = params.search_term.as_deref().filter(|t| !t.is_empty()) {
        clauses.push(Predicate::Or(vec![
            Predicate::contains(TextField::Name, term),
            Predicate::contains(TextField::Description, term),
        ]));
    }

    for field in OptionField::ALL {
        let active = params
            .option(field)
            .filter(|value| !value.is_empty() && *value != MATCH_ALL);
        if let Some(value) = active {
            clauses.push(Predicate::contains(field.text_field(), value));
        }
    }

    let sort = params
        .sort
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(SortField::parse)
        .unwrap_or(SortField::CreatedAt);

    let direction = match params.order.as_deref() {
        Some("asc") => SortDirection::Ascending,
        _ => SortDirection::Descending,
    };

    let limit = params
        .limit
        .as_deref()
        .and_then(|l| l.trim().parse::<u64>().ok())
        .map(|l| l.min(MAX_LIMIT))
        .unwrap_or(0);

    ItemQuery {
        predicate: Predicate::And(clauses),
        sort,
        direction,
        limit,
    }
}
