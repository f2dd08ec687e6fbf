use sea_orm::Condition;
use sea_orm::sea_query::{Expr, Func, LikeExpr};

use crate::query::fields::TextField;

const LIKE_ESCAPE: char = '!';

/// Storage-agnostic description of which items match a listing request
///
/// `And(vec![])` is the unrestricted predicate. `Contains` is a
/// case-insensitive literal substring test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    Contains { field: TextField, needle: String },
}

impl Predicate {
    pub fn contains(field: TextField, needle: impl Into<String>) -> Self {
        Predicate::Contains {
            field,
            needle: needle.into(),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Predicate::And(parts) if parts.is_empty())
    }

    /// Translate into a SeaORM condition
    pub fn to_condition(&self) -> Condition {
        match self {
            Predicate::And(parts) => parts
                .iter()
                .fold(Condition::all(), |cond, p| cond.add(p.to_condition())),
            Predicate::Or(parts) => parts
                .iter()
                .fold(Condition::any(), |cond, p| cond.add(p.to_condition())),
            Predicate::Contains { field, needle } => {
                let pattern = format!("%{}%", escape_like_wildcards(&needle.to_lowercase()));
                Condition::all().add(
                    Expr::expr(Func::lower(Expr::col(field.column())))
                        .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
                )
            }
        }
    }
}

/// Escape LIKE metacharacters so user input matches literally
fn escape_like_wildcards(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == LIKE_ESCAPE || c == '%' || c == '_' {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::db::item;
    use sea_orm::sea_query::{Asterisk, Query, SqliteQueryBuilder};

    fn where_sql(predicate: &Predicate) -> String {
        Query::select()
            .column(Asterisk)
            .from(item::Entity)
            .cond_where(predicate.to_condition())
            .to_string(SqliteQueryBuilder)
    }

    #[test]
    fn test_unrestricted_predicate_has_no_where_clause() {
        let p = Predicate::And(Vec::new());

        assert!(p.is_unrestricted());
        assert!(!where_sql(&p).contains("WHERE"));
    }

    #[test]
    fn test_contains_lowercases_column_and_needle() {
        let sql = where_sql(&Predicate::contains(TextField::Name, "POSTER"));

        assert!(sql.contains("LOWER("), "{}", sql);
        assert!(sql.contains("'%poster%'"), "{}", sql);
    }

    #[test]
    fn test_or_joins_branches() {
        let p = Predicate::Or(vec![
            Predicate::contains(TextField::Name, "card"),
            Predicate::contains(TextField::Description, "card"),
        ]);
        let sql = where_sql(&p);

        assert!(!p.is_unrestricted());
        assert!(sql.contains(" OR "), "{}", sql);
        assert!(sql.contains("\"description\""), "{}", sql);
    }

    #[test]
    fn test_wildcards_are_escaped_in_pattern() {
        let sql = where_sql(&Predicate::contains(TextField::Name, "100%"));

        assert!(sql.contains("'%100!%%'"), "{}", sql);
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like_wildcards("plain"), "plain");
        assert_eq!(escape_like_wildcards("100%"), "100!%");
        assert_eq!(escape_like_wildcards("a_b"), "a!_b");
        assert_eq!(escape_like_wildcards("wow!"), "wow!!");
        assert_eq!(escape_like_wildcards("a\\b"), "a\\b");
    }
}
