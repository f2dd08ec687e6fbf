use std::collections::BTreeSet;

/// Split comma-joined raw values into their trimmed, deduplicated atoms
///
/// `None` entries (null or non-text values in storage) are skipped, as are
/// pieces that are empty after trimming.
pub fn split_distinct<I>(raw_values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    raw_values
        .into_iter()
        .flatten()
        .flat_map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn test_comma_joined_value_yields_separate_atoms() {
        let set = split_distinct(raw(&[Some("A,B")]));
        assert!(set.contains("A"));
        assert!(set.contains("B"));
        assert!(!set.contains("A,B"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_pieces_are_trimmed() {
        let set = split_distinct(raw(&[Some(" A , B ")]));
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_duplicates_across_values_collapse() {
        let set = split_distinct(raw(&[Some("200,300"), Some("300"), Some("350, 200")]));
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec!["200", "300", "350"]);
    }

    #[test]
    fn test_empty_pieces_and_nulls_are_ignored() {
        let set = split_distinct(raw(&[Some(",A,,"), None, Some("  "), Some("")]));
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn test_no_values_yields_empty_set() {
        assert!(split_distinct(Vec::new()).is_empty());
    }
}
