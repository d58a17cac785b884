//! Grouping of plain strings.

use std::collections::HashMap;

/// Groups `items` by character length and returns the largest group.
///
/// Length is the number of Unicode scalar values (`chars().count()`), not
/// bytes or UTF-16 code units.
///
/// Groups are ordered by the first appearance of their length, and the
/// first group of maximal size wins ties. Returns `None` for empty input.
///
/// ```
/// use shop_koans_core::largest_group_by_length;
///
/// let words = ["a", "bb", "c", "dd", "e"];
/// assert_eq!(largest_group_by_length(words), Some(vec!["a", "c", "e"]));
/// assert_eq!(largest_group_by_length(Vec::<&str>::new()), None);
/// ```
pub fn largest_group_by_length<I, S>(items: I) -> Option<Vec<S>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut slots: HashMap<usize, usize> = HashMap::new();
    let mut groups: Vec<Vec<S>> = Vec::new();

    for item in items {
        let len = item.as_ref().chars().count();
        let slot = *slots.entry(len).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        if let Some(group) = groups.get_mut(slot) {
            group.push(item);
        }
    }

    let max = groups.iter().map(Vec::len).max()?;
    groups.into_iter().find(|group| group.len() == max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_goes_to_first_group() {
        let words = ["bb", "a", "cc", "d"];
        assert_eq!(largest_group_by_length(words), Some(vec!["bb", "cc"]));
    }

    #[test]
    fn test_unique_largest_group() {
        let words = vec![
            "a".to_string(),
            "bb".to_string(),
            "cc".to_string(),
            "ddd".to_string(),
        ];
        assert_eq!(
            largest_group_by_length(words),
            Some(vec!["bb".to_string(), "cc".to_string()])
        );
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(largest_group_by_length(["é", "ab", "x"]), Some(vec!["é", "x"]));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(largest_group_by_length(Vec::<String>::new()), None);
    }
}
