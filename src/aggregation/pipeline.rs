//! Group-by, reduce, sort/truncate
//!
//! Each stage is a plain function over owned rows so it can be tested on its
//! own and chained freely:
//!
//! ```text
//! rows ──► group_by(key) ──► reduce(f) ──► sort_truncate(cmp, limit)
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Rows sharing one key
#[derive(Debug, Clone, PartialEq)]
pub struct Group<K, T> {
    pub key: K,
    pub rows: Vec<T>,
}

/// Partition rows by key
///
/// Groups come out in order of each key's first occurrence and keep their
/// rows in input order.
pub fn group_by<T, K, I, F>(rows: I, mut key_fn: F) -> Vec<Group<K, T>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<K, T>> = Vec::new();

    for row in rows {
        let key = key_fn(&row);
        match positions.get(&key) {
            Some(&index) => groups[index].rows.push(row),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    rows: vec![row],
                });
            }
        }
    }

    groups
}

/// Collapse each group into one output row; `None` drops the group
pub fn reduce<K, T, R, F>(groups: Vec<Group<K, T>>, reducer: F) -> Vec<R>
where
    F: FnMut(Group<K, T>) -> Option<R>,
{
    groups.into_iter().filter_map(reducer).collect()
}

/// Stable sort, then keep at most `limit` rows
pub fn sort_truncate<R, F>(mut rows: Vec<R>, compare: F, limit: Option<usize>) -> Vec<R>
where
    F: FnMut(&R, &R) -> Ordering,
{
    rows.sort_by(compare);
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_keeps_first_occurrence_order() {
        let groups = group_by(vec!["b1", "a1", "b2", "c1", "a2"], |s| s.as_bytes()[0]);

        let keys: Vec<u8> = groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec![b'b', b'a', b'c']);
        assert_eq!(groups[0].rows, vec!["b1", "b2"]);
        assert_eq!(groups[1].rows, vec!["a1", "a2"]);
    }

    #[test]
    fn test_group_by_empty_input() {
        let groups = group_by(Vec::<u32>::new(), |n| n % 2);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_reduce_drops_none() {
        let groups = group_by(vec![1, 2, 3, 4, 5], |n| n % 2);
        let sums = reduce(groups, |g| {
            let sum: i32 = g.rows.iter().sum();
            (sum > 6).then_some((g.key, sum))
        });
        assert_eq!(sums, vec![(1, 9)]);
    }

    #[test]
    fn test_sort_truncate_is_stable() {
        let rows = vec![("x", 2), ("y", 3), ("z", 2), ("w", 1)];
        let sorted = sort_truncate(rows, |a, b| b.1.cmp(&a.1), Some(3));
        assert_eq!(sorted, vec![("y", 3), ("x", 2), ("z", 2)]);
    }

    #[test]
    fn test_sort_truncate_without_limit() {
        let sorted = sort_truncate(vec![3, 1, 2], |a, b| a.cmp(b), None);
        assert_eq!(sorted, vec![1, 2, 3]);
    }

    #[test]
    fn test_stages_compose() {
        let words = vec!["rebound", "steal", "rebound", "block", "rebound", "steal"];
        let counts = sort_truncate(
            reduce(group_by(words, |w| *w), |g| Some((g.key, g.rows.len()))),
            |a, b| b.1.cmp(&a.1),
            Some(2),
        );
        assert_eq!(counts, vec![("rebound", 3), ("steal", 2)]);
    }
}
