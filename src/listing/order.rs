//! Ordering of the root listing

use crate::tree::Node;

/// Apply `-t`/`-r` to `entries`, which arrive in insertion order.
///
/// Time sorting only happens together with `reverse`, and then yields
/// newest first. `-t` on its own leaves insertion order untouched. Both
/// quirks are what existing users see; `corrected-listing` swaps in
/// conventional `ls` ordering.
#[cfg(not(feature = "corrected-listing"))]
pub fn apply_order(entries: &mut [&Node], sort_by_time: bool, reverse: bool) {
    if sort_by_time && reverse {
        newest_first(entries);
    } else if reverse {
        entries.reverse();
    }
}

/// Apply `-t`/`-r` to `entries`: `-t` sorts newest first, `-r` flips the
/// resulting order.
#[cfg(feature = "corrected-listing")]
pub fn apply_order(entries: &mut [&Node], sort_by_time: bool, reverse: bool) {
    if sort_by_time {
        newest_first(entries);
    }
    if reverse {
        entries.reverse();
    }
}

/// Stable: entries with equal timestamps keep their relative order.
fn newest_first(entries: &mut [&Node]) {
    entries.sort_by(|a, b| b.time_modified.cmp(&a.time_modified));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> Vec<Node> {
        vec![
            Node::file("b", "-", 0, 200),
            Node::file("a", "-", 0, 100),
            Node::file("c", "-", 0, 300),
            Node::file("d", "-", 0, 100),
        ]
    }

    fn names(entries: &[&Node]) -> Vec<String> {
        entries.iter().map(|n| n.name.clone()).collect()
    }

    #[test]
    fn test_default_keeps_insertion_order() {
        let nodes = nodes();
        let mut entries: Vec<&Node> = nodes.iter().collect();
        apply_order(&mut entries, false, false);
        assert_eq!(names(&entries), ["b", "a", "c", "d"]);
    }

    #[test]
    fn test_reverse_only() {
        let nodes = nodes();
        let mut entries: Vec<&Node> = nodes.iter().collect();
        apply_order(&mut entries, false, true);
        assert_eq!(names(&entries), ["d", "c", "a", "b"]);
    }

    #[cfg(not(feature = "corrected-listing"))]
    #[test]
    fn test_time_and_reverse_is_newest_first() {
        let nodes = nodes();
        let mut entries: Vec<&Node> = nodes.iter().collect();
        apply_order(&mut entries, true, true);
        assert_eq!(names(&entries), ["c", "b", "a", "d"]);
    }

    #[cfg(not(feature = "corrected-listing"))]
    #[test]
    fn test_time_alone_does_not_sort() {
        let nodes = nodes();
        let mut entries: Vec<&Node> = nodes.iter().collect();
        apply_order(&mut entries, true, false);
        assert_eq!(names(&entries), ["b", "a", "c", "d"]);
    }

    #[cfg(feature = "corrected-listing")]
    #[test]
    fn test_corrected_time_ordering() {
        let nodes = nodes();
        let mut entries: Vec<&Node> = nodes.iter().collect();
        apply_order(&mut entries, true, false);
        assert_eq!(names(&entries), ["c", "b", "a", "d"]);

        let mut entries: Vec<&Node> = nodes.iter().collect();
        apply_order(&mut entries, true, true);
        assert_eq!(names(&entries), ["d", "a", "b", "c"]);
    }
}
