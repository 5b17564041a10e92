use std::cmp::Ordering;

/// Binary search for the boundary in a predicate-partitioned sequence.
///
/// All three methods assume the sequence is already partitioned with respect to the predicate (or
/// comparison) in use: the predicate answers one way on a contiguous prefix and the other way on
/// the remaining suffix. That precondition is the caller's responsibility - it is not detected,
/// and searching an unpartitioned sequence yields a wrong answer. It never yields a panic, an
/// out-of-bounds access or a hang, because every index is derived from the live bounds at each
/// step and the range shrinks on every iteration.
///
/// Absence of a match and an empty sequence are both answered with [`None`], never a sentinel
/// index. Each search costs `O(log n)` predicate evaluations.
pub trait BoundarySearch<T> {
    /// Finds the **first** element for which `predicate` is true, assuming the predicate is false
    /// on a prefix of the sequence and true on the rest.
    ///
    /// Returns the found index and a reference to the element there, or [`None`] if the sequence
    /// is empty or the predicate is true nowhere.
    ///
    /// # Examples
    /// ```
    /// # use ordered_collections::collections::search::BoundarySearch;
    /// let values = [1, 2, 3, 4, 4, 4, 5, 6, 7, 7, 7, 8, 10];
    ///
    /// assert_eq!(values.first_where(|v| *v > 4), Some((6, &5)));
    /// assert_eq!(values.first_where(|v| *v > 10), None);
    /// ```
    fn first_where<P: Fn(&T) -> bool>(&self, predicate: P) -> Option<(usize, &T)>;

    /// Finds the **last** element for which `predicate` is true, assuming the predicate is true on
    /// a prefix of the sequence and false on the rest. The mirror image of
    /// [`first_where`](BoundarySearch::first_where).
    ///
    /// # Examples
    /// ```
    /// # use ordered_collections::collections::search::BoundarySearch;
    /// let values = [1, 2, 3, 4, 4, 4, 5, 6, 7, 7, 7, 8, 10];
    ///
    /// assert_eq!(values.last_where(|v| *v < 5), Some((5, &4)));
    /// assert_eq!(values.last_where(|v| *v < 1), None);
    /// ```
    fn last_where<P: Fn(&T) -> bool>(&self, predicate: P) -> Option<(usize, &T)>;

    /// Finds an element for which `compare` answers [`Equal`](Ordering::Equal), assuming the
    /// sequence is sorted with respect to `compare`: [`Less`](Ordering::Less) for every element
    /// before the matches, [`Equal`](Ordering::Equal) for the matches, and
    /// [`Greater`](Ordering::Greater) for every element after them.
    ///
    /// When several elements compare equal, an **unspecified matching element** is returned - this
    /// is a find-any search, not a find-leftmost one. The upside of asking only for some match is
    /// that a multi-key comparison works directly, e.g. over a sequence sorted by date then name:
    /// `entries.search_by(|e| (e.date, &e.name).cmp(&(target_date, &target_name)))`.
    ///
    /// # Examples
    /// ```
    /// # use ordered_collections::collections::search::BoundarySearch;
    /// let values = [1, 2, 3, 4, 4, 4, 5, 6, 7, 7, 7, 8, 10];
    ///
    /// assert_eq!(values.search_by(|v| v.cmp(&8)), Some(&8));
    /// assert_eq!(values.search_by(|v| v.cmp(&9)), None);
    /// ```
    fn search_by<F: Fn(&T) -> Ordering>(&self, compare: F) -> Option<&T>;
}

impl<T> BoundarySearch<T> for [T] {
    fn first_where<P: Fn(&T) -> bool>(&self, predicate: P) -> Option<(usize, &T)> {
        if self.is_empty() {
            return None;
        }

        let mut low = 0;
        let mut high = self.len() - 1;

        while low <= high {
            let mid = low + (high - low) / 2;

            if predicate(&self[mid]) {
                if mid == 0 || !predicate(&self[mid - 1]) {
                    return Some((mid, &self[mid]));
                }
                high = mid;
            } else {
                low = mid + 1;
            }
        }

        None
    }

    fn last_where<P: Fn(&T) -> bool>(&self, predicate: P) -> Option<(usize, &T)> {
        if self.is_empty() {
            return None;
        }

        let mut low = 0;
        let mut high = self.len() - 1;

        while low <= high {
            let mid = low + (high - low) / 2;

            if predicate(&self[mid]) {
                if mid == high || !predicate(&self[mid + 1]) {
                    return Some((mid, &self[mid]));
                }
                low = mid + 1;
            } else if mid == 0 {
                // Nothing below index 0 left to try.
                return None;
            } else {
                high = mid - 1;
            }
        }

        None
    }

    fn search_by<F: Fn(&T) -> Ordering>(&self, compare: F) -> Option<&T> {
        let (_, element) = self.first_where(|e| compare(e) != Ordering::Less)?;

        if compare(element) == Ordering::Equal {
            Some(element)
        } else {
            None
        }
    }
}
