//! Head/tails (natural breaks) classification
//!
//! Skewed score distributions split naturally at the mean: the strictly
//! above-mean "head" holds the extreme elements, the rest is the "tail".
//! Recursing on the head peels away everything but the most extreme
//! cluster.

/// Recursively refine `items` down to the above-mean head group.
///
/// Terminates when the head is empty (the current collection is returned
/// unchanged - every element is equally extreme), stops strictly shrinking,
/// or has at most one element. Relative order of the surviving elements is
/// preserved; nothing is re-sorted.
pub fn head_tails_breaks<T, F>(score: F, items: Vec<T>) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    let mut current = items;
    loop {
        if current.len() <= 1 {
            return current;
        }
        let len = current.len();
        let mean = current.iter().map(&score).sum::<f64>() / len as f64;
        let (head, tail): (Vec<T>, Vec<T>) = current.into_iter().partition(|x| score(x) > mean);
        if head.is_empty() {
            return tail;
        }
        if head.len() == len {
            return head;
        }
        current = head;
    }
}
