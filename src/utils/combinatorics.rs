// Subset and permutation enumeration for the exhaustive route search

/// Generates all 2^n subsets of a slice by recursive split on the first
/// element. Subsets containing the first element come before those without
/// it; the search relies on this order to break cost ties deterministically.
pub fn subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let (first, rest) = match items.split_first() {
        Some(split) => split,
        None => return vec![Vec::new()],
    };

    let without_first = subsets(rest);
    let mut result = Vec::with_capacity(without_first.len() * 2);

    for subset in &without_first {
        let mut with_first = Vec::with_capacity(subset.len() + 1);
        with_first.push(first.clone());
        with_first.extend_from_slice(subset);
        result.push(with_first);
    }
    result.extend(without_first);

    result
}

/// Generates all n! orderings of a slice: each element in turn is removed
/// and prepended to every permutation of the remainder
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut result = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let item = rest.remove(i);

        for mut tail in permutations(&rest) {
            let mut perm = Vec::with_capacity(items.len());
            perm.push(item.clone());
            perm.append(&mut tail);
            result.push(perm);
        }
    }

    result
}
