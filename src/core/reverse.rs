/// Reverses `items` in place with two converging indices.
///
/// Performs exactly `items.len() / 2` swaps and no allocation. Empty and
/// single-element slices are left untouched.
pub fn reverse_in_place<T>(items: &mut [T]) {
    if items.is_empty() {
        return;
    }

    let mut left = 0;
    let mut right = items.len() - 1;
    while left < right {
        items.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// Owned variant of [`reverse_in_place`]; reuses the vector's storage.
pub fn reversed<T>(mut items: Vec<T>) -> Vec<T> {
    reverse_in_place(&mut items);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Vec<i64>> {
        vec![
            vec![],
            vec![7],
            vec![1, 2],
            vec![1, 2, 3],
            vec![1, 2, 3, 4, 5],
            vec![-3, 0, 2, -1],
            vec![1, 1, 2, 2, 3, 3],
            vec![i64::MIN, 0, i64::MAX],
            (0..101).collect(),
        ]
    }

    #[test]
    fn test_reverse_scenarios() {
        let mut v = vec![1, 2, 3, 4, 5];
        reverse_in_place(&mut v);
        assert_eq!(v, vec![5, 4, 3, 2, 1]);

        let mut v = vec![-3, 0, 2, -1];
        reverse_in_place(&mut v);
        assert_eq!(v, vec![-1, 2, 0, -3]);

        let mut v = vec![1, 1, 2, 2, 3, 3];
        reverse_in_place(&mut v);
        assert_eq!(v, vec![3, 3, 2, 2, 1, 1]);
    }

    #[test]
    fn test_fixed_points() {
        let mut empty: Vec<i64> = vec![];
        reverse_in_place(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![7];
        reverse_in_place(&mut single);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn test_involution() {
        for original in samples() {
            let mut v = original.clone();
            reverse_in_place(&mut v);
            reverse_in_place(&mut v);
            assert_eq!(v, original);
        }
    }

    #[test]
    fn test_index_mapping_and_length() {
        for original in samples() {
            let out = reversed(original.clone());
            assert_eq!(out.len(), original.len());
            for i in 0..out.len() {
                assert_eq!(out[i], original[original.len() - 1 - i]);
            }
        }
    }

    #[test]
    fn test_multiset_preserved() {
        for original in samples() {
            let mut out = reversed(original.clone());
            let mut expected = original;
            out.sort_unstable();
            expected.sort_unstable();
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn test_generic_over_element_type() {
        let mut words = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        reverse_in_place(&mut words);
        assert_eq!(words, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_reuses_storage() {
        let mut v = Vec::with_capacity(16);
        v.extend([1i64, 2, 3]);
        let ptr = v.as_ptr();
        let out = reversed(v);
        assert_eq!(out.as_ptr(), ptr);
        assert_eq!(out, vec![3, 2, 1]);
    }
}
