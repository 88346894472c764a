//! Small helpers shared by the models and the XML layer.

/// Returns `true` when the string is present and not blank.
pub fn is_str_valid(value: Option<&str>) -> bool {
    value.map(|s| !s.trim().is_empty()).unwrap_or(false)
}

/// Suffix used to pluralise a noun for the given count.
pub fn plural_suffix(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Suffix used to pluralise a noun describing every item of a collection.
pub fn plural_suffix_for<T>(items: &[T]) -> &'static str {
    if items.len() == 1 {
        ""
    } else {
        "s"
    }
}

/// Checks that every item of `expected` appears in `checking`.
pub fn are_all_in_collection<T: PartialEq>(checking: &[T], expected: &[T]) -> bool {
    expected.iter().all(|item| checking.contains(item))
}

/// Order-independent comparison of two collections treated as sets.
pub fn same_members<T: PartialEq>(left: &[T], right: &[T]) -> bool {
    are_all_in_collection(left, right) && are_all_in_collection(right, left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_not_valid() {
        assert!(is_str_valid(Some("Darek")));
        assert!(!is_str_valid(Some("   ")));
        assert!(!is_str_valid(Some("")));
        assert!(!is_str_valid(None));
    }

    #[test]
    fn pluralises_everything_but_one() {
        assert_eq!(plural_suffix(1), "");
        assert_eq!(plural_suffix(0), "s");
        assert_eq!(plural_suffix(-1), "s");
        assert_eq!(plural_suffix(5), "s");
        assert_eq!(plural_suffix_for(&["Thor"]), "");
        assert_eq!(plural_suffix_for::<&str>(&[]), "s");
    }

    #[test]
    fn collection_membership_ignores_order() {
        let drafted = ["Loki", "Thor", "Ninja"];
        assert!(are_all_in_collection(&drafted, &["Ninja", "Loki"]));
        assert!(!are_all_in_collection(&drafted, &["Santa"]));
        assert!(same_members(&drafted, &["Ninja", "Thor", "Loki"]));
        assert!(!same_members(&drafted, &["Ninja", "Thor"]));
    }
}
