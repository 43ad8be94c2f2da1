//! Natural (alphanumeric-aware) ordering for node names.
//!
//! Names are split into alternating non-digit/digit runs and compared
//! run by run, with digit runs compared numerically. This orders
//! "h2" before "h10" where plain lexicographic order would not, and
//! every sorted enumeration in the crate goes through it.

use std::cmp::Ordering;

/// A single run of a name: either consecutive non-digit characters or
/// consecutive ASCII digits.
#[derive(Debug, PartialEq, Eq)]
enum Run<'a> {
    Text(&'a str),
    Digits(&'a str),
}

/// Split a name into alternating text/digit runs, always starting with
/// a (possibly empty) text run.
fn split_runs(name: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut rest = name;
    loop {
        let text_len = rest
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(rest.len());
        runs.push(Run::Text(&rest[..text_len]));
        rest = &rest[text_len..];
        if rest.is_empty() {
            break;
        }
        let digit_len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        runs.push(Run::Digits(&rest[..digit_len]));
        rest = &rest[digit_len..];
        if rest.is_empty() {
            break;
        }
    }
    runs
}

/// Compare two digit runs by numeric value without overflow: strip
/// leading zeros, then longer means larger, then compare digit-wise.
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Total natural order over names.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let runs_a = split_runs(a);
    let runs_b = split_runs(b);
    for (run_a, run_b) in runs_a.iter().zip(runs_b.iter()) {
        // Both run sequences alternate text/digits starting with text,
        // so runs at the same position always have the same kind.
        let ord = match (run_a, run_b) {
            (Run::Text(s), Run::Text(t)) => s.cmp(t),
            (Run::Digits(s), Run::Digits(t)) => cmp_digits(s, t),
            (Run::Digits(_), Run::Text(_)) => Ordering::Less,
            (Run::Text(_), Run::Digits(_)) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    runs_a.len().cmp(&runs_b.len())
}

/// Order a pair of names canonically: the naturally-lesser name first.
pub fn canonical_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if natural_cmp(a, b) == Ordering::Greater {
        (b, a)
    } else {
        (a, b)
    }
}

/// Sort names in place in natural order.
pub fn sort_natural(names: &mut [String]) {
    names.sort_by(|a, b| natural_cmp(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_runs_compare_numerically() {
        assert_eq!(natural_cmp("h2", "h10"), Ordering::Less);
        assert_eq!(natural_cmp("h10", "h2"), Ordering::Greater);
        assert_eq!(natural_cmp("s1", "s2"), Ordering::Less);
        assert_eq!(natural_cmp("s2", "s10"), Ordering::Less);
    }

    #[test]
    fn test_plain_text_compares_lexicographically() {
        assert_eq!(natural_cmp("h1", "s1"), Ordering::Less);
        assert_eq!(natural_cmp("h", "ha"), Ordering::Less);
        assert_eq!(natural_cmp("abc", "abc"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(natural_cmp("h1", "h1x"), Ordering::Less);
        assert_eq!(natural_cmp("h1s2", "h1s10"), Ordering::Less);
    }

    #[test]
    fn test_leading_zeros_are_numeric_ties() {
        assert_eq!(natural_cmp("h01", "h1"), Ordering::Equal);
        assert_eq!(natural_cmp("h001", "h2"), Ordering::Less);
    }

    #[test]
    fn test_digit_prefix_sorts_before_text() {
        // "1" tokenizes with an empty leading text run, which sorts
        // before any non-empty one.
        assert_eq!(natural_cmp("1", "a"), Ordering::Less);
    }

    #[test]
    fn test_canonical_pair() {
        assert_eq!(canonical_pair("s1", "h1"), ("h1", "s1"));
        assert_eq!(canonical_pair("h1", "s1"), ("h1", "s1"));
        assert_eq!(canonical_pair("h10", "h2"), ("h2", "h10"));
    }

    #[test]
    fn test_sort_natural() {
        let mut names = vec![
            "h10".to_string(),
            "h1".to_string(),
            "s1".to_string(),
            "h2".to_string(),
        ];
        sort_natural(&mut names);
        assert_eq!(names, vec!["h1", "h2", "h10", "s1"]);
    }
}
