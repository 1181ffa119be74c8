use super::core::*;
use super::key::*;
use proptest::prelude::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_bucket_key_ascii() {
    assert_eq!(bucket_key("ana"), Some('A'));
    assert_eq!(bucket_key("Ana"), Some('A'));
    assert_eq!(bucket_key("zoe"), Some('Z'));
    assert_eq!(bucket_key("9lives"), Some('9'));
    assert_eq!(bucket_key("_x"), Some('_'));
}

#[test]
fn test_bucket_key_empty() {
    assert_eq!(bucket_key(""), None);
}

#[test]
fn test_bucket_key_non_ascii() {
    assert_eq!(bucket_key("ñandú"), Some('Ñ'));
    assert_eq!(bucket_key("élan"), Some('É'));
    // Expanding uppercase keeps the original character
    assert_eq!(bucket_key("ßtraße"), Some('ß'));
}

#[test]
fn test_ypogegrammeni_share_bucket_with_capital() {
    let pairs = [
        ('\u{1F80}', '\u{1F88}'),
        ('\u{1F87}', '\u{1F8F}'),
        ('\u{1F90}', '\u{1F98}'),
        ('\u{1F97}', '\u{1F9F}'),
        ('\u{1FA0}', '\u{1FA8}'),
        ('\u{1FA7}', '\u{1FAF}'),
        ('\u{1FB3}', '\u{1FBC}'),
        ('\u{1FC3}', '\u{1FCC}'),
        ('\u{1FF3}', '\u{1FFC}'),
    ];
    for (lower, upper) in pairs {
        assert_eq!(simple_uppercase(lower), upper, "{:?}", lower);
        assert_eq!(simple_uppercase(upper), upper, "{:?}", upper);
        assert_eq!(
            bucket_key(&lower.to_string()),
            bucket_key(&upper.to_string())
        );
    }
}

#[test]
fn test_ypogegrammeni_records_sorted_in_one_bucket() {
    let input = strings(&["\u{1FB3}b", "\u{1FBC}a"]);
    let buckets = Buckets::partition(input.clone());
    assert_eq!(buckets.keys().collect::<Vec<_>>(), vec!['\u{1FBC}']);
    assert_eq!(bucket_sort(&input), strings(&["\u{1FB3}b", "\u{1FBC}a"]));
}

#[test]
fn test_empty_input() {
    let input: Vec<String> = Vec::new();
    assert!(bucket_sort(&input).is_empty());
    let buckets = Buckets::partition(input);
    assert!(buckets.is_empty());
    assert_eq!(buckets.record_count(), 0);
}

#[test]
fn test_single_letter_buckets() {
    let input = strings(&["Carlos", "Ana", "Beto"]);
    let buckets = Buckets::partition(input.clone());
    assert_eq!(buckets.keys().collect::<Vec<_>>(), vec!['A', 'B', 'C']);
    assert_eq!(buckets.get('A').unwrap(), &["Ana".to_string()]);
    assert_eq!(buckets.get('B').unwrap(), &["Beto".to_string()]);
    assert_eq!(buckets.get('C').unwrap(), &["Carlos".to_string()]);
    assert_eq!(bucket_sort(&input), strings(&["Ana", "Beto", "Carlos"]));
}

#[test]
fn test_mixed_buckets() {
    let input = strings(&["Zoe", "ana", "Beto", "Ana", "ana"]);
    assert_eq!(
        bucket_sort(&input),
        strings(&["Ana", "ana", "ana", "Beto", "Zoe"])
    );
}

#[test]
fn test_case_shares_bucket_but_orders_ordinally() {
    let input = strings(&["Ana", "Beto", "ana"]);
    let buckets = Buckets::partition(input.clone());
    assert_eq!(buckets.len(), 2);
    assert_eq!(
        buckets.get('A').unwrap(),
        &["Ana".to_string(), "ana".to_string()]
    );
    assert_eq!(bucket_sort(&input), strings(&["Ana", "ana", "Beto"]));
}

#[test]
fn test_uppercase_sorts_before_lowercase_in_bucket() {
    let input = strings(&["bob", "Bob", "BOB", "bOb"]);
    assert_eq!(bucket_sort(&input), strings(&["BOB", "Bob", "bOb", "bob"]));
}

#[test]
fn test_partition_preserves_input_order_until_sorted() {
    let mut buckets = Buckets::partition(strings(&["Marta", "mario", "Manuel"]));
    assert_eq!(
        buckets.get('M').unwrap(),
        &strings(&["Marta", "mario", "Manuel"])[..]
    );
    buckets.sort_each();
    assert_eq!(
        buckets.get('M').unwrap(),
        &strings(&["Manuel", "Marta", "mario"])[..]
    );
}

#[test]
fn test_keys_follow_code_point_order() {
    let input = strings(&["zeta", "Émile", "42", "alpha", "_under"]);
    let buckets = Buckets::partition(input.clone());
    assert_eq!(
        buckets.keys().collect::<Vec<_>>(),
        vec!['4', 'A', 'Z', '_', 'É']
    );
    assert_eq!(
        bucket_sort(&input),
        strings(&["42", "alpha", "zeta", "_under", "Émile"])
    );
}

#[test]
fn test_empty_records_are_skipped() {
    let input = strings(&["Beto", "", "Ana"]);
    assert_eq!(bucket_sort(&input), strings(&["Ana", "Beto"]));
}

#[test]
fn test_input_is_untouched() {
    let input = strings(&["b", "a"]);
    let _ = bucket_sort(&input);
    assert_eq!(input, strings(&["b", "a"]));
}

#[test]
fn test_summary_preview() {
    let names = ["Ana", "Abel", "Alma", "Aldo", "Alba", "Ada", "Beto"];
    let mut buckets = Buckets::partition(names);
    buckets.sort_each();
    let summary = buckets.summary();
    assert_eq!(summary.len(), 2);

    assert_eq!(summary[0].key, 'A');
    assert_eq!(summary[0].len, 6);
    assert_eq!(summary[0].preview.len(), PREVIEW_LEN);
    assert_eq!(summary[0].preview[0], "Abel");
    assert!(summary[0].truncated());

    assert_eq!(summary[1].key, 'B');
    assert_eq!(summary[1].len, 1);
    assert!(!summary[1].truncated());
}

#[test]
fn test_merge_counts() {
    let buckets = Buckets::partition(["x", "Y", "y", "x"]);
    assert_eq!(buckets.record_count(), 4);
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets.merge().len(), 4);
}

fn record() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z][a-zA-Z ]{0,8}",
        "[0-9_áéñÑ][a-z]{0,4}",
        "\\PC{1,6}",
    ]
}

fn letter() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('\u{00C0}', '\u{024F}'),
        prop::char::range('\u{0370}', '\u{052F}'),
        prop::char::range('\u{1E00}', '\u{1FFF}'),
    ]
}

fn key_of(s: &str) -> char {
    bucket_key(s).unwrap()
}

proptest! {
    #[test]
    fn prop_output_is_permutation(input in prop::collection::vec(record(), 0..64)) {
        let mut out = bucket_sort(&input);
        let mut expected = input.clone();
        out.sort();
        expected.sort();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn prop_buckets_are_contiguous_and_sorted(input in prop::collection::vec(record(), 0..64)) {
        let out = bucket_sort(&input);
        for pair in out.windows(2) {
            let (ka, kb) = (key_of(&pair[0]), key_of(&pair[1]));
            prop_assert!(ka <= kb, "keys out of order: {:?} then {:?}", pair[0], pair[1]);
            if ka == kb {
                prop_assert!(pair[0] <= pair[1], "bucket out of order: {:?} then {:?}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn prop_lower_key_precedes_higher_key(input in prop::collection::vec(record(), 0..48)) {
        let out = bucket_sort(&input);
        for (i, a) in out.iter().enumerate() {
            for b in &out[i + 1..] {
                prop_assert!(key_of(a) <= key_of(b));
            }
        }
    }

    #[test]
    fn prop_sort_is_idempotent(input in prop::collection::vec(record(), 0..64)) {
        let once = bucket_sort(&input);
        let twice = bucket_sort(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_first_letter_case_keeps_bucket(c in letter(), rest in "[a-z]{0,4}") {
        let upper = simple_uppercase(c);
        let original = format!("{}{}", c, rest);
        let uppercased = format!("{}{}", upper, rest);
        prop_assert_eq!(bucket_key(&original), bucket_key(&uppercased));
        let buckets = Buckets::partition([original, uppercased]);
        prop_assert_eq!(buckets.len(), 1);
    }
}
