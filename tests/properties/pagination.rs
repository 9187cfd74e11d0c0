//! Property tests for cursor-following pagination.

use proptest::prelude::*;

use fnpilot::domain::services::{collect_pages, Page};

/// Split `items` into pages of the given sizes, chained by index markers.
fn paged(items: &[u32], sizes: &[usize], empty_final_marker: bool) -> Vec<Page<u32>> {
    let mut pages = Vec::new();
    let mut start = 0;
    for (i, size) in sizes.iter().enumerate() {
        let end = (start + size).min(items.len());
        let chunk = items[start..end].to_vec();
        start = end;
        let last = i + 1 == sizes.len();
        pages.push(match (last, empty_final_marker) {
            (false, _) => Page::with_marker(chunk, format!("m{}", i + 1)),
            (true, true) => Page::with_marker(chunk, ""),
            (true, false) => Page::last(chunk),
        });
    }
    pages
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every item of every page is returned once, in page order.
    #[test]
    fn property_collect_pages_is_complete(
        sizes in proptest::collection::vec(0usize..6, 1..8),
        empty_final_marker in any::<bool>(),
    ) {
        let total: usize = sizes.iter().sum();
        let items: Vec<u32> = (0..total as u32).collect();
        let pages = paged(&items, &sizes, empty_final_marker);

        let mut calls = 0;
        let collected = collect_pages(|marker: Option<&str>| {
            let index = match marker {
                None => 0,
                Some(m) => m.trim_start_matches('m').parse::<usize>().unwrap(),
            };
            calls += 1;
            Ok::<_, String>(pages[index].clone())
        })
        .unwrap();

        prop_assert_eq!(collected, items);
        prop_assert_eq!(calls, sizes.len());
    }

    /// PROPERTY: the first error aborts the listing.
    #[test]
    fn property_error_stops_collection(fail_at in 0usize..5) {
        let mut calls = 0;
        let result = collect_pages(|_marker: Option<&str>| {
            calls += 1;
            if calls > fail_at {
                Err("boom".to_string())
            } else {
                Ok(Page::with_marker(vec![calls], "next"))
            }
        });

        prop_assert_eq!(result, Err("boom".to_string()));
        prop_assert_eq!(calls, fail_at + 1);
    }
}

#[test]
fn three_pages_of_two_two_one() {
    let pages = paged(&[1, 2, 3, 4, 5], &[2, 2, 1], true);

    let collected =
        collect_pages(|marker: Option<&str>| -> Result<Page<u32>, String> {
            Ok(match marker {
                None => pages[0].clone(),
                Some("m1") => pages[1].clone(),
                Some("m2") => pages[2].clone(),
                Some(other) => panic!("unexpected marker {other}"),
            })
        })
        .unwrap();

    assert_eq!(collected, vec![1, 2, 3, 4, 5]);
}
