//! Property-based tests for the page window and the page controller.

use bubbletea_paginate::controller::Controller;
use bubbletea_paginate::window::{compute_window, total_pages, WindowEntry};
use bubbletea_paginate::Error;
use proptest::prelude::*;
use rstest::*;

fn pages(window: &[WindowEntry]) -> Vec<usize> {
    window.iter().filter_map(WindowEntry::page).collect()
}

// ============================================================================
// Concrete layouts
// ============================================================================

#[rstest]
#[case(12, 1, "1 2 3")]
#[case(50, 1, "1 2 3 … 10")]
#[case(50, 2, "1 2 3 … 10")]
#[case(50, 3, "1 … 2 3 4 … 10")]
#[case(50, 5, "1 … 4 5 6 … 10")]
#[case(50, 8, "1 … 7 8 9 … 10")]
#[case(50, 9, "1 … 8 9 10")]
#[case(50, 10, "1 … 8 9 10")]
#[case(20, 3, "1 … 2 3 4")]
#[case(0, 1, "")]
fn test_window_layouts(#[case] total_items: usize, #[case] current: usize, #[case] expected: &str) {
    let window = compute_window(total_items, 5, current, 3).unwrap();
    let rendered: Vec<String> = window.iter().map(ToString::to_string).collect();
    assert_eq!(rendered.join(" "), expected);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
fn test_narrow_window_rejected(#[case] max_visible: usize) {
    assert_eq!(
        compute_window(50, 5, 1, max_visible),
        Err(Error::InvalidWindowSize { max_visible })
    );
}

#[rstest]
fn test_zero_page_size_rejected() {
    assert_eq!(compute_window(50, 0, 1, 3), Err(Error::InvalidPageSize));
    assert!(Controller::new(0).is_err());
}

// ============================================================================
// Property-Based Tests: compute_window
// ============================================================================

proptest! {
    /// The window is bounded: every rule emits at most `max_visible + 2`
    /// entries, and the middle layout exactly seven.
    #[rstest]
    fn prop_window_length_bounded(
        total_items in 0usize..5_000,
        page_size in 1usize..50,
        current in 0usize..200,
        max_visible in 3usize..12,
    ) {
        let window = compute_window(total_items, page_size, current, max_visible).unwrap();
        prop_assert!(window.len() <= (max_visible + 2).max(7));
    }

    /// Two ellipses are never adjacent, and the window never starts or ends
    /// with one.
    #[rstest]
    fn prop_ellipses_separated(
        total_items in 0usize..5_000,
        page_size in 1usize..50,
        current in 0usize..200,
        max_visible in 3usize..12,
    ) {
        let window = compute_window(total_items, page_size, current, max_visible).unwrap();
        for pair in window.windows(2) {
            prop_assert!(!(pair[0].is_ellipsis() && pair[1].is_ellipsis()));
        }
        if let (Some(first), Some(last)) = (window.first(), window.last()) {
            prop_assert!(!first.is_ellipsis());
            prop_assert!(!last.is_ellipsis());
        }
    }

    /// When pages are elided, the first and last pages are always shown.
    #[rstest]
    fn prop_window_anchored(
        total_items in 1usize..5_000,
        page_size in 1usize..50,
        current in 0usize..200,
        max_visible in 3usize..12,
    ) {
        let total = total_pages(total_items, page_size).unwrap();
        prop_assume!(total > max_visible);

        let window = compute_window(total_items, page_size, current, max_visible).unwrap();
        prop_assert_eq!(window.first().copied(), Some(WindowEntry::Page(1)));
        prop_assert_eq!(window.last().copied(), Some(WindowEntry::Page(total)));
    }

    /// Few enough pages are all shown, in order, without ellipsis.
    #[rstest]
    fn prop_small_totals_collapse(
        total_items in 1usize..60,
        page_size in 1usize..20,
        current in 0usize..20,
        max_visible in 3usize..12,
    ) {
        let total = total_pages(total_items, page_size).unwrap();
        prop_assume!(total <= max_visible);

        let window = compute_window(total_items, page_size, current, max_visible).unwrap();
        let expected: Vec<WindowEntry> = (1..=total).map(WindowEntry::Page).collect();
        prop_assert_eq!(window, expected);
    }

    /// Page numbers strictly increase, stay in range and include the
    /// (clamped) current page.
    #[rstest]
    fn prop_pages_increasing_and_in_range(
        total_items in 1usize..5_000,
        page_size in 1usize..50,
        current in 0usize..200,
        max_visible in 3usize..12,
    ) {
        let total = total_pages(total_items, page_size).unwrap();
        let window = compute_window(total_items, page_size, current, max_visible).unwrap();
        let shown = pages(&window);

        for pair in shown.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        prop_assert!(shown.iter().all(|&p| (1..=total).contains(&p)));
        prop_assert!(shown.contains(&current.clamp(1, total)));
    }

    /// Out-of-range current pages behave like the nearest valid page.
    #[rstest]
    fn prop_current_page_clamped(
        total_items in 1usize..5_000,
        page_size in 1usize..50,
        overshoot in 1usize..100,
    ) {
        let total = total_pages(total_items, page_size).unwrap();
        prop_assert_eq!(
            compute_window(total_items, page_size, 0, 3).unwrap(),
            compute_window(total_items, page_size, 1, 3).unwrap()
        );
        prop_assert_eq!(
            compute_window(total_items, page_size, total + overshoot, 3).unwrap(),
            compute_window(total_items, page_size, total, 3).unwrap()
        );
    }

    /// Same inputs, same window.
    #[rstest]
    fn prop_window_deterministic(
        total_items in 0usize..5_000,
        page_size in 1usize..50,
        current in 0usize..200,
    ) {
        prop_assert_eq!(
            compute_window(total_items, page_size, current, 3).unwrap(),
            compute_window(total_items, page_size, current, 3).unwrap()
        );
    }
}

// ============================================================================
// Property-Based Tests: Controller
// ============================================================================

proptest! {
    /// A filter change that removes the current page returns to page 1.
    #[rstest]
    fn prop_filter_change_resets_stale_page(
        total_items in 1usize..500,
        page_size in 1usize..20,
        target in 1usize..100,
        new_total in 0usize..500,
    ) {
        let mut controller = Controller::new(page_size).unwrap().with_total_items(total_items);
        controller.go_to(target);
        let before = controller.current_page();

        controller.on_filter_changed(new_total);

        if before > controller.total_pages() {
            prop_assert_eq!(controller.current_page(), 1);
            prop_assert_eq!(controller.start_index(), 0);
        } else {
            prop_assert_eq!(controller.current_page(), before);
        }
    }

    /// Navigation never leaves `[1, max(total_pages, 1)]`.
    #[rstest]
    fn prop_navigation_stays_in_range(
        total_items in 0usize..500,
        page_size in 1usize..20,
        moves in prop::collection::vec(0u8..5, 0..40),
    ) {
        let mut controller = Controller::new(page_size).unwrap().with_total_items(total_items);
        let last = controller.total_pages().max(1);

        for step in moves {
            match step {
                0 => controller.next(),
                1 => controller.previous(),
                2 => controller.first(),
                3 => controller.last(),
                _ => controller.go_to(usize::MAX),
            }
            prop_assert!((1..=last).contains(&controller.current_page()));
        }
    }

    /// Page slices partition the items in order.
    #[rstest]
    fn prop_page_slices_partition_items(
        total_items in 0usize..300,
        page_size in 1usize..20,
    ) {
        let items: Vec<usize> = (0..total_items).collect();
        let mut controller = Controller::new(page_size).unwrap().with_total_items(total_items);

        let mut seen = Vec::new();
        for page in 1..=controller.total_pages() {
            controller.go_to(page);
            let slice = controller.page_slice(&items);
            prop_assert!(!slice.is_empty());
            prop_assert!(slice.len() <= page_size);
            seen.extend_from_slice(slice);
        }
        prop_assert_eq!(seen, items);
    }
}
