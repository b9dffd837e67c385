//! Tests for the adaptive list rendering engine

use super::mode::{DEFAULT_VIRTUALIZATION_THRESHOLD, RenderMode, select_mode};
use super::nav::NavStack;
use super::pager::{MAX_PAGE_SIZE, Pager};
use super::range::VisibleRangeTracker;
use super::session::{ListKnobs, ListSession};
use super::window::{Viewport, compute_window, max_scroll_offset, total_virtual_height, visible_rows};

fn knobs(page_size: usize, threshold: usize, overscan: usize, row_height: u32) -> ListKnobs {
    ListKnobs {
        page_size,
        virtualization_threshold: threshold,
        overscan,
        row_height,
    }
}

// ==================== Mode Selection Tests ====================

#[test]
fn test_select_mode_below_threshold() {
    assert_eq!(select_mode(0, 50), RenderMode::Paginated);
    assert_eq!(select_mode(30, 50), RenderMode::Paginated);
    assert_eq!(select_mode(49, 50), RenderMode::Paginated);
}

#[test]
fn test_select_mode_boundary_is_paginated() {
    // total == threshold stays paginated
    assert_eq!(select_mode(50, 50), RenderMode::Paginated);
    assert_eq!(select_mode(1, 1), RenderMode::Paginated);
}

#[test]
fn test_select_mode_above_threshold() {
    assert_eq!(select_mode(51, 50), RenderMode::Windowed);
    assert_eq!(select_mode(5000, 50), RenderMode::Windowed);
    assert_eq!(select_mode(2, 1), RenderMode::Windowed);
}

#[test]
fn test_default_threshold() {
    assert_eq!(DEFAULT_VIRTUALIZATION_THRESHOLD, 50);
}

// ==================== Window Geometry Tests ====================

#[test]
fn test_window_concrete_scenario() {
    // n=200, row=80, viewport=600, overscan=5, offset=1600
    let viewport = Viewport {
        scroll_offset: 1600,
        height: 600,
    };
    let w = compute_window(200, 80, viewport, 5).unwrap();
    assert_eq!(w.start_index, 15);
    assert_eq!(w.end_index, 33);
    assert_eq!(w.top_offset, 1200);
}

#[test]
fn test_window_empty_collection() {
    let viewport = Viewport {
        scroll_offset: 0,
        height: 600,
    };
    assert!(compute_window(0, 80, viewport, 5).is_none());
    assert_eq!(total_virtual_height(0, 80), 0);
}

#[test]
fn test_window_clamped_at_top() {
    let viewport = Viewport {
        scroll_offset: 0,
        height: 600,
    };
    let w = compute_window(200, 80, viewport, 5).unwrap();
    assert_eq!(w.start_index, 0);
    assert_eq!(w.top_offset, 0);
}

#[test]
fn test_window_clamped_at_bottom() {
    let viewport = Viewport {
        scroll_offset: max_scroll_offset(200, 80, 600),
        height: 600,
    };
    let w = compute_window(200, 80, viewport, 5).unwrap();
    assert_eq!(w.end_index, 199);
    assert!(w.start_index <= 199);
}

#[test]
fn test_window_covers_all_visible_rows() {
    // Every partially visible row is inside the window, with at most
    // `overscan` extra on each side, for a sweep of offsets.
    let n = 500;
    let row = 3u32;
    let overscan = 5;
    for offset in (0..max_scroll_offset(n, row, 40)).step_by(7) {
        let viewport = Viewport {
            scroll_offset: offset,
            height: 40,
        };
        let w = compute_window(n, row, viewport, overscan).unwrap();
        let (first_visible, end_visible) = visible_rows(n, row, viewport).unwrap();
        assert!(w.start_index <= first_visible);
        assert!(w.end_index + 1 >= end_visible);
        assert!(first_visible - w.start_index <= overscan);
        assert!(w.end_index + 1 - end_visible <= overscan + 1);
        assert!(w.end_index < n);
    }
}

#[test]
fn test_virtual_height_invariant_under_scroll() {
    let h = total_virtual_height(200, 80);
    assert_eq!(h, 16_000);
    // Scrolling never changes it; only n does.
    assert_eq!(total_virtual_height(199, 80), 15_920);
}

#[test]
fn test_window_row_height_zero_treated_as_one() {
    let viewport = Viewport {
        scroll_offset: 10,
        height: 5,
    };
    let w = compute_window(100, 0, viewport, 0).unwrap();
    assert_eq!(w.start_index, 10);
    assert_eq!(w.end_index, 15);
}

// ==================== Visible Range Tracker Tests ====================

#[test]
fn test_visible_range_concrete() {
    let viewport = Viewport {
        scroll_offset: 1600,
        height: 600,
    };
    let mut tracker = VisibleRangeTracker::new();
    let r = tracker.on_frame(1, 200, 80, viewport).unwrap();
    assert_eq!(r.start, 21);
    assert_eq!(r.end, 28);
    assert_eq!(r.total, 200);
    assert_eq!(r.label(), "21-28 of 200");
}

#[test]
fn test_visible_range_coalesced_per_frame() {
    let mut tracker = VisibleRangeTracker::new();
    let v1 = Viewport {
        scroll_offset: 0,
        height: 600,
    };
    let first = tracker.on_frame(7, 200, 80, v1).unwrap();

    // Same frame, new offset: the intermediate sample is dropped.
    let v2 = Viewport {
        scroll_offset: 1600,
        height: 600,
    };
    let same_frame = tracker.on_frame(7, 200, 80, v2).unwrap();
    assert_eq!(same_frame, first);

    // Next frame picks up the latest offset.
    let next_frame = tracker.on_frame(8, 200, 80, v2).unwrap();
    assert_eq!(next_frame.start, 21);
}

#[test]
fn test_visible_range_empty_collection() {
    let mut tracker = VisibleRangeTracker::new();
    let viewport = Viewport {
        scroll_offset: 0,
        height: 600,
    };
    assert!(tracker.on_frame(1, 0, 80, viewport).is_none());
    assert!(tracker.current().is_none());
}

// ==================== Pager Tests ====================

#[test]
fn test_pager_concrete_scenario() {
    // n=30, page_size=20: page 1 shows 1-20, page 2 shows 21-30
    let mut pager = Pager::new(30, 20);
    assert_eq!(pager.total_pages(), 2);
    assert_eq!(pager.offset(), 0);
    assert_eq!(pager.range_label(), "1-20 of 30");
    assert!(!pager.has_prev());
    assert!(pager.has_next());

    assert!(pager.next_page());
    assert_eq!(pager.offset(), 20);
    assert_eq!(pager.range_label(), "21-30 of 30");
    assert!(pager.has_prev());
    assert!(!pager.has_next());

    // Next is a no-op on the last page
    assert!(!pager.next_page());
    assert_eq!(pager.page(), 1);
}

#[test]
fn test_pager_prev_clamped_at_first_page() {
    let mut pager = Pager::new(30, 20);
    assert!(!pager.prev_page());
    assert_eq!(pager.page(), 0);
}

#[test]
fn test_pager_empty_collection() {
    let pager = Pager::new(0, 20);
    assert_eq!(pager.total_pages(), 1);
    assert!(!pager.has_next());
    assert_eq!(pager.range_label(), "0 of 0");
}

#[test]
fn test_pager_page_size_clamped() {
    let pager = Pager::new(1000, 500);
    assert_eq!(pager.page_size(), MAX_PAGE_SIZE);
    let pager = Pager::new(10, 0);
    assert_eq!(pager.page_size(), 1);
}

#[test]
fn test_pager_shrinking_total_clamps_page() {
    let mut pager = Pager::new(100, 20);
    while pager.next_page() {}
    assert_eq!(pager.page(), 4);
    pager.set_total(30);
    assert_eq!(pager.page(), 1);
}

// ==================== Navigation Stack Tests ====================

#[test]
fn test_nav_stack_round_trip() {
    let mut stack = NavStack::new();
    stack.push("events", 400);
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.pop("events"), Some(400));
    assert!(stack.is_empty());
}

#[test]
fn test_nav_stack_nested_levels_restore_independently() {
    let mut stack = NavStack::new();
    stack.push("entity-events", 400);
    stack.push("event-clips", 720);
    assert_eq!(stack.depth(), 2);

    // Closing in reverse order restores each level's own offset.
    assert_eq!(stack.pop("event-clips"), Some(720));
    assert_eq!(stack.pop("entity-events"), Some(400));
}

#[test]
fn test_nav_stack_pop_without_frame_is_none() {
    let mut stack = NavStack::new();
    assert_eq!(stack.pop("events"), None);
    stack.push("events", 10);
    assert_eq!(stack.pop("other"), None);
    assert_eq!(stack.depth(), 1);
}

#[test]
fn test_nav_stack_pop_matches_most_recent_for_list() {
    let mut stack = NavStack::new();
    stack.push("events", 100);
    stack.push("events", 200);
    assert_eq!(stack.pop("events"), Some(200));
    assert_eq!(stack.pop("events"), Some(100));
}

#[test]
fn test_nav_stack_forget_drops_all_frames_for_list() {
    let mut stack = NavStack::new();
    stack.push("events", 100);
    stack.push("clips", 50);
    stack.push("events", 200);
    stack.forget("events");
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.pop("events"), None);
    assert_eq!(stack.pop("clips"), Some(50));
}

// ==================== List Session Tests ====================

fn windowed_session(n: usize) -> ListSession<usize> {
    let k = knobs(50, 50, 5, 80);
    let first: Vec<usize> = (0..n.min(k.page_size)).collect();
    let mut session = ListSession::open("events", first, n, k);
    // Finish materializing the collection the way the app loop would.
    while let Some(req) = session.fill_request() {
        let end = (req.offset + req.limit).min(n);
        let page: Vec<usize> = (req.offset..end).collect();
        assert!(session.apply_fetch(req.generation, req.offset, page, n));
    }
    session
}

#[test]
fn test_session_mode_fixed_at_open() {
    let session = windowed_session(200);
    assert_eq!(session.mode(), RenderMode::Windowed);
    assert_eq!(session.len(), 200);

    let small = ListSession::<usize>::open("events", (0..30).collect(), 30, knobs(20, 50, 5, 80));
    assert_eq!(small.mode(), RenderMode::Paginated);
}

#[test]
fn test_session_mode_does_not_flap_after_removals() {
    let mut session = windowed_session(51);
    assert_eq!(session.mode(), RenderMode::Windowed);
    session.remove_row(0);
    // 50 items is at the threshold, but the open-time decision stands.
    assert_eq!(session.total(), 50);
    assert_eq!(session.mode(), RenderMode::Windowed);
}

#[test]
fn test_session_window_concrete_scenario() {
    let mut session = windowed_session(200);
    session.set_viewport_height(600);
    session.scroll_to(1600);

    let w = session.window().unwrap();
    assert_eq!(w.start_index, 15);
    assert_eq!(w.end_index, 33);
    assert_eq!(w.top_offset, 1200);
    assert_eq!(session.virtual_height(), 16_000);

    let r = session.visible_range(1).unwrap();
    assert_eq!((r.start, r.end, r.total), (21, 28, 200));
}

#[test]
fn test_session_stale_fetch_discarded() {
    let k = knobs(20, 50, 5, 80);
    let mut session = ListSession::open("events", (0..20).collect::<Vec<usize>>(), 30, k);
    assert_eq!(session.mode(), RenderMode::Paginated);

    let first = session.next_page().unwrap();
    // A newer request supersedes the in-flight one.
    let second = session.prev_page().unwrap();
    assert!(!session.apply_fetch(first.generation, first.offset, vec![99; 10], 30));
    assert_eq!(session.items()[0], 0);
    assert!(session.apply_fetch(second.generation, second.offset, (0..20).collect(), 30));
    assert!(!session.loading());
}

#[test]
fn test_session_page_change_offsets() {
    let k = knobs(20, 50, 5, 80);
    let mut session = ListSession::open("events", (0..20).collect::<Vec<usize>>(), 30, k);

    let req = session.next_page().unwrap();
    assert_eq!(req.offset, 20);
    assert_eq!(req.limit, 20);
    assert!(session.loading());
    assert!(session.apply_fetch(req.generation, req.offset, (20..30).collect(), 30));
    assert_eq!(session.len(), 10);

    // Already on the last page
    assert!(session.next_page().is_none());
}

#[test]
fn test_session_removal_keeps_scroll_offset() {
    let mut session = windowed_session(200);
    session.set_viewport_height(600);
    session.scroll_to(1600);

    let removed = session.remove_row(20);
    assert_eq!(removed, Some(20));
    assert_eq!(session.total(), 199);
    assert_eq!(session.len(), 199);
    assert_eq!(session.viewport().scroll_offset, 1600);

    // Re-windowing after the shrink must not go out of bounds.
    let w = session.window().unwrap();
    assert!(w.end_index < session.len());
}

#[test]
fn test_session_removal_at_tail_rewindows_without_panic() {
    let mut session = windowed_session(51);
    session.set_viewport_height(600);
    session.scroll_to(session.max_scroll());

    session.remove_row(50);
    assert_eq!(session.len(), 50);
    let w = session.window().unwrap();
    assert_eq!(w.end_index, 49);
}

#[test]
fn test_session_refetch_covers_current_region() {
    let mut session = windowed_session(200);
    session.set_viewport_height(600);
    session.scroll_to(1600); // first visible row 20

    let req = session.refetch_request();
    assert_eq!(req.offset, 0); // page of 50 containing row 20
    assert_eq!(req.limit, 50);

    session.scroll_to(8000); // first visible row 100
    let req = session.refetch_request();
    assert_eq!(req.offset, 100);
}

#[test]
fn test_session_refetch_splices_in_place() {
    let mut session = windowed_session(200);
    session.set_viewport_height(600);
    session.scroll_to(8000);

    let req = session.refetch_request();
    let page: Vec<usize> = (1000..1050).collect();
    assert!(session.apply_fetch(req.generation, req.offset, page, 200));
    assert_eq!(session.len(), 200);
    assert_eq!(session.items()[100], 1000);
    assert_eq!(session.items()[99], 99);
    assert_eq!(session.items()[150], 150);
}

#[test]
fn test_session_scroll_clamped() {
    let mut session = windowed_session(200);
    session.set_viewport_height(600);
    session.scroll_by(-100);
    assert_eq!(session.viewport().scroll_offset, 0);
    session.scroll_by(1_000_000);
    assert_eq!(session.viewport().scroll_offset, session.max_scroll());
    assert_eq!(session.max_scroll(), 16_000 - 600);
}

#[test]
fn test_session_selection_scrolls_into_view() {
    let mut session = windowed_session(200);
    session.set_viewport_height(600);

    session.set_selected_index(100);
    let viewport = session.viewport();
    let row_top = 100 * 80;
    let row_bottom = row_top + 80;
    assert!(viewport.scroll_offset <= row_top as u64);
    assert!(viewport.scroll_offset + 600 >= row_bottom as u64);

    // Selecting an already visible row does not move the viewport.
    let before = session.viewport().scroll_offset;
    session.set_selected_index(99);
    assert_eq!(session.viewport().scroll_offset, before);
}

// ==================== Scroll Restoration Tests ====================

#[test]
fn test_restore_round_trip_through_nested_views() {
    // List A at offset 400; detail B opens, then nested C inside B;
    // closing C then B must land A back at exactly 400.
    let mut session = windowed_session(200);
    session.set_viewport_height(600);
    session.scroll_to(400);
    let mut stack = NavStack::new();

    stack.push(session.list_id(), session.viewport().scroll_offset);
    // ...child B open; nested C opens and closes without touching A...
    session.scroll_to(0); // whatever happened to the surface meanwhile

    let restored = stack.pop("events").expect("frame pushed at open");
    session.schedule_restore(restored);
    session.begin_frame();
    assert_eq!(session.viewport().scroll_offset, 400);
}

#[test]
fn test_restore_applies_on_next_frame_only() {
    let mut session = windowed_session(200);
    session.set_viewport_height(600);
    session.scroll_to(100);

    session.schedule_restore(1600);
    assert_eq!(session.viewport().scroll_offset, 100);
    session.begin_frame();
    assert_eq!(session.viewport().scroll_offset, 1600);
    // One-shot: later frames leave the offset alone.
    session.scroll_to(0);
    session.begin_frame();
    assert_eq!(session.viewport().scroll_offset, 0);
}

#[test]
fn test_restore_clamps_to_shrunk_collection() {
    let mut session = windowed_session(200);
    session.set_viewport_height(600);

    // Collection shrank while the child view was open.
    for _ in 0..150 {
        session.remove_row(0);
    }
    session.schedule_restore(16_000);
    session.begin_frame();
    assert_eq!(session.viewport().scroll_offset, session.max_scroll());
}
