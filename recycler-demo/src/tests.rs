use crate::*;

use recycler::{
    Adapter, Color, Error, ItemAnimator, ItemDecoration, Orientation, Rect, ScrollState,
};

struct Fixed(Vec<ImageItem>);

impl DataSource<ImageItem> for Fixed {
    fn items(&self) -> Vec<ImageItem> {
        self.0.clone()
    }
}

fn images(heights: &[u32]) -> Fixed {
    Fixed(
        heights
            .iter()
            .enumerate()
            .map(|(i, &height)| ImageItem {
                url: format!("img{i}"),
                height,
            })
            .collect(),
    )
}

fn small_config() -> DemoConfig {
    DemoConfig::new().with_viewport(Rect {
        main: 300,
        cross: 200,
    })
}

#[test]
fn text_data_labels_items_in_order() {
    let items = TextData::default().items();
    assert_eq!(items.len(), 30);
    assert_eq!(items[0], "item 0");
    assert_eq!(items[29], "item 29");
    assert_eq!(TextData::from_config(&DemoConfig::new().with_text_items(3)).items().len(), 3);
}

#[test]
fn image_heights_are_deterministic_and_in_range() {
    let data = ImageData::new(50, 100, 300, 9);
    let a = data.items();
    let b = data.items();
    assert_eq!(a, b);
    assert!(a.iter().all(|item| (100..300).contains(&item.height)));
    assert!(a.iter().any(|item| item.height != a[0].height));

    let flat = ImageData::new(4, 120, 120, 9).items();
    assert!(flat.iter().all(|item| item.height == 120));
    assert_ne!(ImageData::new(50, 100, 300, 10).items(), a);
}

#[test]
fn single_toast_keeps_only_the_newest_message() {
    let toast = SingleToast::new();
    assert_eq!(toast.current(), None);
    toast.show("one");
    toast.show("two");
    assert_eq!(toast.current().as_deref(), Some("two"));
    assert_eq!(toast.shown(), 2);
}

#[test]
fn list_click_reports_position_and_data() {
    let config = small_config();
    let mut screen = ListScreen::new(&config, &TextData::from_config(&config), SingleToast::new())
        .unwrap();
    assert_eq!(screen.title(), "Vertical list (items are clickable)");

    screen.click(3).unwrap();
    assert_eq!(
        screen.feedback().current().as_deref(),
        Some("clicked position: 3; data: item 3")
    );
    assert_eq!(screen.recycler_view().item_count(), 30);

    screen.click(0).unwrap();
    assert_eq!(
        screen.feedback().current().as_deref(),
        Some("clicked position: 0; data: item 0")
    );
    assert_eq!(screen.feedback().shown(), 2);
}

#[test]
fn list_rows_fill_the_viewport_with_dividers() {
    let config = small_config().with_divider(2, Color(0xFF11_2233));
    let mut screen =
        ListScreen::new(&config, &TextData::new(10), SingleToast::new()).unwrap();

    // 48px rows + 2px dividers in a 300px viewport.
    let snapshot = screen.snapshot();
    assert_eq!(snapshot, ["item 0", "item 1", "item 2", "item 3", "item 4", "item 5"]);
    assert_eq!(screen.recycler_view().total_size(), 10 * 48 + 9 * 2);

    let draws = screen.recycler_view().draw();
    assert_eq!(draws.len(), 6);

    screen.scroll_by(10_000).unwrap();
    assert_eq!(screen.snapshot().last().map(String::as_str), Some("item 9"));
    // The last row has no divider.
    assert_eq!(screen.recycler_view().draw().len(), screen.snapshot().len() - 1);
}

#[test]
fn list_click_outside_viewport_is_rejected() {
    let config = small_config();
    let mut screen = ListScreen::new(&config, &TextData::new(30), SingleToast::new()).unwrap();
    assert_eq!(screen.click(25), Err(Error::NotAttached { position: 25 }));
    assert_eq!(screen.feedback().shown(), 0);
}

#[test]
fn staggered_click_removes_the_clicked_cell() {
    let config = small_config();
    let mut screen =
        StaggeredScreen::new(&config, &images(&[80, 120, 60, 90, 70]), SingleToast::new())
            .unwrap();
    assert_eq!(
        screen.title(),
        "Vertical staggered grid (click an image to remove it)"
    );

    screen.click(1).unwrap();
    assert_eq!(screen.remaining(), 4);
    assert_eq!(
        screen.feedback().current().as_deref(),
        Some("removed position: 1")
    );
    assert_eq!(
        screen.snapshot(),
        ["img0 (80px)", "img2 (60px)", "img3 (90px)", "img4 (70px)"]
    );
    for holder in screen.recycler_view().holders() {
        assert_eq!(holder.position(), holder.bound_position());
    }
}

#[test]
fn staggered_repeated_clicks_remove_exactly_the_clicked_cells() {
    let config = small_config();
    let source = ImageData::new(12, 40, 90, 3);
    let expected = source.items();
    let mut screen = StaggeredScreen::new(&config, &source, SingleToast::new()).unwrap();

    for removed in 0..expected.len() {
        let first = screen.snapshot().into_iter().next();
        assert_eq!(
            first,
            Some(format!("{} ({}px)", expected[removed].url, expected[removed].height))
        );
        screen.click(0).unwrap();
        assert_eq!(screen.remaining(), expected.len() - removed - 1);
    }
    assert!(screen.snapshot().is_empty());
    assert_eq!(screen.feedback().shown(), 12);
}

#[test]
fn staggered_cells_keep_their_lane_until_scrolling() {
    let config = small_config();
    let mut screen = StaggeredScreen::new(
        &config,
        &images(&[100, 10, 10, 10, 10]),
        SingleToast::new(),
    )
    .unwrap();

    screen.click(0).unwrap();
    let layout = screen.recycler_view().layout_manager();
    assert!(layout.first_in_lane(0).is_none());
    assert!(layout.first_in_lane(1).is_some());

    screen.set_scroll_state(ScrollState::Dragging).unwrap();
    let layout = screen.recycler_view().layout_manager();
    assert_eq!(layout.first_in_lane(0).map(|r| r.position), Some(0));
    assert_eq!(layout.first_in_lane(1).map(|r| r.position), Some(1));
    screen.set_scroll_state(ScrollState::Idle).unwrap();
}

#[test]
fn staggered_cells_keep_their_height_across_recycling() {
    let config = small_config().with_image_items(40);
    let source = ImageData::from_config(&config);
    let items = source.items();
    let mut screen = StaggeredScreen::new(&config, &source, SingleToast::new()).unwrap();
    let before = screen.snapshot();

    screen.set_scroll_state(ScrollState::Dragging).unwrap();
    screen.scroll_by(2_000).unwrap();
    screen.scroll_by(-2_000).unwrap();
    screen.set_scroll_state(ScrollState::Idle).unwrap();

    assert_eq!(screen.snapshot(), before);
    for (position, cell) in screen.recycler_view().displayed() {
        assert_eq!(cell.height, items[position].height);
        assert_eq!(cell.position, position);
    }
}

#[test]
fn staggered_removal_starts_animations() {
    let config = small_config();
    let mut screen =
        StaggeredScreen::new(&config, &images(&[50, 60, 70, 80]), SingleToast::new()).unwrap();
    screen.tick(10);
    screen.click(2).unwrap();
    let animator = screen.recycler_view().item_animator().unwrap();
    assert!(animator.is_running());
    screen.tick(10_000);
    assert!(!screen.recycler_view().item_animator().unwrap().is_running());
}

#[test]
fn zero_spans_fail_screen_construction() {
    let config = small_config().with_span_count(0);
    assert!(matches!(
        StaggeredScreen::new(&config, &images(&[10]), SingleToast::new()),
        Err(Error::InvalidSpanCount)
    ));
}

#[test]
fn text_binder_and_adapter_agree_on_count() {
    let config = small_config();
    let screen = ListScreen::new(&config, &TextData::new(7), SingleToast::new()).unwrap();
    assert_eq!(screen.recycler_view().adapter().item_count(), 7);
    assert_eq!(screen.recycler_view().item_count(), 7);
}

#[test]
fn divider_setting_reaches_the_decoration() {
    let divider = recycler::DividerDecoration::new(4, Color(0));
    assert_eq!(divider.item_offsets(0, 2, Orientation::Vertical).trailing, 4);
    let config = DemoConfig::new().with_divider(4, Color(0));
    assert_eq!(config.divider_height, 4);
}
