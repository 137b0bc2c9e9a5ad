use recycler::{Rect, ScrollState};
use recycler_demo::{DemoConfig, ImageData, Screen, SingleToast, StaggeredScreen};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = DemoConfig::default().with_viewport(Rect {
        main: 800,
        cross: 720,
    });
    let mut screen =
        StaggeredScreen::new(&config, &ImageData::from_config(&config), SingleToast::new())?;
    println!("{}", screen.title());

    // Remove the first three cells, one click at a time.
    for now_ms in [0, 300, 600] {
        screen.tick(now_ms);
        screen.click(0)?;
        println!("toast: {:?}", screen.feedback().current());
    }
    let lanes = screen.recycler_view().layout_manager().lane_ends().to_vec();
    println!("lanes after removals: {lanes:?}");

    // Scrolling rebalances the lanes left uneven by the removals.
    screen.set_scroll_state(ScrollState::Dragging)?;
    screen.scroll_by(400)?;
    screen.set_scroll_state(ScrollState::Idle)?;
    let lanes = screen.recycler_view().layout_manager().lane_ends().to_vec();
    println!("lanes after scrolling: {lanes:?}");

    println!("remaining={} {:?}", screen.remaining(), screen.snapshot());
    Ok(())
}
