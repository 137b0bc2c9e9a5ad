use recycler::ScrollState;
use recycler_demo::{DemoConfig, ListScreen, Screen, SingleToast, TextData};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = DemoConfig::default();
    let mut screen = ListScreen::new(&config, &TextData::from_config(&config), SingleToast::new())?;
    println!("{}", screen.title());
    println!("{:?}", screen.snapshot());

    screen.click(4)?;
    println!("toast: {:?}", screen.feedback().current());

    screen.set_scroll_state(ScrollState::Dragging)?;
    screen.scroll_by(600)?;
    screen.set_scroll_state(ScrollState::Idle)?;
    println!("{:?}", screen.snapshot());

    screen.click(20)?;
    println!("toast: {:?}", screen.feedback().current());
    Ok(())
}
