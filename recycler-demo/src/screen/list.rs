use std::rc::Rc;

use recycler::{
    DividerDecoration, LinearLayoutManager, RecyclerOptions, RecyclerView, Result, ScrollState,
    SingleTypeAdapter,
};

use crate::{DataSource, DemoConfig, Feedback, Screen, TextRowBinder};

pub const LIST_TITLE: &str = "Vertical list (items are clickable)";

type ListView = RecyclerView<SingleTypeAdapter<String, TextRowBinder>, LinearLayoutManager>;

/// A vertical list of text rows with dividers. Clicking a row reports it; the data never changes.
pub struct ListScreen<F> {
    view: ListView,
    feedback: Rc<F>,
}

impl<F: Feedback + 'static> ListScreen<F> {
    pub fn new(
        config: &DemoConfig,
        source: &impl DataSource<String>,
        feedback: F,
    ) -> Result<Self> {
        let feedback = Rc::new(feedback);
        let adapter = SingleTypeAdapter::new(source.items(), TextRowBinder::new(config.row_height))
            .with_on_item_click({
                let feedback = Rc::clone(&feedback);
                move |items, position| {
                    let item = items.try_get(position)?;
                    tracing::info!(
                        target: "recycler_demo",
                        "clicked position: {position}; data: {item}"
                    );
                    feedback.show(&format!("clicked position: {position}; data: {item}"));
                    Ok(())
                }
            });

        let mut view = RecyclerView::new(
            adapter,
            LinearLayoutManager::vertical(),
            RecyclerOptions::new(config.viewport),
        );
        view.add_item_decoration(DividerDecoration::new(
            config.divider_height,
            config.divider_color,
        ));
        view.layout()?;
        tracing::debug!(
            target: "recycler_demo",
            items = view.item_count(),
            "list screen ready"
        );
        Ok(Self { view, feedback })
    }

    pub fn recycler_view(&self) -> &ListView {
        &self.view
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }
}

impl<F: Feedback + 'static> Screen for ListScreen<F> {
    fn title(&self) -> &'static str {
        LIST_TITLE
    }

    fn click(&mut self, position: usize) -> Result<()> {
        self.view.click(position)
    }

    fn scroll_by(&mut self, delta: i64) -> Result<u64> {
        self.view.scroll_by(delta)
    }

    fn set_scroll_state(&mut self, state: ScrollState) -> Result<()> {
        self.view.set_scroll_state(state)
    }

    fn tick(&mut self, now_ms: u64) {
        self.view.tick(now_ms);
    }

    fn snapshot(&self) -> Vec<String> {
        self.view.displayed().map(|(_, row)| row.to_string()).collect()
    }
}
