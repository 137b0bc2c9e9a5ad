use std::rc::Rc;

use recycler::{
    DefaultItemAnimator, GapStrategy, Orientation, RecyclerOptions, RecyclerView, Result,
    ScrollState, SingleTypeAdapter, StaggeredGridLayoutManager,
};

use crate::{DataSource, DemoConfig, Feedback, ImageCellBinder, ImageItem, Screen};

pub const STAGGERED_TITLE: &str = "Vertical staggered grid (click an image to remove it)";

type GridView =
    RecyclerView<SingleTypeAdapter<ImageItem, ImageCellBinder>, StaggeredGridLayoutManager>;

/// A vertical staggered grid of image cells. Clicking a cell removes it.
///
/// Cells keep their lane while the data changes, so nothing jumps under the pointer. Lanes left
/// uneven by removals are rebalanced on the next scroll-state change.
pub struct StaggeredScreen<F> {
    view: GridView,
    feedback: Rc<F>,
}

impl<F: Feedback + 'static> StaggeredScreen<F> {
    pub fn new(
        config: &DemoConfig,
        source: &impl DataSource<ImageItem>,
        feedback: F,
    ) -> Result<Self> {
        let feedback = Rc::new(feedback);
        let adapter = SingleTypeAdapter::new(source.items(), ImageCellBinder).with_on_item_click({
            let feedback = Rc::clone(&feedback);
            move |items, position| {
                tracing::info!(
                    target: "recycler_demo",
                    "remaining: {}; removed at: {position}",
                    items.len()
                );
                feedback.show(&format!("removed position: {position}"));
                items.remove_at(position)?;
                Ok(())
            }
        });

        let layout = StaggeredGridLayoutManager::new(config.span_count, Orientation::Vertical)?
            .with_gap_strategy(GapStrategy::None);
        let mut view = RecyclerView::new(adapter, layout, RecyclerOptions::new(config.viewport));
        view.set_item_animator(Some(DefaultItemAnimator::new()));
        view.add_on_scroll_listener(|layout: &mut StaggeredGridLayoutManager, state| {
            tracing::trace!(target: "recycler_demo", ?state, "rebalancing lanes");
            layout.invalidate_span_assignments();
        });
        view.layout()?;
        tracing::debug!(
            target: "recycler_demo",
            items = view.item_count(),
            spans = config.span_count,
            "staggered screen ready"
        );
        Ok(Self { view, feedback })
    }

    pub fn recycler_view(&self) -> &GridView {
        &self.view
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn remaining(&self) -> usize {
        self.view.item_count()
    }
}

impl<F: Feedback + 'static> Screen for StaggeredScreen<F> {
    fn title(&self) -> &'static str {
        STAGGERED_TITLE
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
        self.view.displayed().map(|(_, cell)| cell.to_string()).collect()
    }
}
