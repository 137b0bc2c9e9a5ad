use recycler::{
    DividerDecoration, ItemBinder, LinearLayoutManager, RecyclerOptions, RecyclerView, Rect,
    SingleTypeAdapter,
};

struct Label;

impl ItemBinder<String> for Label {
    type View = String;

    fn create(&self) -> String {
        String::new()
    }

    fn bind(&self, view: &mut String, position: usize, item: &String) {
        *view = format!("#{position} {item}");
    }

    fn extent(&self, _position: usize, _item: &String) -> u32 {
        20
    }
}

fn main() -> Result<(), recycler::Error> {
    let items: Vec<String> = (0..1_000).map(|i| format!("row {i}")).collect();
    let adapter = SingleTypeAdapter::new(items, Label)
        .with_on_item_click(|list, position| list.remove_at(position).map(drop));

    let mut rv = RecyclerView::new(
        adapter,
        LinearLayoutManager::vertical(),
        RecyclerOptions::new(Rect {
            main: 100,
            cross: 320,
        }),
    );
    rv.add_item_decoration(DividerDecoration::default());
    rv.layout()?;
    println!("total_size={}", rv.total_size());

    rv.scroll_by(10_000)?;
    let rows: Vec<&String> = rv.displayed().map(|(_, v)| v).collect();
    println!("offset={} rows={rows:?}", rv.scroll_offset());

    let first = rv.displayed().next().map(|(p, _)| p).unwrap_or(0);
    rv.click(first)?;
    let rows: Vec<&String> = rv.displayed().map(|(_, v)| v).collect();
    println!("after click at {first}: count={} rows={rows:?}", rv.item_count());
    println!("pooled views={}", rv.recycled_view_pool().total());
    Ok(())
}
