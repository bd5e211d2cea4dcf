// Example: server-prefetched items and the bias advisory.
use paginator::{BiasAdvisory, Paginator, PaginatorOptions};

fn main() {
    // 20 items delivered alongside the page, pages of 10: page 1 shows the
    // first half, the second half stays in hand, and the first fetch starts
    // after everything delivered.
    let p = Paginator::new(PaginatorOptions::new(10).with_initial_item_count(20));
    println!(
        "seeded 20: bias={} display_limit={} offset={}",
        p.bias(),
        p.display_limit(),
        p.offset()
    );

    // 15 items is one and a half pages: the bias is neither 0 nor a whole
    // page, so fetched pages will overlap or gap with what is displayed.
    let p = Paginator::new(
        PaginatorOptions::new(10)
            .with_initial_item_count(15)
            .with_on_advisory(Some(|a: &BiasAdvisory| {
                eprintln!(
                    "advisory: initial_item_count={} is not a whole multiple of page_size={} (bias {})",
                    a.initial_item_count, a.page_size, a.bias
                );
            })),
    );
    println!(
        "seeded 15: bias={} display_limit={} offset={}",
        p.bias(),
        p.display_limit(),
        p.offset()
    );
}
