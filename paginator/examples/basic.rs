// Example: the page counter driving a caller-owned fetch loop.
use paginator::{Paginator, PaginatorOptions};

fn main() {
    let backend: Vec<u32> = (0..200).collect();
    let mut p = Paginator::new(PaginatorOptions::new(25));

    // Bootstrap: page 1 is displayed from the start.
    let mut fetched: Vec<u32> = backend[..p.display_limit()].to_vec();

    for _ in 0..3 {
        // Fetch the span the pager points at (one page beyond the display).
        let req = p.page_request();
        let start = req.offset as usize;
        fetched.extend_from_slice(&backend[start..start + req.page_size]);
        println!(
            "in hand: {} fetched, {} visible",
            fetched.len(),
            p.visible(&fetched).len()
        );

        // Reveal it.
        p.advance();
        println!(
            "page {}: {} visible, next fetch at {}",
            p.requested_page(),
            p.visible(&fetched).len(),
            p.offset()
        );
    }
}
