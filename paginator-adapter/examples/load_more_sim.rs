// Example: a complete load-more session against an in-memory backend.
//
// The adapter flow is:
// 1) poll next_request() and run the returned fetch
// 2) fulfill(batch) when it completes
// 3) load_more() on the user's trigger, revealing the page already in hand
use paginator::PaginatorOptions;
use paginator_adapter::InfiniteList;

fn main() {
    let backend: Vec<u32> = (0..137).collect();

    // Seed the first page, then alternate fetch-ahead and reveals.
    let mut list = InfiniteList::with_items(PaginatorOptions::new(25), backend[..25].to_vec());

    loop {
        if let Some(req) = list.next_request() {
            let start = req.offset as usize;
            let end = (start + req.page_size).min(backend.len());
            list.fulfill(backend[start..end].to_vec());
            println!("fetched [{start}, {end})");
            continue;
        }
        if list.load_more() {
            println!(
                "revealed page {}: {} visible, {} in hand",
                list.pager().requested_page(),
                list.visible().len(),
                list.deferred().len()
            );
            continue;
        }
        break;
    }

    println!(
        "done: {} items, exhausted={}, has_more={}",
        list.len(),
        list.is_exhausted(),
        list.has_more()
    );
}
