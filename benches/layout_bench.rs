use std::alloc::{GlobalAlloc, Layout, System};
use std::hint::black_box;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use guidebook_layout::{
    tokenize, FixedAdvanceMetrics, FontMetrics, InlineItem, InlineStyle, LayoutEngine,
    TextFormat, Token,
};
use guidebook_layout_embedded_graphics::MonoFontMetrics;

const PANEL_WIDTHS: &[i32] = &[120, 240, 360, 480];

const PASSAGE: &str = "Logistics pipes move items between inventories without any manual \
    sorting. Every pipe can carry a routing module that decides where an item may go, and \
    the network resolves the shortest path to a destination that accepts it. Supplier \
    pipes keep a chest stocked, while provider pipes offer their contents to requesters \
    anywhere on the same network.";

struct CountingAllocator;

static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL_ALLOCATOR: CountingAllocator = CountingAllocator;

fn alloc_count() -> usize {
    ALLOC_COUNT.load(Ordering::Relaxed)
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        new_ptr
    }
}

/// Runs `op` and prints one CSV row for its median run: time and allocation count.
fn measure<F>(metrics: &str, case: &str, iters: usize, mut op: F)
where
    F: FnMut() -> usize,
{
    black_box(op());

    let mut samples: Vec<(u128, usize)> = (0..iters)
        .map(|_| {
            let allocs_before = alloc_count();
            let start = Instant::now();
            black_box(op());
            (start.elapsed().as_nanos(), alloc_count() - allocs_before)
        })
        .collect();
    samples.sort_unstable();
    let (median_ns, median_allocs) = samples[samples.len() / 2];
    println!("{},{},{},{}", metrics, case, median_ns, median_allocs);
}

fn chapter_items(paragraphs: usize) -> Vec<InlineItem> {
    let bold = InlineStyle::DEFAULT.with_format(TextFormat::BOLD);
    let mut items = Vec::with_capacity(paragraphs * 4);
    for idx in 0..paragraphs {
        items.push(InlineItem::text(PASSAGE, InlineStyle::DEFAULT));
        items.push(InlineItem::text(" Note: ", bold));
        items.push(InlineItem::link("routing modules", "page:modules", InlineStyle::DEFAULT));
        if idx + 1 < paragraphs {
            items.push(InlineItem::LineBreak);
        }
    }
    items
}

fn bench_metrics(name: &str, metrics: &dyn FontMetrics, iters: usize) {
    let items = chapter_items(40);
    let engine = LayoutEngine::default();

    measure(name, "tokenize_chapter", iters, || {
        tokenize(items.clone(), metrics).len()
    });

    let mut tokens: Vec<Token> = tokenize(items, metrics);
    for &width in PANEL_WIDTHS {
        measure(name, &format!("layout_width_{}", width), iters, || {
            engine.layout_paragraph(&mut tokens, 0, 0, width).line_count()
        });
    }

    measure(name, "resize_sweep", iters, || {
        (100..=500)
            .step_by(20)
            .map(|width| engine.layout_paragraph(&mut tokens, 0, 0, width).height as usize)
            .sum()
    });
}

fn main() {
    let quick = std::env::args().any(|arg| arg == "--quick");
    let iters = if quick { 5 } else { 25 };

    println!("# guidebook-layout benchmark, {} iterations per case", iters);
    println!("metrics,case,median_ns,allocs");
    bench_metrics("fixed_advance", &FixedAdvanceMetrics::default(), iters);
    bench_metrics("mono_font", &MonoFontMetrics::new(), iters);
}
