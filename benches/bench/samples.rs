// third-party imports
use pagesift::Page;

const WORDS: &[&str] = &[
    "Luke", "Skywalker", "Hero", "Unit", "Villain", "Event", "Upgrade", "cost", "power", "HP", "Ground", "Space",
    "draw", "a", "card", "when", "played", "0", "1", "2", "12",
];

/// Builds `n` pages with deterministic pseudo-random text of about `words` words each.
pub fn pages(n: usize, words: usize) -> Vec<Page> {
    let mut seed = 0x2545_f491_u32;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        seed as usize
    };

    (0..n)
        .map(|i| {
            let text = (0..words).map(|_| WORDS[next() % WORDS.len()]).collect::<Vec<_>>().join(" ");
            Page {
                file_path: format!("/cache/set{}_p{}.png", i % 7, i + 1),
                pdf_path: format!("/scans/set{}.pdf", i % 7),
                page_index: i,
                scanned_text: text,
                ..Default::default()
            }
        })
        .collect()
}
