pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    let pages = total_items.div_ceil(per_page);
    pages.max(1)
}

/// Half-open `[start, end)` slice bounds of a 1-based page.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page).min(total_items);
    let end = (start + per_page).min(total_items);
    (start, end)
}

/// Join `lines` into pages of at most `per_page` lines each.
pub fn paginate_lines(lines: &[String], per_page: usize) -> Vec<String> {
    let total = total_pages(lines.len(), per_page);

    (1..=total)
        .map(|page| {
            let (start, end) = page_window(lines.len(), per_page, page);
            lines[start..end].join("\n")
        })
        .collect()
}
