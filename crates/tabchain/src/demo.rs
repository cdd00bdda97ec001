//! Scripted walk-through of every tab list operation.

use crate::render::Renderer;
use std::io::{self, Write};
use tabchain_tabs::TabList;
use tracing::info;

/// Run the walk-through, writing its transcript to `out`.
///
/// Returns the list in its final state.
pub fn run<W: Write>(r: &Renderer, out: &mut W) -> io::Result<TabList> {
    info!("Running demo script");
    let mut list = TabList::new();

    list.add_new_tab("https://www.google.com", "Google", 23.45);
    writeln!(out, "{}", r.tabs(&list))?;
    writeln!(out, "Switch to previous tab =")?;
    writeln!(out, "{}", r.switched(&list.switch_to_prev_tab()))?;
    writeln!(out, "Switch to next tab =")?;
    writeln!(out, "{}", r.switched(&list.switch_to_next_tab()))?;

    list.add_new_tab("https://www.youtube.com", "YouTube", 56.0);
    writeln!(out, "{}", r.bookmarked(&list.bookmark_current()))?;
    writeln!(out, "{}", r.tabs(&list))?;

    list.add_new_tab("https://www.geeksforgeeks.com", "GeeksForGeeks", 45.78);
    writeln!(out, "{}", r.bookmarked(&list.bookmark_current()))?;
    list.add_new_tab("https://chat.openai.com", "ChatGPT", 129.0);
    list.add_new_tab("https://linkedin.com", "LinkedIn", 410.0);
    writeln!(out, "{}", r.bookmarked(&list.bookmark_current()))?;
    list.add_new_tab("https://github.com", "Github", 110.0);
    list.add_new_tab("https://kaggle.com", "Kaggle", 310.0);
    writeln!(out, "{}", r.bookmarked(&list.bookmark_current()))?;
    writeln!(out, "{}", r.tabs(&list))?;
    writeln!(out, "{}", r.total_memory(list.total_memory()))?;
    writeln!(out, "{}", r.bookmarks(list.show_bookmark_tab()))?;

    writeln!(out, "{}", r.moved(&list.move_current_to_first()))?;
    writeln!(out, "{}", r.tabs(&list))?;
    writeln!(out, "{}", r.evicted(&list.delete_tab()))?;
    writeln!(out, "{}", r.tabs(&list))?;

    writeln!(out, "Switch to next tab =")?;
    writeln!(out, "{}", r.switched(&list.switch_to_next_tab()))?;
    writeln!(out, "Switch to previous tab =")?;
    writeln!(out, "{}", r.switched(&list.switch_to_prev_tab()))?;
    writeln!(out, "{}", r.closed(&list.close_current_tab()))?;
    writeln!(out, "{}", r.tabs(&list))?;

    writeln!(out, "Switch to previous tab =")?;
    writeln!(out, "{}", r.switched(&list.switch_to_prev_tab()))?;
    writeln!(out, "{}", r.closed(&list.close_current_tab()))?;
    writeln!(out, "{}", r.tabs(&list))?;
    writeln!(out, "{}", r.bookmarks(list.show_bookmark_tab()))?;
    writeln!(out, "{}", r.total_memory(list.total_memory()))?;
    writeln!(out, "{}", r.evicted(&list.delete_tab()))?;
    writeln!(out, "{}", r.tabs(&list))?;

    list.add_new_tab("https://docs.google.com/", "Google Docs", 102.34);
    writeln!(out, "{}", r.tabs(&list))?;
    for _ in 0..3 {
        writeln!(out, "Switch to previous tab =")?;
        writeln!(out, "{}", r.switched(&list.switch_to_prev_tab()))?;
    }
    writeln!(out, "{}", r.bookmarked(&list.bookmark_current()))?;
    writeln!(out, "{}", r.bookmarks(list.show_bookmark_tab()))?;
    writeln!(out, "{}", r.total_memory(list.total_memory()))?;
    writeln!(out, "{}", r.evicted(&list.delete_tab()))?;
    writeln!(out, "{}", r.tabs(&list))?;
    writeln!(out, "{}", r.stats(list.stats()))?;

    Ok(list)
}
