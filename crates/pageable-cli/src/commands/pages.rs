use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use pageable_core::{Container, Page};

#[derive(Debug, Serialize)]
struct PageInfo<'a> {
    index: usize,
    id: &'a str,
    anchor: &'a str,
    hash: String,
    lines: usize,
}

pub fn run(deck: &Path, json: bool) -> Result<()> {
    let container = super::load_deck(deck)?;
    let pages = discover(&container);

    if json {
        let infos: Vec<PageInfo> = pages.iter().enumerate().map(|(i, p)| info(i, p)).collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    if pages.is_empty() {
        println!("No pages found in {}.", deck.display());
        println!("\nStart a page with a level-1 heading:");
        println!("  # My first page");
        return Ok(());
    }

    println!("Pages ({}):\n", pages.len());
    for (i, page) in pages.iter().enumerate() {
        println!("  {:>3}  {:<24} {}", i + 1, page.hash(), page.anchor);
    }

    Ok(())
}

fn discover(container: &Container) -> Vec<Page> {
    container.anchored().filter_map(Page::from_element).collect()
}

fn info(index: usize, page: &Page) -> PageInfo<'_> {
    PageInfo {
        index,
        id: &page.id,
        anchor: &page.anchor,
        hash: page.hash(),
        lines: page.body.lines().count(),
    }
}
