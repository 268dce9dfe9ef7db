//! Text-mode demo host for the curtain reveal runtime.
//!
//! Stages the built-in portfolio page (or a JSON page document), then
//! simulates a viewport scrolling down the page frame by frame. Each
//! frame becomes a visibility snapshot; sections print their children's
//! derived styles the moment they reveal.

use anyhow::{Result, bail};
use curtain_config::CurtainConfig;
use curtain_core::{RevealSection, Stage};
use curtain_ir::PageDocument;

mod page;
mod sections;

use page::PageLayout;

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let mut config = CurtainConfig::load();

    // CLI flags take precedence over config and environment
    if std::env::args().any(|a| a == "--fail-open") {
        config.reveal.fail_open = true;
    }
    if let Some(section) =
        std::env::args().find_map(|a| a.strip_prefix("--section=").map(str::to_string))
    {
        config.demo.section = Some(section);
    }
    if let Some(path) =
        std::env::args().find_map(|a| a.strip_prefix("--page=").map(str::to_string))
    {
        config.demo.page = Some(path.into());
    }

    let document = match &config.demo.page {
        Some(path) => {
            log::info!("loading page document from {}", path.display());
            PageDocument::from_file(path)?
        }
        None => sections::portfolio(),
    };
    let document = select_sections(document, config.demo.section.as_deref())?;

    let mut stage = if config.reveal.fail_open {
        log::info!("fail-open mode: sections reveal without visibility data");
        Stage::fail_open()
    } else {
        Stage::new()
    };
    stage.add_document(&document)?;

    log::info!(
        "staged page '{}' with {} sections",
        document.page_id,
        stage.section_count()
    );

    let layout = PageLayout::from_stage(&stage);
    run_scroll(&mut stage, &layout, &config);

    println!();
    println!(
        "revealed {}/{} sections",
        stage.revealed_count(),
        stage.section_count()
    );
    if !stage.is_fully_revealed() {
        log::warn!("some sections never crossed their threshold");
    }

    Ok(())
}

/// Keep only the named section, or the whole document when no selection
/// was made.
fn select_sections(document: PageDocument, selection: Option<&str>) -> Result<PageDocument> {
    let Some(name) = selection else {
        return Ok(document);
    };
    let Some(section) = document.section(name).cloned() else {
        let available: Vec<&str> = document.sections.iter().map(|s| s.id.as_str()).collect();
        bail!("unknown section '{name}'; available: {}", available.join(", "));
    };
    Ok(PageDocument::new(document.page_id).with_section(section))
}

/// Scroll from the top of the page to the bottom, one step per frame,
/// delivering a visibility snapshot each time.
fn run_scroll(stage: &mut Stage, layout: &PageLayout, config: &CurtainConfig) {
    let viewport = config.viewport.height;
    let step = config.viewport.scroll_step.max(1.0);
    let max_scroll = config
        .viewport
        .max_scroll
        .unwrap_or_else(|| (layout.page_height() - viewport).max(0.0));

    let mut scroll = 0.0;
    let mut frame = 0u32;
    loop {
        let snapshot = layout.snapshot(scroll, viewport);
        stage.process(&snapshot);

        for event in stage.drain_events() {
            let top = layout.top_of(&event.section).unwrap_or(0.0);
            log::info!(
                "frame {frame}: '{}' entered the viewport (scroll {scroll:.0}, section top {top:.0})",
                event.section
            );
            if let Some(section) = stage.section(&event.section) {
                print_section(section);
            }
        }

        if stage.is_fully_revealed() || scroll >= max_scroll {
            break;
        }
        scroll = (scroll + step).min(max_scroll);
        frame += 1;
    }
}

/// Print one revealed section with the styles its children carry.
fn print_section(section: &RevealSection) {
    println!();
    println!("== {} ==", section.name());
    for (index, child) in section.children().iter().enumerate() {
        let Some(style) = section.style_at(index) else {
            continue;
        };
        let label = child.label.as_deref().unwrap_or("(unlabeled)");
        let meter = section
            .meter_at(index)
            .map(|value| format!("  fill {value:>3.0}%"))
            .unwrap_or_default();
        println!(
            "  [{index:>2}] {label:<58} {:>10?}  delay {:.2}s{meter}",
            child.variant, style.transition_delay_s
        );
    }
}
