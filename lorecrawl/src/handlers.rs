use anyhow::Context;
use clap::ArgMatches;
use colored::Colorize;
use lorecrawl_scanner::{Crawler, Fetcher, report};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Expands `~` in a user-supplied output path.
pub fn resolve_output_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Runs one full crawl and writes the glossary. Crawl-level failures are
/// logged and swallowed inside the scanner; the only error that comes
/// back up is a failure to write the output file.
pub async fn handle_scan(matches: &ArgMatches) -> anyhow::Result<()> {
    let base_url = matches.get_one::<Url>("base-url").unwrap().clone();
    let browse_page = matches.get_one::<String>("browse-page").unwrap();
    let output = resolve_output_path(matches.get_one::<String>("output").unwrap());
    let delay_ms = *matches.get_one::<u64>("delay-ms").unwrap();
    let timeout = *matches.get_one::<u64>("timeout").unwrap();
    let quiet = matches.get_flag("quiet");

    if !quiet {
        println!(
            "\n{} Scanning {} for terms and aliases",
            "→".blue(),
            base_url.as_str().bright_white()
        );
        println!("  Browse page: {}", browse_page);
        println!("  Request delay: {}ms\n", delay_ms);
    }

    let fetcher = Fetcher::with_timeout(timeout).with_delay(Duration::from_millis(delay_ms));
    let mut crawler = Crawler::new(base_url, browse_page)
        .context("invalid browse page")?
        .with_fetcher(fetcher);

    let roots = crawler.crawl().await;
    if roots == 0 {
        println!(
            "{} Could not load root categories; nothing written",
            "✗".red().bold()
        );
        return Ok(());
    }

    let store = crawler.store();
    report::write_terms(store, &output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    if !quiet {
        println!("\n{} Scan complete!", "✓".green().bold());
        println!("  Root categories: {}", roots);
        println!("  Categories visited: {}", crawler.visited_count());
        println!("  Terms collected: {}", store.len());
        println!("  Output: {}", output.display());
    }

    Ok(())
}
