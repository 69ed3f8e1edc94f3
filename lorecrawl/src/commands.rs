use clap::arg;
use url::Url;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

/// One command, no subcommands: a bare invocation performs one full
/// crawl of the default wiki and writes the glossary next to the cwd.
pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("lorecrawl")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("lorecrawl")
        .styles(CLAP_STYLING)
        .about(
            "Crawls a MediaWiki category tree and writes a JSON glossary of \
            terms, summaries, and redirect aliases.",
        )
        .arg(
            arg!(-u --"base-url" <URL>)
                .required(false)
                .help("Base URL of the wiki to crawl")
                .value_parser(clap::value_parser!(Url))
                .default_value("https://wiki.wanderinginn.com"),
        )
        .arg(
            arg!(-b --"browse-page" <TITLE>)
                .required(false)
                .help("Page listing the root categories, relative to the base URL")
                .default_value("The_Wandering_Inn_Wiki:Browse_the_Wiki"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Where to write the glossary JSON (overwritten each run)")
                .default_value("wiki-terms.json"),
        )
        .arg(
            arg!(--"delay-ms" <MILLIS>)
                .required(false)
                .help("Politeness delay before every request, in milliseconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("1000"),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("10"),
        )
        .arg(arg!(-q --"quiet" "Suppress the start and completion summary").required(false))
}
