//! Wombat CLI - fetch or read a page, parse it, and inspect the result.
//!
//! Usage:
//!   wombat <file|url>              Print the parsed tree
//!   wombat <file|url> --tokens     Print the token stream first
//!   wombat <file|url> --json       Print the tree as JSON
//!   wombat <file|url> --json --compact
//!                                  Print the tree as single-line JSON
//!   wombat <file|url> --tag a      Print every `<a>` subtree
//!
//! Logging goes to stderr; `-v` enables debug events, `-vv` trace events.
//! Without `-v` the `RUST_LOG` environment variable is honoured.

mod json;

use std::io::{self, BufWriter, Write};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use serde_json::ser::{CompactFormatter, PrettyFormatter};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wombat_dom::{DomTree, NodeId};
use wombat_html::{ParseIssue, format_tree, tokenize};
use wombat_scraper::{LoadedDocument, Scraper, parse_html_string};

/// Wombat - lenient HTML parser for scraping real-world pages
#[derive(Parser, Debug)]
#[command(name = "wombat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the tree of a local file
    wombat ./index.html

    # Fetch a page with a custom user agent
    wombat -H 'User-Agent: Go-HTML-Parser' https://example.com

    # List every link on a page as JSON
    wombat --tag a --json https://example.com

    # Parse inline HTML and show its tokens
    wombat --tokens --html '<ul><li>one<li>two</ul>'
"#)]
struct Cli {
    /// Path to HTML file or URL to fetch
    #[arg(value_name = "FILE|URL")]
    path: Option<String>,

    /// Parse HTML string directly instead of file/URL
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Extra request header, as 'Name: value' (repeatable)
    #[arg(short = 'H', long = "header", value_name = "HEADER", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print the token stream before the tree
    #[arg(long)]
    tokens: bool,

    /// Print the tree (or the query matches) as JSON
    #[arg(long)]
    json: bool,

    /// Print JSON on a single line
    #[arg(long, requires = "json")]
    compact: bool,

    /// Only print elements with this tag name
    #[arg(long, value_name = "TAG")]
    tag: Option<String>,

    /// Only print the element with this id
    #[arg(long, value_name = "ID")]
    id: Option<String>,

    /// Only print elements carrying this class
    #[arg(long, value_name = "CLASS")]
    class: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let doc = load_doc(&cli)?;
    let color = !cli.no_color;

    if cli.tokens {
        print_tokens(&doc.html_source, color);
    }

    let matches = query(&cli, &doc.dom);

    if cli.json {
        return print_json(&doc.dom, matches.as_deref(), cli.compact)
            .context("failed to write JSON");
    }

    match matches {
        Some(ids) => print_matches(&doc.dom, &ids, color),
        None => print_document(&doc, color),
    }

    Ok(())
}

/// Install the stderr subscriber. `-v` flags take precedence over `RUST_LOG`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load document from CLI arguments
fn load_doc(cli: &Cli) -> Result<LoadedDocument> {
    if let Some(ref html_string) = cli.html {
        return Ok(parse_html_string(html_string));
    }

    let Some(ref path) = cli.path else {
        bail!("expected a file path, URL, or --html");
    };

    let mut scraper = Scraper::new(cli.headers.iter().cloned());
    if let Some(secs) = cli.timeout {
        scraper = scraper.timeout(Duration::from_secs(secs));
    }
    debug!(path = %path, headers = cli.headers.len(), "loading document");

    scraper
        .load_document(path)
        .with_context(|| format!("could not load {path}"))
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected 'Name: value', got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing header name in '{raw}'"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// Run the requested query, if any. Filters combine: a node must satisfy
/// every one that was given.
fn query(cli: &Cli, dom: &DomTree) -> Option<Vec<NodeId>> {
    if cli.tag.is_none() && cli.id.is_none() && cli.class.is_none() {
        return None;
    }

    let root = dom.root();
    let mut ids = match (&cli.id, &cli.tag) {
        (Some(id), _) => dom.find_by_id(root, id).into_iter().collect(),
        (None, Some(tag)) => dom.find_by_tag(root, tag),
        (None, None) => dom.descendants(root).collect(),
    };

    ids.retain(|&id| {
        dom.as_element(id).is_some_and(|element| {
            cli.tag.as_deref().is_none_or(|tag| element.is(tag))
                && cli.class.as_deref().is_none_or(|class| element.has_class(class))
        })
    });
    Some(ids)
}

fn print_tokens(html: &str, color: bool) {
    let tokens = tokenize(html);
    println!("{}", heading(&format!("=== Tokens ({}) ===", tokens.len()), color));
    for (i, token) in tokens.iter().enumerate() {
        let kind = token.kind().to_string();
        if color {
            println!("  {i:3}: {:<14} {token}", kind.yellow());
        } else {
            println!("  {i:3}: {kind:<14} {token}");
        }
    }
    println!();
}

/// Print the tree and any parse issues
fn print_document(doc: &LoadedDocument, color: bool) {
    println!("{}", heading("=== Tree ===", color));
    print_dump(&format_tree(&doc.dom, doc.dom.root()), color);

    if !doc.parse_issues.is_empty() {
        println!("\n{}", heading("=== Parse Issues ===", color));
        for issue in &doc.parse_issues {
            println!("  - {}", describe_issue(issue, color));
        }
    }
}

fn print_matches(dom: &DomTree, ids: &[NodeId], color: bool) {
    println!("{}", heading(&format!("=== Matches ({}) ===", ids.len()), color));
    for &id in ids {
        print_dump(&format_tree(dom, id), color);
    }
}

fn describe_issue(issue: &ParseIssue, color: bool) -> String {
    let kind = issue.kind.to_string();
    let kind = if color { kind.red().to_string() } else { kind };
    format!("[{kind}] token {}: {}", issue.token_index, issue.message)
}

fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Print a `format_tree` dump, coloring each line by node type.
fn print_dump(dump: &str, color: bool) {
    for line in dump.lines() {
        if !color {
            println!("{line}");
            continue;
        }
        let body = line.trim_start_matches(' ');
        let indent = &line[..line.len() - body.len()];
        if body.starts_with("<!--") {
            println!("{indent}{}", body.dimmed());
        } else if body.starts_with('<') {
            println!("{indent}{}", body.cyan());
        } else {
            println!("{indent}{}", body.green());
        }
    }
}

/// Print the whole tree, or just `matches`, as JSON on stdout.
fn print_json(dom: &DomTree, matches: Option<&[NodeId]>, compact: bool) -> io::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    match (matches, compact) {
        (None, false) => json::write_node(dom, dom.root(), &mut out, &mut PrettyFormatter::new())?,
        (None, true) => json::write_node(dom, dom.root(), &mut out, &mut CompactFormatter)?,
        (Some(ids), false) => json::write_nodes(dom, ids, &mut out, &mut PrettyFormatter::new())?,
        (Some(ids), true) => json::write_nodes(dom, ids, &mut out, &mut CompactFormatter)?,
    }
    writeln!(out)?;
    out.flush()
}
