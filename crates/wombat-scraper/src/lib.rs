//! High-level scraping API for wombat.
//!
//! # Scope
//!
//! This crate provides:
//! - **Document Loading** - read a local file or fetch an `http(s)://` URL,
//!   then parse it
//! - **Scraper** - a reusable fetch configuration (headers, timeout) for
//!   scraping many pages
//! - **Fetching** - the blocking HTTP GET behind both, in [`net`]
//!
//! Querying the parsed tree is done through [`wombat_dom::DomTree`].

pub mod net;

pub use wombat_dom as dom;
pub use wombat_html as html;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};
use wombat_dom::DomTree;
use wombat_html::{ParseIssue, TreeBuilder};

pub use self::net::{FetchError, FetchOptions, fetch_html};

/// A fetched or read document, parsed.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Original HTML source
    pub html_source: String,

    /// Source path or URL. Empty for documents parsed from a string.
    pub source_path: String,

    /// Parsed tree. The document's top-level nodes are children of
    /// `NodeId::ROOT`.
    pub dom: DomTree,

    /// Recoveries the tree builder made
    pub parse_issues: Vec<ParseIssue>,
}

/// Error type for document loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read a local file.
    #[error("failed to read '{}': {source}", path.display())]
    File {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to fetch a URL.
    #[error(transparent)]
    Network(#[from] FetchError),
}

/// Fetches pages with a fixed set of request headers and parses them.
#[derive(Debug, Clone, Default)]
pub struct Scraper {
    options: FetchOptions,
}

impl Scraper {
    /// A scraper that sends `headers` with every request.
    ///
    /// A `User-Agent` entry replaces the default user agent.
    #[must_use]
    pub fn new<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_options(FetchOptions::new().headers(headers))
    }

    /// A scraper with fully specified fetch options.
    #[must_use]
    pub const fn with_options(options: FetchOptions) -> Self {
        Self { options }
    }

    /// Replace the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options = self.options.timeout(timeout);
        self
    }

    /// The fetch options used for every request.
    #[must_use]
    pub const fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Fetch `url` and parse the response body.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Network`] if the fetch fails. Parsing itself
    /// never fails.
    pub fn scrape(&self, url: &str) -> Result<LoadedDocument, LoadError> {
        info!(url, "fetching");
        let html = fetch_html(url, &self.options)?;
        let mut document = parse_html_string(&html);
        document.source_path = url.to_string();
        Ok(document)
    }

    /// Load a document from a file path or URL.
    ///
    /// Paths starting with `http://` or `https://` are fetched with this
    /// scraper's options; anything else is read from disk.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::File`] if a local file cannot be read, or
    /// [`LoadError::Network`] if a URL cannot be fetched.
    pub fn load_document(&self, path: &str) -> Result<LoadedDocument, LoadError> {
        if is_url(path) {
            return self.scrape(path);
        }

        let html_source = fs::read_to_string(path).map_err(|source| LoadError::File {
            path: PathBuf::from(path),
            source,
        })?;
        let mut document = parse_html_string(&html_source);
        document.source_path = path.to_string();
        Ok(document)
    }
}

/// Load a document from a file path or URL with default fetch options.
///
/// # Errors
///
/// See [`Scraper::load_document`].
pub fn load_document(path: &str) -> Result<LoadedDocument, LoadError> {
    Scraper::default().load_document(path)
}

/// Parse an HTML string into a `LoadedDocument`.
///
/// Use this when you already have the HTML content as a string.
#[must_use]
pub fn parse_html_string(html: &str) -> LoadedDocument {
    let (dom, parse_issues) = TreeBuilder::new(html.to_string()).parse_with_issues();
    debug!(
        nodes = dom.len(),
        issues = parse_issues.len(),
        "parsed document"
    );

    LoadedDocument {
        html_source: html.to_string(),
        source_path: String::new(),
        dom,
        parse_issues,
    }
}

/// Returns true if `path` should be fetched rather than read from disk.
#[must_use]
pub fn is_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}
