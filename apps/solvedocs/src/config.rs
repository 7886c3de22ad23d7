//! Paths and endpoints for a run.
//!
//! Every setting is a global CLI option with an environment fallback, so the
//! defaults match the usual repository layout:
//!
//! ```text
//! <root>/
//!   Solutions/0001-two-sum/{README.md, solution.py}
//!   Site_README.md
//!   README.md
//!   mkdocs.yml
//!   docs/solutions/1.md        (generated)
//!   .leetcode_cache.json       (generated)
//! ```

use clap::Args;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SITE_URL: &str = "https://leetcode.romitsagu.com";
pub const DEFAULT_PAGES_DIR: &str = "solutions";

/// Configuration options as parsed from the command line.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Repository root; relative paths below resolve against it
    #[arg(long, env = "SOLVEDOCS_ROOT", default_value = ".", global = true)]
    pub root: PathBuf,

    /// Directory holding one folder per problem
    #[arg(long, env = "SOLVEDOCS_SOLUTIONS_DIR", default_value = "Solutions", global = true)]
    pub solutions_dir: PathBuf,

    /// README rendered by the static site
    #[arg(long, env = "SOLVEDOCS_SITE_README", default_value = "Site_README.md", global = true)]
    pub site_readme: PathBuf,

    /// README shown on GitHub
    #[arg(long, env = "SOLVEDOCS_GITHUB_README", default_value = "README.md", global = true)]
    pub github_readme: PathBuf,

    /// Site documentation directory
    #[arg(long, env = "SOLVEDOCS_DOCS_DIR", default_value = "docs", global = true)]
    pub docs_dir: PathBuf,

    /// Subdirectory of the docs directory that receives the problem pages
    #[arg(long, env = "SOLVEDOCS_PAGES_DIR", default_value = DEFAULT_PAGES_DIR, global = true)]
    pub pages_dir: String,

    /// Site configuration whose `nav` is regenerated
    #[arg(long, env = "SOLVEDOCS_MKDOCS", default_value = "mkdocs.yml", global = true)]
    pub mkdocs: PathBuf,

    /// Metadata cache file
    #[arg(long, env = "SOLVEDOCS_CACHE", default_value = ".leetcode_cache.json", global = true)]
    pub cache: PathBuf,

    /// Base URL of the published site, used for README links
    #[arg(long, env = "SOLVEDOCS_SITE_URL", default_value = DEFAULT_SITE_URL, global = true)]
    pub site_url: String,

    /// GraphQL endpoint for problem metadata
    #[arg(long, env = "SOLVEDOCS_ENDPOINT", default_value = solvedocs_client::DEFAULT_ENDPOINT, global = true)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, env = "SOLVEDOCS_TIMEOUT", default_value_t = 10, global = true)]
    pub timeout: u64,

    /// Use only the cache; never contact the API
    #[arg(long, env = "SOLVEDOCS_OFFLINE", global = true)]
    pub offline: bool,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub solutions_dir: PathBuf,
    pub site_readme: PathBuf,
    pub github_readme: PathBuf,
    pub docs_dir: PathBuf,
    pub pages_dir: String,
    pub mkdocs: PathBuf,
    pub cache: PathBuf,
    pub site_url: String,
    pub endpoint: String,
    pub timeout: Duration,
    pub offline: bool,
}

impl Config {
    /// Default layout under `root`.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            solutions_dir: root.join("Solutions"),
            site_readme: root.join("Site_README.md"),
            github_readme: root.join("README.md"),
            docs_dir: root.join("docs"),
            pages_dir: DEFAULT_PAGES_DIR.to_string(),
            mkdocs: root.join("mkdocs.yml"),
            cache: root.join(".leetcode_cache.json"),
            site_url: DEFAULT_SITE_URL.to_string(),
            endpoint: solvedocs_client::DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
            offline: false,
            root,
        }
    }

    #[must_use]
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Directory the problem pages are written to.
    #[must_use]
    pub fn pages_path(&self) -> PathBuf {
        self.docs_dir.join(&self.pages_dir)
    }
}

impl From<ConfigArgs> for Config {
    fn from(args: ConfigArgs) -> Self {
        let root = args.root;
        let at_root = |path: &Path| root.join(path);
        Self {
            solutions_dir: at_root(&args.solutions_dir),
            site_readme: at_root(&args.site_readme),
            github_readme: at_root(&args.github_readme),
            docs_dir: at_root(&args.docs_dir),
            pages_dir: args.pages_dir,
            mkdocs: at_root(&args.mkdocs),
            cache: at_root(&args.cache),
            site_url: args.site_url,
            endpoint: args.endpoint,
            timeout: Duration::from_secs(args.timeout),
            offline: args.offline,
            root,
        }
    }
}
