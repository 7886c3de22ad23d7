//! # Commands
//!
//! ```text
//! solvedocs readme   # refresh the tables in Site_README.md and README.md
//! solvedocs site     # rebuild docs/solutions/*.md and the mkdocs.yml nav
//! solvedocs all      # both, sharing one metadata lookup pass
//! solvedocs cache    # show (or --clear) the metadata cache
//! ```

use crate::config::{Config, ConfigArgs};
use crate::error::{CliError, Result};
use crate::git::first_added_subject;
use crate::metadata::{MetadataResolver, load_cache, save_cache};
use crate::scan::{ProblemDir, read_problem_readme, scan_problems, solution_files};
use clap::{Parser, Subcommand};
use solvedocs_core::page::page_file_name;
use solvedocs_core::{
    BadgeStyle, MetadataCache, NavEntry, QuestionMeta, SolutionFile, TableRow, TableUpdate,
    parse_submission_stats, render_page, render_rows, render_table, replace_table, update_nav,
};
use std::fs;
use std::path::Path;

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "solvedocs")]
#[command(about = "Regenerate README tables and site pages for a solutions repository", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Update the problem tables in the site and GitHub READMEs
    Readme,
    /// Regenerate the solution pages and the site navigation
    Site,
    /// Run `readme` and then `site`
    All,
    /// Show the metadata cache
    Cache {
        /// Print the cache file contents as JSON
        #[arg(long)]
        json: bool,

        /// Remove every cached entry
        #[arg(long, conflicts_with = "json")]
        clear: bool,
    },
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::from(cli.config);
    match cli.command {
        Commands::Readme => cmd_readme(&config).await,
        Commands::Site => cmd_site(&config).await,
        Commands::All => cmd_all(&config).await,
        Commands::Cache { json, clear } => cmd_cache(&config, json, clear),
    }
}

// =============================================================================
// SHARED
// =============================================================================

/// A problem together with its resolved metadata.
#[derive(Debug, Clone)]
pub struct ResolvedProblem {
    pub dir: ProblemDir,
    pub meta: QuestionMeta,
}

/// Scan the solutions directory and resolve metadata for every problem.
pub async fn collect_problems(
    config: &Config,
    resolver: &mut MetadataResolver,
) -> Result<Vec<ResolvedProblem>> {
    let dirs = scan_problems(&config.solutions_dir)?;
    let mut resolved = Vec::with_capacity(dirs.len());
    for dir in dirs {
        let meta = resolver.resolve(&dir.problem.slug).await?;
        resolved.push(ResolvedProblem { dir, meta });
    }

    let stats = resolver.cache().stats();
    tracing::info!(
        problems = resolved.len(),
        cache_hits = stats.hits,
        requests = resolver.requests(),
        "resolved problem metadata"
    );
    Ok(resolved)
}

fn read_existing(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(CliError::MissingFile(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(CliError::io(path))
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// =============================================================================
// README
// =============================================================================

/// Replace (or append) the problem table in one README.
pub fn update_readme(path: &Path, rows: &str) -> Result<TableUpdate> {
    let text = read_existing(path)?;
    let (updated, outcome) = replace_table(&text, &render_table(rows))?;
    fs::write(path, updated).map_err(CliError::io(path))?;

    match outcome {
        TableUpdate::Replaced => tracing::info!("updated table rows in {}", file_label(path)),
        TableUpdate::Appended => tracing::info!("added new table in {}", file_label(path)),
    }
    Ok(outcome)
}

/// Write the tables for already-resolved problems into both READMEs.
pub fn write_readmes(config: &Config, problems: &[ResolvedProblem]) -> Result<()> {
    let rows: Vec<TableRow> = problems
        .iter()
        .map(|p| TableRow::new(&p.dir.problem, &p.meta, &config.site_url))
        .collect();

    update_readme(&config.site_readme, &render_rows(&rows, BadgeStyle::SiteTable))?;
    update_readme(&config.github_readme, &render_rows(&rows, BadgeStyle::GithubTable))?;
    Ok(())
}

/// `readme` command.
pub async fn cmd_readme(config: &Config) -> Result<()> {
    let mut resolver = MetadataResolver::load(config)?;
    let problems = collect_problems(config, &mut resolver).await?;
    write_readmes(config, &problems)
}

// =============================================================================
// SITE
// =============================================================================

async fn load_solutions(config: &Config, dir: &Path) -> Result<Vec<SolutionFile>> {
    let mut solutions = Vec::new();
    for (language, path) in solution_files(dir)? {
        let code = fs::read_to_string(&path).map_err(CliError::io(&path))?;
        let stats = match first_added_subject(&config.root, &path).await {
            Some(subject) => parse_submission_stats(&subject)?,
            None => None,
        };
        solutions.push(SolutionFile::new(language, code).with_stats(stats));
    }
    Ok(solutions)
}

/// Regenerate the page directory and the navigation for resolved problems.
///
/// `mkdocs.yml` is read and its new nav rendered before any page is touched,
/// so an unusable site config leaves the existing pages in place.
///
/// Returns the number of pages written.
pub async fn write_site(config: &Config, problems: &[ResolvedProblem]) -> Result<usize> {
    let nav: Vec<NavEntry> = problems
        .iter()
        .map(|resolved| NavEntry::for_problem(&resolved.dir.problem, &config.pages_dir))
        .collect();
    let mkdocs = read_existing(&config.mkdocs)?;
    let updated = update_nav(&mkdocs, &nav)?;

    let pages = config.pages_path();
    if pages.exists() {
        fs::remove_dir_all(&pages).map_err(CliError::io(&pages))?;
    }
    fs::create_dir_all(&pages).map_err(CliError::io(&pages))?;

    for resolved in problems {
        let problem = &resolved.dir.problem;
        let readme = read_problem_readme(&resolved.dir.path)?;
        let solutions = load_solutions(config, &resolved.dir.path).await?;

        let page_path = pages.join(page_file_name(problem));
        let page = render_page(problem, &resolved.meta, &readme, &solutions);
        fs::write(&page_path, page).map_err(CliError::io(&page_path))?;
        tracing::debug!(page = %page_path.display(), solutions = solutions.len(), "wrote page");
    }

    fs::write(&config.mkdocs, updated).map_err(CliError::io(&config.mkdocs))?;

    tracing::info!(
        pages = nav.len(),
        "wrote solution pages and updated {}",
        file_label(&config.mkdocs)
    );
    Ok(nav.len())
}

/// `site` command.
pub async fn cmd_site(config: &Config) -> Result<()> {
    let mut resolver = MetadataResolver::load(config)?;
    let problems = collect_problems(config, &mut resolver).await?;
    write_site(config, &problems).await.map(|_| ())
}

/// `all` command: one scan and one metadata pass for both outputs.
pub async fn cmd_all(config: &Config) -> Result<()> {
    let mut resolver = MetadataResolver::load(config)?;
    let problems = collect_problems(config, &mut resolver).await?;
    write_readmes(config, &problems)?;
    write_site(config, &problems).await.map(|_| ())
}

// =============================================================================
// CACHE
// =============================================================================

/// `cache` command.
pub fn cmd_cache(config: &Config, json: bool, clear: bool) -> Result<()> {
    if clear {
        if !config.cache.exists() {
            tracing::info!("no cache at {}", config.cache.display());
            return Ok(());
        }
        let removed = load_cache(&config.cache)?.len();
        save_cache(&MetadataCache::new(), &config.cache)?;
        tracing::info!(removed, "cleared {}", file_label(&config.cache));
        return Ok(());
    }

    let cache = load_cache(&config.cache)?;
    if json {
        println!("{}", cache.to_json()?);
        return Ok(());
    }

    println!("Cache: {}", config.cache.display());
    println!("Entries: {}", cache.len());
    for (slug, meta) in cache.iter() {
        let difficulty = if meta.difficulty.is_empty() {
            "-"
        } else {
            meta.difficulty.as_str()
        };
        println!("  {slug:<40} {difficulty:<8} {}", meta.tags.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_subcommands_with_global_options() {
        let cli = Cli::try_parse_from(["solvedocs", "readme", "--offline", "--root", "/repo"]).unwrap();
        assert!(matches!(cli.command, Commands::Readme));
        assert!(cli.config.offline);

        let cli = Cli::try_parse_from(["solvedocs", "-v", "cache", "--json"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Cache { json: true, clear: false }));
    }

    #[test]
    fn json_and_clear_conflict() {
        assert!(Cli::try_parse_from(["solvedocs", "cache", "--json", "--clear"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["solvedocs"]).is_err());
    }
}
