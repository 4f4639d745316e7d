use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use camino::{Utf8Path, Utf8PathBuf};
use ioutil::{FileSystem, LocalFs};
use tracing::{debug, info, warn};

use crate::cli::{Cli, Command};
use crate::config::{self, IoConfig};
use crate::logging;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ConfigPathSource {
    Explicit,
    Discovered,
    HomeDefault,
}

impl ConfigPathSource {
    fn as_str(&self) -> &'static str {
        match self {
            ConfigPathSource::Explicit => "explicit",
            ConfigPathSource::Discovered => "discovered",
            ConfigPathSource::HomeDefault => "home-default",
        }
    }
}

#[derive(Clone, Debug)]
struct ResolvedConfigPath {
    path: Utf8PathBuf,
    source: ConfigPathSource,
}

struct AppState {
    config: IoConfig,
    config_path: ResolvedConfigPath,
    dry_run: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()
        .ok()
        .and_then(|cwd| Utf8PathBuf::from_path_buf(cwd).ok());
    let resolved = resolve_config_path(cli.file.as_deref(), cwd.as_deref())?;
    let config = load_config(&resolved)?;

    logging::init(cli.verbose, config.log_level.as_deref());
    debug!(
        path = %resolved.path,
        source = resolved.source.as_str(),
        "configuration resolved"
    );

    let state = AppState {
        config,
        config_path: resolved,
        dry_run: cli.dry_run,
    };

    match cli.command {
        Command::Delete { paths } => handle_delete(&state, &paths),
        Command::Mkdir { parent, name } => handle_mkdir(&state, &parent, &name),
        Command::Config => handle_config(&state),
    }
}

fn handle_delete(state: &AppState, paths: &[PathBuf]) -> Result<()> {
    let failed = delete_paths(state, paths);
    if failed.is_empty() {
        return Ok(());
    }

    let listing = failed
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    bail!("failed to delete {} path(s): {}", failed.len(), listing)
}

/// Delete each path, returning those that were refused or could not be removed.
fn delete_paths<'a>(state: &AppState, paths: &'a [PathBuf]) -> Vec<&'a Path> {
    let mut failed = Vec::new();
    for path in paths {
        if state.config.is_protected(path) {
            warn!(path = %path.display(), "refusing to delete protected path");
            failed.push(path.as_path());
            continue;
        }

        if state.dry_run {
            println!("(dry-run) would delete {}", path.display());
            continue;
        }

        if ioutil::delete(path) {
            info!(path = %path.display(), "deleted");
        } else {
            failed.push(path.as_path());
        }
    }
    failed
}

fn handle_mkdir(state: &AppState, parent: &Path, name: &Path) -> Result<()> {
    if state.dry_run {
        let target = parent.join(name);
        if LocalFs.exists(&target) {
            bail!("(dry-run) {} already exists", target.display());
        }
        println!("(dry-run) would create {}", target.display());
        return Ok(());
    }

    let created = ioutil::mkdir(parent, name)
        .with_context(|| format!("creating {} in {}", name.display(), parent.display()))?;
    println!("{}", created.display());
    Ok(())
}

fn handle_config(state: &AppState) -> Result<()> {
    println!(
        "Configuration from {} ({}):",
        state.config_path.path,
        state.config_path.source.as_str()
    );
    print!("{}", config::format_summary(&state.config));
    Ok(())
}

fn load_config(resolved: &ResolvedConfigPath) -> Result<IoConfig> {
    if resolved.source == ConfigPathSource::HomeDefault && !resolved.path.exists() {
        return Ok(IoConfig::default());
    }
    config::load_from_path(&resolved.path)
}

fn resolve_config_path(
    explicit: Option<&Path>,
    cwd: Option<&Utf8Path>,
) -> Result<ResolvedConfigPath> {
    if let Some(path) = explicit {
        let path = Utf8PathBuf::from_path_buf(path.to_path_buf())
            .map_err(|_| anyhow!("config path must be valid UTF-8"))?;
        return Ok(ResolvedConfigPath {
            path,
            source: ConfigPathSource::Explicit,
        });
    }

    if let Some(cwd) = cwd {
        for dir in cwd.ancestors() {
            let candidate = dir.join(".ioutil").join("config.toml");
            if candidate.exists() {
                return Ok(ResolvedConfigPath {
                    path: candidate,
                    source: ConfigPathSource::Discovered,
                });
            }
        }
    }

    let home = dirs::home_dir().ok_or_else(|| anyhow!("unable to determine home directory"))?;
    let mut path = home;
    path.push(".ioutil");
    path.push("config.toml");
    let path = Utf8PathBuf::from_path_buf(path)
        .map_err(|_| anyhow!("config path must be valid UTF-8"))?;
    Ok(ResolvedConfigPath {
        path,
        source: ConfigPathSource::HomeDefault,
    })
}
