//! Offline administration of the seating snapshot file.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use clap::{Parser, Subcommand};
use ortho_config::OrthoConfig;
use seating::SeatingSettings;
use seating::domain::SeatingRegistry;
use seating::domain::ports::{SeatingCommand, SeatingQuery};
use seating::outbound::persistence::JsonFileSnapshotStore;
use tokio::runtime::Builder;

/// `seating-admin` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seating-admin",
    about = "Inspect and maintain the seating snapshot without running the server",
    version
)]
struct CliArgs {
    /// Snapshot file. Falls back to `SEATING_SNAPSHOT_PATH`, then the default.
    #[arg(long = "snapshot", value_name = "path")]
    snapshot_path: Option<PathBuf>,
    #[command(subcommand)]
    command: AdminCommand,
}

#[derive(Debug, Clone, Subcommand)]
enum AdminCommand {
    /// Print the table and tablemates for a registration number.
    Lookup {
        /// Registration number, case-insensitive.
        attendee_id: String,
    },
    /// Print the next free registration number.
    NextId,
    /// Write the snapshot as JSON to stdout or a file.
    Export {
        /// Destination file; stdout when omitted.
        #[arg(long = "output", value_name = "path")]
        output: Option<PathBuf>,
    },
    /// Replace the registry with a snapshot file.
    Import {
        /// Snapshot document to load.
        input: PathBuf,
    },
    /// Restore the seed registry.
    Reset,
}

fn main() -> io::Result<()> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let settings = SeatingSettings::load_from_iter([OsString::from("seating-admin")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let path = args
        .snapshot_path
        .clone()
        .unwrap_or_else(|| settings.snapshot_path());

    let store = JsonFileSnapshotStore::new(&path).map_err(io::Error::other)?;
    let seed = settings.seed().map_err(io::Error::other)?;
    let policy = settings.id_policy().map_err(io::Error::other)?;
    let registry = SeatingRegistry::open(Arc::new(store), seed, policy)
        .await
        .map_err(|error| io::Error::other(format!("open registry '{}': {error}", path.display())))?;

    run(&registry, args.command).await
}

async fn run<R>(registry: &R, command: AdminCommand) -> io::Result<()>
where
    R: SeatingQuery + SeatingCommand,
{
    let mut stdout = io::stdout().lock();
    match command {
        AdminCommand::Lookup { attendee_id } => {
            let found = registry
                .lookup_table(&attendee_id)
                .await
                .map_err(io::Error::other)?;
            writeln!(stdout, "table={}", found.table.name())?;
            writeln!(stdout, "attendee={}", found.attendee_name)?;
            for member in found.members {
                writeln!(stdout, "member={} {}", member.id, member.name)?;
            }
        }
        AdminCommand::NextId => {
            let id = registry.generate_id().await.map_err(io::Error::other)?;
            writeln!(stdout, "{id}")?;
        }
        AdminCommand::Export { output } => {
            let bytes = registry.export_snapshot().await.map_err(io::Error::other)?;
            match output {
                Some(path) => write_file(&path, &bytes)?,
                None => {
                    stdout.write_all(&bytes)?;
                    writeln!(stdout)?;
                }
            }
        }
        AdminCommand::Import { input } => {
            let payload = read_file(&input)?;
            let snapshot = registry
                .import_snapshot(&payload)
                .await
                .map_err(io::Error::other)?;
            writeln!(
                stdout,
                "imported attendees={} tables={}",
                snapshot.attendees().len(),
                snapshot.tables().len()
            )?;
        }
        AdminCommand::Reset => {
            let snapshot = registry.reset_all().await.map_err(io::Error::other)?;
            writeln!(
                stdout,
                "reset attendees={} tables={}",
                snapshot.attendees().len(),
                snapshot.tables().len()
            )?;
        }
    }
    Ok(())
}

fn open_parent(path: &Path) -> io::Result<(Dir, &Path)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path must name a file"))?;
    let directory = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        io::Error::other(format!("open directory '{}': {error}", parent.display()))
    })?;
    Ok((directory, Path::new(file_name)))
}

fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let (directory, file_name) = open_parent(path)?;
    let mut file = directory
        .open(file_name)
        .map_err(|error| io::Error::other(format!("open '{}': {error}", path.display())))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}

fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let (directory, file_name) = open_parent(path)?;
    directory
        .write(file_name, contents)
        .map_err(|error| io::Error::other(format!("write '{}': {error}", path.display())))
}
