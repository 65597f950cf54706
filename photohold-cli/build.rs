//! Build script for photohold-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("photohold")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage shared photo print reservations")
        .long_about(
            "Command-line tool for claiming shared photo prints and managing their pickup lifecycle",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("PHOTOHOLD_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("PHOTOHOLD_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("PHOTOHOLD_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("reserve")
                .about("Reserve a photo print for pickup")
                .long_about("Claim a single shared print of a photo for the session's user"),
            Command::new("cancel")
                .about("Cancel a reservation")
                .long_about("Cancel a reservation by id; the photo becomes reservable again"),
            Command::new("status")
                .about("Check whether a photo can be reserved")
                .long_about("Show whether a photo is available, held by you, or held by someone else"),
            Command::new("list")
                .about("List reservations with per-status counts (admin)")
                .long_about("Display reservations in various formats with per-status counts"),
            Command::new("update")
                .about("Update a single reservation's status (admin)")
                .long_about("Move one reservation through the status lifecycle"),
            Command::new("bulk-update")
                .about("Apply one status change to several reservations (admin)")
                .long_about(
                    "Apply one status change across several reservation ids with per-id partial success",
                ),
            Command::new("init")
                .about("Initialize the photohold data directory and database")
                .long_about("Set up the photohold database and configuration"),
            Command::new("show-data-dir")
                .about("Show the resolved data directory path")
                .long_about("Display the path to the photohold data directory"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main photohold.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("photohold.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
