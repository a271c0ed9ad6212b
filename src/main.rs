//! jkspub CLI application.
//!
//! This binary reads a JKS keystore and prints the Base64-encoded public key
//! of a private key entry, or lists the store's entries. Every failure is
//! reported with a distinct message on stderr and a non-zero exit status.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use clap::{Parser, Subcommand};
use jkspub::error::{JksError, Result};
use jkspub::store::keystore::{export_public_key, load_keystore};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "jkspub")]
#[command(about = "Export public keys from Java (JKS) keystores", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the public key of a private key entry
    Export {
        /// Path to the keystore file
        keystore: PathBuf,

        /// Alias of the entry to export
        #[arg(long)]
        alias: String,

        /// Store password (prompted if not given)
        #[arg(long)]
        password: Option<String>,

        /// Key password (defaults to the store password)
        #[arg(long)]
        key_password: Option<String>,

        /// Output format: base64 or pem
        #[arg(long, default_value = "base64")]
        format: String,

        /// Optional output file (if not specified, prints to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the entries in a keystore
    List {
        /// Path to the keystore file
        keystore: PathBuf,

        /// Store password (prompted if not given)
        #[arg(long)]
        password: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Export {
            keystore,
            alias,
            password,
            key_password,
            format,
            output,
        } => handle_export(&keystore, &alias, password, key_password, &format, output),
        Commands::List { keystore, password } => handle_list(&keystore, password),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn store_password(password: Option<String>) -> Result<String> {
    match password {
        Some(password) => Ok(password),
        None => Ok(rpassword::prompt_password("Enter keystore password: ")?),
    }
}

fn handle_export(
    keystore_path: &Path,
    alias: &str,
    password: Option<String>,
    key_password: Option<String>,
    format: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let password = store_password(password)?;
    let key_password = key_password.unwrap_or_else(|| password.clone());

    let store = load_keystore(keystore_path, &password)?;
    let spki_der = export_public_key(&store, alias, &key_password)?;

    let formatted = match format.to_lowercase().as_str() {
        // single line, no wrapping, like Java's Base64.encodeBase64String
        "base64" => BASE64_STANDARD.encode(&spki_der),
        "pem" => pem::encode(&pem::Pem::new("PUBLIC KEY", spki_der)),
        _ => {
            return Err(JksError::FormatError(format!(
                "Unsupported output format: '{}'. Use 'base64' or 'pem'",
                format
            )));
        }
    };

    if let Some(output_path) = output {
        fs::write(&output_path, formatted.as_bytes())?;
        println!(
            "Exported public key '{}' in {} format to: {}",
            alias,
            format,
            output_path.display()
        );
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

fn handle_list(keystore_path: &Path, password: Option<String>) -> Result<()> {
    let password = store_password(password)?;
    let store = load_keystore(keystore_path, &password)?;

    let entries = store.entry_infos();
    if entries.is_empty() {
        println!("Keystore is empty.");
        return Ok(());
    }

    println!("{:<24} {:<20} Created", "Alias", "Type");
    println!("{}", "-".repeat(64));

    for info in entries {
        println!(
            "{:<24} {:<20} {}",
            info.alias,
            info.kind,
            format_created_at(info.created_at)
        );
    }

    Ok(())
}

fn format_created_at(millis: u64) -> String {
    i64::try_from(millis)
        .ok()
        .and_then(chrono::DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}
