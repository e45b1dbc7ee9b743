use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Default, Serialize)]
struct DesktopBootstrapConfig {
    secret: Option<String>,
    secret_kind: Option<String>,
    storage_key: Option<String>,
    book_path: Option<String>,
}

fn main() {
    println!("cargo:rerun-if-env-changed=FOLIO_SECRET");
    println!("cargo:rerun-if-env-changed=FOLIO_SECRET_KIND");
    println!("cargo:rerun-if-env-changed=FOLIO_STORAGE_KEY");
    println!("cargo:rerun-if-env-changed=FOLIO_BOOK_PATH");

    if let Err(error) = write_desktop_bootstrap_config() {
        println!("cargo:warning=failed to generate desktop bootstrap config: {error}");
    }
}

fn write_desktop_bootstrap_config() -> io::Result<()> {
    load_workspace_dotenv();

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    fs::create_dir_all(&out_dir)?;

    let config = DesktopBootstrapConfig {
        secret: env_var_trimmed("FOLIO_SECRET"),
        secret_kind: env_var_trimmed("FOLIO_SECRET_KIND"),
        storage_key: env_var_trimmed("FOLIO_STORAGE_KEY"),
        book_path: env_var_trimmed("FOLIO_BOOK_PATH"),
    };

    let content = serde_json::to_string_pretty(&config)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error.to_string()))?;
    fs::write(out_dir.join("desktop-bootstrap.json"), content)?;
    Ok(())
}

fn load_workspace_dotenv() {
    let manifest_dir =
        env::var_os("CARGO_MANIFEST_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);
    let candidate = manifest_dir.join("..").join("..").join(".env");
    if candidate.exists() {
        println!("cargo:rerun-if-changed={}", candidate.display());
        let _ = dotenvy::from_path(candidate);
    }
}

fn env_var_trimmed(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
