// src/bin/write_openapi_snapshot.rs
use anyhow::{Context, Result};
use lilabs_blog::presentation::http::openapi;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let path = openapi::write_openapi_snapshot().context("failed to write OpenAPI snapshot")?;
    println!("OpenAPI snapshot written to {}", path.display());
    Ok(())
}
