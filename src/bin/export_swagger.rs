use std::path::PathBuf;

use oidc_apidoc_server::config::Config;
use oidc_apidoc_server::openapi::render_pretty;
use oidc_apidoc_server::server::assembler_from_config;

fn default_output_path() -> PathBuf {
    PathBuf::from("docs/assets/swagger/swagger.json")
}

fn default_issuer(config: &Config) -> String {
    config
        .issuer
        .uri
        .clone()
        .unwrap_or_else(|| format!("http://{}:{}", config.server.host, config.server.port))
}

/// `export_swagger [issuer] [output-path]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let mut args = std::env::args().skip(1);

    let issuer = args.next().unwrap_or_else(|| default_issuer(&config));
    let output_path = args.next().map(PathBuf::from).unwrap_or_else(default_output_path);

    let document = assembler_from_config(&config).generate(&issuer)?;
    let json = render_pretty(&document)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(&output_path, json)?;

    eprintln!(
        "Wrote Swagger 2.0 document for {} to {}",
        issuer,
        output_path.canonicalize().unwrap_or(output_path).display()
    );

    Ok(())
}
