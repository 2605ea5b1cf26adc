use std::io::Write;

use oidc_apidoc_server::config::Config;
use oidc_apidoc_server::domain::{SchemaVersion, UnsupportedPolicy};
use oidc_apidoc_server::server::assembler_from_config;

#[test]
fn hocon_file_drives_the_document() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"
server {{ host = "0.0.0.0", port = 8181 }}
issuer {{ uri = "https://login.example.org" }}
endpoints {{
  userinfo = false
  device_authorization = false
}}
document {{
  schema_version = "minimal"
  unsupported_policy = "omit_path"
}}
"#
    )
    .expect("write");

    let config = Config::from_hocon_path(file.path()).expect("config");
    assert_eq!(config.server.port, 8181);
    assert_eq!(config.document.unsupported_policy, UnsupportedPolicy::OmitPath);

    let assembler = assembler_from_config(&config);
    assert_eq!(assembler.schema_version(), SchemaVersion::Minimal);

    let issuer = config.issuer.uri.clone().expect("issuer");
    let document = assembler.generate(&issuer).expect("document");
    assert_eq!(document.paths.len(), 7);
    assert!(!document.paths.contains_key("/connect/userinfo"));
    assert_eq!(document.servers[0].url, "https://login.example.org");
}

#[test]
fn environment_overrides_builtin_defaults() {
    std::env::set_var("APIDOC_SERVER__PORT", "9191");
    std::env::set_var("APIDOC_ENDPOINTS__SWAGGER_ENABLED", "false");
    std::env::set_var("APIDOC_DOCUMENT__SCHEMA_VERSION", "minimal");

    let config = Config::from_env().expect("config");

    std::env::remove_var("APIDOC_SERVER__PORT");
    std::env::remove_var("APIDOC_ENDPOINTS__SWAGGER_ENABLED");
    std::env::remove_var("APIDOC_DOCUMENT__SCHEMA_VERSION");

    assert_eq!(config.server.port, 9191);
    assert_eq!(config.server.host, "127.0.0.1");
    assert!(!config.endpoints.swagger_enabled);
    assert!(config.endpoints.token);
    assert_eq!(config.endpoints.swagger_path, "/swagger.json");
    assert_eq!(config.document.schema_version, SchemaVersion::Minimal);
    assert_eq!(config.issuer.uri, None);
}

#[test]
fn shipped_application_conf_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/application.conf");
    let config = Config::from_hocon_path(path).expect("application.conf");

    assert_eq!(config.endpoints.swagger_path, "/swagger.json");
    assert_eq!(config.document.schema_version, SchemaVersion::Extended);
}
