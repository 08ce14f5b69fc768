//! Lookup CLI command: resolve one name against the live dataset.

use clap::{Arg, ArgMatches, Command};

use crate::config::GeneratorConfig;
use crate::countries::{self, fetch::fetch_countries};
use crate::errors::{GenError, Result};
use crate::http_client::HttpClient;
use crate::lookup::build_lookup_table;

/// Build the `lookup` clap command.
pub fn lookup_command() -> Command {
    Command::new("lookup")
        .about("Print the two-letter code for a country name")
        .arg(
            Arg::new("name")
                .required(true)
                .help("Country name or alternate spelling, matched exactly"),
        )
}

/// Fetch the dataset and resolve `name` to its code.
pub async fn lookup_code(name: &str, config: &GeneratorConfig) -> Result<String> {
    let http = HttpClient::new(config)?;
    let countries = fetch_countries(&http, &config.endpoint).await?;
    let table = build_lookup_table(&countries::entries(&countries));
    tracing::debug!(names = table.len(), "Built lookup table");

    table
        .find(name)
        .map(str::to_string)
        .ok_or_else(|| GenError::NotFound(name.to_string()))
}

/// Handle the `lookup` command.
pub async fn handle_lookup(matches: &ArgMatches, config: &GeneratorConfig) -> Result<()> {
    let name = matches
        .get_one::<String>("name")
        .ok_or_else(|| GenError::Command("missing country name".into()))?;

    println!("{}", lookup_code(name, config).await?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve_zedland() -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "cca2": "ZZ",
                "name": {"common": "Zedland", "official": "Republic of Zedland"},
                "altSpellings": ["ZD"]
            }])))
            .mount(&mock_server)
            .await;
        mock_server
    }

    #[test]
    fn test_lookup_command_requires_name() {
        assert!(lookup_command().try_get_matches_from(["lookup"]).is_err());
    }

    #[tokio::test]
    async fn test_lookup_code_resolves_every_variant() {
        let mock_server = serve_zedland().await;
        let config = GeneratorConfig {
            endpoint: mock_server.uri(),
            ..GeneratorConfig::default()
        };
        for name in ["Zedland", "Republic of Zedland", "ZD"] {
            assert_eq!(lookup_code(name, &config).await.unwrap(), "ZZ");
        }
    }

    #[tokio::test]
    async fn test_handle_lookup_found() {
        let mock_server = serve_zedland().await;
        let config = GeneratorConfig {
            endpoint: mock_server.uri(),
            ..GeneratorConfig::default()
        };
        let matches = lookup_command()
            .try_get_matches_from(["lookup", "Republic of Zedland"])
            .unwrap();
        handle_lookup(&matches, &config).await.unwrap();
    }

    #[tokio::test]
    async fn test_handle_lookup_not_found() {
        let mock_server = serve_zedland().await;
        let config = GeneratorConfig {
            endpoint: mock_server.uri(),
            ..GeneratorConfig::default()
        };
        let matches = lookup_command()
            .try_get_matches_from(["lookup", "Atlantis"])
            .unwrap();
        let err = handle_lookup(&matches, &config).await.unwrap_err();
        match err {
            GenError::NotFound(name) => assert_eq!(name, "Atlantis"),
            e => panic!("Expected GenError::NotFound, got {:?}", e),
        }
    }
}
