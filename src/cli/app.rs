use anyhow::{Result, bail};
use serde_json::Value;
use tracing::info;

use crate::cli::args::{Command, read_patch};
use crate::{ClientConfig, NotionDatabaseClient, RemoteApiError, ResponseFormatter};

#[derive(Debug)]
pub struct App {
    pub client: NotionDatabaseClient,
    pub formatter: ResponseFormatter,
    pub raw_json: bool,
}

impl App {
    pub fn new(raw_json: bool) -> Result<Self> {
        let config = ClientConfig::from_env()?;
        config.validate()?;
        Self::with_config(config, raw_json)
    }

    pub fn with_config(config: ClientConfig, raw_json: bool) -> Result<Self> {
        Ok(Self {
            client: NotionDatabaseClient::new(config)?,
            formatter: ResponseFormatter::new(),
            raw_json,
        })
    }

    pub async fn run(&self, command: Command) -> Result<()> {
        let output = self.execute(command).await?;
        println!("{output}");
        Ok(())
    }

    /// Runs one command and renders its response
    pub async fn execute(&self, command: Command) -> Result<String> {
        let (response, is_query) = match command {
            Command::All => {
                info!("fetching all rows");
                (self.client.fetch_all().await?, true)
            }
            Command::Sprint { number } => {
                info!(sprint = number, "fetching sprint rows");
                (self.client.fetch_sprint(number).await?, true)
            }
            Command::Update { page_id, patch } => {
                let patch = read_patch(&patch)?;
                info!(%page_id, "updating page");
                (self.client.update_page(&page_id, &patch).await?, false)
            }
        };

        self.render(&response, is_query)
    }

    fn render(&self, response: &Value, is_query: bool) -> Result<String> {
        if let Some(err) = RemoteApiError::from_body(response) {
            bail!(self.formatter.format_remote_error(&err));
        }

        if self.raw_json {
            return Ok(serde_json::to_string_pretty(response)?);
        }

        Ok(if is_query {
            self.formatter.format_query(response)
        } else {
            format!("Updated: {}", self.formatter.format_page(response))
        })
    }
}
