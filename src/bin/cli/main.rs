use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reqwest::{
    Client, Response,
    multipart::{Form, Part},
};
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "file-gateway-cli")]
#[command(about = "CLI for interacting with the file gateway", long_about = None)]
struct Cli {
    /// Gateway URL
    #[arg(short, long, env = "FILE_GATEWAY_URL", default_value = "http://localhost:9000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show gateway health and configured bucket
    Health,

    /// Upload a file
    Upload {
        /// File path to upload
        file: PathBuf,
        /// Content type sent with the file
        #[arg(short, long, default_value = "application/octet-stream")]
        content_type: String,
    },

    /// List stored files
    List,

    /// Print a signed download URL for a stored file
    DownloadUrl {
        /// Object key as returned by upload or list
        key: String,
    },

    /// Delete a stored file
    Delete {
        /// Object key as returned by upload or list
        key: String,
    },
}

struct GatewayClient {
    http: Client,
    base_url: String,
}

impl GatewayClient {
    fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Path segment for a key; `/` and other reserved characters are escaped
    fn key_endpoint(&self, action: &str, key: &str) -> String {
        self.endpoint(&format!("{}/{}", action, urlencoding::encode(key)))
    }

    async fn health(&self) -> Result<Value> {
        read_json(self.http.get(self.endpoint("health")).send().await?).await
    }

    async fn upload(&self, file: &Path, content_type: &str) -> Result<Value> {
        let data = tokio::fs::read(file)
            .await
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .context("Upload path has no usable file name")?
            .to_string();

        let part = Part::bytes(data)
            .file_name(file_name)
            .mime_str(content_type)
            .context("Invalid content type")?;
        let form = Form::new().part("file", part);

        read_json(
            self.http
                .post(self.endpoint("upload"))
                .multipart(form)
                .send()
                .await?,
        )
        .await
    }

    async fn list(&self) -> Result<Value> {
        read_json(self.http.get(self.endpoint("files")).send().await?).await
    }

    async fn download_url(&self, key: &str) -> Result<Value> {
        read_json(self.http.get(self.key_endpoint("download", key)).send().await?).await
    }

    async fn delete(&self, key: &str) -> Result<Value> {
        read_json(self.http.delete(self.key_endpoint("delete", key)).send().await?).await
    }
}

/// Decode a gateway reply, turning `{success: false}` bodies into errors
async fn read_json(response: Response) -> Result<Value> {
    let status = response.status();
    let body: Value = response
        .json()
        .await
        .with_context(|| format!("Gateway returned a non-JSON body ({})", status))?;

    if !status.is_success() {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        anyhow::bail!("Gateway returned {}: {}", status, message);
    }

    Ok(body)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let client = GatewayClient::new(&cli.url);

    let reply = match &cli.command {
        Commands::Health => client.health().await?,
        Commands::Upload { file, content_type } => client.upload(file, content_type).await?,
        Commands::List => client.list().await?,
        Commands::DownloadUrl { key } => {
            let reply = client.download_url(key).await?;
            if let Some(url) = reply.get("url").and_then(Value::as_str) {
                println!("{}", url);
                return Ok(());
            }
            reply
        }
        Commands::Delete { key } => client.delete(key).await?,
    };

    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "file-gateway-cli",
            "--url",
            "http://gateway:9000",
            "upload",
            "report.pdf",
            "--content-type",
            "application/pdf",
        ]);

        assert_eq!(cli.url, "http://gateway:9000");
        match cli.command {
            Commands::Upload { file, content_type } => {
                assert_eq!(file, PathBuf::from("report.pdf"));
                assert_eq!(content_type, "application/pdf");
            }
            other => panic!("Expected upload command, got {:?}", other),
        }
    }

    #[test]
    fn test_key_is_escaped_into_one_segment() {
        let client = GatewayClient::new("http://localhost:9000/");
        assert_eq!(
            client.key_endpoint("delete", "20240101T000000_a b/c.txt"),
            "http://localhost:9000/api/delete/20240101T000000_a%20b%2Fc.txt"
        );
    }
}
