use clap::{Parser, Subcommand, ValueEnum};
use echo_gate_core::PARAMETER_NAME;
use reqwest::{Client, StatusCode};
use tracing::debug;

#[derive(Parser)]
#[command(name = "gate-probe")]
#[command(about = "Sends requests to an echo-gate server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Server URL
    #[arg(long, default_value = "http://localhost:3000")]
    server: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one request carrying the `123` parameter
    Send {
        /// Parameter value; omit to send the request without it
        value: Option<String>,

        /// How the parameter is delivered
        #[arg(short, long, value_enum, default_value_t = ProbeMethod::Get)]
        method: ProbeMethod,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProbeMethod {
    /// Query string
    Get,
    /// Urlencoded form body
    Post,
}

#[derive(Debug, PartialEq, Eq)]
struct ProbeReport {
    status: StatusCode,
    body_len: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = Client::new();

    match cli.command {
        Commands::Send { value, method } => {
            let report = send(&client, &cli.server, value.as_deref(), method).await?;
            if report.status.is_success() {
                println!("✅ {} ({} body bytes)", report.status, report.body_len);
            } else {
                println!("❌ {} ({} body bytes)", report.status, report.body_len);
            }
        }
    }

    Ok(())
}

async fn send(
    client: &Client,
    server: &str,
    value: Option<&str>,
    method: ProbeMethod,
) -> anyhow::Result<ProbeReport> {
    let url = format!("{}/", server.trim_end_matches('/'));
    let params: Vec<(&str, &str)> = value.map(|v| (PARAMETER_NAME, v)).into_iter().collect();

    debug!(url = %url, method = ?method, "Sending probe");

    let request = match method {
        ProbeMethod::Get => client.get(&url).query(&params),
        ProbeMethod::Post => client.post(&url).form(&params),
    };

    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    Ok(ProbeReport {
        status,
        body_len: body.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_send_get_puts_value_in_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::UrlEncoded("123".into(), "; rm -rf /".into()))
            .with_status(200)
            .create_async()
            .await;

        let report = send(&Client::new(), &server.url(), Some("; rm -rf /"), ProbeMethod::Get)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            report,
            ProbeReport {
                status: StatusCode::OK,
                body_len: 0
            }
        );
    }

    #[tokio::test]
    async fn test_send_post_puts_value_in_form_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::UrlEncoded("123".into(), "hello".into()))
            .with_status(200)
            .create_async()
            .await;

        let report = send(&Client::new(), &server.url(), Some("hello"), ProbeMethod::Post)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(report.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_send_reports_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let report = send(&Client::new(), &server.url(), None, ProbeMethod::Get)
            .await
            .unwrap();

        assert_eq!(
            report,
            ProbeReport {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body_len: 4
            }
        );
    }

    #[test]
    fn test_cli_parses_send_without_value() {
        let cli = Cli::try_parse_from(["gate-probe", "send", "--method", "post"]).unwrap();
        match cli.command {
            Commands::Send { value, method } => {
                assert_eq!(value, None);
                assert_eq!(method, ProbeMethod::Post);
            }
        }
        assert_eq!(cli.server, "http://localhost:3000");
    }
}
