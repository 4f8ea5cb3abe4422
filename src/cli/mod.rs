//! CLI module for FloatChat.
//!
//! Subcommands:
//! - `serve`: Run the HTTP API
//! - `query`: Answer one query and print the JSON response
//! - `export`: Print floats or measurements as delimited text

mod export;
mod query;
mod serve;

use clap::{Parser, Subcommand};

use crate::services::ExportKind;

/// FloatChat - Argo float data service
#[derive(Parser)]
#[command(name = "floatchat")]
#[command(about = "Argo float data service with a keyword query pipeline")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Host address to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Answer a single query against a freshly loaded store
    Query {
        /// Free-text query, e.g. "average temperature"
        text: String,
    },

    /// Print delimited text to stdout
    Export {
        /// Collection to export
        #[arg(long = "type", value_enum, default_value_t = ExportKind::Measurements)]
        kind: ExportKind,

        /// Restrict a measurement export to one float's profile
        #[arg(long)]
        float_id: Option<String>,
    },
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::Serve { ref host, port } => self.run_serve(host.as_deref(), port).await,
            Command::Query { ref text } => self.run_query(text).await,
            Command::Export { kind, ref float_id } => {
                self.run_export(kind, float_id.as_deref()).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export_flags() {
        let app = App::parse_from(["floatchat", "export", "--type", "floats"]);
        assert!(matches!(
            app.command,
            Command::Export {
                kind: ExportKind::Floats,
                float_id: None
            }
        ));

        let app = App::parse_from(["floatchat", "-v", "export", "--float-id", "ARGO001"]);
        assert!(app.verbose);
        assert!(matches!(
            app.command,
            Command::Export { kind: ExportKind::Measurements, float_id: Some(ref id) } if id == "ARGO001"
        ));
    }

    #[test]
    fn test_parse_serve_overrides() {
        let app = App::parse_from(["floatchat", "serve", "--port", "8080"]);
        assert!(matches!(
            app.command,
            Command::Serve {
                host: None,
                port: Some(8080)
            }
        ));
    }
}
