//! One-shot query command handler.

use color_eyre::Result;

use crate::api::ChatQueryResponse;
use crate::config::Config;
use crate::context::Context;
use crate::di::FromRef;
use crate::services::QueryService;

use super::App;

impl App {
    /// Answer a single query and print the API-shaped JSON response.
    pub async fn run_query(&self, text: &str) -> Result<()> {
        let ctx = Context::bootstrap(Config::load()?).await?;
        let saved = QueryService::from_ref(&ctx).execute(text).await;

        let response = ChatQueryResponse::from(saved);
        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}
