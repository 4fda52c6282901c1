//! Command handlers. Each builds a fresh pipeline from the environment.

use scout_core::{AppConfig, StrategyRequest};
use scout_strategy::StrategyPipeline;

use crate::BriefArgs;

impl BriefArgs {
    /// Converts the flags into a validated request.
    ///
    /// # Errors
    ///
    /// Returns an error if `--audience` or `--goal` is blank.
    pub(crate) fn into_request(self) -> anyhow::Result<StrategyRequest> {
        let request = StrategyRequest {
            audience: self.audience,
            goal: self.goal,
            competitor_channels: self.channels,
            communities: self.subreddits,
        };
        request.validate()?;
        Ok(request)
    }
}

fn build_pipeline(config: &AppConfig) -> anyhow::Result<StrategyPipeline> {
    let credentials = scout_core::load_credentials()?;
    let pipeline = StrategyPipeline::from_config(config, &credentials)
        .map_err(|e| anyhow::anyhow!("failed to build strategy pipeline: {e}"))?;
    Ok(pipeline)
}

/// Prints the collected data as pretty JSON.
///
/// # Errors
///
/// Returns an error if the brief is invalid or credentials are missing.
/// Source failures show up as empty lists, not errors.
pub(crate) async fn run_collect(config: &AppConfig, brief: BriefArgs) -> anyhow::Result<()> {
    let request = brief.into_request()?;
    let pipeline = build_pipeline(config)?;
    let (collected, _) = pipeline.preview(&request).await;
    println!("{}", serde_json::to_string_pretty(&collected)?);
    Ok(())
}

/// Prints the assembled prompt without calling the generator.
///
/// # Errors
///
/// Returns an error if the brief is invalid or credentials are missing.
pub(crate) async fn run_prompt(config: &AppConfig, brief: BriefArgs) -> anyhow::Result<()> {
    let request = brief.into_request()?;
    let pipeline = build_pipeline(config)?;
    let (_, prompt) = pipeline.preview(&request).await;
    println!("{prompt}");
    Ok(())
}

/// Prints the generator's raw strategy document.
///
/// # Errors
///
/// Returns an error if the brief is invalid, credentials are missing, or
/// generation fails.
pub(crate) async fn run_generate(config: &AppConfig, brief: BriefArgs) -> anyhow::Result<()> {
    let request = brief.into_request()?;
    let pipeline = build_pipeline(config)?;
    let strategy = pipeline.run(&request).await?;
    println!("{strategy}");
    Ok(())
}
