//! Renders collected data into the generator's instruction document.
//!
//! The JSON contract at the end of the document is the only place the shape
//! of the final strategy is defined. The server passes the generator's
//! output through unchanged, so editing the contract here changes the API
//! response.

use scout_core::{CollectedData, StrategyRequest, TitleRecord};

/// Rendered in place of any category with no collected records.
pub const PLACEHOLDER: &str = "N/A";

const TITLE_SEPARATOR: &str = ", ";
const GROUP_SEPARATOR: &str = "; ";

/// Days covered by the content schedule.
const SCHEDULE_DAYS: usize = 30;

/// Builds the prompt for one strategy request.
#[must_use]
pub fn assemble(request: &StrategyRequest, collected: &CollectedData) -> String {
    let trends = join_titles(&collected.top_titles);
    let competitors = join_groups(
        collected
            .competitor_results
            .iter()
            .map(|r| (r.channel.as_str(), r.videos.as_slice())),
    );
    let communities = join_groups(
        collected
            .community_results
            .iter()
            .map(|r| (r.community.as_str(), r.posts.as_slice())),
    );

    format!(
        "You are an expert YouTube content strategist. Build a data-driven content strategy \
for a channel using the client brief and the research data below.

Client brief:
- Target audience: {audience}
- Goal: {goal}
- Competitor YouTube channels: {channels}
- Relevant subreddits: {subreddits}

Research data:
- Trending video titles for this audience and goal: {trends}
- Recent videos from competitor channels: {competitors}
- Hot discussions in relevant subreddits: {communities}

Respond with a single JSON object and nothing else. It must have exactly these top-level keys:
- \"trendAnalysis\": an object with \"summary\" (string) and \"keyTrends\" (array of strings) \
describing what is currently working for this audience.
- \"contentAnalysis\": an object with \"contentPillars\" (array of strings) and \"formats\" \
(array of strings) recommending what to make and how.
- \"competitorAnalysis\": an array with one object per competitor channel, each with \
\"channel\" (string), \"strengths\" (array of strings) and \"opportunities\" (array of strings).
- \"contentSchedule\": an array of exactly {days} objects, one per day from day 1 to day {days}, \
each with \"day\" (number), \"title\" (string), \"format\" (string) and \"description\" (string).",
        audience = request.audience,
        goal = request.goal,
        channels = join_names(&request.competitor_channels),
        subreddits = join_names(&request.communities),
        days = SCHEDULE_DAYS,
    )
}

fn join_titles(records: &[TitleRecord]) -> String {
    if records.is_empty() {
        return PLACEHOLDER.to_string();
    }
    records
        .iter()
        .map(|r| r.title.as_str())
        .collect::<Vec<_>>()
        .join(TITLE_SEPARATOR)
}

fn join_groups<'a>(groups: impl Iterator<Item = (&'a str, &'a [TitleRecord])>) -> String {
    let rendered: Vec<String> = groups
        .map(|(name, records)| format!("{name}: {}", join_titles(records)))
        .collect();
    if rendered.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        rendered.join(GROUP_SEPARATOR)
    }
}

fn join_names(names: &[String]) -> String {
    if names.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        names.join(TITLE_SEPARATOR)
    }
}
