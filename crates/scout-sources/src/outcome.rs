use scout_core::TitleRecord;

use crate::error::SourceError;

/// Result of one adapter call once its error boundary has been applied.
///
/// An adapter never returns `Err`: a failed fetch becomes
/// [`SourceOutcome::Unavailable`], which contributes no titles.
#[derive(Debug)]
#[must_use]
pub enum SourceOutcome {
    Collected(Vec<TitleRecord>),
    Unavailable(SourceError),
}

impl SourceOutcome {
    /// Applies the adapter error boundary, logging the failure under `source`.
    pub(crate) fn absorb(
        source: &'static str,
        subject: &str,
        result: Result<Vec<TitleRecord>, SourceError>,
    ) -> Self {
        match result {
            Ok(titles) => {
                tracing::debug!(source, subject, count = titles.len(), "collected titles");
                Self::Collected(titles)
            }
            Err(e) => {
                tracing::warn!(source, subject, error = %e, "source unavailable; using empty result");
                Self::Unavailable(e)
            }
        }
    }

    #[must_use]
    pub fn into_titles(self) -> Vec<TitleRecord> {
        match self {
            Self::Collected(titles) => titles,
            Self::Unavailable(_) => Vec::new(),
        }
    }

    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}
