//! Offline collaborator that answers from fixed data.

use crate::assistant::domain::{
    AnalyzeContentRequest, AutoPlanRequest, GenerateContentRequest, PlannedTask,
};
use crate::assistant::ports::{AssistantResult, ContentAssistant};
use crate::task::domain::ContentAnalysis;
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct Journal {
    generated: Vec<GenerateContentRequest>,
    analyzed: Vec<AnalyzeContentRequest>,
    planned: Vec<AutoPlanRequest>,
}

/// Collaborator returning preset answers and recording every request.
///
/// Useful for demos and tests that run without network access.
#[derive(Debug, Clone)]
pub struct CannedContentAssistant {
    draft: String,
    analysis: ContentAnalysis,
    plan: Vec<PlannedTask>,
    journal: Arc<RwLock<Journal>>,
}

impl CannedContentAssistant {
    /// Creates a collaborator with fixed answers.
    #[must_use]
    pub fn new(draft: impl Into<String>, analysis: ContentAnalysis, plan: Vec<PlannedTask>) -> Self {
        Self {
            draft: draft.into(),
            analysis,
            plan,
            journal: Arc::new(RwLock::new(Journal::default())),
        }
    }

    /// Returns the generate requests received so far.
    #[must_use]
    pub fn generate_requests(&self) -> Vec<GenerateContentRequest> {
        self.journal
            .read()
            .map(|journal| journal.generated.clone())
            .unwrap_or_default()
    }

    /// Returns the analyze requests received so far.
    #[must_use]
    pub fn analyze_requests(&self) -> Vec<AnalyzeContentRequest> {
        self.journal
            .read()
            .map(|journal| journal.analyzed.clone())
            .unwrap_or_default()
    }

    /// Returns the auto-plan requests received so far.
    #[must_use]
    pub fn plan_requests(&self) -> Vec<AutoPlanRequest> {
        self.journal
            .read()
            .map(|journal| journal.planned.clone())
            .unwrap_or_default()
    }

    fn record(&self, entry: impl FnOnce(&mut Journal)) {
        if let Ok(mut journal) = self.journal.write() {
            entry(&mut journal);
        }
    }
}

#[async_trait]
impl ContentAssistant for CannedContentAssistant {
    async fn generate(&self, request: &GenerateContentRequest) -> AssistantResult<String> {
        self.record(|journal| journal.generated.push(request.clone()));
        Ok(self.draft.clone())
    }

    async fn analyze(&self, request: &AnalyzeContentRequest) -> AssistantResult<ContentAnalysis> {
        self.record(|journal| journal.analyzed.push(request.clone()));
        Ok(self.analysis.clone())
    }

    async fn auto_plan(&self, request: &AutoPlanRequest) -> AssistantResult<Vec<PlannedTask>> {
        self.record(|journal| journal.planned.push(request.clone()));
        Ok(self.plan.clone())
    }
}
