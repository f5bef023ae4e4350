//! Requests and results exchanged with the AI collaborator.

mod requests;

pub use requests::{AnalyzeContentRequest, AutoPlanRequest, GenerateContentRequest, PlannedTask};
