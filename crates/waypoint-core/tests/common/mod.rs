use std::{
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use tempfile::TempDir;
use waypoint_core::{Assistant, AssistantBuilder, GenerationRequest, GenerativeModel};

pub const PIANO_PLAN: &str = r#"{
    "shortDescription": "Learn to play the piano",
    "motivation": "Every expert was once a beginner.",
    "steps": [
        {"title": "Find a teacher", "description": "Book a trial lesson"},
        {"title": "Practice scales", "description": "Fifteen minutes daily"},
        {"title": "Learn a song", "description": "Pick a simple piece"}
    ]
}"#;

/// Answers plan requests with [`PIANO_PLAN`] and step requests with a guide
/// naming the step.
#[derive(Default)]
pub struct ScriptedModel {
    pub calls: AtomicUsize,
}

impl ScriptedModel {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate(&self, request: &GenerationRequest) -> waypoint_core::Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if request.response_schema.is_some() {
            Ok(Some(PIANO_PLAN.to_string()))
        } else {
            Ok(Some(format!(
                "Guide ({}, {})",
                request.model, request.user_prompt
            )))
        }
    }
}

/// Opens an assistant over the database at `db_path`.
pub async fn open_assistant(db_path: &Path, model: &Arc<ScriptedModel>) -> Assistant {
    let model: Arc<dyn GenerativeModel> = model.clone();
    AssistantBuilder::new()
        .with_database_path(Some(db_path))
        .with_model(model)
        .build()
        .await
        .expect("Failed to create assistant")
}

/// Helper function to create a test assistant backed by a temporary database
pub async fn create_test_assistant() -> (TempDir, Arc<ScriptedModel>, Assistant) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let model = Arc::new(ScriptedModel::default());
    let assistant = open_assistant(&temp_dir.path().join("test.db"), &model).await;
    (temp_dir, model, assistant)
}
