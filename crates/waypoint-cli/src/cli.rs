//! Command handlers: run assistant operations and render their results.

use std::{fs, path::PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use jiff::Zoned;
use log::debug;
use waypoint_core::{
    export_file_name, Assistant, ExportResult, HistoryList, ImportResult, OperationStatus,
    PlanResult, RecordId, StepGuide,
};

use crate::{
    args::{GoalArgs, HistoryCommands, SetSettingsArgs, SettingsCommands, StepArgs},
    renderer::TerminalRenderer,
};

/// Runs one command against an assistant.
pub struct Cli {
    assistant: Assistant,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(assistant: Assistant, renderer: TerminalRenderer) -> Self {
        Self {
            assistant,
            renderer,
        }
    }

    pub async fn submit_goal(mut self, args: GoalArgs) -> Result<()> {
        let record = self.assistant.submit_goal(&args.goal).await?;
        self.renderer.render(&PlanResult::new(&record).to_string())?;
        Ok(())
    }

    pub async fn solve_step(mut self, args: StepArgs) -> Result<()> {
        let id = match args.record {
            Some(id) => RecordId::from(id.as_str()),
            None => self
                .assistant
                .history()
                .latest()
                .map(|record| record.id.clone())
                .ok_or_else(|| anyhow!("No history yet. Create a plan with `waypoint goal` first"))?,
        };
        self.assistant.load_history(&id)?;

        let index = usize::try_from(args.number - 1).context("Step number is too large")?;
        debug!("Solving step {} of record {id}", args.number);

        let Some(solution) = self.assistant.select_step(index).await? else {
            let status = OperationStatus::failure(format!(
                "Could not get a guide for step {}. Please try again",
                args.number
            ));
            self.renderer.render(&status.to_string())?;
            bail!("Step {} was not solved", args.number);
        };
        let step = self
            .assistant
            .plan()
            .and_then(|plan| plan.step(index))
            .ok_or_else(|| anyhow!("Step {} disappeared from the plan", args.number))?;

        self.renderer
            .render(&StepGuide::new(index, step, &solution).to_string())?;
        Ok(())
    }

    pub fn handle_history_command(mut self, command: HistoryCommands) -> Result<()> {
        match command {
            HistoryCommands::List => self.list_history(),
            HistoryCommands::Show { id } => self.show_history(&id),
            HistoryCommands::Export { output } => self.export_history(output),
            HistoryCommands::Import { path } => {
                let bytes = fs::read(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let count = self.assistant.import_history(&bytes)?;
                let result = ImportResult {
                    count,
                    total: self.assistant.history().len(),
                };
                self.renderer.render(&result.to_string())?;
                Ok(())
            }
        }
    }

    pub fn list_history(&self) -> Result<()> {
        let list = HistoryList(self.assistant.history().records());
        self.renderer.render(&format!("# History\n\n{list}"))?;
        Ok(())
    }

    fn show_history(&self, id: &str) -> Result<()> {
        let record = self
            .assistant
            .history()
            .get(&RecordId::from(id))
            .ok_or_else(|| anyhow!("No history record with ID {id}"))?;
        self.renderer.render(&record.to_string())?;
        Ok(())
    }

    fn export_history(&self, output: Option<PathBuf>) -> Result<()> {
        let path =
            output.unwrap_or_else(|| PathBuf::from(export_file_name(Zoned::now().date())));
        let bytes = self.assistant.export_history()?;
        fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;

        let result = ExportResult {
            path,
            count: self.assistant.history().len(),
        };
        self.renderer.render(&result.to_string())?;
        Ok(())
    }

    pub fn handle_settings_command(mut self, command: SettingsCommands) -> Result<()> {
        match command {
            SettingsCommands::Show => {
                self.renderer.render(&self.assistant.settings().to_string())?;
                Ok(())
            }
            SettingsCommands::Set(args) => self.update_settings(args),
        }
    }

    fn update_settings(&mut self, args: SetSettingsArgs) -> Result<()> {
        if args.is_empty() {
            bail!("Nothing to change. Pass --model, --language or --instructions");
        }

        let mut settings = self.assistant.settings().clone();
        if let Some(model) = args.model {
            settings.model = model.into();
        }
        if let Some(language) = args.language {
            settings.language = language.into();
        }
        if let Some(instructions) = args.instructions {
            settings.custom_instructions = instructions;
        }
        self.assistant.update_settings(settings)?;

        self.renderer.render(&format!(
            "{}\n{}",
            OperationStatus::success("Settings saved"),
            self.assistant.settings()
        ))?;
        Ok(())
    }
}
