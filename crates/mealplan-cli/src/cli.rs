//! Command handlers and clap argument wrappers
//!
//! Argument structs carry the clap derives and convert into the
//! interface-agnostic parameter types of `mealplan_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → SqliteGateway
//! ```
//!
//! The wizard itself reads one action per line from stdin and feeds it to a
//! [`WizardSession`].

use std::{sync::Arc, time::Duration};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use log::{info, warn};
use mealplan_core::{
    parse_input, Catalog, DeletePlan, DeleteResult, Id, ListPlans, PlanSubmissionGateway,
    PlanView, SessionUpdate, SqliteGateway, SubmitResult, Wizard, WizardSession,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::renderer::TerminalRenderer;

const AGAIN: &str = "Type `restart` to plan another week or `quit` to leave.\n\n";

const HELP: &str = "Type an option number or name to select it, `next` to continue, \
`back` to go back, `restart` to start over, `quit` to leave.\n\n";

/// Start the interactive wizard
#[derive(Args, Default)]
pub struct PlanArgs {
    /// Keep the submitted plan in memory instead of the database
    #[arg(long)]
    pub dry_run: bool,
}

/// List submitted plans, newest first
#[derive(Args)]
pub struct ListPlansArgs {
    /// Maximum number of plans to show
    #[arg(short, long, default_value_t = mealplan_core::params::DEFAULT_LIST_LIMIT)]
    pub limit: u32,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans { limit: val.limit }
    }
}

/// Show one submitted plan
#[derive(Args)]
pub struct ShowPlanArgs {
    #[arg(help = "Identifier of the submitted plan to show")]
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a submitted plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    #[arg(help = "Identifier of the submitted plan to delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List submitted plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show a submitted plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Delete a submitted plan
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

/// Runs commands against the terminal.
pub struct Cli {
    catalog: Catalog,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(catalog: Catalog, renderer: TerminalRenderer) -> Self {
        Self { catalog, renderer }
    }

    /// Runs the wizard on stdin until the user quits or input ends.
    ///
    /// After a submission the user may `restart` to plan again.
    pub async fn run_wizard(
        &self,
        gateway: Arc<dyn PlanSubmissionGateway>,
        delay: Duration,
    ) -> Result<()> {
        let mut session = WizardSession::new(Wizard::new(self.catalog.clone()), gateway, delay);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        self.renderer.render(HELP)?;
        self.renderer.render(&session.screen())?;

        while let Some(line) = lines.next_line().await.context("Failed to read input")? {
            if matches!(line.trim(), "q" | "quit" | "exit") {
                break;
            }

            match session.apply(parse_input(&line)) {
                Ok(SessionUpdate::Pending) => {
                    self.renderer.render(&session.screen())?;
                    match session.settle().await {
                        Ok(Some(SessionUpdate::Submitted(plan))) => {
                            let result = SubmitResult {
                                plan: &plan,
                                catalog: &self.catalog,
                            };
                            self.renderer.render(&format!("\n{result}\n{AGAIN}"))?;
                            continue;
                        }
                        Ok(_) => {}
                        Err(e) => {
                            warn!("step failed: {e}");
                            self.renderer.render(&format!("\n> Error: {e}\n\n"))?;
                        }
                    }
                }
                Ok(SessionUpdate::Blocked(reason)) => {
                    self.renderer.render(&format!("\n> {reason}\n\n"))?;
                }
                Ok(_) => {}
                Err(e) => self.renderer.render(&format!("\n> Error: {e}\n\n"))?,
            }
            self.renderer.render(&session.screen())?;
        }

        info!("wizard left at step {}", session.current_step());
        if session.submitted().is_some() {
            return Ok(());
        }
        self.renderer.render("\nPlan discarded.\n")
    }

    pub async fn handle_history_command(
        &self,
        gateway: &SqliteGateway,
        command: HistoryCommands,
    ) -> Result<()> {
        match command {
            HistoryCommands::List(args) => {
                let plans = gateway.list_plans(&args.into()).await?;
                if plans.is_empty() {
                    return self.renderer.render("No plans found.\n");
                }
                self.renderer.render(&format!(
                    "# Submitted Plans\n\n{}",
                    plans.with_catalog(&self.catalog)
                ))
            }
            HistoryCommands::Show(args) => {
                let id: Id = args.into();
                let Some(plan) = gateway.get_plan(&id).await? else {
                    bail!("Plan with ID {} not found", id.id);
                };
                self.renderer.render(
                    &PlanView {
                        plan: &plan,
                        catalog: &self.catalog,
                    }
                    .to_string(),
                )
            }
            HistoryCommands::Delete(args) => {
                let deleted = gateway
                    .delete_plan(&args.into())
                    .await
                    .context("Failed to delete plan")?;
                self.renderer
                    .render(&DeleteResult::new(deleted, &self.catalog).to_string())
            }
        }
    }

    pub fn show_catalog(&self) -> Result<()> {
        self.renderer.render(&format!("# Catalog\n\n{}", self.catalog))
    }
}
