//! Interactive wizard session.
//!
//! [`WizardSession`] is the single owner of a [`Wizard`], the widget mounted
//! for its current step and the channel on which widget timers report back.
//! All state changes happen on the caller's task, in response to
//! [`WizardInput`]s and to [`WizardSession::settle`]:
//!
//! ```text
//!  input ──▶ apply ──▶ widget (select / begin_submit / back)
//!                            │ DeferredSubmit fires after the delay
//!                            ▼
//!  settle ◀── channel ◀── WidgetEvent { mount, result }
//!    │
//!    ├─ ordinary step: Wizard::advance, remount next widget
//!    └─ confirmation:  PlanSubmissionGateway::submit (once)
//! ```
//!
//! Remounting drops the previous widget, which aborts any timer it still
//! owns. Events are also tagged with the mount generation that produced them
//! and ignored if that widget is gone, so a torn-down widget can never move
//! the wizard.

use std::{sync::Arc, time::Duration};

use log::{debug, info, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    error::{Result, WizardError},
    gateway::PlanSubmissionGateway,
    models::{StepResult, SubmittedPlan, WizardStep},
    widgets::{mount, StepWidget, WidgetEvent},
    wizard::Wizard,
};

/// Default length of the "submitting" affordance.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(400);

/// A user action on the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardInput {
    /// Toggle or choose an option (position, identifier or label)
    Select(String),
    /// Press the submit control
    Submit,
    /// Press the back control
    Back,
    /// Discard the draft and start over
    Restart,
}

/// What an input or a settled submit did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    /// The widget's local selection changed
    Selected,
    /// A submit is scheduled; call [`WizardSession::settle`]
    Pending,
    /// The control is disabled; nothing happened
    Blocked(String),
    /// The wizard moved to another step
    Moved(WizardStep),
    /// The gateway accepted the plan
    Submitted(SubmittedPlan),
}

/// Maps a line of user input to a [`WizardInput`].
pub fn parse_input(line: &str) -> WizardInput {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" | "n" | "next" | "suivant" => WizardInput::Submit,
        "b" | "back" | "retour" => WizardInput::Back,
        "restart" => WizardInput::Restart,
        _ => WizardInput::Select(trimmed.to_string()),
    }
}

/// Drives a wizard from user inputs to a submitted plan.
pub struct WizardSession {
    wizard: Wizard,
    widget: Box<dyn StepWidget>,
    mount: u64,
    gateway: Arc<dyn PlanSubmissionGateway>,
    delay: Duration,
    events_tx: UnboundedSender<WidgetEvent>,
    events_rx: UnboundedReceiver<WidgetEvent>,
    submitted: Option<SubmittedPlan>,
}

impl WizardSession {
    /// Starts a session on the wizard's current step.
    pub fn new(wizard: Wizard, gateway: Arc<dyn PlanSubmissionGateway>, delay: Duration) -> Self {
        let widget = mount(&wizard);
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            wizard,
            widget,
            mount: 0,
            gateway,
            delay,
            events_tx,
            events_rx,
            submitted: None,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn current_step(&self) -> WizardStep {
        self.wizard.current_step()
    }

    pub fn widget(&self) -> &dyn StepWidget {
        self.widget.as_ref()
    }

    /// True while a submit is waiting for its delay.
    pub fn is_submitting(&self) -> bool {
        self.widget.is_submitting()
    }

    /// The plan accepted by the gateway, once confirmed.
    pub fn submitted(&self) -> Option<&SubmittedPlan> {
        self.submitted.as_ref()
    }

    /// Markdown for the current screen.
    pub fn screen(&self) -> String {
        self.widget.render()
    }

    /// Applies one user action.
    ///
    /// Disabled controls yield [`SessionUpdate::Blocked`] without touching the
    /// wizard.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::UnknownOption` for a selection outside the
    /// current list and `WizardError::AlreadySubmitted` when confirming a
    /// plan the gateway already accepted.
    pub fn apply(&mut self, input: WizardInput) -> Result<SessionUpdate> {
        match input {
            WizardInput::Select(choice) => {
                if self.widget.is_submitting() {
                    return Ok(blocked("submission in progress"));
                }
                self.widget.select(&choice)?;
                Ok(SessionUpdate::Selected)
            }
            WizardInput::Submit => {
                if self.wizard.is_terminal() && self.submitted.is_some() {
                    return Err(WizardError::AlreadySubmitted);
                }
                if self.widget.is_submitting() {
                    return Ok(blocked("submission in progress"));
                }
                if let Err(e) = self.widget.result() {
                    return Ok(SessionUpdate::Blocked(e.to_string()));
                }
                self.widget
                    .begin_submit(self.delay, self.mount, self.events_tx.clone())?;
                debug!("submit pending on {}", self.current_step());
                Ok(SessionUpdate::Pending)
            }
            WizardInput::Back => {
                if !self.widget.can_retreat() {
                    return Ok(blocked("back is not available on this step"));
                }
                let step = self.wizard.retreat();
                self.remount();
                Ok(SessionUpdate::Moved(step))
            }
            WizardInput::Restart => {
                self.wizard.restart();
                self.submitted = None;
                self.remount();
                Ok(SessionUpdate::Moved(self.current_step()))
            }
        }
    }

    /// Waits for the pending submit, then applies it.
    ///
    /// Returns `None` if no submit is pending. On the confirmation step this
    /// calls the gateway; a gateway failure is returned as an error and
    /// leaves position and draft unchanged so the plan can be confirmed
    /// again.
    pub async fn settle(&mut self) -> Result<Option<SessionUpdate>> {
        if !self.widget.is_submitting() {
            return Ok(None);
        }
        loop {
            let Some(event) = self.events_rx.recv().await else {
                return Ok(None);
            };
            if event.mount != self.mount {
                debug!("dropping stale submit from mount {}", event.mount);
                continue;
            }
            return self.apply_result(event.result).await.map(Some);
        }
    }

    async fn apply_result(&mut self, result: StepResult) -> Result<SessionUpdate> {
        if result == StepResult::Confirmed {
            let outcome = self.confirm().await;
            self.remount();
            return outcome.map(SessionUpdate::Submitted);
        }

        let advanced = self.wizard.advance(result);
        self.remount();
        advanced.map(SessionUpdate::Moved)
    }

    async fn confirm(&mut self) -> Result<SubmittedPlan> {
        if self.submitted.is_some() {
            return Err(WizardError::AlreadySubmitted);
        }
        let plan = self.wizard.completed_plan().ok_or_else(|| {
            WizardError::incomplete(WizardStep::Confirmation, "plan is missing fields")
        })?;

        match self.gateway.submit(&plan).await {
            Ok(stored) => {
                info!("plan {} submitted", stored.id);
                self.submitted = Some(stored.clone());
                Ok(stored)
            }
            Err(e) => {
                warn!("plan submission failed: {e}");
                Err(e)
            }
        }
    }

    fn remount(&mut self) {
        self.mount += 1;
        self.widget = mount(&self.wizard);
    }
}

fn blocked(reason: &str) -> SessionUpdate {
    SessionUpdate::Blocked(reason.to_string())
}
