//! Step input widgets.
//!
//! Each wizard step is rendered and edited by one [`StepWidget`]. A widget
//! holds the step's local draft value, decides whether its submit and back
//! controls are enabled, and on submit schedules a [`DeferredSubmit`] that
//! posts the step result to the hosting session once the short submit delay
//! has elapsed.
//!
//! Widgets are mounted by [`mount`] with their local state initialised from
//! the wizard's [`PlanDraft`](crate::models::PlanDraft), so stepping back to
//! an earlier screen shows what was entered there before.
//!
//! | Step          | Widget                   | Submit enabled when   | Back   |
//! |---------------|--------------------------|-----------------------|--------|
//! | DaySelection  | [`DaySelection`]         | at least one day      | no     |
//! | Motivation    | [`Motivation`]           | always                | no     |
//! | Location      | [`LocationSelection`]    | a location is chosen  | yes    |
//! | DeliveryTime  | [`DeliveryTime`]         | a slot is chosen      | unless submitting |
//! | Confirmation  | [`Confirmation`]         | always                | unless submitting |

use std::{fmt::Write, time::Duration};

use tokio::sync::mpsc::UnboundedSender;

use crate::{
    catalog::CatalogEntry,
    error::Result,
    models::{StepResult, WizardStep},
    timer::DeferredSubmit,
    wizard::Wizard,
};

pub mod choice;
pub mod confirmation;
pub mod day_selection;
pub mod delivery_time;
pub mod location;
pub mod motivation;

pub use confirmation::Confirmation;
pub use day_selection::DaySelection;
pub use delivery_time::DeliveryTime;
pub use location::LocationSelection;
pub use motivation::Motivation;

/// Message posted by a widget's deferred submit when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetEvent {
    /// Mount generation of the widget that produced the event
    pub mount: u64,
    pub result: StepResult,
}

/// The transient "submitting" state every widget carries.
#[derive(Debug, Default)]
pub struct SubmitState {
    pending: Option<DeferredSubmit>,
}

impl SubmitState {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Common capability set of the step widgets.
pub trait StepWidget: Send {
    /// The step this widget edits.
    fn step(&self) -> WizardStep;

    /// Markdown body of the screen: options and their selection state.
    fn render_body(&self, out: &mut String);

    /// Applies a user selection (toggle or choice).
    fn select(&mut self, input: &str) -> Result<()>;

    /// Whether the submit control is enabled.
    fn can_submit(&self) -> bool;

    /// The step result, or `IncompleteStep` when submit is disabled.
    fn result(&self) -> Result<StepResult>;

    /// Whether the back control is enabled.
    fn can_retreat(&self) -> bool;

    fn submit_state(&self) -> &SubmitState;

    fn submit_state_mut(&mut self) -> &mut SubmitState;

    /// True between a submit intent and the delayed advance.
    fn is_submitting(&self) -> bool {
        self.submit_state().is_pending()
    }

    /// Schedules the delayed submit of this widget's result.
    ///
    /// Repeated intents while a submit is pending are ignored. The timer is
    /// owned by the widget and is aborted when the widget is dropped.
    fn begin_submit(
        &mut self,
        delay: Duration,
        mount: u64,
        events: UnboundedSender<WidgetEvent>,
    ) -> Result<()> {
        if self.is_submitting() {
            return Ok(());
        }
        let result = self.result()?;
        let pending = DeferredSubmit::schedule(delay, move || {
            // The receiver is gone only when the session itself was dropped.
            let _ = events.send(WidgetEvent { mount, result });
        });
        self.submit_state_mut().pending = Some(pending);
        Ok(())
    }

    /// Full markdown screen including heading and control hints.
    fn render(&self) -> String {
        let step = self.step();
        let mut out = String::new();
        let _ = writeln!(
            out,
            "## Étape {}/{} · {}",
            step.index() + 1,
            WizardStep::ALL.len(),
            step.title()
        );
        out.push('\n');
        self.render_body(&mut out);
        out.push('\n');
        if self.is_submitting() {
            out.push_str("_Envoi en cours…_\n");
        } else {
            let next = if self.can_submit() { "activé" } else { "désactivé" };
            let _ = writeln!(out, "- Suivant (`next`) : {next}");
            if self.can_retreat() {
                out.push_str("- Retour (`back`)\n");
            }
        }
        out
    }
}

/// Mounts the widget for the wizard's current step, initialised from its
/// draft.
pub fn mount(wizard: &Wizard) -> Box<dyn StepWidget> {
    let catalog = wizard.catalog();
    let draft = wizard.draft();
    match wizard.current_step() {
        WizardStep::DaySelection => Box::new(DaySelection::new(
            catalog.weekdays.clone(),
            draft.selected_days.clone(),
        )),
        WizardStep::Motivation => Box::new(Motivation::new()),
        WizardStep::Location => Box::new(LocationSelection::new(
            catalog.locations.clone(),
            draft.delivery_location.clone(),
        )),
        WizardStep::DeliveryTime => Box::new(DeliveryTime::new(
            catalog.time_slots.clone(),
            draft.delivery_time_slot.clone(),
        )),
        WizardStep::Confirmation => Box::new(Confirmation::new(catalog, draft)),
    }
}

/// Writes a numbered option list with a checkbox per entry.
pub(crate) fn render_options<F>(out: &mut String, entries: &[CatalogEntry], is_selected: F)
where
    F: Fn(&CatalogEntry) -> bool,
{
    for (i, entry) in entries.iter().enumerate() {
        let mark = if is_selected(entry) { "x" } else { " " };
        let _ = writeln!(out, "- [{mark}] {}. {}", i + 1, entry.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::Catalog, models::StepResult};

    #[test]
    fn test_mount_follows_current_step() {
        let mut wizard = Wizard::new(Catalog::default());
        assert_eq!(mount(&wizard).step(), WizardStep::DaySelection);

        let days = ["monday".to_string()].into_iter().collect();
        wizard.advance(StepResult::Days(days)).unwrap();
        assert_eq!(mount(&wizard).step(), WizardStep::Motivation);
    }

    #[test]
    fn test_remount_restores_previous_selection() {
        let mut wizard = Wizard::new(Catalog::default());
        let days = ["tuesday".to_string(), "thursday".to_string()]
            .into_iter()
            .collect();
        wizard.advance(StepResult::Days(days)).unwrap();
        wizard.retreat();

        let widget = mount(&wizard);
        assert!(widget.can_submit());
        let screen = widget.render();
        assert!(screen.contains("- [x] 2. Mardi"));
        assert!(screen.contains("- [x] 4. Jeudi"));
        assert!(screen.contains("- [ ] 1. Lundi"));
    }

    #[test]
    fn test_render_heading_and_hints() {
        let wizard = Wizard::new(Catalog::default());
        let screen = mount(&wizard).render();
        assert!(screen.starts_with("## Étape 1/5 · "));
        assert!(screen.contains("Suivant (`next`) : désactivé"));
        assert!(!screen.contains("Retour"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_begin_submit_posts_result() {
        let wizard = Wizard::new(Catalog::default());
        let mut widget = mount(&wizard);
        widget.select("1").unwrap();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        widget
            .begin_submit(Duration::from_millis(300), 7, tx)
            .unwrap();
        assert!(widget.is_submitting());
        assert!(widget.render().contains("Envoi en cours"));

        let event = rx.recv().await.expect("event");
        assert_eq!(event.mount, 7);
        assert_eq!(
            event.result,
            StepResult::Days(["monday".to_string()].into_iter().collect())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_begin_submit_rejected_when_incomplete() {
        let wizard = Wizard::new(Catalog::default());
        let mut widget = mount(&wizard);
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();

        assert!(widget.begin_submit(Duration::ZERO, 0, tx).is_err());
        assert!(!widget.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_cancels_pending_submit() {
        let wizard = Wizard::new(Catalog::default());
        let mut widget = mount(&wizard);
        widget.select("3").unwrap();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        widget
            .begin_submit(Duration::from_millis(300), 1, tx)
            .unwrap();
        drop(widget);
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(rx.try_recv().is_err());
    }
}
