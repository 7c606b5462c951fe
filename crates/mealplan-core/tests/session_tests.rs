mod common;

use std::{collections::BTreeSet, time::Duration};

use common::{create_test_session, DELAY};
use mealplan_core::{
    parse_input, SessionUpdate, WizardError, WizardInput, WizardSession, WizardStep,
};

fn set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

/// Applies a submit and waits for it to take effect.
async fn submit(session: &mut WizardSession) -> mealplan_core::Result<SessionUpdate> {
    let update = session.apply(WizardInput::Submit)?;
    assert_eq!(update, SessionUpdate::Pending);
    Ok(session.settle().await?.expect("pending submit"))
}

async fn fill_to_confirmation(session: &mut WizardSession) {
    session.apply(parse_input("Mardi")).unwrap();
    session.apply(parse_input("Jeudi")).unwrap();
    submit(session).await.unwrap();
    submit(session).await.unwrap();
    session.apply(parse_input("Epitech")).unwrap();
    submit(session).await.unwrap();
    session.apply(parse_input("13:00 - 14:00")).unwrap();
    submit(session).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_documented_sequence_reaches_confirmation() {
    let (_gateway, mut session) = create_test_session();

    fill_to_confirmation(&mut session).await;

    assert_eq!(session.current_step(), WizardStep::Confirmation);
    assert_eq!(session.wizard().position().index(), 4);
    assert_eq!(
        session.wizard().draft().selected_days,
        set(&["tuesday", "thursday"])
    );
    let plan = session.wizard().completed_plan().expect("complete plan");
    assert_eq!(plan.selected_days, vec!["tuesday", "thursday"]);
    assert_eq!(plan.delivery_location, "Epitech");
    assert_eq!(plan.delivery_time_slot, "13:00 - 14:00");
}

#[tokio::test(start_paused = true)]
async fn test_submit_blocked_without_selection() {
    let (_gateway, mut session) = create_test_session();

    let update = session.apply(WizardInput::Submit).unwrap();

    assert!(matches!(update, SessionUpdate::Blocked(_)));
    assert!(!session.is_submitting());
    assert_eq!(session.settle().await.unwrap(), None);
    assert_eq!(session.current_step(), WizardStep::DaySelection);
}

#[tokio::test(start_paused = true)]
async fn test_transition_waits_for_delay() {
    let (_gateway, mut session) = create_test_session();
    session.apply(parse_input("1")).unwrap();
    session.apply(WizardInput::Submit).unwrap();

    tokio::time::sleep(DELAY / 2).await;
    assert_eq!(session.current_step(), WizardStep::DaySelection);
    assert!(session.is_submitting());
    assert!(matches!(
        session.apply(parse_input("2")).unwrap(),
        SessionUpdate::Blocked(_)
    ));

    let update = session.settle().await.unwrap();
    assert_eq!(update, Some(SessionUpdate::Moved(WizardStep::Motivation)));
}

#[tokio::test(start_paused = true)]
async fn test_back_from_location_cancels_pending_submit() {
    let (_gateway, mut session) = create_test_session();
    session.apply(parse_input("monday")).unwrap();
    submit(&mut session).await.unwrap();
    submit(&mut session).await.unwrap();
    session.apply(parse_input("1")).unwrap();

    assert_eq!(
        session.apply(WizardInput::Submit).unwrap(),
        SessionUpdate::Pending
    );
    assert_eq!(
        session.apply(WizardInput::Back).unwrap(),
        SessionUpdate::Moved(WizardStep::Motivation)
    );

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(session.settle().await.unwrap(), None);
    assert_eq!(session.current_step(), WizardStep::Motivation);
    assert_eq!(session.wizard().draft().delivery_location, None);
}

#[tokio::test(start_paused = true)]
async fn test_back_disabled_on_time_slot_while_submitting() {
    let (_gateway, mut session) = create_test_session();
    session.apply(parse_input("monday")).unwrap();
    submit(&mut session).await.unwrap();
    submit(&mut session).await.unwrap();
    session.apply(parse_input("1")).unwrap();
    submit(&mut session).await.unwrap();
    session.apply(parse_input("3")).unwrap();

    session.apply(WizardInput::Submit).unwrap();
    assert!(matches!(
        session.apply(WizardInput::Back).unwrap(),
        SessionUpdate::Blocked(_)
    ));

    let update = session.settle().await.unwrap();
    assert_eq!(update, Some(SessionUpdate::Moved(WizardStep::Confirmation)));
}

#[tokio::test(start_paused = true)]
async fn test_back_from_confirmation_keeps_draft_and_selection() {
    let (_gateway, mut session) = create_test_session();
    fill_to_confirmation(&mut session).await;
    let before = session.wizard().draft().clone();

    assert_eq!(
        session.apply(WizardInput::Back).unwrap(),
        SessionUpdate::Moved(WizardStep::DeliveryTime)
    );

    assert_eq!(session.wizard().draft(), &before);
    assert!(session.widget().can_submit());
    assert!(session.screen().contains("- [x] 2. 13:00 - 14:00"));
}

#[tokio::test(start_paused = true)]
async fn test_confirm_submits_exactly_once() {
    let (gateway, mut session) = create_test_session();
    fill_to_confirmation(&mut session).await;

    let update = submit(&mut session).await.unwrap();

    let SessionUpdate::Submitted(plan) = update else {
        panic!("expected submission, got {update:?}");
    };
    assert_eq!(plan.delivery_time_slot, "13:00 - 14:00");
    assert_eq!(plan.selected_days, vec!["tuesday", "thursday"]);
    assert!(plan.to_string().contains("- **Days**: tuesday, thursday"));
    assert_eq!(session.submitted(), Some(&plan));
    assert_eq!(gateway.plans().len(), 1);

    assert!(matches!(
        session.apply(WizardInput::Submit),
        Err(WizardError::AlreadySubmitted)
    ));
    assert_eq!(gateway.plans().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_gateway_failure_leaves_wizard_resubmittable() {
    let (gateway, mut session) = create_test_session();
    fill_to_confirmation(&mut session).await;
    let before = session.wizard().draft().clone();

    gateway.set_failing(true);
    session.apply(WizardInput::Submit).unwrap();
    let err = session.settle().await.unwrap_err();

    assert!(matches!(err, WizardError::Gateway { .. }));
    assert_eq!(session.current_step(), WizardStep::Confirmation);
    assert_eq!(session.wizard().draft(), &before);
    assert!(!session.is_submitting());
    assert!(gateway.plans().is_empty());

    gateway.set_failing(false);
    let update = submit(&mut session).await.unwrap();
    assert!(matches!(update, SessionUpdate::Submitted(_)));
    assert_eq!(gateway.plans().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_restart_after_submission() {
    let (gateway, mut session) = create_test_session();
    fill_to_confirmation(&mut session).await;
    submit(&mut session).await.unwrap();

    assert_eq!(
        session.apply(WizardInput::Restart).unwrap(),
        SessionUpdate::Moved(WizardStep::DaySelection)
    );
    assert!(session.submitted().is_none());
    assert!(session.wizard().draft().selected_days.is_empty());

    fill_to_confirmation(&mut session).await;
    submit(&mut session).await.unwrap();
    assert_eq!(gateway.plans().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_unknown_option_is_an_error() {
    let (_gateway, mut session) = create_test_session();

    let err = session.apply(parse_input("samedi")).unwrap_err();

    assert!(matches!(err, WizardError::UnknownOption { .. }));
    assert!(!session.widget().can_submit());
}
