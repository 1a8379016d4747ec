//! App state tests: recompute-on-edit and error withholding

use crate::fields::InputField;
use crate::state::{AppState, Focus, TabId};

#[test]
fn test_fresh_state_has_a_report() {
    let state = AppState::default();
    let report = state.report.as_ref().expect("defaults must evaluate");
    assert_eq!(report.schedule.len(), 10);
    assert!(state.error_message.is_none());
}

#[test]
fn test_invalid_inputs_withhold_the_report() {
    let mut state = AppState::default();

    // Land value above total: per-field validation passes, evaluation fails
    InputField::LandValue
        .apply(&mut state.inputs, "20000000")
        .unwrap();
    state.recompute();

    assert!(state.report.is_none());
    assert!(state.error_message.is_some());

    // Esc must not dismiss a blocking evaluation error
    state.clear_error();
    assert!(state.error_message.is_some());
}

#[test]
fn test_fixing_the_input_restores_the_report() {
    let mut state = AppState::default();

    InputField::LandValue
        .apply(&mut state.inputs, "20000000")
        .unwrap();
    state.recompute();
    assert!(state.report.is_none());

    InputField::LandValue
        .apply(&mut state.inputs, "2000000")
        .unwrap();
    state.recompute();

    assert!(state.report.is_some());
    assert!(state.error_message.is_none());
}

#[test]
fn test_validation_messages_are_dismissable() {
    let mut state = AppState::default();
    state.set_error("Land value cannot be negative".to_string());
    assert!(state.error_message.is_some());

    // With a live report the message clears on Esc
    state.clear_error();
    assert!(state.error_message.is_none());
}

#[test]
fn test_edit_then_recompute_updates_all_tables() {
    let mut state = AppState::default();

    InputField::ModelingYears
        .apply(&mut state.inputs, "15")
        .unwrap();
    state.recompute();

    let report = state.report.as_ref().unwrap();
    assert_eq!(report.schedule.len(), 15);
    assert_eq!(report.sale_by_holding_period.len(), 15);
    assert_eq!(report.cash_flow.len(), 15);
}

#[test]
fn test_exchange_toggle_produces_an_outcome() {
    let mut state = AppState::default();
    assert!(state.report.as_ref().unwrap().exchange.is_none());

    InputField::SimulateExchange.toggle(&mut state.inputs);
    state.recompute();

    let outcome = state.report.as_ref().unwrap().exchange.unwrap();
    assert!(outcome.deferred_tax > 0.0);
}

#[test]
fn test_focus_toggle_round_trips() {
    assert_eq!(Focus::Sidebar.toggle(), Focus::Screen);
    assert_eq!(Focus::Screen.toggle(), Focus::Sidebar);
}

#[test]
fn test_tab_indices_round_trip() {
    for tab in TabId::ALL {
        assert_eq!(TabId::from_index(tab.index()), Some(tab));
    }
    assert_eq!(TabId::from_index(6), None);
}
