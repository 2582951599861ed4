//! Unit tests for session state.
//!
//! This module contains tests for the variable table, the mode switches
//! and the three number rendering modes.

use std::f64::consts::PI;

use super::session::{AngleMode, DecimalMode, Session};

#[test]
fn test_new_session_defaults() {
    let session = Session::new();

    assert_eq!(session.ans(), 0.0);
    assert_eq!(session.lookup("ans"), Some(0.0));
    assert_eq!(session.angle_mode(), AngleMode::Rad);
    assert_eq!(session.decimal_mode(), DecimalMode::Reg);
}

#[test]
fn test_assign_and_lookup() {
    let mut session = Session::new();

    session.assign("x", 5.0);
    assert_eq!(session.lookup("x"), Some(5.0));

    session.assign("x", -2.5);
    assert_eq!(session.lookup("x"), Some(-2.5));

    assert_eq!(session.lookup("y"), None);
}

#[test]
fn test_ans_tracks_assignment() {
    let mut session = Session::new();

    session.assign("ans", 42.0);
    assert_eq!(session.ans(), 42.0);
}

#[test]
fn test_sessions_are_independent() {
    let mut first = Session::new();
    let second = Session::new();

    first.assign("x", 1.0);
    first.set_angle_mode(AngleMode::Deg);

    assert_eq!(second.lookup("x"), None);
    assert_eq!(second.angle_mode(), AngleMode::Rad);
}

#[test]
fn test_angle_conversion_factors() {
    assert_eq!(AngleMode::Rad.conversion(), 1.0);
    assert_eq!(AngleMode::Deg.conversion(), PI / 180.0);
    assert_eq!(AngleMode::Grad.conversion(), PI / 200.0);
}

#[test]
fn test_mode_display() {
    assert_eq!(AngleMode::Rad.to_string(), "RAD");
    assert_eq!(AngleMode::Deg.to_string(), "DEG");
    assert_eq!(AngleMode::Grad.to_string(), "GRAD");
    assert_eq!(DecimalMode::Reg.to_string(), "REG");
    assert_eq!(DecimalMode::Sci.to_string(), "SCI");
    assert_eq!(DecimalMode::Eng.to_string(), "ENG");
}

#[test]
fn test_format_regular() {
    let session = Session::new();

    assert_eq!(session.format_number(7.0), "7");
    assert_eq!(session.format_number(0.5), "0.5");
    assert_eq!(session.format_number(-3.25), "-3.25");
}

#[test]
fn test_format_scientific() {
    let mut session = Session::new();
    session.set_decimal_mode(DecimalMode::Sci);

    assert_eq!(session.format_number(PI), " 3.142 e");
    assert_eq!(session.format_number(0.0), " 0.000 e");
    assert_eq!(session.format_number(-0.5), "-0.500 e");
    assert_eq!(session.format_number(1234.5678), "1234.568 e");
}

#[test]
fn test_format_engineering() {
    let mut session = Session::new();
    session.set_decimal_mode(DecimalMode::Eng);

    assert_eq!(session.format_number(0.0), "0.000 E0");
    assert_eq!(session.format_number(1234.0), "1.234 E+03");
    assert_eq!(session.format_number(-1234.0), "-1.234 E+03");
    assert_eq!(session.format_number(1000.0), "1.000 E+03");
    assert_eq!(session.format_number(1_000_000.0), "1.000 E+06");
    assert_eq!(session.format_number(0.01), "10.000 E-03");
    assert_eq!(session.format_number(0.5), "500.000 E-03");
}

#[test]
fn test_formatting_does_not_round_stored_values() {
    let mut session = Session::new();
    session.assign("ans", PI);
    session.set_decimal_mode(DecimalMode::Sci);

    assert_eq!(session.format_number(session.ans()), " 3.142 e");
    assert_eq!(session.ans(), PI);
}
