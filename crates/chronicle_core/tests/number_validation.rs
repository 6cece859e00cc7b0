use chronicle_core::validate_session_number;

#[test]
fn allows_empty_input_as_leave_unset() {
    assert!(validate_session_number("").is_ok());
}

#[test]
fn allows_zero_and_positive_numbers() {
    assert!(validate_session_number("0").is_ok());
    assert!(validate_session_number("1").is_ok());
    assert!(validate_session_number("5").is_ok());
    assert!(validate_session_number("117").is_ok());
}

#[test]
fn rejects_negative_numbers() {
    assert!(validate_session_number("-1").is_err());
    assert!(validate_session_number("-42").is_err());
}

#[test]
fn rejects_non_numeric_input() {
    assert!(validate_session_number("nan").is_err());
    assert!(validate_session_number("session 5").is_err());
}

#[test]
fn rejects_decimals_and_separators() {
    assert!(validate_session_number("1.23").is_err());
    assert!(validate_session_number("1,000").is_err());
}
