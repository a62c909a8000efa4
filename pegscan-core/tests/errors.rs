use chrono::NaiveDate;
use pegscan_core::PegscanError;

#[test]
fn display_strings_carry_context() {
    assert_eq!(
        PegscanError::transport("connection refused").to_string(),
        "transport failure: connection refused"
    );
    assert_eq!(
        PegscanError::upstream("Invalid API call").to_string(),
        "upstream error: Invalid API call"
    );
    assert_eq!(
        PegscanError::malformed("no series").to_string(),
        "malformed response: no series"
    );
    assert_eq!(
        PegscanError::no_data("AAPL").to_string(),
        "no data for AAPL"
    );
    assert_eq!(
        PegscanError::invalid_arg("bad threshold").to_string(),
        "invalid argument: bad threshold"
    );
}

#[test]
fn duplicate_row_names_the_key() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
    let err = PegscanError::duplicate_row("AAPL", date);
    assert_eq!(err.to_string(), "duplicate row: AAPL on 2024-01-08");
    assert!(matches!(err, PegscanError::DuplicateRow { .. }));
}
