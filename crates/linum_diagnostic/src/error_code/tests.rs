use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2002.as_str(), "E2002");
}

#[test]
fn test_predicate_exclusivity() {
    for code in ErrorCode::ALL {
        assert_ne!(
            code.is_arithmetic_error(),
            code.is_conversion_error(),
            "{code} must belong to exactly one layer"
        );
    }
}

#[test]
fn test_all_variants_classified() {
    assert_eq!(ErrorCode::ALL.len(), 4);
    assert!(ErrorCode::E1001.is_arithmetic_error());
    assert!(ErrorCode::E1002.is_arithmetic_error());
    assert!(ErrorCode::E2001.is_conversion_error());
    assert!(ErrorCode::E2002.is_conversion_error());
}

#[test]
fn test_from_str_round_trips() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
}

#[test]
fn test_from_str_case_insensitive() {
    assert_eq!("e2001".parse::<ErrorCode>(), Ok(ErrorCode::E2001));
}

#[test]
fn test_from_str_rejects_unknown() {
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
    assert_eq!("".parse::<ErrorCode>(), Err(()));
    assert_eq!("1001".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_titles_are_distinct() {
    let mut titles: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::title).collect();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), ErrorCode::ALL.len());
}
