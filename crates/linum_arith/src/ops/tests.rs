use std::cmp::Ordering;

use pretty_assertions::assert_eq;

use super::*;
use crate::Malformation;

fn ok(result: Result<DigitSequence, ArithError>) -> String {
    match result {
        Ok(digits) => digits.to_string(),
        Err(err) => panic!("unexpected error: {err}"),
    }
}

// === Add ===

#[test]
fn add_pads_shorter_operand() {
    assert_eq!(ok(add("20", "319")), "339");
    assert_eq!(ok(add("319", "20")), "339");
}

#[test]
fn add_propagates_carry_through_every_position() {
    assert_eq!(ok(add("999", "1")), "1000");
    assert_eq!(ok(add("1", "99999999999999999999")), "100000000000000000000");
}

#[test]
fn add_final_carry_adds_leading_one() {
    assert_eq!(ok(add("5", "5")), "10");
    assert_eq!(ok(add("95", "17")), "112");
}

#[test]
fn add_zero_operands() {
    assert_eq!(ok(add("0", "0")), "0");
    assert_eq!(ok(add("000", "0")), "0");
    assert_eq!(ok(add("0", "42")), "42");
}

#[test]
fn add_strips_input_leading_zeros() {
    assert_eq!(ok(add("007", "3")), "10");
    assert_eq!(ok(add("0020", "00319")), ok(add("20", "319")));
}

#[test]
fn add_beyond_native_width() {
    // 2^128 - 1 plus itself
    let max = "340282366920938463463374607431768211455";
    assert_eq!(ok(add(max, max)), "680564733841876926926749214863536422910");
}

#[test]
fn add_rejects_malformed_operands() {
    assert_eq!(
        add("12", "3x"),
        Err(ArithError::MalformedOperand {
            operand: "3x".to_string(),
            reason: Malformation::NonDigit {
                found: 'x',
                position: 1
            },
        })
    );
    assert!(matches!(
        add("", "1"),
        Err(ArithError::MalformedOperand {
            reason: Malformation::Empty,
            ..
        })
    ));
}

// === Subtract ===

#[test]
fn subtract_returns_magnitude() {
    assert_eq!(ok(subtract("319", "20")), "299");
}

#[test]
fn subtract_smaller_minus_larger_is_sign_blind() {
    // 20 - 319 is -299; only the magnitude is reported.
    assert_eq!(ok(subtract("20", "319")), "299");
    assert_eq!(ok(subtract("1", "1000")), "999");
}

#[test]
fn subtract_borrow_chains() {
    assert_eq!(ok(subtract("1000", "1")), "999");
    assert_eq!(ok(subtract("100", "99")), "1");
    assert_eq!(ok(subtract("5002", "4998")), "4");
}

#[test]
fn subtract_equal_operands_is_zero() {
    assert_eq!(ok(subtract("12345", "12345")), "0");
    assert_eq!(ok(subtract("0", "0")), "0");
    assert_eq!(ok(subtract("007", "7")), "0");
}

#[test]
fn subtract_rejects_malformed_operands() {
    assert!(subtract("1-", "1").is_err());
    assert!(subtract("1", "").is_err());
}

// === Multiply ===

#[test]
fn multiply_small() {
    assert_eq!(ok(multiply("12", "3")), "36");
    assert_eq!(ok(multiply("3", "12")), "36");
    assert_eq!(ok(multiply("9", "9")), "81");
}

#[test]
fn multiply_carries_out_of_partial_product() {
    assert_eq!(ok(multiply("99", "99")), "9801");
    assert_eq!(ok(multiply("999", "999")), "998001");
}

#[test]
fn multiply_by_zero_and_one() {
    assert_eq!(ok(multiply("0", "123456789")), "0");
    assert_eq!(ok(multiply("123456789", "000")), "0");
    assert_eq!(ok(multiply("1", "123456789")), "123456789");
}

#[test]
fn multiply_beyond_native_width() {
    // (2^64)^2 = 2^128
    assert_eq!(
        ok(multiply("18446744073709551616", "18446744073709551616")),
        "340282366920938463463374607431768211456"
    );
}

#[test]
fn multiply_rejects_malformed_operands() {
    assert!(matches!(
        multiply("2", "two"),
        Err(ArithError::MalformedOperand { .. })
    ));
}

// === Power ===

#[test]
fn power_small() {
    assert_eq!(ok(power("2", 5)), "32");
    assert_eq!(ok(power("10", 3)), "1000");
    assert_eq!(ok(power("7", 1)), "7");
}

#[test]
fn power_zero_is_one() {
    assert_eq!(ok(power("293", 0)), "1");
    assert_eq!(ok(power("0", 0)), "1");
}

#[test]
fn power_of_zero() {
    assert_eq!(ok(power("0", 4)), "0");
}

#[test]
fn power_large() {
    assert_eq!(ok(power("2", 128)), "340282366920938463463374607431768211456");
    assert_eq!(ok(power("99", 10)), "90438207500880449001");
}

#[test]
fn power_strips_base_leading_zeros() {
    assert_eq!(ok(power("002", 3)), "8");
}

#[test]
fn power_rejects_negative_exponent() {
    assert_eq!(
        power("2", -1),
        Err(ArithError::InvalidExponent {
            exponent: "-1".to_string()
        })
    );
}

#[test]
fn power_validates_base_even_for_zero_exponent() {
    assert!(matches!(
        power("2.5", 0),
        Err(ArithError::MalformedOperand { .. })
    ));
}

// === Compare ===

#[test]
fn compare_orders_numerically() {
    assert_eq!(compare("20", "319"), Ok(Ordering::Less));
    assert_eq!(compare("319", "20"), Ok(Ordering::Greater));
    assert_eq!(compare("99", "100"), Ok(Ordering::Less));
}

#[test]
fn compare_ignores_leading_zeros() {
    assert_eq!(compare("007", "7"), Ok(Ordering::Equal));
    assert_eq!(compare("0", "0000"), Ok(Ordering::Equal));
}

#[test]
fn compare_rejects_malformed_operands() {
    assert!(compare("1", "one").is_err());
}

// === Helpers ===

#[test]
fn align_pads_both_to_common_width() {
    let (lhs, rhs) = align(DigitSequence::build("5"), DigitSequence::build("1234"));
    assert_eq!(lhs.to_string(), "0005");
    assert_eq!(rhs.to_string(), "1234");
}

#[test]
fn operand_pair_has_equal_lengths() {
    let Ok((lhs, rhs)) = operand_pair("20", "319") else {
        panic!("operands should build");
    };
    assert_eq!(lhs.len(), rhs.len());
    assert_eq!(lhs.to_string(), "020");
}
