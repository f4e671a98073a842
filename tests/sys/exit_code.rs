// Integration tests for sys — exit_code_for
//
// The parent-observed code for terminate(status). The out-of-process check
// lives in e2e/terminate.rs.

use rtshim::sys::exit_code_for;

#[test]
fn zero_and_one_are_preserved() {
    assert_eq!(exit_code_for(0), 0);
    assert_eq!(exit_code_for(1), 1);
}

#[test]
fn byte_range_is_preserved() {
    for status in 0..=255 {
        assert_eq!(exit_code_for(status), status);
    }
}

#[cfg(unix)]
#[test]
fn unix_keeps_low_eight_bits() {
    assert_eq!(exit_code_for(256), 0);
    assert_eq!(exit_code_for(512 + 7), 7);
    assert_eq!(exit_code_for(-1), 255);
    assert_eq!(exit_code_for(-256), 0);
}

#[cfg(windows)]
#[test]
fn windows_keeps_full_value() {
    assert_eq!(exit_code_for(256), 256);
    assert_eq!(exit_code_for(-1), -1);
}
