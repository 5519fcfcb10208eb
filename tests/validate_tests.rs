//! Integration tests for the input validators.

use fleet_secrets::validate::{is_alphanumeric, is_valid_email};

#[test]
fn email_examples() {
    assert!(is_valid_email("user@example.com"));
    assert!(!is_valid_email(&format!("{}@x.com", "a".repeat(255))));
    assert!(!is_valid_email("not-an-email"));
}

#[test]
fn email_validator_is_safe_to_share_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let addr = format!("runner{i}@fleet.example.com");
                is_valid_email(&addr) && !is_valid_email("broken@")
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn alphanumeric_examples() {
    assert!(is_alphanumeric("abc123"));
    assert!(!is_alphanumeric("abc 123"));
    assert!(is_alphanumeric(""));
}
