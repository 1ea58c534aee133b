use dsc_pay::domain::request::{PaymentKind, PaymentRequest};
use rust_decimal_macros::dec;

mod common;

use common::membership_request;

#[test]
fn test_missing_required_fields_fail_validation() {
    let strips: [fn(&mut PaymentRequest); 3] = [
        |r| r.email = None,
        |r| r.amount = None,
        |r| r.kind = None,
    ];
    for strip in strips {
        let mut request = membership_request();
        strip(&mut request);
        assert!(!request.validate());
    }
}

#[test]
fn test_optional_fields_do_not_affect_validity() {
    let request = PaymentRequest {
        email: Some("a@b.co".to_string()),
        amount: Some(dec!(1.0)),
        kind: Some(PaymentKind::Event),
        ..Default::default()
    };
    assert!(request.validate());
}

#[test]
fn test_non_positive_amounts_fail_validation() {
    let mut request = membership_request();

    request.amount = Some(dec!(0));
    assert!(!request.validate());

    request.amount = Some(dec!(-1500.0));
    assert!(!request.validate());
}

#[test]
fn test_email_shapes() {
    let mut request = membership_request();

    for good in ["a@b.co", "first.last@sub.domain.lk"] {
        request.email = Some(good.to_string());
        assert!(request.validate(), "{good} should be accepted");
    }

    for bad in ["plain", "missing-domain@nodot", "two words@domain.lk", "a@b.co "] {
        request.email = Some(bad.to_string());
        assert!(!request.validate(), "{bad} should be rejected");
    }
}

#[test]
fn test_validation_is_rederived_per_call() {
    let mut request = membership_request();
    assert!(request.validate());

    request.email = None;
    assert!(!request.validate());

    request.email = Some("member@nibm.lk".to_string());
    assert!(request.validate());
}

#[test]
fn test_order_id_format() {
    let membership = membership_request();
    let order_id = membership.order_id();
    assert!(order_id.as_str().starts_with("DSC-MEM-"));

    // timestamp and random suffix are both plain integers
    let parts: Vec<&str> = order_id.as_str().split('-').collect();
    assert_eq!(parts.len(), 4);
    assert!(parts[2].parse::<i64>().is_ok());
    let random: u32 = parts[3].parse().unwrap();
    assert!(random < 10_000);

    let event = common::event_request();
    assert!(event.order_id().as_str().starts_with("DSC-EVT-"));
}
