use dsc_pay::application::gateway::PaymentGateway;
use dsc_pay::config::GatewayConfig;
use dsc_pay::domain::request::{PaymentKind, PaymentRequest};
use dsc_pay::infrastructure::in_memory::{
    InMemorySessionStore, RecordingNavigator, RecordingNotifier,
};
use rust_decimal_macros::dec;

pub struct Probes {
    pub navigator: RecordingNavigator,
    pub notifier: RecordingNotifier,
    pub session: InMemorySessionStore,
}

/// Wires a gateway against recording adapters so navigation, notifications
/// and session writes can all be asserted.
pub fn gateway_with_probes(config: GatewayConfig) -> (PaymentGateway, Probes) {
    let probes = Probes {
        navigator: RecordingNavigator::new(),
        notifier: RecordingNotifier::new(),
        session: InMemorySessionStore::new(),
    };
    let gateway = PaymentGateway::new(
        config,
        Box::new(probes.navigator.clone()),
        Box::new(probes.notifier.clone()),
        Box::new(probes.session.clone()),
    );
    (gateway, probes)
}

pub fn membership_request() -> PaymentRequest {
    PaymentRequest {
        email: Some("member@nibm.lk".to_string()),
        amount: Some(dec!(1500.0)),
        kind: Some(PaymentKind::Membership),
        full_name: Some("Johan Perera".to_string()),
        phone: Some("+94771234567".to_string()),
        membership_type: Some("Gold".to_string()),
        student_id: Some("NIBM-2024-113".to_string()),
        ..Default::default()
    }
}

pub fn event_request() -> PaymentRequest {
    PaymentRequest {
        email: Some("member@nibm.lk".to_string()),
        amount: Some(dec!(250.0)),
        kind: Some(PaymentKind::Event),
        name: Some("Jo Perera".to_string()),
        event: Some("E42".to_string()),
        ..Default::default()
    }
}
