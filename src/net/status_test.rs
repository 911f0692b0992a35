use super::*;

#[test]
fn unauthorized_short_circuits() {
    assert_eq!(classify_status(401), Some(ShortCircuit::Unauthorized));
}

#[test]
fn too_many_requests_short_circuits() {
    assert_eq!(classify_status(429), Some(ShortCircuit::QuotaExhausted));
}

#[test]
fn other_statuses_pass_through() {
    for status in [200, 201, 204, 302, 400, 403, 404, 500, 503] {
        assert_eq!(classify_status(status), None, "status {status}");
    }
}

#[test]
fn short_circuit_converts_into_outcome() {
    let outcome: ApiOutcome<()> = ShortCircuit::Unauthorized.into();
    assert_eq!(outcome, ApiOutcome::Unauthorized);
    let outcome: ApiOutcome<()> = ShortCircuit::QuotaExhausted.into();
    assert_eq!(outcome, ApiOutcome::QuotaExhausted);
}

#[test]
fn into_option_drops_short_circuits() {
    assert_eq!(ApiOutcome::Response(7).into_option(), Some(7));
    assert_eq!(ApiOutcome::<i32>::Unauthorized.into_option(), None);
    assert_eq!(ApiOutcome::<i32>::QuotaExhausted.into_option(), None);
}

#[test]
fn map_preserves_short_circuit_variant() {
    assert_eq!(ApiOutcome::Response(2).map(|v| v * 10), ApiOutcome::Response(20));
    assert_eq!(ApiOutcome::<i32>::QuotaExhausted.map(|v| v * 10), ApiOutcome::QuotaExhausted);
    assert!(ApiOutcome::<i32>::Unauthorized.is_short_circuit());
    assert!(!ApiOutcome::Response(1).is_short_circuit());
}
