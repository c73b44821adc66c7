use std::str::FromStr;

use proptest::prelude::*;

use trailmap::types::{NodeStatus, StoredStatus};

#[test]
fn stored_vocabulary_is_frozen() {
    assert_eq!(StoredStatus::from(NodeStatus::Pending).as_str(), "pendiente");
    assert_eq!(
        StoredStatus::from(NodeStatus::InProgress).as_str(),
        "en-progreso"
    );
    assert_eq!(
        StoredStatus::from(NodeStatus::Completed).as_str(),
        "completado"
    );
    assert_eq!(StoredStatus::from(NodeStatus::Skipped).as_str(), "omitida");
}

#[test]
fn unknown_stored_status_is_rejected() {
    assert!(StoredStatus::from_str("done").is_err());
    assert!(StoredStatus::from_str("").is_err());
    // The in-memory vocabulary is not valid on the wire.
    assert!(StoredStatus::from_str("completed").is_err());
}

fn any_status() -> impl Strategy<Value = NodeStatus> {
    prop_oneof![
        Just(NodeStatus::Pending),
        Just(NodeStatus::InProgress),
        Just(NodeStatus::Completed),
        Just(NodeStatus::Skipped),
    ]
}

proptest! {
    /// in-memory -> stored -> in-memory is the identity for all values.
    #[test]
    fn status_round_trip_is_identity(status in any_status()) {
        let stored: StoredStatus = status.into();
        let back: NodeStatus = stored.into();
        prop_assert_eq!(back, status);
    }

    /// Writing and re-parsing the wire string loses nothing either.
    #[test]
    fn wire_string_round_trip_is_identity(status in any_status()) {
        let stored: StoredStatus = status.into();
        let reparsed = StoredStatus::from_str(stored.as_str()).unwrap();
        prop_assert_eq!(reparsed, stored);
    }

    /// The mapping is injective: distinct statuses never collide on the wire.
    #[test]
    fn distinct_statuses_have_distinct_wire_strings(a in any_status(), b in any_status()) {
        let (sa, sb): (StoredStatus, StoredStatus) = (a.into(), b.into());
        prop_assert_eq!(a == b, sa.as_str() == sb.as_str());
    }
}
