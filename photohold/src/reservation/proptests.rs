//! Property-based tests for the reservation status state machine.

use proptest::prelude::*;

use super::{PhotoId, ReservationDraft, ReservationStatus, ACTIVE_STATUSES};
use crate::auth::Identity;

const ALL_STATUSES: [ReservationStatus; 4] = [
    ReservationStatus::Pending,
    ReservationStatus::Confirmed,
    ReservationStatus::Received,
    ReservationStatus::Cancelled,
];

fn status_strategy() -> impl Strategy<Value = ReservationStatus> {
    prop::sample::select(ALL_STATUSES.to_vec())
}

// The property-tests feature turns the quick default run into a deep one.
#[cfg(feature = "property-tests")]
const CASES: u32 = 10_000;
#[cfg(not(feature = "property-tests"))]
const CASES: u32 = 256;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        .. ProptestConfig::default()
    })]

    // Every status is either active or Cancelled, never both.
    #[test]
    fn active_partition_is_exact(status in status_strategy()) {
        let listed = ACTIVE_STATUSES.contains(&status);
        prop_assert_eq!(listed, status.is_active());
        prop_assert_eq!(!listed, status == ReservationStatus::Cancelled);
    }

    // Nothing ever transitions out of Cancelled.
    #[test]
    fn cancelled_is_absorbing(target in status_strategy()) {
        prop_assert!(!ReservationStatus::Cancelled.can_transition_to(target));
    }

    // Terminal statuses admit no transition except Received -> Cancelled.
    #[test]
    fn terminal_statuses_only_cancel(target in status_strategy()) {
        for status in ALL_STATUSES {
            if status.is_terminal() && status.can_transition_to(target) {
                prop_assert_eq!(status, ReservationStatus::Received);
                prop_assert_eq!(target, ReservationStatus::Cancelled);
            }
        }
    }

    // can_transition_to and allowed_sources are inverse views of the
    // same table.
    #[test]
    fn transition_table_consistent(from in status_strategy(), to in status_strategy()) {
        let forward = from.can_transition_to(to);
        let inverse = ReservationStatus::allowed_sources(to).contains(&from);
        prop_assert_eq!(forward, inverse);
    }

    // No status transitions to itself; a repeated admin action must fail
    // rather than silently reapply.
    #[test]
    fn no_self_transitions(status in status_strategy()) {
        prop_assert!(!status.can_transition_to(status));
    }

    // Status storage strings round-trip for any casing.
    #[test]
    fn status_parse_round_trips(status in status_strategy()) {
        prop_assert_eq!(ReservationStatus::parse(status.as_str()).unwrap(), status);
        prop_assert_eq!(
            ReservationStatus::parse(&status.as_str().to_uppercase()).unwrap(),
            status
        );
    }

    // Draft construction trims and preserves the identity snapshot for
    // arbitrary printable inputs.
    #[test]
    fn draft_snapshot_preserved(
        user_id in "[a-z0-9-]{1,12}",
        name in "[A-Za-z ]{1,20}",
        email in "[a-z]{1,10}@[a-z]{1,10}\\.org",
        message in prop::option::of("[ -~]{0,40}"),
    ) {
        let requester = Identity::new(&user_id, &name, &email);
        let draft = ReservationDraft::new(PhotoId::new("p1").unwrap(), &requester)
            .unwrap()
            .with_message(message.clone());

        prop_assert_eq!(draft.user_id(), user_id.trim());
        prop_assert_eq!(draft.user_name(), name.trim());
        prop_assert_eq!(draft.user_email(), email.trim());

        // A message survives exactly when it has non-whitespace content.
        let expected = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        prop_assert_eq!(draft.message().map(str::to_string), expected);
    }
}
