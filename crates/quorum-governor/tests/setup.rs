//! Base setup: initial role assignments, management-function thresholds,
//! and reconfiguration of a governed function through the self-call ritual.

use quorum_governor::management::{
    GRANT_ADMIN_SIG, GRANT_PAUSE_SIG, GRANT_ROLE_OF_FUNCTION_SIG, REVOKE_ADMIN_SIG,
    REVOKE_PAUSE_SIG, REVOKE_ROLE_OF_FUNCTION_SIG, SET_REQUIRED_VOTES_SIG, UNPAUSE_SIG,
};
use quorum_governor::{
    Address, Governor, GovernorEvent, ManagementCall, RecordingDispatcher, RoleId, Selector,
};

const SET_VALUE_SIG: &str = "setValue(uint256)";

fn addr(n: u8) -> Address {
    Address::from_bytes([n; 32])
}

fn admins() -> Vec<Address> {
    vec![addr(1), addr(2), addr(3), addr(4)]
}

/// 4 admins, governor-wide quorum of 3.
fn setup() -> (Governor, RecordingDispatcher) {
    let dispatcher = RecordingDispatcher::new();
    let gov = Governor::new(addr(0xf0), admins(), Some(3), Box::new(dispatcher.clone())).unwrap();
    (gov, dispatcher)
}

#[test]
fn default_role_has_no_members() {
    let (gov, _) = setup();
    assert_eq!(gov.role_member_count(&RoleId::DEFAULT), 0);
}

#[test]
fn pause_role_starts_empty() {
    let (gov, _) = setup();
    assert_eq!(gov.role_member_count(&RoleId::pause()), 0);
}

#[test]
fn all_admins_hold_admin_role() {
    let (gov, _) = setup();
    for admin in admins() {
        assert!(gov.has_role(&RoleId::admin(), &admin));
    }
    assert_eq!(gov.role_member_count(&RoleId::admin()), admins().len());
}

#[test]
fn self_role_held_only_by_the_engine() {
    let (gov, _) = setup();
    assert!(gov.has_role(&RoleId::own(), &gov.own_address()));
    assert_eq!(gov.role_member_count(&RoleId::own()), 1);
}

#[test]
fn management_functions_carry_configured_thresholds() {
    let (gov, _) = setup();
    let own = gov.own_address();
    let quorum_gated = [
        SET_REQUIRED_VOTES_SIG,
        GRANT_ADMIN_SIG,
        REVOKE_ADMIN_SIG,
        GRANT_PAUSE_SIG,
        REVOKE_PAUSE_SIG,
        UNPAUSE_SIG,
        GRANT_ROLE_OF_FUNCTION_SIG,
    ];
    for sig in quorum_gated {
        assert_eq!(gov.required_votes_of_function(&own, sig), 3, "{sig}");
    }
    assert_eq!(
        gov.required_votes_of_function(&own, REVOKE_ROLE_OF_FUNCTION_SIG),
        1
    );
}

#[test]
fn set_required_votes_through_the_self_call_ritual() {
    let (mut gov, dispatcher) = setup();
    let own = gov.own_address();
    let governee = addr(0x20);

    let data = ManagementCall::SetRequiredVotesOfFunction {
        target: governee,
        signature: SET_VALUE_SIG.into(),
        required_votes: 2,
    }
    .encode();

    // Proposer's vote counts as vote #1.
    let id = gov.propose(addr(1), own, 0, data.clone()).unwrap();
    {
        let tx = gov.transaction(id).unwrap();
        assert_eq!(tx.destination, own);
        assert_eq!(tx.value, 0);
        assert_eq!(tx.data, data);
        assert!(!tx.executed);
        assert_eq!(tx.total_votes(), 1);
    }
    assert!(gov.vote_of_transaction(id, &addr(1)));
    assert!(gov.events().contains(&GovernorEvent::TransactionProposed {
        id,
        destination: own,
        value: 0,
        data: data.clone(),
    }));

    // Second vote still short of the quorum of 3.
    gov.approve(addr(2), id).unwrap();
    {
        let tx = gov.transaction(id).unwrap();
        assert!(!tx.executed);
        assert_eq!(tx.total_votes(), 2);
    }
    assert!(gov.vote_of_transaction(id, &addr(2)));

    // Third vote crosses the threshold and applies the management call.
    gov.approve(addr(3), id).unwrap();
    {
        let tx = gov.transaction(id).unwrap();
        assert!(tx.executed);
        assert_eq!(tx.total_votes(), 3);
    }
    assert_eq!(gov.required_votes_of_function(&governee, SET_VALUE_SIG), 2);
    assert_eq!(
        gov.required_votes_of_selector(&governee, &Selector::from_signature(SET_VALUE_SIG)),
        2
    );

    let events = gov.events();
    assert!(events.contains(&GovernorEvent::TransactionApproved {
        id,
        destination: own,
        total_votes: 3,
    }));
    assert!(events.contains(&GovernorEvent::TransactionExecuted {
        id,
        destination: own,
        value: 0,
        data,
    }));
    assert!(events.contains(&GovernorEvent::RequiredVotesUpdated {
        target: governee,
        selector: Selector::from_signature(SET_VALUE_SIG),
        required_votes: 2,
    }));

    // Self-calls never leave the engine.
    assert_eq!(dispatcher.call_count(), 0);
}

#[test]
fn management_thresholds_cannot_be_rewritten_directly() {
    let (mut gov, _) = setup();
    let own = gov.own_address();

    // A lone admin rewriting the engine's own entries would bypass the
    // quorum on the setRequiredVotesOfFunction self-call.
    let err = gov.add_function(addr(1), own, GRANT_ADMIN_SIG, 1).unwrap_err();
    assert_eq!(err, quorum_governor::GovernorError::Unqualified);
    assert_eq!(gov.required_votes_of_function(&own, GRANT_ADMIN_SIG), 3);

    let err = gov.remove_function(addr(1), own, UNPAUSE_SIG).unwrap_err();
    assert_eq!(err, quorum_governor::GovernorError::Unqualified);
    assert_eq!(gov.required_votes_of_function(&own, UNPAUSE_SIG), 3);

    // Even with the lowered threshold blocked, a single proposal cannot
    // mint an admin.
    let data = ManagementCall::GrantAdminRole { account: addr(9) }.encode();
    let id = gov.propose(addr(1), own, 0, data).unwrap();
    assert!(!gov.transaction(id).unwrap().executed);
    assert!(!gov.has_role(&RoleId::admin(), &addr(9)));
}

#[test]
fn management_functions_cannot_be_invoked_directly() {
    let (mut gov, _) = setup();
    let own = gov.own_address();

    // A non-admin without any derived role cannot even propose against
    // the engine's own address.
    let data = ManagementCall::GrantAdminRole { account: addr(9) }.encode();
    let err = gov.propose(addr(9), own, 0, data).unwrap_err();
    assert_eq!(err, quorum_governor::GovernorError::Unqualified);
}

#[test]
fn invalid_threshold_in_self_call_aborts_the_crossing_vote() {
    let (mut gov, _) = setup();
    let own = gov.own_address();

    let data = ManagementCall::SetRequiredVotesOfFunction {
        target: addr(0x20),
        signature: SET_VALUE_SIG.into(),
        required_votes: 0,
    }
    .encode();

    let id = gov.propose(addr(1), own, 0, data).unwrap();
    gov.approve(addr(2), id).unwrap();
    let err = gov.approve(addr(3), id).unwrap_err();
    assert_eq!(err, quorum_governor::GovernorError::InvalidThreshold);

    // The crossing vote was not committed.
    let tx = gov.transaction(id).unwrap();
    assert!(!tx.executed);
    assert_eq!(tx.total_votes(), 2);
    assert!(!gov.vote_of_transaction(id, &addr(3)));
}
