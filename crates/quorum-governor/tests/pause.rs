//! Pause-state governance: pausing, quorum-gated unpausing, and the
//! Pause role lifecycle.

use quorum_governor::{
    Address, Governor, GovernorError, GovernorEvent, RecordingDispatcher, RoleId, Selector,
};

const INCREMENT_SIG: &str = "incrementValue()";

fn addr(n: u8) -> Address {
    Address::from_bytes([n; 32])
}

fn admins() -> Vec<Address> {
    vec![addr(1), addr(2), addr(3), addr(4)]
}

/// 4 admins, default quorum (= 4), plus a governee collaborator.
fn setup() -> (Governor, Address) {
    let gov = Governor::new(
        addr(0xf0),
        admins(),
        None,
        Box::new(RecordingDispatcher::new()),
    )
    .unwrap();
    (gov, addr(0x20))
}

#[test]
fn admin_can_pause() {
    let (mut gov, _) = setup();
    assert!(!gov.is_paused());
    gov.pause(addr(1)).unwrap();
    assert!(gov.is_paused());
    assert!(gov
        .events()
        .contains(&GovernorEvent::Paused { account: addr(1) }));
}

#[test]
fn pause_while_paused_fails() {
    let (mut gov, _) = setup();
    gov.pause(addr(1)).unwrap();
    assert_eq!(gov.pause(addr(2)), Err(GovernorError::Paused));
}

#[test]
fn outsider_cannot_pause() {
    let (mut gov, _) = setup();
    assert_eq!(gov.pause(addr(9)), Err(GovernorError::Unqualified));
    assert!(!gov.is_paused());
}

#[test]
fn unpause_requires_all_admin_votes() {
    let (mut gov, _) = setup();
    gov.pause(addr(1)).unwrap();

    for (index, admin) in admins().into_iter().enumerate() {
        gov.unpause(admin).unwrap();
        if index < admins().len() - 1 {
            assert!(gov.is_paused());
            assert_eq!(gov.unpause_votes(), index as u32 + 1);
        }
    }
    assert!(!gov.is_paused());
    assert_eq!(gov.unpause_votes(), 0);
    assert!(gov
        .events()
        .contains(&GovernorEvent::Unpaused { account: addr(4) }));
}

#[test]
fn unpause_while_running_fails() {
    let (mut gov, _) = setup();
    assert_eq!(gov.unpause(addr(1)), Err(GovernorError::NotPaused));
}

#[test]
fn duplicate_unpause_vote_rejected() {
    let (mut gov, _) = setup();
    gov.pause(addr(1)).unwrap();
    gov.unpause(addr(1)).unwrap();
    assert_eq!(gov.unpause(addr(1)), Err(GovernorError::AlreadyVoted));
    assert_eq!(gov.unpause_votes(), 1);
}

#[test]
fn unpause_self_call_rejected_while_running() {
    let (mut gov, _) = setup();
    let own = gov.own_address();

    let data = quorum_governor::ManagementCall::Unpause.encode();
    let id = gov.propose(addr(1), own, 0, data).unwrap();
    gov.approve(addr(2), id).unwrap();
    gov.approve(addr(3), id).unwrap();

    // The crossing vote fails validation while the engine is running, so
    // the vote never commits.
    let err = gov.approve(addr(4), id).unwrap_err();
    assert_eq!(err, GovernorError::NotPaused);
    let tx = gov.transaction(id).unwrap();
    assert!(!tx.executed);
    assert_eq!(tx.total_votes(), 3);
    assert!(!gov.vote_of_transaction(id, &addr(4)));
}

#[test]
fn pause_role_campaign_counts_and_resets() {
    let (mut gov, _) = setup();
    let pauser = addr(5);

    for (index, admin) in admins().into_iter().enumerate() {
        gov.grant_pause_role(admin, pauser).unwrap();
        if index < admins().len() - 1 {
            assert!(gov.grant_pause_vote_of(&pauser, &admin));
            assert!(!gov.has_role(&RoleId::pause(), &pauser));
            assert_eq!(gov.grant_pause_votes(&pauser), index as u32 + 1);
        }
    }

    for admin in admins() {
        assert!(!gov.grant_pause_vote_of(&pauser, &admin));
    }
    assert!(gov.has_role(&RoleId::pause(), &pauser));
    assert_eq!(gov.grant_pause_votes(&pauser), 0);
}

#[test]
fn pause_role_holder_can_pause() {
    let (mut gov, _) = setup();
    let pauser = addr(5);
    for admin in admins() {
        gov.grant_pause_role(admin, pauser).unwrap();
    }

    gov.pause(pauser).unwrap();
    assert!(gov.is_paused());
    assert!(gov
        .events()
        .contains(&GovernorEvent::Paused { account: pauser }));
}

#[test]
fn revoke_pause_role_removes_the_capability() {
    let (mut gov, _) = setup();
    let pauser = addr(5);
    for admin in admins() {
        gov.grant_pause_role(admin, pauser).unwrap();
    }
    for admin in admins() {
        gov.revoke_pause_role(admin, pauser).unwrap();
    }
    assert!(!gov.has_role(&RoleId::pause(), &pauser));
    assert_eq!(gov.pause(pauser), Err(GovernorError::Unqualified));
}

#[test]
fn paused_engine_rejects_mutations() {
    let (mut gov, governee) = setup();
    gov.add_function(addr(1), governee, INCREMENT_SIG, 2).unwrap();
    let data = Selector::from_signature(INCREMENT_SIG).as_bytes().to_vec();
    let id = gov.propose(addr(1), governee, 0, data.clone()).unwrap();

    gov.pause(addr(1)).unwrap();

    assert_eq!(
        gov.propose(addr(2), governee, 0, data),
        Err(GovernorError::Paused)
    );
    assert_eq!(gov.approve(addr(2), id), Err(GovernorError::Paused));
    assert_eq!(
        gov.add_function(addr(1), governee, "setValue(uint256)", 2),
        Err(GovernorError::Paused)
    );
    assert_eq!(
        gov.remove_function(addr(1), governee, INCREMENT_SIG),
        Err(GovernorError::Paused)
    );
    assert_eq!(
        gov.grant_admin(addr(1), addr(11)),
        Err(GovernorError::Paused)
    );
    assert_eq!(
        gov.grant_pause_role(addr(1), addr(5)),
        Err(GovernorError::Paused)
    );
    assert_eq!(
        gov.grant_role_of_function(addr(1), governee, INCREMENT_SIG, addr(20)),
        Err(GovernorError::Paused)
    );

    // Read-only surface still works, and the pending transaction is intact.
    let tx = gov.transaction(id).unwrap();
    assert!(!tx.executed);
    assert_eq!(tx.total_votes(), 1);
}

#[test]
fn lifecycle_resumes_after_unpause() {
    let (mut gov, governee) = setup();
    gov.add_function(addr(1), governee, INCREMENT_SIG, 2).unwrap();
    let data = Selector::from_signature(INCREMENT_SIG).as_bytes().to_vec();
    let id = gov.propose(addr(1), governee, 0, data).unwrap();

    gov.pause(addr(1)).unwrap();
    for admin in admins() {
        gov.unpause(admin).unwrap();
    }
    assert!(!gov.is_paused());

    gov.approve(addr(2), id).unwrap();
    assert!(gov.transaction(id).unwrap().executed);
}
