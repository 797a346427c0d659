use pretty_assertions::assert_eq;

use faucet_client::{
    app::{AppEvent, ClientConfig, FaucetApp, NotificationKind, REFRESH_DELAY},
    eligibility::READY_TO_CLAIM,
    error::ClientError,
    testing::{ManualClock, MockConnector},
};

use crate::suite::{Suite, SuiteBuilder, ALICE, WAIT_TIME, WITHDRAWAL_AMOUNT};

fn client(suite: &Suite) -> FaucetApp<MockConnector, ManualClock> {
    FaucetApp::new(
        MockConnector::new(ALICE),
        suite.clock.clone(),
        ClientConfig::default(),
    )
}

#[test]
fn connect_fetch_claim_and_refetch() {
    let mut suite = SuiteBuilder::new().build();
    let mut app = client(&suite);

    app.connect(&mut suite).unwrap();

    let status = app.status();
    assert!(status.connected && status.loaded && status.can_claim);
    assert_eq!(status.address.unwrap(), ALICE);
    assert_eq!(status.countdown, READY_TO_CLAIM);
    assert_eq!(status.withdrawal_amount.unwrap(), "10");

    app.claim(&mut suite).unwrap();
    assert_eq!(suite.query_token_balance(ALICE).unwrap(), WITHDRAWAL_AMOUNT);

    // the optimistic unlock is in place before the authoritative refetch
    let status = app.status();
    assert!(!status.can_claim);
    assert_eq!(status.seconds_remaining, WAIT_TIME);
    assert_eq!(status.countdown, "1h 0m 0s");

    // the deferred refetch lands and agrees with the contract
    suite.wait(REFRESH_DELAY);
    let events = app.tick(&mut suite);
    assert!(events.contains(&AppEvent::SnapshotRefreshed));
    assert_eq!(app.status().seconds_remaining, WAIT_TIME - REFRESH_DELAY);

    // the window reopens and a second claim goes through
    suite.wait(WAIT_TIME - REFRESH_DELAY);
    app.tick(&mut suite);
    assert!(app.status().can_claim);

    app.claim(&mut suite).unwrap();
    assert_eq!(
        suite.query_token_balance(ALICE).unwrap(),
        2 * WITHDRAWAL_AMOUNT
    );
}

#[test]
fn stale_snapshot_submission_is_attempted_and_reverted() {
    let mut suite = SuiteBuilder::new().build();
    let mut app = client(&suite);

    app.connect(&mut suite).unwrap();

    // the same user claims out of band, the local snapshot goes stale
    suite.claim(ALICE).unwrap();

    // the advisory pre-check still reads eligible and lets the submission
    // through, the contract revert is the authoritative answer
    let err = app.claim(&mut suite).unwrap_err();
    match err {
        ClientError::Submit { reason } => assert!(reason.contains("Come back later")),
        other => panic!("unexpected error: {other:?}"),
    }

    // no double payout happened
    assert_eq!(suite.query_token_balance(ALICE).unwrap(), WITHDRAWAL_AMOUNT);

    let notifications = app.take_notifications();
    assert_eq!(notifications.last().unwrap().kind, NotificationKind::Error);

    // the authoritative state is recovered with a manual refresh
    app.refresh(&mut suite).unwrap();
    assert!(!app.status().can_claim);
    assert_eq!(app.status().seconds_remaining, WAIT_TIME);
}

#[test]
fn countdown_follows_chain_time() {
    let mut suite = SuiteBuilder::new().build();
    let mut app = client(&suite);

    app.connect(&mut suite).unwrap();
    app.claim(&mut suite).unwrap();

    suite.wait(REFRESH_DELAY);
    app.tick(&mut suite);

    suite.wait(WAIT_TIME / 2 - REFRESH_DELAY);
    let events = app.tick(&mut suite);
    assert!(events
        .iter()
        .any(|x| matches!(x, AppEvent::CountdownTick { .. })));

    let status = app.status();
    assert_eq!(status.seconds_remaining, WAIT_TIME / 2);
    assert_eq!(status.countdown, "30m 0s");
}

#[test]
fn calls_before_connect_are_rejected() {
    let mut suite = SuiteBuilder::new().build();
    let mut app = client(&suite);

    assert_eq!(app.refresh(&mut suite).unwrap_err(), ClientError::NotConnected);
    assert_eq!(app.claim(&mut suite).unwrap_err(), ClientError::NotConnected);

    // connecting first fixes both
    app.connect(&mut suite).unwrap();
    app.claim(&mut suite).unwrap();
}

#[test]
fn reconnect_cycle_reloads_the_snapshot() {
    let mut suite = SuiteBuilder::new().build();
    let mut app = client(&suite);

    app.connect(&mut suite).unwrap();
    app.disconnect();
    assert!(!app.status().loaded);

    app.connect(&mut suite).unwrap();
    assert!(app.status().loaded);

    app.claim(&mut suite).unwrap();
    assert_eq!(suite.query_token_balance(ALICE).unwrap(), WITHDRAWAL_AMOUNT);
}

#[test]
fn shortened_wait_time_is_picked_up_by_refetch() {
    let mut suite = SuiteBuilder::new().with_wait_time(60).build();
    let mut app = client(&suite);

    app.connect(&mut suite).unwrap();
    app.claim(&mut suite).unwrap();

    let status = app.status();
    assert_eq!(status.seconds_remaining, 60);
    assert_eq!(status.countdown, "1m 0s");

    suite.wait(60);
    app.tick(&mut suite);
    assert!(app.status().can_claim);
}
