use std::sync::Arc;
use std::thread;

use splash_core::gate::TriggerGate;

#[test]
fn concurrent_disarm_admits_exactly_one_winner() {
    for _ in 0..200 {
        let gate = Arc::new(TriggerGate::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let gate = Arc::clone(&gate);
                thread::spawn(move || gate.try_disarm())
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|handle| handle.join().expect("disarm thread panicked"))
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
        assert!(!gate.is_armed());
    }
}

#[test]
fn disarm_after_rearm_succeeds_again() {
    let gate = TriggerGate::new();
    assert!(gate.try_disarm());
    assert!(!gate.try_disarm());
    gate.rearm();
    assert!(gate.try_disarm());
}

#[test]
fn rearm_races_never_leave_the_gate_stuck() {
    let gate = Arc::new(TriggerGate::new());
    assert!(gate.try_disarm());

    let rearm_gate = Arc::clone(&gate);
    let rearm = thread::spawn(move || rearm_gate.rearm());
    rearm.join().expect("rearm thread panicked");

    assert!(gate.is_armed());
    assert!(gate.try_disarm());
}
