use orchestra_core::{
    CardAction, FileStore, KeyValueStore, MemoryStore, ProjectDraft, ProjectStatus, ProjectStore,
};
use proptest::prelude::*;

const KEY: &str = "agent-orchestra-projects";

#[derive(Clone, Debug)]
enum Op {
    Add(String, Option<u16>),
    Approve(usize),
    Reject(usize),
    SetStatus(usize, ProjectStatus),
    Dispatch(usize, CardAction),
    Delete(usize, bool),
}

fn arb_status() -> impl Strategy<Value = ProjectStatus> {
    prop::sample::select(ProjectStatus::ALL.to_vec())
}

fn arb_action() -> impl Strategy<Value = CardAction> {
    prop::sample::select(CardAction::ALL.to_vec())
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[A-Za-z][A-Za-z0-9 ]{0,12}", prop::option::of(any::<u16>()))
            .prop_map(|(name, port)| Op::Add(name, port)),
        (0usize..8).prop_map(Op::Approve),
        (0usize..8).prop_map(Op::Reject),
        (0usize..8, arb_status()).prop_map(|(i, s)| Op::SetStatus(i, s)),
        (0usize..8, arb_action()).prop_map(|(i, a)| Op::Dispatch(i, a)),
        (0usize..8, any::<bool>()).prop_map(|(i, yes)| Op::Delete(i, yes)),
    ]
}

/// Resolve a position to an id, or a stale id once the board runs out.
fn id_at(store: &ProjectStore<MemoryStore>, index: usize) -> String {
    store
        .projects()
        .get(index)
        .map_or_else(|| format!("deleted-{index}"), |p| p.id.clone())
}

fn apply(store: &mut ProjectStore<MemoryStore>, op: Op, clock: &mut i64) {
    match op {
        Op::Add(name, port) => {
            let port = port.map(|p| p.to_string()).unwrap_or_default();
            let new = ProjectDraft::new(name, port).submit().expect("valid draft");
            *clock += 1;
            let before: Vec<String> = store.projects().iter().map(|p| p.id.clone()).collect();
            let added = store.add_at(new, *clock).expect("add");
            assert_eq!(store.len(), before.len() + 1);
            assert!(!before.contains(&added.id));
        }
        Op::Approve(i) => {
            let id = id_at(store, i);
            store.approve(&id).expect("approve");
        }
        Op::Reject(i) => {
            let id = id_at(store, i);
            store.reject(&id).expect("reject");
        }
        Op::SetStatus(i, status) => {
            let id = id_at(store, i);
            store.set_status(&id, status).expect("set_status");
        }
        Op::Dispatch(i, action) => {
            let id = id_at(store, i);
            store.dispatch(&id, action).expect("dispatch");
        }
        Op::Delete(i, yes) => {
            let id = id_at(store, i);
            store.delete(&id, &mut |_: &str| yes).expect("delete");
        }
    }
}

proptest! {
    #[test]
    fn stored_blob_round_trips_to_the_live_board(ops in prop::collection::vec(arb_op(), 1..40)) {
        let mut store = ProjectStore::open(MemoryStore::new(), KEY).expect("open");
        let mut clock = 1_700_000_000_000;
        for op in ops {
            apply(&mut store, op, &mut clock);
        }

        let reopened = ProjectStore::open(store.storage().clone(), KEY).expect("reopen");
        prop_assert_eq!(reopened.projects(), store.projects());
    }

    #[test]
    fn status_counts_partition_total(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut store = ProjectStore::open(MemoryStore::new(), KEY).expect("open");
        let mut clock = 0;
        for op in ops {
            apply(&mut store, op, &mut clock);
            let stats = store.stats();
            let sum: usize = ProjectStatus::ALL.iter().map(|s| stats.count(*s)).sum();
            prop_assert_eq!(stats.total, store.len());
            prop_assert_eq!(sum, stats.total);
        }
    }

    #[test]
    fn ids_stay_unique(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut store = ProjectStore::open(MemoryStore::new(), KEY).expect("open");
        let mut clock = 5;
        for op in ops {
            apply(&mut store, op, &mut clock);
        }
        let mut ids: Vec<_> = store.projects().iter().map(|p| p.id.clone()).collect();
        let len = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), len);
    }

    #[test]
    fn dispatched_approve_only_touches_review_records(index in 0usize..4) {
        let mut store = ProjectStore::open(MemoryStore::new(), KEY).expect("open");
        let before = store.projects().to_vec();
        let id = before[index].id.clone();
        let changed = store.dispatch(&id, CardAction::Approve).expect("dispatch");

        prop_assert_eq!(changed, before[index].status == ProjectStatus::Review);
        if !changed {
            prop_assert_eq!(store.projects(), before.as_slice());
        }
    }
}

#[test]
fn seed_board_walkthrough() {
    let mut store = ProjectStore::open(MemoryStore::new(), KEY).expect("open");
    let statuses: Vec<_> = store.projects().iter().map(|p| p.status).collect();
    assert_eq!(
        statuses,
        vec![
            ProjectStatus::Running,
            ProjectStatus::Review,
            ProjectStatus::Error,
            ProjectStatus::Done,
        ]
    );

    assert!(store.approve("2").expect("approve"));
    let femora = store.get("2").expect("femora");
    assert_eq!(femora.status, ProjectStatus::Running);
    assert_eq!(femora.next_step, "Continue...");

    assert!(store.set_status("3", ProjectStatus::Running).expect("set_status"));
    assert!(store.delete("3", &mut |_: &str| true).expect("delete"));

    assert_eq!(store.len(), 3);
    assert!(store.projects().iter().all(|p| p.id != "3"));
}

#[test]
fn board_survives_restart_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("orchestra.json");

    let mut store = ProjectStore::open(FileStore::open(&path).expect("file"), KEY).expect("open");
    let new = ProjectDraft::new("Scratch", "8080").submit().expect("draft");
    let added = store.add(new).expect("add");
    store.reject("2").expect("reject");

    let reopened =
        ProjectStore::open(FileStore::open(&path).expect("file"), KEY).expect("reopen");
    assert_eq!(reopened.projects(), store.projects());
    assert_eq!(reopened.get(&added.id).and_then(|p| p.port), Some(8080));
    assert!(reopened.storage().get(KEY).expect("get").is_some());
}
