use chrono::{TimeZone, Utc};
use taskmgr_core::{MemStore, RenumberOutcome, Task, TaskService};

fn task_at(id: u64, text: &str, minute: u32) -> Task {
    let mut task = Task::new(id, text);
    task.timestamp = Utc.with_ymd_and_hms(2023, 11, 14, 22, minute, 0).unwrap();
    task
}

#[test]
fn renumber_reassigns_timestamp_ordered_ranks() {
    let seeded = vec![
        task_at(1_700_000_000_000, "first created", 0),
        task_at(1_700_000_005_000, "second created", 5),
    ];
    let service = TaskService::new(MemStore::with_tasks(seeded));

    let outcome = service.renumber().unwrap();
    assert_eq!(
        outcome,
        RenumberOutcome::Renumbered(vec![
            (1_700_000_000_000, 1),
            (1_700_000_005_000, 2),
        ])
    );

    let after = service.snapshot().unwrap();
    assert_eq!(
        after.iter().map(|t| (t.id, t.text.as_str())).collect::<Vec<_>>(),
        vec![(1, "first created"), (2, "second created")]
    );
}

#[test]
fn renumber_orders_by_creation_time_not_by_id() {
    let seeded = vec![
        task_at(50, "created later", 30),
        task_at(30, "created earlier", 10),
    ];
    let service = TaskService::new(MemStore::with_tasks(seeded));

    let outcome = service.renumber().unwrap();
    assert_eq!(
        outcome,
        RenumberOutcome::Renumbered(vec![(30, 1), (50, 2)])
    );

    let after = service.snapshot().unwrap();
    assert_eq!(after[0].text, "created earlier");
    assert_eq!(after[1].text, "created later");
}

#[test]
fn renumber_on_empty_store_reports_empty() {
    let service = TaskService::new(MemStore::new());
    assert_eq!(service.renumber().unwrap(), RenumberOutcome::Empty);
}

#[test]
fn renumber_on_compact_ids_is_a_noop() {
    let seeded = vec![task_at(1, "one", 0), task_at(2, "two", 5)];
    let service = TaskService::new(MemStore::with_tasks(seeded.clone()));

    assert_eq!(service.renumber().unwrap(), RenumberOutcome::AlreadyCompact);
    assert_eq!(service.snapshot().unwrap(), seeded);
}
