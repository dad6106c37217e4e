use taskmgr_core::{
    CompleteOutcome, CreateTaskRequest, MemStore, Priority, ServiceError, TaskEdit, TaskError,
    TaskService, UpdateOutcome,
};

fn service() -> TaskService<MemStore> {
    TaskService::new(MemStore::new())
}

fn request(text: &str) -> CreateTaskRequest {
    CreateTaskRequest {
        text: text.to_string(),
        ..CreateTaskRequest::default()
    }
}

#[test]
fn create_assigns_sequential_ids_from_empty() {
    let service = service();

    let first = service.create(&request("one")).unwrap();
    let second = service.create(&request("two")).unwrap();
    let third = service.create(&request("three")).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(third.id, 3);

    let ids: Vec<_> = service.snapshot().unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn create_applies_defaults_and_metadata() {
    let service = service();

    let milk = service
        .create(&CreateTaskRequest {
            text: "Buy milk".to_string(),
            tag: Some("errand".to_string()),
            ..CreateTaskRequest::default()
        })
        .unwrap();
    assert_eq!(milk.id, 1);
    assert!(!milk.done);
    assert_eq!(milk.tag, "errand");
    assert_eq!(milk.priority, Priority::Low);
    assert_eq!(milk.due, None);

    let taxes = service
        .create(&CreateTaskRequest {
            text: "File taxes".to_string(),
            due: Some("2099-01-01".to_string()),
            priority: Some("high".to_string()),
            ..CreateTaskRequest::default()
        })
        .unwrap();
    assert_eq!(taxes.id, 2);
    assert_eq!(taxes.priority, Priority::High);
    assert_eq!(taxes.due.unwrap().to_string(), "2099-01-01");
}

#[test]
fn create_validates_every_field() {
    let service = service();

    let err = service
        .create(&CreateTaskRequest {
            text: "task".to_string(),
            priority: Some("urgent".to_string()),
            ..CreateTaskRequest::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Task(TaskError::InvalidPriority(value)) if value == "urgent"
    ));

    let err = service
        .create(&CreateTaskRequest {
            text: "task".to_string(),
            due: Some("next tuesday".to_string()),
            ..CreateTaskRequest::default()
        })
        .unwrap_err();
    assert!(matches!(err, ServiceError::Task(TaskError::InvalidDate(_))));

    let err = service.create(&request("   ")).unwrap_err();
    assert!(matches!(err, ServiceError::Task(TaskError::EmptyText)));

    // Nothing was committed by the rejected creates.
    assert!(service.snapshot().unwrap().is_empty());
}

#[test]
fn complete_is_idempotent() {
    let service = service();
    let task = service.create(&request("water plants")).unwrap();

    assert_eq!(
        service.complete(task.id).unwrap(),
        CompleteOutcome::Completed
    );
    assert_eq!(
        service.complete(task.id).unwrap(),
        CompleteOutcome::AlreadyDone
    );

    let after = service.get(task.id).unwrap().unwrap();
    assert!(after.done);
}

#[test]
fn complete_unknown_id_is_not_found() {
    let service = service();
    service.create(&request("only task")).unwrap();

    let err = service.complete(42).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Task(TaskError::NotFound(42))
    ));
}

#[test]
fn delete_returns_the_removed_task() {
    let service = service();
    service.create(&request("keep")).unwrap();
    let target = service.create(&request("remove")).unwrap();

    let removed = service.delete(target.id).unwrap();
    assert_eq!(removed.text, "remove");
    assert!(service.get(target.id).unwrap().is_none());
    assert_eq!(service.snapshot().unwrap().len(), 1);
}

#[test]
fn delete_unknown_id_leaves_collection_intact() {
    let service = service();
    service.create(&request("one")).unwrap();
    service.create(&request("two")).unwrap();

    let err = service.delete(99).unwrap_err();
    assert!(matches!(err, ServiceError::Task(TaskError::NotFound(99))));
    assert_eq!(service.snapshot().unwrap().len(), 2);
}

#[test]
fn update_applies_only_supplied_fields() {
    let service = service();
    let task = service
        .create(&CreateTaskRequest {
            text: "draft report".to_string(),
            tag: Some("work".to_string()),
            ..CreateTaskRequest::default()
        })
        .unwrap();

    let outcome = service
        .update(
            task.id,
            &TaskEdit {
                text: Some("final report".to_string()),
                priority: Some("HIGH".to_string()),
                due: Some("2030-06-15".to_string()),
                ..TaskEdit::default()
            },
        )
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::Changed);

    let after = service.get(task.id).unwrap().unwrap();
    assert_eq!(after.text, "final report");
    assert_eq!(after.tag, "work");
    assert_eq!(after.priority, Priority::High);
    assert_eq!(after.due.unwrap().to_string(), "2030-06-15");
    assert_eq!(after.timestamp, task.timestamp);
}

#[test]
fn update_validation_is_atomic() {
    let service = service();
    let task = service.create(&request("original")).unwrap();

    let err = service
        .update(
            task.id,
            &TaskEdit {
                text: Some("should not stick".to_string()),
                priority: Some("urgent".to_string()),
                ..TaskEdit::default()
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Task(TaskError::InvalidPriority(_))
    ));

    let err = service
        .update(
            task.id,
            &TaskEdit {
                tag: Some("should not stick".to_string()),
                due: Some("2030-13-13".to_string()),
                ..TaskEdit::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::Task(TaskError::InvalidDate(_))));

    let after = service.get(task.id).unwrap().unwrap();
    assert_eq!(after.text, "original");
    assert!(after.tag.is_empty());
}

#[test]
fn update_without_actual_changes_is_a_noop() {
    let service = service();
    let task = service
        .create(&CreateTaskRequest {
            text: "steady".to_string(),
            tag: Some("home".to_string()),
            priority: Some("medium".to_string()),
            ..CreateTaskRequest::default()
        })
        .unwrap();

    let outcome = service
        .update(
            task.id,
            &TaskEdit {
                text: Some("steady".to_string()),
                tag: Some("home".to_string()),
                priority: Some("medium".to_string()),
                ..TaskEdit::default()
            },
        )
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::NoChanges);
}

#[test]
fn update_with_empty_due_clears_the_deadline() {
    let service = service();
    let task = service
        .create(&CreateTaskRequest {
            text: "dated".to_string(),
            due: Some("2030-01-01".to_string()),
            ..CreateTaskRequest::default()
        })
        .unwrap();

    let outcome = service
        .update(
            task.id,
            &TaskEdit {
                due: Some(String::new()),
                ..TaskEdit::default()
            },
        )
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::Changed);
    assert_eq!(service.get(task.id).unwrap().unwrap().due, None);

    // Clearing an already-clear due date changes nothing.
    let outcome = service
        .update(
            task.id,
            &TaskEdit {
                due: Some(String::new()),
                ..TaskEdit::default()
            },
        )
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::NoChanges);
}
