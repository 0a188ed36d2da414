//! Integration tests for activity logging

use taskboard_kanban::{
    board::{CreateBoard, GetBoard, ListBoards},
    task::{AddTask, MoveTask, UpdateTask},
    Collection, FileStore, KanbanContext, KanbanOperationProcessor, OperationProcessor, Session,
};
use tempfile::TempDir;

fn file_context(temp: &TempDir) -> (KanbanContext, FileStore) {
    let store = FileStore::new(temp.path().join(".taskboard"));
    let ctx = KanbanContext::new(store.clone()).with_session(Session::new("ada@example.com"));
    (ctx, store)
}

#[tokio::test]
async fn test_activity_logging_end_to_end() {
    let temp = TempDir::new().unwrap();
    let (ctx, store) = file_context(&temp);
    let processor = KanbanOperationProcessor::with_actor("cli[ada]");

    let board = processor
        .process(&CreateBoard::new("Test Board").with_default_columns(), &ctx)
        .await
        .unwrap();
    let board_id = board["id"].as_str().unwrap().to_string();
    let todo = board["columns"][0]["id"].as_str().unwrap().to_string();
    let doing = board["columns"][1]["id"].as_str().unwrap().to_string();

    let task = processor
        .process(&AddTask::new(board_id.as_str(), todo.as_str(), "First task"), &ctx)
        .await
        .unwrap();
    let task_id = task["id"].as_str().unwrap().to_string();

    processor
        .process(
            &UpdateTask::new(board_id.as_str(), todo.as_str(), task_id.as_str())
                .with_title("Updated task"),
            &ctx,
        )
        .await
        .unwrap();

    processor
        .process(
            &MoveTask::new(board_id.as_str(), task_id.as_str(), todo.as_str(), doing.as_str(), 0),
            &ctx,
        )
        .await
        .unwrap();

    // Reads leave no trace
    processor
        .process(&GetBoard::new(board_id.as_str()), &ctx)
        .await
        .unwrap();
    processor.process(&ListBoards::new(), &ctx).await.unwrap();

    let entries = ctx.read_activity(None).await.unwrap();
    let ops: Vec<_> = entries.iter().map(|e| e.op.as_str()).collect();
    assert_eq!(ops, ["move task", "update task", "add task", "create board"]);
    assert!(entries
        .iter()
        .all(|e| e.actor.as_deref() == Some("cli[ada]")));

    // One JSON file per entry on disk
    let activity_dir = store.collection_dir(Collection::Activity);
    assert_eq!(std::fs::read_dir(&activity_dir).unwrap().count(), 4);

    let board = ctx.read_board(&board_id.as_str().into()).await.unwrap();
    assert_eq!(board.columns[1].tasks[0].title, "Updated task");
    assert_eq!(board.columns[1].tasks[0].status, "In Progress");
}

#[tokio::test]
async fn test_failures_are_logged_and_actor_defaults_to_session() {
    let temp = TempDir::new().unwrap();
    let (ctx, _store) = file_context(&temp);
    let processor = KanbanOperationProcessor::new();

    let result = processor
        .process(&MoveTask::new("missing", "t1", "a", "b", 0), &ctx)
        .await;
    assert!(result.unwrap_err().is_not_found());

    let entries = ctx.read_activity(Some(10)).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_failure());
    assert_eq!(entries[0].actor.as_deref(), Some("ada@example.com"));
}

#[tokio::test]
async fn test_read_activity_limit() {
    let ctx = KanbanContext::in_memory().with_session(Session::new("ada@example.com"));
    let processor = KanbanOperationProcessor::new();

    for name in ["one", "two", "three"] {
        processor
            .process(&CreateBoard::new(name), &ctx)
            .await
            .unwrap();
    }

    let latest = ctx.read_activity(Some(2)).await.unwrap();
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0].input["name"], "three");
}
