//! Moves against board documents written by other clients

use serde_json::{json, Value};
use taskboard_kanban::{
    task::MoveTask, Collection, FileStore, KanbanContext, KanbanOperationProcessor,
    OperationProcessor,
};
use tempfile::TempDir;

fn task(id: &str, status: &str, order: usize) -> Value {
    json!({
        "id": id,
        "title": format!("Task {id}"),
        "status": status,
        "order": order,
        "createdAt": "2024-03-01T10:00:00.000Z",
        "updatedAt": "2024-03-01T10:00:00.000Z"
    })
}

fn board() -> Value {
    let mut keep = task("keep", "C", 0);
    keep["priority"] = json!("high");
    let mut moving = task("t1", "A", 0);
    moving["estimateLabel"] = json!("S");

    json!({
        "name": "Shared",
        "ownerId": "ada@example.com",
        "createdAt": "2024-03-01T10:00:00.000Z",
        "updatedAt": "2024-03-01T10:00:00.000Z",
        "columns": [
            { "id": "a", "name": "A", "tasks": [moving, task("t2", "A", 1)] },
            { "id": "b", "name": "B", "tasks": [] },
            { "id": "c", "name": "C", "color": "red", "tasks": [keep] }
        ]
    })
}

#[tokio::test]
async fn test_move_keeps_untouched_column_and_unknown_members() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    let path = store.document_path(Collection::Boards, "b1");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let seeded = board();
    std::fs::write(&path, serde_json::to_string_pretty(&seeded).unwrap()).unwrap();

    let ctx = KanbanContext::new(store);
    KanbanOperationProcessor::new()
        .process(&MoveTask::new("b1", "t1", "a", "b", 0), &ctx)
        .await
        .unwrap();

    let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let columns = &raw["columns"];

    assert_eq!(columns[2], seeded["columns"][2]);
    assert_eq!(columns[2]["color"], "red");
    assert_eq!(columns[2]["tasks"][0]["priority"], "high");

    let moved = &columns[1]["tasks"][0];
    assert_eq!(moved["id"], "t1");
    assert_eq!(moved["status"], "B");
    assert_eq!(moved["estimateLabel"], "S");
    assert_eq!(columns[0]["tasks"][0]["id"], "t2");
    assert_eq!(columns[0]["tasks"][0]["order"], 0);
    assert_eq!(raw["name"], "Shared");
}
