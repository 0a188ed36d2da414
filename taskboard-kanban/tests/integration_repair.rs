//! Repair of legacy board documents on disk

use serde_json::json;
use taskboard_kanban::{
    repair::{DiagnoseDuplicates, FixDuplicates},
    BoardId, Collection, FileStore, KanbanContext,
};
use tempfile::TempDir;

fn legacy_board() -> serde_json::Value {
    let task = |id: &str, title: &str, order: Option<usize>| {
        let mut t = json!({
            "id": id,
            "title": title,
            "description": "",
            "status": "To Do",
            "tags": [],
            "assignedTo": [],
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-01T10:00:00Z",
            "timeSpent": 0
        });
        if let Some(order) = order {
            t["order"] = json!(order);
        }
        t
    };

    json!({
        "name": "Legacy",
        "ownerId": "ada@example.com",
        "createdAt": "2024-03-01T10:00:00Z",
        "updatedAt": "2024-03-01T10:00:00Z",
        "columns": [
            {
                "id": "todo",
                "name": "To Do",
                "tasks": [
                    task("dup", "first", Some(0)),
                    task("dup", "second", Some(1)),
                    task("solo", "third", None)
                ]
            },
            { "id": "done", "name": "Done", "tasks": [] }
        ]
    })
}

#[tokio::test]
async fn test_diagnose_then_fix_legacy_board() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    let path = store.document_path(Collection::Boards, "legacy");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, serde_json::to_string_pretty(&legacy_board()).unwrap()).unwrap();

    let ctx = KanbanContext::new(store);
    let before = std::fs::read_to_string(&path).unwrap();

    let report = DiagnoseDuplicates::new().report(&ctx).await.unwrap();
    assert_eq!(report.total_tasks, 3);
    assert_eq!(report.duplicate_tasks, 1);
    assert_eq!(report.unique_tasks, 2);
    assert_eq!(report.duplicates[0].board, "Legacy");
    assert_eq!(report.duplicates[0].column, "To Do");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);

    let repair = FixDuplicates::new().repair(&ctx).await.unwrap();
    assert_eq!(repair.renamed_count(), 1);
    assert_eq!(repair.updated[0].reordered, 1);

    let board = ctx.read_board(&BoardId::from("legacy")).await.unwrap();
    let tasks = &board.columns[0].tasks;
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0].id, "dup");
    assert_ne!(tasks[1].id, "dup");
    assert_eq!(tasks[1].title, "second");
    assert!(board.columns[0].is_contiguous());
    assert_eq!(board.name, "Legacy");

    assert!(DiagnoseDuplicates::new().report(&ctx).await.unwrap().is_clean());
    assert!(FixDuplicates::new().repair(&ctx).await.unwrap().updated.is_empty());
}

fn write_board(store: &FileStore, id: &str, board: &serde_json::Value) {
    let path = store.document_path(Collection::Boards, id);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, serde_json::to_string_pretty(board).unwrap()).unwrap();
}

#[tokio::test]
async fn test_unusable_order_does_not_block_other_boards() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    write_board(&store, "good", &legacy_board());

    let mut stale = legacy_board();
    stale["name"] = json!("Stale");
    stale["columns"][0]["tasks"] = json!([
        {
            "id": "a", "title": "a", "status": "To Do", "order": -1,
            "createdAt": "2024-03-01T10:00:00Z", "updatedAt": "2024-03-01T10:00:00Z"
        },
        {
            "id": "b", "title": "b", "status": "To Do", "order": "1",
            "createdAt": "2024-03-01T10:00:00Z", "updatedAt": "2024-03-01T10:00:00Z"
        },
        {
            "id": "c", "title": "c", "status": "To Do", "order": 1.5,
            "createdAt": "2024-03-01T10:00:00Z", "updatedAt": "2024-03-01T10:00:00Z"
        }
    ]);
    write_board(&store, "stale", &stale);
    let ctx = KanbanContext::new(store);

    let report = DiagnoseDuplicates::new().report(&ctx).await.unwrap();
    assert_eq!(report.total_tasks, 6);
    assert_eq!(report.duplicate_tasks, 1);

    let repair = FixDuplicates::new().repair(&ctx).await.unwrap();
    assert_eq!(repair.boards_scanned, 2);
    assert_eq!(repair.updated.len(), 2);
    assert_eq!(repair.renamed_count(), 1);

    let stale = ctx.read_board(&BoardId::from("stale")).await.unwrap();
    let orders: Vec<_> = stale.columns[0].tasks.iter().map(|t| t.order).collect();
    assert_eq!(orders, [Some(0), Some(1), Some(2)]);

    let good = ctx.read_board(&BoardId::from("good")).await.unwrap();
    assert_ne!(good.columns[0].tasks[1].id, "dup");

    assert!(FixDuplicates::new().repair(&ctx).await.unwrap().updated.is_empty());
}

#[tokio::test]
async fn test_fix_keeps_unknown_members() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    let mut board = legacy_board();
    board["theme"] = json!("dark");
    board["columns"][0]["wipLimit"] = json!(3);
    board["columns"][0]["tasks"][1]["priority"] = json!("high");
    write_board(&store, "legacy", &board);
    let path = store.document_path(Collection::Boards, "legacy");
    let ctx = KanbanContext::new(store);

    FixDuplicates::new().repair(&ctx).await.unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(raw["theme"], "dark");
    assert_eq!(raw["columns"][0]["wipLimit"], 3);
    assert_eq!(raw["columns"][0]["tasks"][1]["priority"], "high");
    assert_ne!(raw["columns"][0]["tasks"][1]["id"], "dup");
    assert_eq!(raw["columns"][1], board["columns"][1]);
}
