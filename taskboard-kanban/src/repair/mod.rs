//! Duplicate task id diagnosis and repair
//!
//! Task ids are generated client-side from a timestamp and a short random
//! suffix, so two tasks in one column can end up sharing an id. Diagnosis is
//! read-only. Repair renames every later occurrence of a repeated id and
//! normalizes `order` to the array index; it never deletes a task.

mod diagnose;
mod fix;

pub use diagnose::{
    diagnose_board, BoardDiagnosis, ColumnDiagnosis, DiagnoseDuplicates, DiagnosisReport,
    DuplicateId,
};
pub use fix::{fix_board, BoardRepair, FixDuplicates, RenamedTask, RepairReport};
