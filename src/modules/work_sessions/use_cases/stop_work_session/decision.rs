use crate::modules::work_sessions::core::work_entry::WorkEntry;

#[derive(Debug, Clone, PartialEq)]
pub enum StopDecision {
    Completed { entry: WorkEntry },
    NothingToStop,
}
