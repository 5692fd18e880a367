pub mod attendance;
pub mod batch;
pub mod department;
pub mod event;
pub mod expand;
pub mod export;
pub mod merge;
pub mod persistence;
pub mod planner;
pub mod relevance;
pub mod rules;
pub mod term;

pub use attendance::{
    AttendanceRecord, DEFAULT_TARGET_PERCENT, DepartmentTally, Projection, Summary, Tally,
    WeeksNeeded, project, summarize,
};
pub use batch::{Band, BandPartition, Batch, BatchConfig, PartitionError};
pub use department::DepartmentAliases;
pub use event::{ALL_BATCHES, Event, SlotKey};
pub use expand::expand;
pub use export::build_ics;
pub use merge::{merge, sort_calendar};
#[cfg(feature = "sqlite")]
pub use persistence::sqlite::SqliteAttendanceStore;
pub use persistence::{
    AttendanceStore, PersistenceError, load_overrides_from_csv, load_overrides_from_json,
    save_overrides_to_csv, save_overrides_to_json, validate_events,
};
pub use planner::{ConfigError, Planner, PlannerConfig, StudentOutlook};
pub use relevance::{AttendanceKind, ClassifierConfig, is_relevant, relevant_events};
pub use rules::{
    DayRules, RecurrenceRule, RuleTable, RuleTableError, SlotRule, SlotRules, WeekPredicate,
};
pub use term::{Term, TermError};
