use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::work_sessions::core::open_session::SessionKey;
use crate::modules::work_sessions::core::periods::reference_date;
use crate::modules::work_sessions::core::work_entry::{DATE_FORMAT, WorkEntry};
use crate::modules::work_sessions::use_cases::compute_averages::aggregate::{
    PeriodAverages, compute_averages,
};
use crate::modules::work_sessions::use_cases::list_last_seven_days::select::entries_in_last_seven_days;
use crate::modules::work_sessions::use_cases::month_by_day::group::group_by_day_of_month;
use crate::modules::work_sessions::use_cases::stop_work_session::decision::StopDecision;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlWorkEntry {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: f64,
}

impl From<WorkEntry> for GqlWorkEntry {
    fn from(v: WorkEntry) -> Self {
        Self {
            date: v.date.format(DATE_FORMAT).to_string(),
            start_time: v.start_time,
            end_time: v.end_time,
            duration: v.duration_hours,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlDayTotal {
    pub day: u32,
    pub hours: f64,
}

#[derive(SimpleObject, Clone)]
pub struct GqlStartedSession {
    pub status: String,
    pub start_time: String,
    pub session_id: String,
}

#[derive(SimpleObject, Clone)]
pub struct GqlStopOutcome {
    pub status: String,
    pub duration: Option<f64>,
}

impl From<StopDecision> for GqlStopOutcome {
    fn from(decision: StopDecision) -> Self {
        match decision {
            StopDecision::Completed { entry } => Self {
                status: "stopped".into(),
                duration: Some(entry.duration_hours),
            },
            StopDecision::NothingToStop => Self {
                status: "no_session".into(),
                duration: None,
            },
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn stats(&self, context: &Context<'_>) -> GqlResult<PeriodAverages> {
        let state = context.data_unchecked::<AppState>();
        let entries = state.entry_log.load().await?;
        Ok(compute_averages(&entries, reference_date(state.clock.now())))
    }

    async fn last_seven_days(&self, context: &Context<'_>) -> GqlResult<Vec<GqlWorkEntry>> {
        let state = context.data_unchecked::<AppState>();
        let entries = state.entry_log.load().await?;
        Ok(entries_in_last_seven_days(&entries, reference_date(state.clock.now()))
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn month_by_day(&self, context: &Context<'_>) -> GqlResult<Vec<GqlDayTotal>> {
        let state = context.data_unchecked::<AppState>();
        let entries = state.entry_log.load().await?;
        Ok(group_by_day_of_month(&entries, reference_date(state.clock.now()))
            .into_iter()
            .map(|(day, hours)| GqlDayTotal { day, hours })
            .collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn start_work_session(
        &self,
        context: &Context<'_>,
        session_id: Option<String>,
    ) -> GqlResult<GqlStartedSession> {
        let state = context.data_unchecked::<AppState>();
        let key = session_id.map_or_else(SessionKey::generate, SessionKey::new);
        let session = state.start_handler.handle(&key, state.clock.now()).await?;
        Ok(GqlStartedSession {
            status: "started".into(),
            start_time: session.formatted_start(),
            session_id: key.to_string(),
        })
    }

    async fn stop_work_session(
        &self,
        context: &Context<'_>,
        session_id: String,
    ) -> GqlResult<GqlStopOutcome> {
        let state = context.data_unchecked::<AppState>();
        let decision = state
            .stop_handler
            .handle(&SessionKey::new(session_id), state.clock.now())
            .await?;
        Ok(decision.into())
    }
}
