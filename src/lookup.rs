//! Drill-down session behind a grade-count cell.
//!
//! Lifecycle: `closed → loading → {populated | empty | failed}`. Each open
//! mints a new request tag; a response only lands if its tag is still
//! current, so an in-flight but superseded fetch can never overwrite the
//! state of a newer one. Closing discards whatever is in flight.
//!
//! Failure is contained to the session: it becomes `Failed`, which renders
//! like the empty "no matches found" state, with the error logged.

use anyhow::Result;

use crate::logging::{self, obj, v_str, Domain, Level};
use crate::model::{DetailRecord, Grade};
use crate::source::{EntityRef, MatchGroup, RowSource};

#[derive(Debug, Clone, PartialEq)]
pub enum LookupState {
    Closed,
    Loading,
    Populated(Vec<DetailRecord>),
    Empty,
    Failed,
}

impl LookupState {
    /// Both `Empty` and `Failed` show the "no matches found" display.
    pub fn shows_no_matches(&self) -> bool {
        matches!(self, LookupState::Empty | LookupState::Failed)
    }
}

/// Tag identifying one fetch. Responses carrying a stale tag are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTag(u64);

#[derive(Debug)]
pub struct LookupSession {
    state: LookupState,
    latest: u64,
}

impl LookupSession {
    pub fn new() -> Self {
        Self {
            state: LookupState::Closed,
            latest: 0,
        }
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    /// Start a lookup, superseding any in-flight request.
    pub fn open(&mut self) -> RequestTag {
        self.latest += 1;
        self.state = LookupState::Loading;
        RequestTag(self.latest)
    }

    /// Land a response. Returns false when the tag is stale or the session
    /// was closed in the meantime; the response is then discarded.
    pub fn resolve(&mut self, tag: RequestTag, outcome: Result<Vec<DetailRecord>>) -> bool {
        if tag.0 != self.latest || self.state != LookupState::Loading {
            return false;
        }
        self.state = match outcome {
            Ok(items) if items.is_empty() => LookupState::Empty,
            Ok(items) => LookupState::Populated(items),
            Err(err) => {
                logging::log(
                    Level::Warn,
                    Domain::Lookup,
                    "detail_fetch_failed",
                    obj(&[("error", v_str(&err.to_string()))]),
                );
                LookupState::Failed
            }
        };
        true
    }

    /// Return to `Closed` unconditionally. Bumping the tag guarantees any
    /// in-flight response lands stale.
    pub fn close(&mut self) {
        self.latest += 1;
        self.state = LookupState::Closed;
    }
}

impl Default for LookupSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive one lookup against a row source and land it on the session.
pub async fn run_lookup(
    session: &mut LookupSession,
    source: &dyn RowSource,
    entity: &EntityRef,
    group: MatchGroup,
    grade: Grade,
) -> RequestTag {
    let tag = session.open();
    let outcome = source.fetch_match_detail(entity, group, grade).await;
    session.resolve(tag, outcome);
    tag
}
