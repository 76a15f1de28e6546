use crate::application::request::Request;
use crate::domain::hold::Term;
use crate::domain::ids::{ActorId, ItemId};
use crate::error::{AppError, HoldError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    Acquire,
    Release,
}

/// One row of a request script: `op, actor, item, term`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct RequestRecord {
    pub op: Op,
    pub actor: u32,
    pub item: u32,
    pub term: Option<u32>,
}

impl TryFrom<RequestRecord> for Request {
    type Error = HoldError;

    fn try_from(record: RequestRecord) -> Result<Self> {
        let actor = ActorId(record.actor);
        let item = ItemId(record.item);
        match record.op {
            Op::Acquire => {
                let days = record.term.ok_or_else(|| {
                    HoldError::Validation("acquire requires a term".to_string())
                })?;
                Ok(Request::Acquire {
                    actor,
                    item,
                    term: Term::new(days)?,
                })
            }
            Op::Release => Ok(Request::Release { actor, item }),
        }
    }
}

/// Reads requests from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths,
/// so release rows may omit the trailing term column.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes and validates each row.
    pub fn requests(self) -> impl Iterator<Item = Result<Request, AppError>> {
        self.reader
            .into_deserialize::<RequestRecord>()
            .map(|record| -> Result<Request, AppError> { Ok(Request::try_from(record?)?) })
    }
}
