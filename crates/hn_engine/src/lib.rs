//! hn engine: HTTP search client and background request execution.
mod engine;
mod search;
mod types;

pub use engine::EngineHandle;
pub use search::{ReqwestSearchClient, SearchClient, SearchSettings, DEFAULT_ENDPOINT};
pub use types::{EngineEvent, RequestId, SearchError, SearchHit, SearchResponse};
