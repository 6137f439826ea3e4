use std::time::Instant;

use hn_core::{Effect, Msg, SearchOutcome, Story};
use hn_engine::{EngineEvent, EngineHandle, SearchHit, SearchSettings};
use hn_logging::{hn_info, hn_warn};

use super::toasts::ToastQueue;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: SearchSettings) -> anyhow::Result<Self> {
        let engine = EngineHandle::new(settings)?;
        Ok(Self { engine })
    }

    #[cfg(test)]
    pub fn with_client(
        client: std::sync::Arc<dyn hn_engine::SearchClient>,
    ) -> anyhow::Result<Self> {
        let engine = EngineHandle::with_client(client)?;
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>, toasts: &mut ToastQueue) {
        for effect in effects {
            match effect {
                Effect::FetchStories { request_id, query } => {
                    hn_info!("FetchStories request_id={} query={:?}", request_id, query);
                    self.engine.search(request_id, query);
                }
                Effect::Notify(notification) => {
                    hn_info!(
                        "Notify {:?}: {} {}",
                        notification.kind,
                        notification.title,
                        notification.description.as_deref().unwrap_or("")
                    );
                    toasts.push(notification, Instant::now());
                }
            }
        }
    }

    /// Drains finished requests as core messages.
    pub fn poll_events(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => {
            let outcome = match result {
                Ok(hits) => SearchOutcome::Loaded(hits.into_iter().map(map_hit).collect()),
                Err(err) => {
                    hn_warn!("Request {} failed: {}", request_id, err);
                    SearchOutcome::Failed(err.message)
                }
            };
            Msg::SearchCompleted {
                request_id,
                outcome,
            }
        }
    }
}

fn map_hit(hit: SearchHit) -> Story {
    Story {
        object_id: hit.object_id,
        title: hit.title,
        author: hit.author,
        url: hit.url,
    }
}
