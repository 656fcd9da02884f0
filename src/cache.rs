use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use tokio::sync::RwLock;
use tokio::task;
use tokio::time::{sleep, Duration};

pub struct Config {
    pub enabled: bool,
    pub ttl: Duration,
}

/// Fetched page bodies keyed by URL, each dropped `ttl` after insertion.
pub struct PageCache {
    enabled: bool,
    pages: RwLock<HashMap<String, Arc<str>>>,
    ttl: Duration,
}

impl PageCache {
    pub fn new(config: Config) -> Arc<Self> {
        Arc::new(Self {
            enabled: config.enabled,
            ttl: config.ttl,
            pages: Default::default(),
        })
    }

    pub async fn insert(self: Arc<Self>, url: String, body: String) -> Arc<str> {
        let body = Arc::<str>::from(body);
        if !self.enabled {
            return body;
        }

        {
            let mut pages = self.pages.write().await;
            // The first insert owns the entry and its expiry task.
            if let Some(cached) = pages.get(&url) {
                return Arc::clone(cached);
            }
            pages.insert(url.clone(), Arc::clone(&body));
        }

        let cache = Arc::clone(&self);
        task::spawn(async move {
            sleep(cache.ttl).await;
            cache.pages.write().await.remove(&url);
            debug!("evicted {url} from page cache");
        });

        body
    }

    pub async fn get(&self, url: &str) -> Option<Arc<str>> {
        if !self.enabled {
            return None;
        }

        self.pages.read().await.get(url).map(Arc::clone)
    }
}
