use std::sync::{Arc, Mutex};

use blogcast::ContentFetcher;

#[derive(Clone)]
pub struct MockFetcher {
    pub article: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockFetcher {
    pub fn new(article: &str) -> Self {
        Self {
            article: article.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            article: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl ContentFetcher for MockFetcher {
    type Error = anyhow::Error;

    async fn fetch_article(&self, url: &str) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.article.clone())
    }
}
