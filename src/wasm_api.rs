//! WASM API exports for JavaScript interop
//!
//! This module provides `#[wasm_bindgen]` exports for controlling the article
//! demos from JavaScript. It is only compiled when targeting wasm32.

#![cfg(target_arch = "wasm32")]

use parking_lot::Mutex;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

use crate::core::{Article, Demo};
use crate::runtime::run_article;

/// JavaScript-accessible article wrapper
#[wasm_bindgen]
pub struct JsArticle {
    /// The article data
    article: Arc<Mutex<Article>>,
    /// Canvas ID for rendering
    canvas_id: String,
    /// Whether the Bevy app has started
    started: bool,
}

#[wasm_bindgen]
impl JsArticle {
    /// Create a new JsArticle from JSON
    ///
    /// # Arguments
    /// * `json` - JSON string representing the Article
    /// * `canvas_id` - HTML canvas element ID (without #)
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str, canvas_id: &str) -> Result<JsArticle, JsValue> {
        let article: Article = serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse article JSON: {}", e)))?;

        Ok(JsArticle {
            article: Arc::new(Mutex::new(article)),
            canvas_id: canvas_id.to_string(),
            started: false,
        })
    }

    /// Start the Bevy render loop. Call once; the loop runs until the page
    /// unloads.
    #[wasm_bindgen]
    pub fn start(&mut self) {
        if self.started {
            web_sys::console::warn_1(&"Article already started".into());
            return;
        }

        let article = self.article.lock().clone();
        self.started = true;

        run_article(article, &self.canvas_id);
    }

    /// Replace the entire article
    ///
    /// Takes effect the next time the render loop starts.
    #[wasm_bindgen]
    pub fn set_article(&mut self, json: &str) -> Result<(), JsValue> {
        let article: Article = serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse article JSON: {}", e)))?;

        *self.article.lock() = article;

        // TODO: forward the update into the running app through a channel so
        // a restart is not needed
        web_sys::console::log_1(&"Article updated (requires restart to take effect)".into());

        Ok(())
    }

    /// Move the sample threshold of a stack-bars demo
    ///
    /// Like [`JsArticle::set_article`], takes effect the next time the render
    /// loop starts. While the loop is running, drag the line on the tile.
    ///
    /// # Arguments
    /// * `demo_id` - The demo ID (u64)
    /// * `y` - New threshold, clamped to [0, 1] and quantized
    #[wasm_bindgen]
    pub fn set_sample_y(&mut self, demo_id: u64, y: f64) -> Result<(), JsValue> {
        let mut article = self.article.lock();

        for demo in article.demos.iter_mut() {
            if let Demo::StackBars(bars) = demo {
                if bars.id.0 == demo_id {
                    bars.set_sample_y(y);
                    return Ok(());
                }
            }
        }

        Err(JsValue::from_str(&format!("Demo {} not found", demo_id)))
    }

    /// IDs of all demos, in article order
    #[wasm_bindgen]
    pub fn demo_ids(&self) -> Vec<u64> {
        let article = self.article.lock();
        article.demos.iter().map(|d| d.id().0).collect()
    }

    /// Get the current article as JSON
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        let article = self.article.lock();
        serde_json::to_string(&*article)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize article: {}", e)))
    }

    /// Get the canvas ID
    #[wasm_bindgen(getter)]
    pub fn canvas_id(&self) -> String {
        self.canvas_id.clone()
    }

    /// Check if the article has been started
    #[wasm_bindgen(getter)]
    pub fn is_started(&self) -> bool {
        self.started
    }
}
