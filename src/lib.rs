pub mod article;
pub mod color;
pub mod core;
pub mod math;
pub mod render;
pub mod runtime;
pub mod vector;
pub mod wasm_api;

use std::fmt;

#[derive(Debug)]
pub struct ArticleError;

impl fmt::Display for ArticleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArticleError")
    }
}

impl std::error::Error for ArticleError {}

pub type Result<T> = std::result::Result<T, error_stack::Report<ArticleError>>;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

pub mod prelude {
    pub use crate::article::*;
    pub use crate::color::Color;
    pub use crate::core::*;
    pub use crate::render::*;
    pub use crate::runtime::*;
    pub use crate::vector::Vector;
}
