use bevy::prelude::*;

use crate::core::Article;
use crate::render::{ArticleRenderPlugin, ArticleRes};

#[cfg(not(target_arch = "wasm32"))]
pub fn run_article(article: Article) {
    let bg = article.background;
    App::new()
        .insert_resource(ClearColor(Color::from(bg)))
        .insert_resource(ArticleRes::new(article))
        .add_plugins((
            DefaultPlugins.set(ImagePlugin::default_nearest()),
            ArticleRenderPlugin,
        ))
        .run();
}

#[cfg(target_arch = "wasm32")]
pub fn run_article(article: Article, canvas_id: &str) {
    let bg = article.background;
    App::new()
        .insert_resource(ClearColor(Color::from(bg)))
        .insert_resource(ArticleRes::new(article))
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        canvas: Some(format!("#{}", canvas_id)),
                        fit_canvas_to_parent: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
            ArticleRenderPlugin,
        ))
        .run();
}
