//! Game session
//!
//! Owns the loaded assets, the one-time layout and the simulation state, and
//! draws that state each frame.

use thiserror::Error;

use crate::consts;
use crate::driver::Scene;
use crate::platform::PlatformError;
use crate::renderer::{Canvas, Font, TextureError, TextureHandle};
use crate::settings::Settings;
use crate::sim::{
    AssetSizes, GameEvent, GameState, Layout, Rect, ScoreLayout, Side, Size, TickInput, tick,
};

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error("failed to load asset {name}: {source}")]
    Asset {
        name: String,
        #[source]
        source: TextureError,
    },
}

impl GameError {
    fn asset(name: &str) -> impl FnOnce(TextureError) -> GameError {
        move |source| GameError::Asset {
            name: name.to_string(),
            source,
        }
    }
}

/// A score digit texture and where it is drawn
#[derive(Debug, Default)]
struct ScoreText {
    texture: TextureHandle,
    rect: Rect,
}

#[derive(Debug)]
pub struct Game {
    layout: Layout,
    score_layout: ScoreLayout,
    state: GameState,
    font: Font,
    background: TextureHandle,
    paddle: TextureHandle,
    ball: TextureHandle,
    separator: TextureHandle,
    left_score: ScoreText,
    right_score: ScoreText,
}

impl Game {
    /// Load every asset and derive the layout for a window of `window` pixels
    pub fn init(settings: &Settings, window: Size) -> Result<Self, GameError> {
        let tuning = &settings.tuning;

        let font = Font::open(&settings.font_path(consts::SCORE_FONT), tuning.font_size)
            .map_err(GameError::asset(consts::SCORE_FONT))?;

        let mut background = TextureHandle::new();
        let mut paddle = TextureHandle::new();
        let mut ball = TextureHandle::new();
        for (texture, file) in [
            (&mut background, consts::TABLE_TEXTURE),
            (&mut paddle, consts::PADDLE_TEXTURE),
            (&mut ball, consts::BALL_TEXTURE),
        ] {
            texture
                .load(&settings.texture_path(file))
                .map_err(GameError::asset(file))?;
        }

        let mut separator = TextureHandle::new();
        separator
            .load_from_text(consts::SCORE_SEPARATOR, consts::SCORE_TEXT_COLOUR, &font)
            .map_err(GameError::asset(consts::SCORE_SEPARATOR))?;

        let assets = AssetSizes {
            background: background.size(),
            paddle: paddle.size(),
            ball: ball.size(),
        };
        let layout = Layout::new(window, &assets, tuning);
        let score_layout = ScoreLayout::new(window, separator.size(), tuning);
        let state = GameState::new(&layout);

        let mut game = Self {
            layout,
            score_layout,
            state,
            font,
            background,
            paddle,
            ball,
            separator,
            left_score: ScoreText::default(),
            right_score: ScoreText::default(),
        };
        for side in Side::BOTH {
            game.refresh_score(side)
                .map_err(GameError::asset(consts::SCORE_FONT))?;
        }

        log::info!(
            "Game initialised ({}x{}, paddle speed {}, ball speed {})",
            window.w,
            window.h,
            game.layout.paddle_speed,
            game.layout.ball_default_speed
        );
        Ok(game)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// React to a simulation event
    ///
    /// If the new score cannot be rendered the error is logged and the old
    /// score text stays on screen.
    pub fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::Scored { side, .. } => {
                if let Err(err) = self.refresh_score(side) {
                    log::error!("Failed to render {side:?} score: {err}");
                }
            }
        }
    }

    /// Re-render one side's score text and re-centre its rectangle
    fn refresh_score(&mut self, side: Side) -> Result<(), TextureError> {
        let text = self.state.score.get(side).to_string();
        let score = match side {
            Side::Left => &mut self.left_score,
            Side::Right => &mut self.right_score,
        };
        score
            .texture
            .load_from_text(&text, consts::SCORE_TEXT_COLOUR, &self.font)?;
        score.rect = self.score_layout.score_rect(side, score.texture.size());
        Ok(())
    }
}

impl Scene for Game {
    fn update(&mut self, input: &TickInput) {
        if let Some(event) = tick(&mut self.state, &self.layout, input) {
            self.apply(event);
        }
    }

    fn render<C: Canvas>(&self, canvas: &mut C) {
        canvas.clear(consts::CLEAR_COLOUR);
        self.background.draw(canvas, self.layout.background);
        self.paddle.draw(canvas, self.state.left_paddle);
        self.paddle.draw(canvas, self.state.right_paddle);
        self.ball.draw(canvas, self.state.ball.rect);
        self.separator.draw(canvas, self.score_layout.separator);
        self.left_score.texture.draw(canvas, self.left_score.rect);
        self.right_score.texture.draw(canvas, self.right_score.rect);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::renderer::{Framebuffer, font};

    fn settings_in(dir: &str) -> Settings {
        Settings {
            texture_dir: PathBuf::from(dir).join("textures"),
            font_dir: PathBuf::from(dir).join("fonts"),
            ..Settings::default()
        }
    }

    #[test]
    fn test_missing_font_names_the_asset() {
        let err = Game::init(&settings_in("no/such/dir"), Size::new(800, 600)).unwrap_err();
        match err {
            GameError::Asset { name, source } => {
                assert_eq!(name, consts::SCORE_FONT);
                assert!(matches!(source, TextureError::Io { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    /// Writes tiny sprites and the test font into a fresh asset tree
    fn asset_tree(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("pong-{name}-{}", std::process::id()));
        let textures = root.join("textures");
        let fonts = root.join("fonts");
        std::fs::create_dir_all(&textures).unwrap();
        std::fs::create_dir_all(&fonts).unwrap();

        let sprite = |w, h, rgba| image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
        sprite(64, 36, [10, 20, 30, 255])
            .save(textures.join(consts::TABLE_TEXTURE))
            .unwrap();
        sprite(2, 12, [200, 200, 200, 255])
            .save(textures.join(consts::PADDLE_TEXTURE))
            .unwrap();
        sprite(2, 2, [255, 255, 255, 255])
            .save(textures.join(consts::BALL_TEXTURE))
            .unwrap();
        std::fs::copy(font::fixtures::font_path(), fonts.join(consts::SCORE_FONT)).unwrap();
        root
    }

    #[test]
    fn test_init_loads_assets_and_renders() {
        let root = asset_tree("init");
        let settings = settings_in(root.to_str().unwrap());
        let game = Game::init(&settings, Size::new(640, 400));
        std::fs::remove_dir_all(&root).ok();
        let mut game = game.unwrap();

        assert_eq!(game.layout().background, Rect::new(0, 40, 640, 360));
        assert_eq!(game.state().ball.lock, Some(Side::Left));
        assert!(game.left_score.texture.is_loaded());
        assert!(game.left_score.rect.w > 0);
        assert!(game.left_score.rect.right() < game.score_layout.separator.x);
        assert!(game.right_score.rect.x > game.score_layout.separator.right());

        let mut canvas = Framebuffer::new(640, 400);
        game.render(&mut canvas);
        assert_eq!(canvas.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(canvas.pixel(0, 399), [10, 20, 30, 255]);

        // A new score re-renders that side's text only
        let before = game.right_score.rect;
        game.state.score.left = 10;
        game.apply(GameEvent::Scored {
            side: Side::Left,
            score: 10,
        });
        assert!(game.left_score.rect.w > before.w);
        assert_eq!(game.right_score.rect, before);
    }

    #[test]
    fn test_asset_error_message() {
        let err = GameError::asset("table.png")(TextureError::EmptyText);
        assert_eq!(
            err.to_string(),
            "failed to load asset table.png: cannot render empty text"
        );
    }
}
