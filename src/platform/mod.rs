//! Browser platform adapter
//!
//! Implements the `Surface` trait over the 2D canvas context, with one
//! `HtmlImageElement` per sprite. Native builds have no surface here -
//! they use `RecordingSurface`.

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasSurface, load_sprite_image};

#[cfg(target_arch = "wasm32")]
mod canvas {
    use glam::Vec2;
    use wasm_bindgen::JsValue;
    use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

    use crate::consts::{SURFACE_H, SURFACE_W};
    use crate::surface::{Sprite, Surface};

    /// Create an image element and point it at an asset URL. The browser
    /// loads it asynchronously; drawing before load is a silent no-op,
    /// which is fine for the idle screen.
    pub fn load_sprite_image(src: &str) -> Result<HtmlImageElement, JsValue> {
        let img = HtmlImageElement::new()?;
        img.set_src(src);
        Ok(img)
    }

    /// 2D canvas implementation of the drawing surface
    pub struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
        goblin: HtmlImageElement,
        coin: HtmlImageElement,
        skull: HtmlImageElement,
        game_over: HtmlImageElement,
    }

    impl CanvasSurface {
        pub fn new(
            ctx: CanvasRenderingContext2d,
            goblin: HtmlImageElement,
            coin: HtmlImageElement,
            skull: HtmlImageElement,
            game_over: HtmlImageElement,
        ) -> Self {
            Self {
                ctx,
                goblin,
                coin,
                skull,
                game_over,
            }
        }

        fn image_for(&self, sprite: Sprite) -> &HtmlImageElement {
            match sprite {
                Sprite::Goblin => &self.goblin,
                Sprite::Coin => &self.coin,
                Sprite::Skull => &self.skull,
                Sprite::GameOver => &self.game_over,
            }
        }
    }

    impl Surface for CanvasSurface {
        fn draw_image(&mut self, sprite: Sprite, pos: Vec2) {
            let img = self.image_for(sprite);
            // A failed draw (decode error, detached context) only costs
            // one frame of that sprite
            let _ = self
                .ctx
                .draw_image_with_html_image_element(img, f64::from(pos.x), f64::from(pos.y));
        }

        fn clear_rect(&mut self, pos: Vec2, size: Vec2) {
            self.ctx.clear_rect(
                f64::from(pos.x),
                f64::from(pos.y),
                f64::from(size.x),
                f64::from(size.y),
            );
        }

        fn clear_all(&mut self) {
            self.ctx
                .clear_rect(0.0, 0.0, f64::from(SURFACE_W), f64::from(SURFACE_H));
        }
    }
}
