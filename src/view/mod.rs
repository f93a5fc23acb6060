pub mod card_renderer;
