//! Render consumer
//!
//! Turns a read-only `GameState` into screen-space vertices. The host owns the
//! device, the sprite sheet texture and the draw call.

pub mod atlas;
pub mod frame;
pub mod shapes;
pub mod vertex;

pub use atlas::{Sprite, SpriteAtlas, UvRect};
pub use frame::{Frame, build_frame};
pub use vertex::Vertex;
