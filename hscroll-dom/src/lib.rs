pub mod animation;
pub mod buffer;
pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod style;
pub mod terminal;
pub mod text;
pub mod transitions;
pub mod types;

pub use animation::AnimationState;
pub use buffer::Buffer;
pub use document::Document;
pub use element::{ClassList, Content, Element};
pub use event::{Event, EventResult, MouseButton};
pub use hit::hit_test;
pub use layout::{LayoutResult, Rect};
pub use style::{ClassRule, Stylesheet};
pub use terminal::Terminal;
pub use transitions::{Easing, TransitionConfig};
pub use types::*;
