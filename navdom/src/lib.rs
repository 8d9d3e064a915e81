pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod scroll;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use element::{find_element, find_element_mut, visible_children, Content, Element};
pub use event::{convert_events, Event, Key, Modifiers, MouseButton};
pub use hit::{hit_test, hit_test_any, hit_test_scrollable};
pub use layout::{LayoutResult, Rect};
pub use scroll::{ScrollOffset, ScrollState};
pub use terminal::Terminal;
pub use types::*;
