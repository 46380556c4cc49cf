//! Builders for the node kinds screens compose their trees from.
//!
//! The builders mirror the Compose widget signatures: a modifier, an
//! optional spec and the children.

pub mod box_widget;
pub mod button;
pub mod column;
pub mod row;
pub mod spacer;
pub mod surface;
pub mod text;

pub use box_widget::*;
pub use button::*;
pub use column::*;
pub use row::*;
pub use spacer::*;
pub use surface::*;
pub use text::*;
