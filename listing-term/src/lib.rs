//! Terminal renderer for `listing` grid views.
//!
//! [`Painter`] draws a [`GridView`](listing::GridView) into a [`Canvas`] and
//! returns a [`HitMap`] so mouse clicks can be mapped back to table actions.
//! [`Terminal`] owns the real terminal and flushes only the cells that changed
//! since the previous frame.

pub mod canvas;
pub mod hit;
pub mod paint;
pub mod rect;
pub mod terminal;
pub mod text;
pub mod theme;

pub use canvas::{Attrs, Canvas, Cell, Pen, Rgb};
pub use hit::{Hit, HitMap};
pub use paint::{Painter, paint};
pub use rect::Rect;
pub use terminal::Terminal;
pub use theme::{Theme, ToneStyle};
