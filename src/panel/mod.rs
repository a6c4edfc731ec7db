//! Blend-shape panel
//!
//! Turns the morph targets discovered in a scene into slider rows, and slider
//! movements back into weight updates:
//!
//! ```text
//! VrmScene ──BlendShapeIndex::build──▶ BlendShapeIndex ──RowModel::rebuild──▶ rows
//!    ▲                                                                          │
//!    └──────────── BlendShapeRouter::apply ◀── SliderEvent ◀── set_value ───────┘
//! ```

pub mod index;
pub mod router;
pub mod rows;

pub use index::BlendShapeIndex;
pub use router::BlendShapeRouter;
pub use rows::{PresentationRow, RowModel, SliderEvent, clamp_weight};
