//! Data model types for quotes and catalogs.

mod film;
mod material;
mod quote;
mod room;
mod section;
mod window;

pub use film::Film;
pub use material::Material;
pub use quote::Quote;
pub use room::{natural_cmp, Room};
pub use section::Section;
pub use window::Window;
