pub mod animated;
pub mod sprites;
