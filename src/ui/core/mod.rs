pub mod canvas;
pub mod color;
pub mod geom;
pub mod painter;
pub mod style;
pub mod surface;
pub mod text;
