pub mod line;
pub mod line_loop;
pub mod points;
