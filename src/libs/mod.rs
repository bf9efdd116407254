pub mod io;
pub mod matrix;
pub mod table;
