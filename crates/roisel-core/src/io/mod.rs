pub mod bruker;
pub mod image_io;
pub mod jcamp;
pub mod roi_table;
