pub mod images;
pub mod items;
pub mod suggestions;
