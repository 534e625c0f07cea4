pub mod fade_in;
pub mod header;
pub mod scroll;
pub mod tabs;
