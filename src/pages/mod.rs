pub mod breed_tooltip;
pub mod help;
pub mod nav_bar;
pub mod page_body;
