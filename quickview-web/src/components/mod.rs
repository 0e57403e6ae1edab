pub mod add_to_bag;
pub mod catalog_page;
pub mod footer;
pub mod header;
pub mod product_card;
pub mod product_details;
pub mod product_listing;
pub mod quick_view;
pub mod skeleton;
