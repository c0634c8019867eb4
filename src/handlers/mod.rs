pub mod products;
pub mod token;

// Re-export handler functions for use in routing
pub use products::create as product_create;
pub use products::delete as product_delete;
pub use products::get as product_get;
pub use products::list as product_list;
pub use products::update as product_update;

pub use token::generate as generate_token;
