pub mod data;
pub mod form;
pub mod navigation;

pub use data::reduce_data;
pub use form::reduce_form;
pub use navigation::reduce_navigation;
