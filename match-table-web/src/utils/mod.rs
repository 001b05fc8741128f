mod rc;

pub use rc::Rc;

pub use gloo_utils::document;
