// Upload → extract → score pipeline behind the form and JSON routes.

pub mod handlers;
pub mod submission;
