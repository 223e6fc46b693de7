mod models;

pub use models::{Course, CourseInput, NewUser, Review, ReviewInput, User};
