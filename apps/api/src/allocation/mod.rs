// Course allocation requests: faculty ask for a recommended course, HOD reviews.

pub mod handlers;
pub mod requests;
