// API route groups

pub mod ping;
