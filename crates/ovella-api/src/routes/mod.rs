pub mod advice;
pub mod health;
pub mod predict;
