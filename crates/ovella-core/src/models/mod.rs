pub mod advice;
pub mod assessment;
pub mod prediction;
pub mod record;
