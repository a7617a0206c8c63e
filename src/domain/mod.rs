pub mod brand;
pub mod category;
pub mod import;
pub mod product;
pub mod variant;
