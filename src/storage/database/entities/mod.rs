/// Synonym entity module
pub mod synonym;

pub use synonym::Entity as Synonym;
