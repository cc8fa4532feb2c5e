mod activities;
mod closure;
mod documentation;
mod equipment;
mod introduction;
mod material;
mod not_found;
mod procedures;
mod protocols;
mod references;
mod summary;

pub use activities::ActivitiesPage;
pub use closure::ClosurePage;
pub use documentation::DocumentationPage;
pub use equipment::EquipmentPage;
pub use introduction::IntroductionPage;
pub use material::MaterialPage;
pub use not_found::NotFoundPage;
pub use procedures::ProceduresPage;
pub use protocols::ProtocolsPage;
pub use references::ReferencesPage;
pub use summary::SummaryPage;
