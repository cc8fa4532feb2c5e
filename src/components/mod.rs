mod drill_down_section;
mod footer;
mod icons;
mod image;
mod nav_menu;
mod section_view;
mod shell;
mod sidebar;
mod top_bar;

pub use drill_down_section::DrillDownSection;
pub use footer::Footer;
pub use icons::IconView;
pub use image::ImageWithFallback;
pub use nav_menu::NavMenu;
pub use section_view::{render_section, SectionView};
pub use shell::Shell;
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
