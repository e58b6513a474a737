//! Configuration sections for `site.toml`.

mod footer;
mod link;
mod markdown;
mod navbar;
mod site;
mod theme;

pub use footer::{FooterConfig, FooterGroup, FooterLink, FooterStyle};
pub use markdown::{BrokenLinkPolicy, MarkdownConfig};
pub use navbar::{LogoConfig, NavbarConfig, NavbarItem, NavbarPosition};
pub use site::{I18nConfig, SiteInfoConfig, SiteSectionConfig};
pub use theme::{ColorMode, ColorModeConfig, PrismConfig, ThemeConfig};

pub(crate) use link::validate_external_url;
