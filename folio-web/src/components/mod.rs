mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod icons;
mod projects;
mod reveal;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use projects::Projects;
pub use reveal::Reveal;
pub use skills::Skills;
