mod app;
mod home;
mod navbar;

pub use app::{ App, Shell };
pub use home::{ draw_tickets, Home };
pub use navbar::{ toggle_theme, Navbar };
