mod app;
mod load_menu;
mod pages_landed;
mod pages_load;
mod pages_main;

pub use app::NsaveApp;
