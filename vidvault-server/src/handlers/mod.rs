pub mod actors;
pub mod catalog;
pub mod envelope;
pub mod filters;
pub mod genres;
pub mod health;
pub mod links;
pub mod movies;
pub mod tv_shows;
