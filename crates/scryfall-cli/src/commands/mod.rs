pub mod bulk;
pub mod card;
pub mod catalog;
pub mod collection;
pub mod config;
pub mod migrations;
pub mod output;
pub mod rulings;
pub mod search;
pub mod sets;
pub mod symbology;
