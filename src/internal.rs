pub mod file_download;
pub mod states;
