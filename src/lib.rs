pub mod bench;
pub mod errors;
pub mod io;
pub mod options;
