//! One module per subcommand. Each exposes an `execute` function.

pub mod check;
pub mod completions;
pub mod decrypt;
pub mod encode_file;
pub mod encrypt;
pub mod password;
pub mod token;
