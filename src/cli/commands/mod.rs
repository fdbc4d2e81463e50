pub mod init;
pub mod obfuscate;
