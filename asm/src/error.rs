use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown computation: `{0}`")]
    UnknownComp(String),

    #[error("Unknown destination: `{0}`")]
    UnknownDest(String),

    #[error("Unknown jump: `{0}`")]
    UnknownJump(String),

    #[error("Empty computation field")]
    EmptyComp,

    #[error("Empty symbol")]
    EmptySymbol,

    #[error("Invalid symbol: `{0}`")]
    BadSymbol(String),

    #[error("Unclosed label: `{0}`")]
    UnclosedLabel(String),

    #[error("Address out of range: {0} (max 32767)")]
    AddressOutOfRange(u32),

    #[error("Not an asm file: {0}")]
    NotAsm(String),

    #[error("Aborting due to {0} previous errors")]
    Aborted(usize),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}
