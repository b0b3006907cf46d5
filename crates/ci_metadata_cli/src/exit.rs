/// Process exit status of `ci-metadata`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ExitCode {
    Success,
    /// Recording the metadata failed; the entries may be incomplete.
    ToolError,
}

impl ExitCode {
    pub const fn get(&self) -> u8 {
        match self {
            ExitCode::Success => 0,
            ExitCode::ToolError => 101,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.get())
    }
}
