//! The fixed command table shared by the menu and one-shot front ends.

/// Commands reachable from the menu and from one-shot invocations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `copyfile`
    CopyFile,
    /// `deletefile`
    DeleteFile,
    /// `queryfolderfiles`
    QueryFolderFiles,
    /// `createfolder`
    CreateFolder,
    /// `downloadfile`
    DownloadFile,
    /// `wait`
    Wait,
    /// `countrows`
    CountRows,
    /// `movefile`
    MoveFile,
    /// `writefile`
    WriteFile,
    /// `readfile`
    ReadFile,
}

impl CommandKind {
    /// Every command, in menu order.
    pub const ALL: [Self; 10] = [
        Self::CopyFile,
        Self::DeleteFile,
        Self::QueryFolderFiles,
        Self::CreateFolder,
        Self::DownloadFile,
        Self::Wait,
        Self::CountRows,
        Self::MoveFile,
        Self::WriteFile,
        Self::ReadFile,
    ];

    /// Name accepted in one-shot mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CopyFile => "copyfile",
            Self::DeleteFile => "deletefile",
            Self::QueryFolderFiles => "queryfolderfiles",
            Self::CreateFolder => "createfolder",
            Self::DownloadFile => "downloadfile",
            Self::Wait => "wait",
            Self::CountRows => "countrows",
            Self::MoveFile => "movefile",
            Self::WriteFile => "writefile",
            Self::ReadFile => "readfile",
        }
    }

    /// Resolve a one-shot command name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// One-based position in the interactive menu.
    #[must_use]
    pub fn menu_index(self) -> i64 {
        Self::ALL
            .iter()
            .position(|kind| *kind == self)
            .map_or(0, |position| i64::try_from(position + 1).unwrap_or(0))
    }

    /// Resolve a menu selection.
    #[must_use]
    pub fn from_menu_index(index: i64) -> Option<Self> {
        let position = usize::try_from(index.checked_sub(1)?).ok()?;
        Self::ALL.get(position).copied()
    }

    /// Flags required in one-shot mode, in the order the primitive consumes them.
    #[must_use]
    pub const fn required_flags(self) -> &'static [&'static str] {
        match self {
            Self::CopyFile | Self::MoveFile => &["source", "destination"],
            Self::DeleteFile | Self::QueryFolderFiles | Self::ReadFile => &["path"],
            Self::CreateFolder => &["parentpath", "foldername"],
            Self::DownloadFile => &["url", "output"],
            Self::Wait => &["seconds"],
            Self::CountRows => &["source", "searchstring"],
            Self::WriteFile => &["path", "content"],
        }
    }

    /// Prompts shown in interactive mode, one per input, same order as
    /// [`Self::required_flags`].
    #[must_use]
    pub const fn prompts(self) -> &'static [&'static str] {
        match self {
            Self::CopyFile => &[
                "Enter the full path for the source file:",
                "Enter the full path for the destination file:",
            ],
            Self::DeleteFile => &["Enter the full path of the file to delete:"],
            Self::QueryFolderFiles => &["Enter the full path for the folder to query:"],
            Self::CreateFolder => &[
                "Enter the full path of the parent folder:",
                "Enter the name for the new folder:",
            ],
            Self::DownloadFile => &[
                "Enter the source URL to download from:",
                "Enter the local full file path to save the downloaded file:",
            ],
            Self::Wait => &["Enter wait time in seconds (e.g., 10) or 'c' to cancel:"],
            Self::CountRows => &[
                "Enter the full path of the source file:",
                "Enter the text string to search for in each row:",
            ],
            Self::MoveFile => &[
                "Enter the full path of the source file to move:",
                "Enter the full destination path for the moved file:",
            ],
            Self::WriteFile => &[
                "Enter the full file path where the text should be written:",
                "Enter the text content to write to the file:",
            ],
            Self::ReadFile => &["Enter the full file path to read text from:"],
        }
    }

    /// Header shown before the prompts.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CopyFile => "Copy Operation",
            Self::DeleteFile => "Delete Operation",
            Self::QueryFolderFiles => "Query Folder Files Operation",
            Self::CreateFolder => "Create Folder Operation",
            Self::DownloadFile => "Download File Operation",
            Self::Wait => "Wait Operation",
            Self::CountRows => "Count Rows Operation",
            Self::MoveFile => "Move File Operation",
            Self::WriteFile => "Write Text To File Operation",
            Self::ReadFile => "Read Text From File Operation",
        }
    }

    /// Usage line for one-shot mode, e.g. `copyfile --source <value> --destination <value>`.
    #[must_use]
    pub fn usage(self) -> String {
        let mut usage = self.name().to_string();
        for flag in self.required_flags() {
            usage.push_str(" --");
            usage.push_str(flag);
            usage.push_str(" <value>");
        }
        usage
    }
}
