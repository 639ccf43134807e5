//! Root and volume classification tags shared by real and virtual entries.

use std::fmt;

/// Category of a navigation root.
///
/// The string form is stable and is what virtual entries embed in their URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootType {
    Downloads,
    Archive,
    Removable,
    Drive,
    SharedDrivesGrandRoot,
    SharedDrive,
    MediaView,
    Provided,
    DriveOffline,
    DriveSharedWithMe,
    DriveRecent,
    Recent,
    DriveFakeRoot,
    Crostini,
    AndroidFiles,
    MyFiles,
    ComputersGrandRoot,
    Computer,
    ExternalMedia,
    DocumentsProvider,
    Smb,
    Testing,
}

impl RootType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RootType::Downloads => "downloads",
            RootType::Archive => "archive",
            RootType::Removable => "removable",
            RootType::Drive => "drive",
            RootType::SharedDrivesGrandRoot => "shared_drives_grand_root",
            RootType::SharedDrive => "team_drive",
            RootType::MediaView => "media_view",
            RootType::Provided => "provided",
            RootType::DriveOffline => "drive_offline",
            RootType::DriveSharedWithMe => "drive_shared_with_me",
            RootType::DriveRecent => "drive_recent",
            RootType::Recent => "recent",
            RootType::DriveFakeRoot => "drive_fake_root",
            RootType::Crostini => "crostini",
            RootType::AndroidFiles => "android_files",
            RootType::MyFiles => "my_files",
            RootType::ComputersGrandRoot => "computers_grand_root",
            RootType::Computer => "computer",
            RootType::ExternalMedia => "external_media",
            RootType::DocumentsProvider => "documents_provider",
            RootType::Smb => "smb",
            RootType::Testing => "testing",
        }
    }
}

impl fmt::Display for RootType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of mounted volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeType {
    Downloads,
    Drive,
    Removable,
    Archive,
    Provided,
    Mtp,
    MediaView,
    Crostini,
    AndroidFiles,
    DocumentsProvider,
    Smb,
    Testing,
}

impl VolumeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeType::Downloads => "downloads",
            VolumeType::Drive => "drive",
            VolumeType::Removable => "removable",
            VolumeType::Archive => "archive",
            VolumeType::Provided => "provided",
            VolumeType::Mtp => "mtp",
            VolumeType::MediaView => "media_view",
            VolumeType::Crostini => "crostini",
            VolumeType::AndroidFiles => "android_files",
            VolumeType::DocumentsProvider => "documents_provider",
            VolumeType::Smb => "smb",
            VolumeType::Testing => "testing",
        }
    }

    /// Root category a volume of this type is displayed under.
    pub fn root_type(&self) -> RootType {
        match self {
            VolumeType::Downloads => RootType::Downloads,
            VolumeType::Drive => RootType::DriveFakeRoot,
            VolumeType::Removable | VolumeType::Mtp => RootType::Removable,
            VolumeType::Archive => RootType::Archive,
            VolumeType::Provided => RootType::Provided,
            VolumeType::MediaView => RootType::MediaView,
            VolumeType::Crostini => RootType::Crostini,
            VolumeType::AndroidFiles => RootType::AndroidFiles,
            VolumeType::DocumentsProvider => RootType::DocumentsProvider,
            VolumeType::Smb => RootType::Smb,
            VolumeType::Testing => RootType::Testing,
        }
    }
}

impl From<VolumeType> for RootType {
    fn from(volume_type: VolumeType) -> Self {
        volume_type.root_type()
    }
}

impl fmt::Display for VolumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
