//! Attachment-related domain types
//!
//! The attachment services model an uploaded document as an image file with
//! one or more frames (pages), grouped by a vendor-assigned stamp number.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TwentyFourError;

/// Image format of an attachment, as enumerated by the remote schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageType {
    Jpeg,
    Png,
    Tiff,
}

impl ImageType {
    /// Classify a file by its extension, case-insensitively.
    ///
    /// # Errors
    /// Returns [`TwentyFourError::UnsupportedFileType`] for any extension
    /// outside jpg/jpeg/png/tif/tiff.
    pub fn from_path(path: &Path) -> Result<Self, TwentyFourError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "tif" | "tiff" => Ok(Self::Tiff),
            _ => Err(TwentyFourError::UnsupportedFileType(
                path.display().to_string(),
            )),
        }
    }

    /// Vendor token for the `ImageType` schema enumeration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "Jpeg",
            Self::Png => "Png",
            Self::Tiff => "Tiff",
        }
    }
}

impl FromStr for ImageType {
    type Err = TwentyFourError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Jpeg" => Ok(Self::Jpeg),
            "Png" => Ok(Self::Png),
            "Tiff" => Ok(Self::Tiff),
            other => Err(TwentyFourError::UnsupportedFileType(other.to_string())),
        }
    }
}

/// Storage location of an attachment, as enumerated by the remote schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentLocation {
    Journal,
    Scanning,
    CustomerDocuments,
    ProjectDocuments,
    Accounting,
}

impl AttachmentLocation {
    /// Vendor token for the `AttachmentLocation` schema enumeration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Journal => "Journal",
            Self::Scanning => "Scanning",
            Self::CustomerDocuments => "CustomerDocuments",
            Self::ProjectDocuments => "ProjectDocuments",
            Self::Accounting => "Accounting",
        }
    }
}

impl FromStr for AttachmentLocation {
    type Err = TwentyFourError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Journal" => Ok(Self::Journal),
            "Scanning" => Ok(Self::Scanning),
            "CustomerDocuments" => Ok(Self::CustomerDocuments),
            "ProjectDocuments" => Ok(Self::ProjectDocuments),
            "Accounting" => Ok(Self::Accounting),
            other => Err(TwentyFourError::UnsupportedLocation(other.to_string())),
        }
    }
}

/// Remote transfer handle for an in-progress or stored file object.
///
/// Created by the `Create` operation before any chunk is sent and passed
/// back on every append, save, and download call (vendor fields `Id`,
/// `Type`, `StampNo`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileHandle {
    pub id: i32,
    pub image_type: ImageType,
    pub stamp_no: Option<i32>,
}

/// One frame (page) of an image file (vendor `ImageFrameInfo`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameInfo {
    pub id: i32,
    pub status: i32,
    pub stamp_no: i32,
}

/// Result of a completed single-file upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedAttachment {
    pub id: i32,
    pub image_type: ImageType,
    pub stamp_no: i32,
    pub location: AttachmentLocation,
}

/// Result of a completed batch upload: one stamp number shared by all files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchUpload {
    pub stamp_no: i32,
    pub location: AttachmentLocation,
    pub file_ids: Vec<i32>,
}

/// One downloaded frame, with the reassembled file content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadedFrame {
    pub file_id: i32,
    pub frame_id: i32,
    pub image_type: ImageType,
    pub stamp_no: i32,
    pub size: usize,
    pub data: Vec<u8>,
}
