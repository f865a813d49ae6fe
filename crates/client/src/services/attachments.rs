//! Attachment service operations
//!
//! Uploads split the payload into fixed-size base64 chunks appended at
//! ascending offsets against a remote file handle; downloads fetch the
//! declared size in the same span order and reassemble in memory. Each
//! chunk call must succeed before the next is issued — the remote side
//! assembles by offset — and any failure aborts the transfer outright.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::slice;

use tracing::{debug, info};
use twentyfour_domain::constants::DEFAULT_FRAME_ID;
use twentyfour_domain::{
    AttachmentLocation, BatchUpload, DownloadedFrame, FileHandle, FrameInfo, ImageType, Result,
    TwentyFourError, UploadedAttachment,
};

use crate::client::ApiClient;
use crate::endpoints::Service;
use crate::errors::ClientError;
use crate::soap::document::{tag_contents, tag_int, tag_text};
use crate::soap::{Field, SoapRequest, SoapService};
use crate::transfer::{decode_chunk, encode_chunk, ChunkPlan};

/// Operations against the vendor `Attachment` service.
pub struct AttachmentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AttachmentsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Upload one file as a single-frame attachment.
    ///
    /// The file type is classified from the extension and the payload read
    /// from disk; a fresh stamp number is requested from the service when
    /// the caller does not supply one. Returns the stored handle data.
    pub async fn upload_file(
        &self,
        path: impl AsRef<Path>,
        location: AttachmentLocation,
        stamp_no: Option<i32>,
    ) -> Result<UploadedAttachment> {
        let path = path.as_ref();
        // Classification happens before any I/O or network traffic.
        let image_type = ImageType::from_path(path)?;
        let content = read_payload(path).await?;

        let service = self.client.service(Service::Attachment).await;
        let stamp_no = match stamp_no {
            Some(stamp_no) => stamp_no,
            None => get_stamp_no(&service).await?,
        };

        let handle =
            self.upload_payload(&service, image_type, stamp_no, &content, location).await?;
        Ok(UploadedAttachment { id: handle.id, image_type, stamp_no, location })
    }

    /// Upload several files under one shared stamp number.
    ///
    /// Every path is classified before the first byte is sent, so an
    /// unsupported file anywhere in the batch rejects the whole call.
    pub async fn upload_batch(
        &self,
        paths: &[PathBuf],
        location: AttachmentLocation,
        stamp_no: Option<i32>,
    ) -> Result<BatchUpload> {
        let mut classified = Vec::with_capacity(paths.len());
        for path in paths {
            classified.push((path, ImageType::from_path(path)?));
        }

        let service = self.client.service(Service::Attachment).await;
        let stamp_no = match stamp_no {
            Some(stamp_no) => stamp_no,
            None => get_stamp_no(&service).await?,
        };

        let mut file_ids = Vec::with_capacity(paths.len());
        for (path, image_type) in classified {
            let content = read_payload(path).await?;
            let handle =
                self.upload_payload(&service, image_type, stamp_no, &content, location).await?;
            file_ids.push(handle.id);
        }

        Ok(BatchUpload { stamp_no, location, file_ids })
    }

    /// Download every file grouped under a stamp number.
    ///
    /// Returns one entry per frame with the reassembled file content; an
    /// unknown stamp number yields an empty list. Any chunk failure aborts
    /// the download and no partial buffer is returned.
    pub async fn download_by_stamp_no(&self, stamp_no: i32) -> Result<Vec<DownloadedFrame>> {
        let service = self.client.service(Service::Attachment).await;

        let request = SoapRequest::new("GetFileInfo").element(
            "searchParams",
            vec![Field::element("StampNo", vec![Field::text("int", stamp_no.to_string())])],
        );
        let document = service.call(request).await?;

        let mut results = Vec::new();
        for file_fragment in document.all("ImageFile") {
            // File-level fields are read with the nested FrameInfo block
            // stripped, so a frame's Id or StampNo can never shadow the
            // file's regardless of serialization order.
            let file_scope = strip_frame_block(file_fragment);
            let file_id = tag_int(&file_scope, "Id").ok_or_else(|| {
                TwentyFourError::Soap("image file record carried no Id".into())
            })? as i32;
            let image_type = tag_text(&file_scope, "Type")
                .unwrap_or_default()
                .parse::<ImageType>()
                .map_err(|_| TwentyFourError::Soap("image file carried an unknown type".into()))?;
            let file_stamp =
                tag_int(&file_scope, "StampNo").map(|value| value as i32).unwrap_or(stamp_no);
            let handle = FileHandle { id: file_id, image_type, stamp_no: Some(file_stamp) };

            let content = self.download_payload(&service, &handle).await?;
            let size = content.len();

            for frame_fragment in tag_contents(file_fragment, "ImageFrameInfo") {
                let frame_id =
                    tag_int(frame_fragment, "Id").map(|value| value as i32).unwrap_or(DEFAULT_FRAME_ID);
                results.push(DownloadedFrame {
                    file_id,
                    frame_id,
                    image_type,
                    stamp_no: file_stamp,
                    size,
                    data: content.clone(),
                });
            }
        }
        Ok(results)
    }

    /// Run one complete upload: create the handle, append every chunk in
    /// offset order, then finalize with `Save`. A zero-length payload sends
    /// no chunks but is still finalized.
    async fn upload_payload(
        &self,
        service: &SoapService,
        image_type: ImageType,
        stamp_no: i32,
        content: &[u8],
        location: AttachmentLocation,
    ) -> Result<FileHandle> {
        let document =
            service.call(SoapRequest::new("Create").text("type", image_type.as_str())).await?;
        let file_id = document.int_of("Id").ok_or_else(|| {
            TwentyFourError::Soap("Create response carried no file id".into())
        })? as i32;

        let handle = FileHandle { id: file_id, image_type, stamp_no: None };
        let frame = FrameInfo { id: DEFAULT_FRAME_ID, status: 0, stamp_no };

        for span in ChunkPlan::new(content.len(), self.client.chunk_size())? {
            debug!(file_id, offset = span.offset, bytes = span.len, "appending chunk");
            let request = SoapRequest::new("AppendChunk")
                .element("file", file_fields(&handle, slice::from_ref(&frame)))
                .text("buffer", encode_chunk(&content[span.offset..span.end()]))
                .text("offset", span.offset.to_string());
            service.call(request).await?;
        }

        let save = SoapRequest::new("Save")
            .element("file", file_fields(&handle, slice::from_ref(&frame)))
            .text("location", location.as_str());
        service.call(save).await?;

        info!(file_id, stamp_no, bytes = content.len(), "attachment uploaded");
        Ok(FileHandle { stamp_no: Some(stamp_no), ..handle })
    }

    /// Fetch a file's declared size, then every chunk span in order, and
    /// reassemble the payload. The reassembled length must match the
    /// declared size exactly.
    async fn download_payload(
        &self,
        service: &SoapService,
        handle: &FileHandle,
    ) -> Result<Vec<u8>> {
        let document =
            service.call(SoapRequest::new("GetSize").element("file", file_fields(handle, &[]))).await?;
        let total = document.int_of("GetSizeResult").ok_or_else(|| {
            TwentyFourError::Soap("GetSize response carried no size".into())
        })? as usize;

        let mut content = Vec::with_capacity(total);
        for span in ChunkPlan::new(total, self.client.chunk_size())? {
            debug!(file_id = handle.id, offset = span.offset, bytes = span.len, "downloading chunk");
            let request = SoapRequest::new("DownloadChunk")
                .element("file", file_fields(handle, &[]))
                .text("offset", span.offset.to_string())
                .text("length", span.len.to_string());
            let chunk = service.call(request).await?;
            let encoded = chunk.text_of("DownloadChunkResult").ok_or_else(|| {
                TwentyFourError::Soap("DownloadChunk response carried no data".into())
            })?;
            content.extend(decode_chunk(&encoded)?);
        }

        if content.len() != total {
            return Err(TwentyFourError::Soap(format!(
                "reassembled {} bytes but the remote declared {total}",
                content.len()
            )));
        }
        Ok(content)
    }
}

/// Render the vendor `ImageFile` record passed to append/save/download calls.
fn file_fields(handle: &FileHandle, frames: &[FrameInfo]) -> Vec<Field> {
    let mut fields = vec![
        Field::text("Id", handle.id.to_string()),
        Field::text("Type", handle.image_type.as_str()),
    ];
    if let Some(stamp_no) = handle.stamp_no {
        fields.push(Field::text("StampNo", stamp_no.to_string()));
    }
    if !frames.is_empty() {
        let frame_elements = frames
            .iter()
            .map(|frame| {
                Field::element(
                    "ImageFrameInfo",
                    vec![
                        Field::text("Id", frame.id.to_string()),
                        Field::text("Status", frame.status.to_string()),
                        Field::text("StampNo", frame.stamp_no.to_string()),
                    ],
                )
            })
            .collect();
        fields.push(Field::element("FrameInfo", frame_elements));
    }
    fields
}

/// An `ImageFile` fragment with its nested `FrameInfo` block removed, so
/// file-level `Id`/`Type`/`StampNo` lookups cannot hit a frame's fields.
fn strip_frame_block(fragment: &str) -> Cow<'_, str> {
    let Some(start) = fragment.find("<FrameInfo") else {
        return Cow::Borrowed(fragment);
    };
    const CLOSE: &str = "</FrameInfo>";
    match fragment[start..].find(CLOSE) {
        Some(rel) => {
            let end = start + rel + CLOSE.len();
            Cow::Owned(format!("{}{}", &fragment[..start], &fragment[end..]))
        }
        None => Cow::Borrowed(&fragment[..start]),
    }
}

/// Request a fresh stamp number from the service.
async fn get_stamp_no(service: &SoapService) -> Result<i32> {
    let document = service.call(SoapRequest::new("GetStampNo")).await?;
    let stamp_no = document.int_of("GetStampNoResult").ok_or_else(|| {
        TwentyFourError::Soap("GetStampNo response carried no stamp number".into())
    })? as i32;
    Ok(stamp_no)
}

async fn read_payload(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|err| {
        let client_err: ClientError = err.into();
        TwentyFourError::from(client_err)
    })
}
