use std::io;

use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use tokio::{
    io::{AsyncRead, AsyncReadExt},
    sync::mpsc,
};
use tokio_stream::wrappers::ReceiverStream;

use super::transport::BodyStream;
use crate::context::Context;

pub const FIELD_NAME: &str = "file";

const CHUNK_SIZE: usize = 8 * 1024;

/// Chunks buffered between the writer task and the request body.
const PIPE_CAPACITY: usize = 4;

/// `multipart/form-data` body holding a single file field, produced by a
/// background task while the request is being sent.
pub struct MultipartUpload {
    boundary: String,
    body: BodyStream,
}

impl MultipartUpload {
    /// Starts copying `reader` into a new multipart body.
    ///
    /// Must be called from within a tokio runtime. The writer task ends
    /// when the body is complete, when `reader` fails, when `ctx` is done
    /// or when the returned body is dropped.
    pub fn spawn<R>(ctx: &Context, reader: R, filename: &str) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        let boundary = format!("{:032x}", rand::random::<u128>());
        let (tx, rx) = mpsc::channel(PIPE_CAPACITY);

        let writer = PartWriter {
            tx,
            boundary: boundary.clone(),
        };
        tokio::spawn(writer.run(ctx.clone(), reader, filename.to_owned()));

        Self {
            boundary,
            body: ReceiverStream::new(rx).boxed(),
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn into_body(self) -> BodyStream {
        self.body
    }
}

enum WriteError {
    Closed,
    Read(io::Error),
}

struct PartWriter {
    tx: mpsc::Sender<io::Result<Bytes>>,
    boundary: String,
}

impl PartWriter {
    async fn run<R>(self, ctx: Context, mut reader: R, filename: String)
    where
        R: AsyncRead + Unpin,
    {
        let err = match ctx.run(self.write_all(&mut reader, &filename)).await {
            Ok(Ok(())) => return,
            Ok(Err(WriteError::Closed)) => {
                log::debug!("upload of {filename} abandoned by the receiving side");
                return;
            }
            Ok(Err(WriteError::Read(err))) => {
                io::Error::new(err.kind(), format!("copying image data: {err}"))
            }
            Err(err) => io::Error::other(err),
        };

        log::debug!("upload of {filename} interrupted: {err}");
        // Wait for room so the failure is never mistaken for a clean end of body.
        // Fails at once if the receiving side is gone.
        let _ = self.tx.send(Err(err)).await;
    }

    async fn write_all<R>(&self, reader: &mut R, filename: &str) -> Result<(), WriteError>
    where
        R: AsyncRead + Unpin,
    {
        self.send(Bytes::from(part_header(&self.boundary, filename)))
            .await?;

        loop {
            let mut chunk = BytesMut::with_capacity(CHUNK_SIZE);
            let read = reader
                .read_buf(&mut chunk)
                .await
                .map_err(WriteError::Read)?;
            if read == 0 {
                break;
            }
            self.send(chunk.freeze()).await?;
        }

        self.send(Bytes::from(format!("\r\n--{}--\r\n", self.boundary)))
            .await
    }

    async fn send(&self, chunk: Bytes) -> Result<(), WriteError> {
        self.tx
            .send(Ok(chunk))
            .await
            .map_err(|_| WriteError::Closed)
    }
}

/// Opening boundary and headers of the file part, in the shape standard
/// form-file encoders produce: `\` and `"` escaped inside `filename`, the
/// content type fixed to `application/octet-stream`.
fn part_header(boundary: &str, filename: &str) -> String {
    format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"{FIELD_NAME}\"; filename=\"{}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n",
        escape_filename(filename)
    )
}

fn escape_filename(filename: &str) -> String {
    filename
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
