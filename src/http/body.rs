//! Response body types
//!
//! All responses share one boxed body type so the handler can mix buffered
//! bodies (errors, preflight) with streamed file bodies.

use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes, Frame};
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::fs::File;
use tokio::io::{AsyncRead, ReadBuf};

pub type HttpBody = BoxBody<Bytes, io::Error>;

const CHUNK_SIZE: usize = 64 * 1024;

/// Buffered body from in-memory bytes.
pub fn full(data: impl Into<Bytes>) -> HttpBody {
    Full::new(data.into())
        .map_err(|never| match never {})
        .boxed()
}

/// Streamed body reading the file chunk by chunk as the peer consumes it.
///
/// A read error mid-body propagates as the body error, which aborts the
/// in-flight transfer without touching the headers already sent.
pub fn stream_file(file: File) -> HttpBody {
    FileBody { file }.boxed()
}

struct FileBody {
    file: File,
}

impl Body for FileBody {
    type Data = Bytes;
    type Error = io::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let this = self.get_mut();
        let mut chunk = vec![0u8; CHUNK_SIZE];
        let mut buf = ReadBuf::new(&mut chunk);

        match Pin::new(&mut this.file).poll_read(cx, &mut buf) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Err(e)) => Poll::Ready(Some(Err(e))),
            Poll::Ready(Ok(())) => {
                let n = buf.filled().len();
                if n == 0 {
                    // EOF
                    Poll::Ready(None)
                } else {
                    chunk.truncate(n);
                    Poll::Ready(Some(Ok(Frame::data(Bytes::from(chunk)))))
                }
            }
        }
    }
}
