use std::{
    fmt,
    future::Future,
    io,
    pin::Pin,
    task::{Context, Poll},
};
use tokio::io::{AsyncRead, ReadBuf};
use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};

use crate::{error::Error, transport::ResponseBody};

/// Content of a remote file, read incrementally from the open response.
///
/// Once the token passed to [`open_file`](super::WebHdfsClient::open_file)
/// fires, every read fails with [`io::ErrorKind::Interrupted`] carrying
/// [`Error::Cancelled`]; `Error::from` on that error gives back
/// `Error::Cancelled`. Dropping the stream releases the connection.
pub struct FileStream {
    body: ResponseBody,
    cancelled: Option<Pin<Box<WaitForCancellationFutureOwned>>>,
    aborted: bool,
    pos: u64,
}

impl FileStream {
    pub(crate) fn new(body: ResponseBody, token: Option<CancellationToken>) -> Self {
        Self {
            body,
            cancelled: token.map(|t| Box::pin(t.cancelled_owned())),
            aborted: false,
            pos: 0,
        }
    }

    /// Number of bytes read so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.pos
    }
}

fn cancelled_error() -> io::Error {
    io::Error::new(io::ErrorKind::Interrupted, Error::Cancelled)
}

impl AsyncRead for FileStream {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();

        if this.aborted {
            return Poll::Ready(Err(cancelled_error()));
        }

        if let Some(cancelled) = this.cancelled.as_mut() {
            if cancelled.as_mut().poll(cx).is_ready() {
                this.aborted = true;
                this.cancelled = None;
                return Poll::Ready(Err(cancelled_error()));
            }
        }

        let before = buf.filled().len();
        let poll = this.body.as_mut().poll_read(cx, buf);

        if let Poll::Ready(Ok(())) = poll {
            this.pos += (buf.filled().len() - before) as u64;
        }

        poll
    }
}

impl fmt::Debug for FileStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileStream")
            .field("pos", &self.pos)
            .field("aborted", &self.aborted)
            .finish_non_exhaustive()
    }
}
