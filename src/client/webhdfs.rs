use std::{io::Cursor, path::Path, sync::Arc};
use tokio::{
    fs::File,
    io::{AsyncRead, AsyncReadExt},
};
use tokio_util::sync::CancellationToken;

use super::{
    raw::{cancellable, RawClient},
    ClientConfig, FileStream, OpRequest,
};
use crate::{
    error::WebHdfsResult,
    protocol::{
        BooleanResult, ContentSummary, ContentSummaryEnvelope, FileChecksum,
        FileChecksumEnvelope, FileStatus, FileStatusEnvelope, FileStatusesEnvelope,
        HomeDirectory, Operation, Permissions,
    },
    transport::{HttpTransport, RequestBody, Transport},
};

/// High-level client for a remote filesystem's WebHDFS interface.
///
/// Cheap to clone and safe to share: it only holds the read-only
/// configuration and the transport.
#[derive(Clone)]
pub struct WebHdfsClient {
    raw: RawClient,
}

impl WebHdfsClient {
    /// Creates a client over the default [`HttpTransport`].
    pub fn new<B, U>(base_url: B, user_name: U) -> WebHdfsResult<Self>
    where
        B: Into<String>,
        U: Into<String>,
    {
        let config = ClientConfig::new(base_url, user_name)?;
        Ok(Self::with_transport(config, Arc::new(HttpTransport::new()?)))
    }

    /// Creates a client that sends every request through `transport`.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            raw: RawClient::new(config, transport),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.raw.config()
    }

    /// Access to the underlying dispatcher for non-standard operations.
    #[must_use]
    pub fn raw(&self) -> &RawClient {
        &self.raw
    }

    async fn boolean(&self, request: OpRequest) -> WebHdfsResult<bool> {
        self.raw
            .json::<BooleanResult>(request, None)
            .await
            .map(bool::from)
    }

    /// Queries the status of a file or directory. Returns `None` if the
    /// path does not exist.
    pub async fn get_file_status<P: Into<String>>(
        &self,
        path: P,
    ) -> WebHdfsResult<Option<FileStatus>> {
        let envelope = self
            .raw
            .query::<FileStatusEnvelope>(OpRequest::new(Operation::GetFileStatus, path), None)
            .await?;

        Ok(envelope.and_then(|e| e.status))
    }

    /// Checks a file or folder exists at the specified path
    pub async fn exists<P: Into<String>>(&self, path: P) -> WebHdfsResult<bool> {
        Ok(self.get_file_status(path).await?.is_some())
    }

    /// Lists a directory, in the order the server returned the entries.
    pub async fn get_directory_status<P: Into<String>>(
        &self,
        path: P,
    ) -> WebHdfsResult<Vec<FileStatus>> {
        let envelope = self
            .raw
            .query::<FileStatusesEnvelope>(OpRequest::new(Operation::ListStatus, path), None)
            .await?;

        Ok(envelope.map(Vec::from).unwrap_or_default())
    }

    pub async fn get_content_summary<P: Into<String>>(
        &self,
        path: P,
    ) -> WebHdfsResult<Option<ContentSummary>> {
        let envelope = self
            .raw
            .query::<ContentSummaryEnvelope>(
                OpRequest::new(Operation::GetContentSummary, path),
                None,
            )
            .await?;

        Ok(envelope.and_then(|e| e.summary))
    }

    pub async fn get_file_checksum<P: Into<String>>(
        &self,
        path: P,
    ) -> WebHdfsResult<Option<FileChecksum>> {
        let envelope = self
            .raw
            .query::<FileChecksumEnvelope>(OpRequest::new(Operation::GetFileChecksum, path), None)
            .await?;

        Ok(envelope.and_then(|e| e.checksum))
    }

    /// Home directory of the configured user. Always asked of `/`.
    pub async fn get_home_directory(&self) -> WebHdfsResult<String> {
        let home = self
            .raw
            .json::<HomeDirectory>(OpRequest::new(Operation::GetHomeDirectory, "/"), None)
            .await?;

        Ok(home.path)
    }

    /// Creates a directory and any missing parents.
    pub async fn create_directory<P: Into<String>>(&self, path: P) -> WebHdfsResult<bool> {
        self.boolean(OpRequest::new(Operation::MkDirs, path)).await
    }

    pub async fn delete_directory<P: Into<String>>(&self, path: P) -> WebHdfsResult<bool> {
        self.boolean(OpRequest::new(Operation::Delete, path)).await
    }

    /// Rename a file or directory to a new name.
    pub async fn rename_directory<P, N>(&self, path: P, new_path: N) -> WebHdfsResult<bool>
    where
        P: Into<String>,
        N: Into<String>,
    {
        let new_path: String = new_path.into();
        self.boolean(OpRequest::new(Operation::Rename, path).param("destination", new_path))
            .await
    }

    /// Sets the access time, in milliseconds since the epoch.
    pub async fn set_access_time<P: Into<String>>(&self, path: P, time: i64) -> WebHdfsResult<bool> {
        self.boolean(OpRequest::new(Operation::SetTimes, path).param("accesstime", time))
            .await
    }

    /// Sets the modification time, in milliseconds since the epoch.
    pub async fn set_modification_time<P: Into<String>>(
        &self,
        path: P,
        time: i64,
    ) -> WebHdfsResult<bool> {
        self.boolean(OpRequest::new(Operation::SetTimes, path).param("modificationtime", time))
            .await
    }

    pub async fn set_owner<P, O>(&self, path: P, owner: O) -> WebHdfsResult<bool>
    where
        P: Into<String>,
        O: Into<String>,
    {
        let owner: String = owner.into();
        self.boolean(OpRequest::new(Operation::SetOwner, path).param("owner", owner))
            .await
    }

    pub async fn set_group<P, G>(&self, path: P, group: G) -> WebHdfsResult<bool>
    where
        P: Into<String>,
        G: Into<String>,
    {
        let group: String = group.into();
        self.boolean(OpRequest::new(Operation::SetOwner, path).param("group", group))
            .await
    }

    pub async fn set_permissions<P: Into<String>>(
        &self,
        path: P,
        permission: Permissions,
    ) -> WebHdfsResult<bool> {
        self.boolean(
            OpRequest::new(Operation::SetPermission, path).param("permission", permission),
        )
        .await
    }

    pub async fn set_replication_factor<P: Into<String>>(
        &self,
        path: P,
        factor: u16,
    ) -> WebHdfsResult<bool> {
        self.boolean(OpRequest::new(Operation::SetReplication, path).param("replication", factor))
            .await
    }

    async fn upload(
        &self,
        body: RequestBody,
        dest: String,
        token: Option<&CancellationToken>,
    ) -> WebHdfsResult<()> {
        let _ = self
            .raw
            .execute(OpRequest::new(Operation::Create, dest).body(body), token)
            .await?;
        Ok(())
    }

    async fn upload_path(
        &self,
        source: &Path,
        dest: String,
        token: Option<&CancellationToken>,
    ) -> WebHdfsResult<()> {
        // The request body owns the handle and closes it on every exit path.
        let file = cancellable(token, File::open(source)).await??;
        self.upload(Box::pin(file), dest, token).await
    }

    /// Uploads the local file at `source` to `dest`.
    pub async fn create_file<S, D>(&self, source: S, dest: D) -> WebHdfsResult<()>
    where
        S: AsRef<Path>,
        D: Into<String>,
    {
        self.upload_path(source.as_ref(), dest.into(), None).await
    }

    /// Uploads the local file at `source` to `dest`, aborting when `token`
    /// fires.
    pub async fn create_file_with_cancel<S, D>(
        &self,
        source: S,
        dest: D,
        token: &CancellationToken,
    ) -> WebHdfsResult<()>
    where
        S: AsRef<Path>,
        D: Into<String>,
    {
        self.upload_path(source.as_ref(), dest.into(), Some(token))
            .await
    }

    /// Uploads everything `reader` yields to `dest`.
    pub async fn create_file_from_reader<R, D>(&self, reader: R, dest: D) -> WebHdfsResult<()>
    where
        R: AsyncRead + Send + Sync + 'static,
        D: Into<String>,
    {
        self.upload(Box::pin(reader), dest.into(), None).await
    }

    /// Uploads everything `reader` yields to `dest`, aborting when `token`
    /// fires.
    pub async fn create_file_from_reader_with_cancel<R, D>(
        &self,
        reader: R,
        dest: D,
        token: &CancellationToken,
    ) -> WebHdfsResult<()>
    where
        R: AsyncRead + Send + Sync + 'static,
        D: Into<String>,
    {
        self.upload(Box::pin(reader), dest.into(), Some(token))
            .await
    }

    /// Writes the contents to a file whose path is specified.
    pub async fn write<P: Into<String>>(&self, path: P, data: &[u8]) -> WebHdfsResult<()> {
        self.upload(Box::pin(Cursor::new(data.to_vec())), path.into(), None)
            .await
    }

    async fn open(
        &self,
        path: String,
        token: Option<&CancellationToken>,
    ) -> WebHdfsResult<FileStream> {
        let response = self
            .raw
            .execute(OpRequest::new(Operation::Open, path), token)
            .await?;

        Ok(FileStream::new(response.body, token.cloned()))
    }

    /// Opens a remote file for reading. The returned stream starts at the
    /// beginning of the file and stops yielding data once `token` fires.
    pub async fn open_file<P: Into<String>>(
        &self,
        path: P,
        token: &CancellationToken,
    ) -> WebHdfsResult<FileStream> {
        self.open(path.into(), Some(token)).await
    }

    /// Reads the contents of a file located at the specified path to the end.
    pub async fn read<P: Into<String>>(&self, path: P) -> WebHdfsResult<Vec<u8>> {
        let mut file = self.open(path.into(), None).await?;
        let mut buffer = Vec::new();

        let _ = file.read_to_end(&mut buffer).await?;

        Ok(buffer)
    }
}
