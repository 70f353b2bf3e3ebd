//! Asynchronous client for the WebHDFS REST interface.
//!
//! Every filesystem operation becomes one HTTP request of the form
//! `<base>webhdfs/v1<path>?user.name=<user>&op=<OP>[&...]`, sent through a
//! [`Transport`](transport::Transport), with the JSON answer decoded into a
//! typed result.

#[macro_use]
extern crate log;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate async_trait;

/// Client side
pub mod client;
mod error;
/// Response shapes and operation codes
pub mod protocol;
pub mod transport;

pub use client::{ClientConfig, FileStream, WebHdfsClient};
pub use error::{Error, WebHdfsResult};
pub use tokio_util::sync::CancellationToken;
